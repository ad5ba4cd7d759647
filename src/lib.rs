//! # Fair RPS
//!
//! Rock-paper-scissors generalized to any odd number of moves, with an
//! HMAC commitment proving the computer chose its move before the user did.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         FAIR RPS                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Primitives                                │
//! │  ├── moves.rs    - Validated move set                        │
//! │  ├── hash.rs     - HMAC-SHA256 digests, hex codecs           │
//! │  └── rng.rs      - Secret key and move selection             │
//! │                                                              │
//! │  game/           - One round of play                         │
//! │  ├── outcome.rs  - Circular win/lose/draw rule               │
//! │  ├── table.rs    - Help table                                │
//! │  └── session.rs  - Prompt, answer, disclosure                │
//! │                                                              │
//! │  proof/          - Commit / reveal                           │
//! │  ├── commitment.rs - Sealed computer move                    │
//! │  └── verify.rs   - Offline reveal verification               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fairness Guarantee
//!
//! The digest `HMAC-SHA256(key, move)` is printed before the user answers.
//! The key is disclosed only after the answer, so anyone can recompute the
//! digest and confirm the computer's move was never changed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod game;
pub mod proof;

// Re-export commonly used types
pub use crate::config::GameConfig;
pub use crate::core::moves::{MoveSet, MoveSetError};
pub use crate::game::outcome::{resolve, Outcome};
pub use crate::game::session::{play_round, Resolution, RoundReport, SelectionError, Session};
pub use crate::game::table::HelpTable;
pub use crate::proof::commitment::{generate_commitment, CommitmentError, CommitmentPreimage, MoveCommitment, MoveReveal};
pub use crate::proof::verify::{verify_reveal, VerificationReport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Secret key length in bytes.
pub const KEY_LEN: usize = 32;

/// Smallest playable move set.
pub const MIN_MOVES: usize = 3;
