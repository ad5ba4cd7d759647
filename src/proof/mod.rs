//! Commit / Reveal
//!
//! The computer publishes `HMAC-SHA256(key, move)` before the user picks,
//! then discloses the key so the digest can be recomputed.
//!
//! - `commitment`: sealing the computer's move
//! - `verify`: checking a disclosed key against a published digest

pub mod commitment;
pub mod verify;

// Re-export key types
pub use commitment::{generate_commitment, CommitmentError, CommitmentPreimage, MoveCommitment, MoveReveal};
pub use verify::{verify_reveal, VerificationReport};
