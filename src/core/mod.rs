//! Core primitives.
//!
//! The validated move set, HMAC digests, and the secret randomness
//! everything else in the crate is built on.

pub mod moves;
pub mod hash;
pub mod rng;

// Re-export core types
pub use moves::{MoveSet, MoveSetError};
pub use hash::{MoveDigest, SecretKey};
pub use rng::{draw_move_index, draw_secret_key};
