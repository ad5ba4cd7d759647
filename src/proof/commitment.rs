//! Move Commitment Protocol
//!
//! Commit to the computer's move before the user answers.
//! Reveal the key afterwards so the user can verify nothing changed.

use serde::{Serialize, Deserialize};
use rand::{CryptoRng, RngCore};
use thiserror::Error;
use tracing::debug;

use crate::core::hash::{compute_digest, verify_digest, DecodeError, MoveDigest, SecretKey};
use crate::core::moves::MoveSet;
use crate::core::rng::{draw_move_index, draw_secret_key};

/// Published commitment: the digest alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCommitment {
    /// `HMAC-SHA256(key, move)`.
    pub digest: MoveDigest,
}

impl MoveCommitment {
    /// Create commitment from preimage.
    pub fn from_preimage(preimage: &CommitmentPreimage) -> Self {
        Self {
            digest: compute_digest(&preimage.key, &preimage.move_label),
        }
    }

    /// Verify that a preimage matches this commitment.
    pub fn verify(&self, preimage: &CommitmentPreimage) -> bool {
        verify_digest(&preimage.key, &preimage.move_label, &self.digest)
    }
}

/// Secret side of the commitment, held until the user answers.
#[derive(Clone, Debug)]
pub struct CommitmentPreimage {
    key: SecretKey,
    move_index: usize,
    move_label: String,
}

impl CommitmentPreimage {
    /// Index of the computer's move in the move set.
    pub fn move_index(&self) -> usize {
        self.move_index
    }

    /// Label of the computer's move.
    pub fn move_label(&self) -> &str {
        &self.move_label
    }

    /// Disclose key and move.
    pub fn reveal(self) -> MoveReveal {
        MoveReveal {
            key: self.key,
            move_label: self.move_label,
        }
    }
}

/// Disclosed key and move, published after the user has answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReveal {
    /// The secret key, now public.
    pub key: SecretKey,

    /// The computer's move.
    pub move_label: String,
}

impl MoveReveal {
    /// Verify reveal against commitment.
    pub fn verify(&self, commitment: &MoveCommitment) -> Result<(), CommitmentError> {
        if verify_digest(&self.key, &self.move_label, &commitment.digest) {
            Ok(())
        } else {
            Err(CommitmentError::DigestMismatch {
                expected: commitment.digest,
                computed: compute_digest(&self.key, &self.move_label),
            })
        }
    }
}

/// Errors that can occur during commitment verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitmentError {
    /// Key or digest could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Recomputed digest differs from the published one.
    #[error("HMAC mismatch: published {expected}, computed {computed}")]
    DigestMismatch {
        /// Published digest.
        expected: MoveDigest,
        /// Digest recomputed from the reveal.
        computed: MoveDigest,
    },
}

/// Pick the computer's move and seal it.
///
/// Draws a fresh 32-byte key and a uniform move index, then commits to
/// the move's label.
pub fn generate_commitment<R: RngCore + CryptoRng>(
    moves: &MoveSet,
    rng: &mut R,
) -> (CommitmentPreimage, MoveCommitment) {
    let key = draw_secret_key(rng);
    let move_index = draw_move_index(rng, moves.len());
    let move_label = moves.labels()[move_index].clone();

    let preimage = CommitmentPreimage {
        key,
        move_index,
        move_label,
    };
    let commitment = MoveCommitment::from_preimage(&preimage);

    debug!(digest = %commitment.digest, moves = moves.len(), "sealed computer move");

    (preimage, commitment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_moves() -> MoveSet {
        MoveSet::new(["rock", "paper", "scissors", "lizard", "spock"]).unwrap()
    }

    #[test]
    fn test_commitment_creation() {
        let moves = test_moves();
        let mut rng = StdRng::seed_from_u64(7);
        let (preimage, commitment) = generate_commitment(&moves, &mut rng);

        assert!(commitment.verify(&preimage));
        assert!(preimage.move_index() < moves.len());
        assert_eq!(moves.get(preimage.move_index()), Some(preimage.move_label()));
        assert_eq!(commitment.digest.to_hex().len(), 64);
    }

    #[test]
    fn test_commitment_determinism() {
        let moves = test_moves();
        let (p1, c1) = generate_commitment(&moves, &mut StdRng::seed_from_u64(42));
        let (p2, c2) = generate_commitment(&moves, &mut StdRng::seed_from_u64(42));

        assert_eq!(c1, c2);
        assert_eq!(p1.move_index(), p2.move_index());
    }

    #[test]
    fn test_fresh_key_per_session() {
        let moves = test_moves();
        let mut rng = StdRng::seed_from_u64(3);
        let (p1, _) = generate_commitment(&moves, &mut rng);
        let (p2, _) = generate_commitment(&moves, &mut rng);

        assert_ne!(p1.reveal().key, p2.reveal().key);
    }

    #[test]
    fn test_reveal_verification() {
        let moves = test_moves();
        let (preimage, commitment) = generate_commitment(&moves, &mut StdRng::seed_from_u64(11));
        let reveal = preimage.reveal();

        assert!(reveal.verify(&commitment).is_ok());
        assert_eq!(
            compute_digest(&reveal.key, &reveal.move_label),
            commitment.digest
        );
    }

    #[test]
    fn test_reveal_wrong_move_fails() {
        let moves = test_moves();
        let (preimage, commitment) = generate_commitment(&moves, &mut StdRng::seed_from_u64(11));
        let mut reveal = preimage.reveal();

        let other = moves
            .iter()
            .find(|m| *m != reveal.move_label)
            .unwrap()
            .to_string();
        reveal.move_label = other;

        assert!(matches!(
            reveal.verify(&commitment),
            Err(CommitmentError::DigestMismatch { .. })
        ));
    }

    #[test]
    fn test_reveal_wrong_key_fails() {
        let moves = test_moves();
        let (preimage, commitment) = generate_commitment(&moves, &mut StdRng::seed_from_u64(11));
        let mut reveal = preimage.reveal();

        let mut bytes = *reveal.key.as_bytes();
        bytes[31] ^= 0x80;
        reveal.key = SecretKey::from_bytes(bytes);

        assert!(reveal.verify(&commitment).is_err());
    }
}
