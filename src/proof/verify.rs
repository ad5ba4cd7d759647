//! Verification API
//!
//! Check a disclosed key and move against a published HMAC, the way a
//! suspicious user would after the round.

use serde::Serialize;

use crate::core::hash::{compute_digest, MoveDigest, SecretKey};
use crate::proof::commitment::{CommitmentError, MoveCommitment, MoveReveal};

/// Verification result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    /// Move that was revealed.
    pub move_label: String,

    /// Digest published before the user answered.
    pub published: MoveDigest,

    /// Digest recomputed from the disclosed key.
    pub computed: MoveDigest,

    /// Did the digests match?
    pub valid: bool,
}

/// Verify hex-encoded key and HMAC against a revealed move.
///
/// Malformed hex is an error; a well-formed mismatch is a report with
/// `valid == false`.
pub fn verify_reveal(
    key_hex: &str,
    move_label: &str,
    hmac_hex: &str,
) -> Result<VerificationReport, CommitmentError> {
    let reveal = MoveReveal {
        key: SecretKey::from_hex(key_hex)?,
        move_label: move_label.to_string(),
    };
    let commitment = MoveCommitment {
        digest: MoveDigest::from_hex(hmac_hex)?,
    };

    let valid = reveal.verify(&commitment).is_ok();

    Ok(VerificationReport {
        computed: compute_digest(&reveal.key, &reveal.move_label),
        published: commitment.digest,
        move_label: reveal.move_label,
        valid,
    })
}
