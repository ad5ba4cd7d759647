//! Secret Randomness
//!
//! Key bytes and the computer's move index. Both draws take any
//! `CryptoRng`, so the binary passes the OS generator and tests pass a
//! seeded `StdRng` for reproducible sessions.

use rand::{CryptoRng, Rng, RngCore};

use super::hash::SecretKey;
use crate::KEY_LEN;

/// Fill a fresh secret key.
pub fn draw_secret_key<R: RngCore + CryptoRng>(rng: &mut R) -> SecretKey {
    let mut bytes = [0u8; KEY_LEN];
    rng.fill_bytes(&mut bytes);
    SecretKey::from_bytes(bytes)
}

/// Uniform index in `[0, len)`.
///
/// `gen_range` rejects out-of-zone samples, so there is no modulo bias.
///
/// # Panics
/// Panics if `len == 0`. Move sets are never empty.
#[inline]
pub fn draw_move_index<R: RngCore + CryptoRng>(rng: &mut R, len: usize) -> usize {
    rng.gen_range(0..len)
}
