//! Outcome Resolution
//!
//! Moves sit on a circle of size N. A move is beaten by the `N / 2` moves
//! that follow it and beats the `N / 2` moves that precede it. With
//! `[rock, paper, scissors]` this is the classic game: paper follows rock,
//! scissors follows paper, rock follows scissors.
//!
//! Both the resolver and the help table go through [`forward_distance`],
//! so the two can never disagree.

use std::fmt;
use serde::{Serialize, Deserialize};

/// Result of one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The user's move beats the computer's.
    UserWins,
    /// The computer's move beats the user's.
    ComputerWins,
    /// Same move.
    Draw,
}

impl Outcome {
    /// Line printed after the round.
    pub fn message(self) -> &'static str {
        match self {
            Self::UserWins => "User wins!",
            Self::ComputerWins => "Computer wins!",
            Self::Draw => "It's a draw!",
        }
    }

    /// Help table label, from the computer's side.
    pub fn table_label(self) -> &'static str {
        match self {
            Self::ComputerWins => "Win",
            Self::UserWins => "Lose",
            Self::Draw => "Draw",
        }
    }

    /// Same round seen from the other player.
    pub fn flip(self) -> Self {
        match self {
            Self::UserWins => Self::ComputerWins,
            Self::ComputerWins => Self::UserWins,
            Self::Draw => Self::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Steps forward around the circle from `from` to `to`, in `[0, n)`.
#[inline]
pub fn forward_distance(from: usize, to: usize, n: usize) -> usize {
    (to + n - from) % n
}

/// Resolve a round.
///
/// Indices must lie in `[0, n)` and `n` must be odd; the move set
/// guarantees both.
pub fn resolve(user: usize, computer: usize, n: usize) -> Outcome {
    debug_assert!(n % 2 == 1, "even move count {}", n);
    debug_assert!(user < n && computer < n, "index out of range");

    let d = forward_distance(user, computer, n);
    if d == 0 {
        Outcome::Draw
    } else if d <= n / 2 {
        Outcome::ComputerWins
    } else {
        Outcome::UserWins
    }
}

// =============================================================================
// TESTS
// =============================================================================
