//! Move Set
//!
//! Ordered, unique move labels. Position in the set is the index used
//! for circular comparisons, so the set never changes after validation.

use std::collections::BTreeSet;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::MIN_MOVES;

/// Reasons a list of arguments is not a playable move set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveSetError {
    /// Fewer than three moves.
    #[error("expected at least {min} moves, got {got}")]
    TooFewMoves {
        /// Minimum number of moves.
        min: usize,
        /// Number of moves provided.
        got: usize,
    },

    /// An even number of moves cannot split wins and losses evenly.
    #[error("expected an odd number of moves, got {0}")]
    EvenMoveCount(usize),

    /// The same label appears more than once.
    #[error("moves must be unique, '{label}' appears more than once")]
    DuplicateMove {
        /// Repeated label.
        label: String,
    },

    /// A label is the empty string.
    #[error("move {position} is empty")]
    EmptyMove {
        /// 1-based position of the empty label.
        position: usize,
    },
}

impl MoveSetError {
    /// True for the count/parity failures, which warrant a usage hint.
    pub fn is_argument_count(&self) -> bool {
        matches!(self, Self::TooFewMoves { .. } | Self::EvenMoveCount(_))
    }
}

/// Validated move set.
///
/// Invariants: `len()` is odd and at least 3, no label repeats, no label
/// is empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MoveSet {
    labels: Vec<String>,
}

impl MoveSet {
    /// Validate labels into a move set.
    pub fn new<I, S>(labels: I) -> Result<Self, MoveSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        if labels.len() < MIN_MOVES {
            return Err(MoveSetError::TooFewMoves {
                min: MIN_MOVES,
                got: labels.len(),
            });
        }
        if labels.len() % 2 == 0 {
            return Err(MoveSetError::EvenMoveCount(labels.len()));
        }

        let mut seen = BTreeSet::new();
        for (i, label) in labels.iter().enumerate() {
            if label.is_empty() {
                return Err(MoveSetError::EmptyMove { position: i + 1 });
            }
            if !seen.insert(label.as_str()) {
                return Err(MoveSetError::DuplicateMove {
                    label: label.clone(),
                });
            }
        }

        Ok(Self { labels })
    }

    /// Number of moves (N).
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false; a valid set has at least three moves.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// `floor(N / 2)`: how many moves each move beats.
    #[inline]
    pub fn half(&self) -> usize {
        self.labels.len() / 2
    }

    /// Label at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Index of `label`, if present.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// All labels in order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Iterate labels in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

impl TryFrom<Vec<String>> for MoveSet {
    type Error = MoveSetError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(labels)
    }
}

impl From<MoveSet> for Vec<String> {
    fn from(moves: MoveSet) -> Self {
        moves.labels
    }
}
