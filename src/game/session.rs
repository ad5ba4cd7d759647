//! Round Session
//!
//! One round, start to finish:
//!
//! ```text
//! MoveSet::new ──► Session::setup ──► respond(line) ──► Resolution
//! (AwaitingArgs)   (AwaitingMoveChoice)                 Help | Exited |
//!                                                       Reported | Invalid
//! ```
//!
//! `setup` seals the computer's move before anything is shown. `respond`
//! consumes the session, so a sealed move is answered exactly once.
//! [`play_round`] wires both phases to a reader and two writers.

use std::fmt;
use std::io::{self, BufRead, Write};
use rand::{CryptoRng, RngCore};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::core::moves::MoveSet;
use crate::game::outcome::{resolve, Outcome};
use crate::game::table::HelpTable;
use crate::proof::commitment::{
    generate_commitment, CommitmentError, CommitmentPreimage, MoveCommitment, MoveReveal,
};

/// Prompt shown before reading the user's line.
pub const PROMPT: &str = "Enter your move: ";

/// Input that shows the help table.
pub const HELP_INPUT: &str = "?";

/// Reasons a line is not a valid selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Nothing was entered (or stdin closed).
    #[error("no move entered")]
    Empty,

    /// Not `?` and not an integer.
    #[error("'{0}' is not a number")]
    NotANumber(String),

    /// Integer outside `[0, N]`.
    #[error("{choice} is not between 1 and {max}")]
    OutOfRange {
        /// Number entered.
        choice: i64,
        /// Number of moves.
        max: usize,
    },
}

/// Parsed selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Choice {
    Help,
    Exit,
    Move(usize),
}

fn parse_choice(input: &str, n: usize) -> Result<Choice, SelectionError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(SelectionError::Empty);
    }
    if input == HELP_INPUT {
        return Ok(Choice::Help);
    }

    let choice: i64 = input
        .parse()
        .map_err(|_| SelectionError::NotANumber(input.to_string()))?;

    match usize::try_from(choice) {
        Ok(0) => Ok(Choice::Exit),
        Ok(k) if k <= n => Ok(Choice::Move(k - 1)),
        _ => Err(SelectionError::OutOfRange { choice, max: n }),
    }
}

/// Everything disclosed after a played round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    /// The user's move.
    pub user_move: String,
    /// The computer's move.
    pub computer_move: String,
    /// Who won.
    pub outcome: Outcome,
    /// Digest shown before the user answered.
    pub commitment: MoveCommitment,
    /// Key and move, for recomputing the digest.
    pub reveal: MoveReveal,
}

impl RoundReport {
    /// Check the disclosed key against the published digest.
    pub fn verify(&self) -> Result<(), CommitmentError> {
        self.reveal.verify(&self.commitment)
    }
}

impl fmt::Display for RoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Your move: {}", self.user_move)?;
        writeln!(f, "Computer move: {}", self.computer_move)?;
        writeln!(f, "{}", self.outcome)?;
        writeln!(f, "Key: {}", self.reveal.key.to_hex())
    }
}

/// Terminal state of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// `?`: show the outcome table.
    Help(HelpTable),
    /// `0`: leave without playing.
    Exited,
    /// A move was played.
    Reported(RoundReport),
    /// Anything else.
    Invalid(SelectionError),
}

impl Resolution {
    /// Process exit status for this state.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Help(_) | Self::Exited | Self::Reported(_) => 0,
            Self::Invalid(_) => 1,
        }
    }
}

/// A round awaiting the user's choice.
///
/// Holds the move set and the sealed computer move; nothing is shared
/// or global.
#[derive(Debug)]
pub struct Session {
    moves: MoveSet,
    preimage: CommitmentPreimage,
    commitment: MoveCommitment,
}

impl Session {
    /// Seal the computer's move for a new round.
    pub fn setup<R: RngCore + CryptoRng>(moves: MoveSet, rng: &mut R) -> Self {
        let (preimage, commitment) = generate_commitment(&moves, rng);
        Self {
            moves,
            preimage,
            commitment,
        }
    }

    /// The move set being played.
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// The published commitment.
    pub fn commitment(&self) -> &MoveCommitment {
        &self.commitment
    }

    /// HMAC line and move menu, one entry per line.
    pub fn menu(&self) -> String {
        let mut out = format!("HMAC: {}\nAvailable moves:\n", self.commitment.digest);
        for (i, label) in self.moves.iter().enumerate() {
            out.push_str(&format!("{} - {}\n", i + 1, label));
        }
        out.push_str("0 - Exit\n");
        out.push_str("? - Help\n");
        out
    }

    /// Answer the prompt and end the session.
    pub fn respond(self, input: &str) -> Resolution {
        let choice = match parse_choice(input, self.moves.len()) {
            Ok(choice) => choice,
            Err(e) => {
                debug!(error = %e, "rejected move selection");
                return Resolution::Invalid(e);
            }
        };

        match choice {
            Choice::Help => Resolution::Help(HelpTable::new(&self.moves)),
            Choice::Exit => Resolution::Exited,
            Choice::Move(user) => {
                let computer = self.preimage.move_index();
                let outcome = resolve(user, computer, self.moves.len());
                info!(user, computer, ?outcome, "round resolved");

                Resolution::Reported(RoundReport {
                    user_move: self.moves.labels()[user].clone(),
                    computer_move: self.preimage.move_label().to_string(),
                    outcome,
                    commitment: self.commitment,
                    reveal: self.preimage.reveal(),
                })
            }
        }
    }
}

/// Play one round over the given streams.
///
/// Prints the digest and menu to `out`, reads one line from `input`,
/// then writes the result to `out` (or the error to `err`). The returned
/// resolution carries the exit status.
pub fn play_round<R, I, O, E>(
    moves: MoveSet,
    config: &GameConfig,
    rng: &mut R,
    input: &mut I,
    out: &mut O,
    err: &mut E,
) -> io::Result<Resolution>
where
    R: RngCore + CryptoRng,
    I: BufRead,
    O: Write,
    E: Write,
{
    let session = Session::setup(moves, rng);

    out.write_all(session.menu().as_bytes())?;
    out.write_all(PROMPT.as_bytes())?;
    out.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    debug!(bytes = read, "read selection");

    let resolution = session.respond(&line);
    match &resolution {
        Resolution::Help(table) => {
            let table = table.clone().with_column_width(config.column_width);
            write!(out, "\nHelp table:\n{}", table)?;
        }
        Resolution::Exited => {}
        Resolution::Reported(report) => write!(out, "{}", report)?,
        Resolution::Invalid(e) => writeln!(err, "Invalid move: {}", e)?,
    }
    out.flush()?;

    Ok(resolution)
}

// =============================================================================
// TESTS
// =============================================================================
