//! Game Logic Module
//!
//! ## Module Structure
//!
//! - `outcome`: Circular win/lose/draw rule
//! - `table`: Help table of every pairing
//! - `session`: Setup, single prompt, disclosure

pub mod outcome;
pub mod table;
pub mod session;

// Re-export key types
pub use outcome::{resolve, Outcome};
pub use table::{render_outcome_table, HelpTable};
pub use session::{play_round, Resolution, RoundReport, SelectionError, Session};
