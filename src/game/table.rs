//! Help Table
//!
//! Full outcome matrix for a move set. Row `i` is the user's move,
//! column `j` the computer's; each cell is the computer's result
//! (`Win`, `Lose`, `Draw`) for that pairing.

use std::fmt;

use crate::core::moves::MoveSet;
use crate::game::outcome::{resolve, Outcome};

/// Top-left header cell.
pub const CORNER_LABEL: &str = "PC/USER";

/// Default column width, padding included.
pub const DEFAULT_COLUMN_WIDTH: usize = 12;

/// Narrowest column that still fits one char plus padding.
pub const MIN_COLUMN_WIDTH: usize = 3;

/// Widest column the renderer will draw.
pub const MAX_COLUMN_WIDTH: usize = 80;

/// Outcome matrix for a move set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HelpTable {
    labels: Vec<String>,
    cells: Vec<Vec<Outcome>>,
    column_width: usize,
}

impl HelpTable {
    /// Build the table for `moves` with the default column width.
    pub fn new(moves: &MoveSet) -> Self {
        let n = moves.len();
        let cells = (0..n)
            .map(|user| (0..n).map(|computer| resolve(user, computer, n)).collect())
            .collect();

        Self {
            labels: moves.labels().to_vec(),
            cells,
            column_width: DEFAULT_COLUMN_WIDTH,
        }
    }

    /// Override the column width, clamped to
    /// `[MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH]`.
    pub fn with_column_width(mut self, width: usize) -> Self {
        self.column_width = width.clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH);
        self
    }

    /// Outcome at row `row`, column `col`.
    pub fn cell(&self, row: usize, col: usize) -> Option<Outcome> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Label at row `row`, column `col`.
    pub fn label(&self, row: usize, col: usize) -> Option<&'static str> {
        self.cell(row, col).map(Outcome::table_label)
    }

    /// Header row: corner label followed by every move.
    pub fn header(&self) -> Vec<&str> {
        std::iter::once(CORNER_LABEL)
            .chain(self.labels.iter().map(String::as_str))
            .collect()
    }

    fn rule(&self, f: &mut fmt::Formatter<'_>, left: char, mid: char, right: char) -> fmt::Result {
        let bar = "─".repeat(self.column_width);
        let columns = self.labels.len() + 1;
        write!(f, "{}", left)?;
        for c in 0..columns {
            f.write_str(&bar)?;
            write!(f, "{}", if c + 1 == columns { right } else { mid })?;
        }
        writeln!(f)
    }

    fn row<'a, I>(&self, f: &mut fmt::Formatter<'_>, cells: I) -> fmt::Result
    where
        I: IntoIterator<Item = &'a str>,
    {
        f.write_str("│")?;
        for cell in cells {
            write!(f, " {} │", fit(cell, self.column_width - 2))?;
        }
        writeln!(f)
    }
}

/// Pad or truncate to exactly `width` chars.
fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        format!("{}{}", text, " ".repeat(width - len))
    } else {
        let mut out: String = text.chars().take(width - 1).collect();
        out.push('…');
        out
    }
}

impl fmt::Display for HelpTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.rule(f, '┌', '┬', '┐')?;
        self.row(f, self.header())?;

        for (i, label) in self.labels.iter().enumerate() {
            self.rule(f, '├', '┼', '┤')?;
            let cells = self.cells[i].iter().map(|o| o.table_label());
            self.row(f, std::iter::once(label.as_str()).chain(cells))?;
        }

        self.rule(f, '└', '┴', '┘')
    }
}

/// Render the help table for `moves` as text.
pub fn render_outcome_table(moves: &MoveSet, column_width: usize) -> String {
    HelpTable::new(moves).with_column_width(column_width).to_string()
}
