//! Detectors for three-token runs that one more drop would turn into four.
//!
//! The vertical detector looks at the top of each column. Horizontal and
//! diagonal detectors feed every line through the same [`RunTracker`], which
//! follows a run of the target color and remembers one candidate gap next to
//! it. A gap only counts when a token dropped into its column would come to
//! rest there now: it sits on the bottom row or on top of another token.

use crate::log;
use super::board::GameBoard;
use super::types::{Color, Slot};

const THREAT_RUN: usize = 3;
const MIN_DIAGONAL_START_ROW: usize = 3;
const MIN_DIAGONAL_COLUMN_SPAN: usize = 3;

/// Step taken between consecutive cells of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Direction {
    pub column_step: isize,
    pub row_step: isize,
}

impl Direction {
    pub const RIGHT: Direction = Direction { column_step: 1, row_step: 0 };
    /// Down-left to up-right.
    pub const FORWARD_DIAGONAL: Direction = Direction { column_step: 1, row_step: -1 };
    /// Down-right to up-left.
    pub const BACKWARD_DIAGONAL: Direction = Direction { column_step: -1, row_step: -1 };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineCell {
    Own,
    Other,
    Empty { supported: bool },
}

/// Run/gap state for one line. Gaps are keyed by board column, so on lines
/// that walk leftward the adjacency test never matches and the recount can
/// go negative.
#[derive(Debug, Default)]
struct RunTracker {
    count: isize,
    gap: Option<isize>,
    gap_in_run: bool,
}

impl RunTracker {
    fn reset(&mut self) {
        *self = Self::default();
    }

    /// Feeds the cell in `column` and returns the gap column once a run of
    /// three has a usable gap.
    fn observe(&mut self, column: isize, cell: LineCell) -> Option<isize> {
        match cell {
            LineCell::Own => self.count += 1,
            LineCell::Other => self.reset(),
            LineCell::Empty { supported } => self.observe_empty(column, supported),
        }

        match self.gap {
            Some(gap) if self.count == THREAT_RUN as isize => Some(gap),
            _ => None,
        }
    }

    fn observe_empty(&mut self, column: isize, supported: bool) {
        match self.gap {
            // Second blank right after the in-run gap: start over from here
            // but keep the count.
            Some(gap) if self.gap_in_run && gap + 1 == column => {
                self.gap = Some(column);
                self.gap_in_run = false;
            }
            // Blank closing a gapped run: only the tokens after the old gap
            // still touch the new one.
            Some(gap) if self.gap_in_run => {
                self.count = column - (gap + 1);
                self.gap = Some(column);
            }
            _ if supported => {
                self.gap = Some(column);
                self.gap_in_run = self.count > 0;
            }
            // A token placed here would fall through and set the opponent up.
            _ => self.reset(),
        }
    }
}

fn classify<B: GameBoard + ?Sized>(board: &B, column: usize, row: usize, color: Color) -> LineCell {
    match board.slot(column, row) {
        Slot::Occupied(c) if c == color => LineCell::Own,
        Slot::Occupied(_) => LineCell::Other,
        Slot::Empty => LineCell::Empty {
            supported: row + 1 == board.row_count() || board.slot(column, row + 1).is_filled(),
        },
    }
}

fn line_cells(
    columns: usize,
    rows: usize,
    start_column: usize,
    start_row: usize,
    direction: Direction,
) -> impl Iterator<Item = (usize, usize)> {
    (0isize..).map_while(move |step| {
        let column = start_column as isize + direction.column_step * step;
        let row = start_row as isize + direction.row_step * step;
        let inside = (0..columns as isize).contains(&column) && (0..rows as isize).contains(&row);
        inside.then_some((column as usize, row as usize))
    })
}

/// Walks one line from `(start_column, start_row)` and returns the
/// `(column, row)` of the first gap that completes a run of three.
pub fn scan_line<B: GameBoard + ?Sized>(
    board: &B,
    color: Color,
    start_column: usize,
    start_row: usize,
    direction: Direction,
) -> Option<(usize, usize)> {
    let mut tracker = RunTracker::default();
    let cells: Vec<(usize, usize)> = line_cells(
        board.column_count(),
        board.row_count(),
        start_column,
        start_row,
        direction,
    )
    .collect();

    let gap = cells.iter().find_map(|&(column, row)| {
        tracker.observe(column as isize, classify(board, column, row, color))
    })?;
    cells.iter().copied().find(|&(column, _)| column as isize == gap)
}

/// Length of the same-color run sitting on top of a column. Empty slots are
/// skipped, any token of the other color restarts the count.
fn top_run_length<B: GameBoard + ?Sized>(board: &B, column: usize, color: Color) -> usize {
    (0..board.row_count())
        .rev()
        .fold(0, |count, row| match board.slot(column, row) {
            Slot::Occupied(c) if c == color => count + 1,
            Slot::Occupied(_) => 0,
            Slot::Empty => count,
        })
}

pub fn find_vertical_threat<B: GameBoard + ?Sized>(board: &B, color: Color) -> Option<usize> {
    let column = (0..board.column_count()).find(|&column| {
        !board.is_column_full(column) && top_run_length(board, column, color) == THREAT_RUN
    })?;
    log!("Vertical three for {} found in column {}", color, column);
    Some(column)
}

/// Rows bottom to top, each scanned left to right with fresh state.
pub fn find_horizontal_threat<B: GameBoard + ?Sized>(board: &B, color: Color) -> Option<usize> {
    let (column, row) = (0..board.row_count())
        .rev()
        .find_map(|row| scan_line(board, color, 0, row, Direction::RIGHT))?;
    log!("Horizontal three for {} blocked at row {} column {}", color, row, column);
    Some(column)
}

/// Diagonal anchors in scan order: forward diagonals first, then backward
/// ones, each by start row from the bottom up. Every anchor yields a line of
/// at least four cells.
pub fn diagonal_starts(columns: usize, rows: usize) -> Vec<(usize, usize, Direction)> {
    let start_rows = || (MIN_DIAGONAL_START_ROW..rows).rev();
    let forward = start_rows().flat_map(move |row| {
        (0..columns.saturating_sub(MIN_DIAGONAL_COLUMN_SPAN))
            .map(move |column| (column, row, Direction::FORWARD_DIAGONAL))
    });
    let backward = start_rows().flat_map(move |row| {
        (MIN_DIAGONAL_COLUMN_SPAN..columns)
            .rev()
            .map(move |column| (column, row, Direction::BACKWARD_DIAGONAL))
    });
    forward.chain(backward).collect()
}

pub fn find_diagonal_threat<B: GameBoard + ?Sized>(board: &B, color: Color) -> Option<usize> {
    let (column, row) = diagonal_starts(board.column_count(), board.row_count())
        .into_iter()
        .find_map(|(column, row, direction)| scan_line(board, color, column, row, direction))?;
    log!("Diagonal three for {} blocked at row {} column {}", color, row, column);
    Some(column)
}
