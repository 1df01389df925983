use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::types::{Color, Slot};

pub const STANDARD_COLUMNS: usize = 7;
pub const STANDARD_ROWS: usize = 6;

/// Shared handle to a board owned by the host. Only the side holding the
/// turn borrows it mutably.
pub type BoardHandle<B> = Rc<RefCell<B>>;

/// Read/write surface an agent needs from the host's board.
///
/// Rows are counted from the top: row 0 is the top slot of every column and
/// row `row_count() - 1` is the bottom, where a dropped token comes to rest
/// first.
pub trait GameBoard {
    fn column_count(&self) -> usize;

    fn row_count(&self) -> usize;

    fn slot(&self, column: usize, row: usize) -> Slot;

    /// Writes a token without checking gravity or prior occupancy; legality
    /// is the host engine's concern.
    fn place(&mut self, column: usize, row: usize, color: Color);

    fn is_column_full(&self, column: usize) -> bool {
        (0..self.row_count()).all(|row| self.slot(column, row).is_filled())
    }

    /// Scans top to bottom and keeps the last empty row seen, so the answer
    /// is the lowest empty slot even on a board with floating tokens.
    fn lowest_empty_index(&self, column: usize) -> Option<usize> {
        let mut lowest = None;
        for row in 0..self.row_count() {
            if !self.slot(column, row).is_filled() {
                lowest = Some(row);
            }
        }
        lowest
    }

    fn has_open_column(&self) -> bool {
        (0..self.column_count()).any(|column| !self.is_column_full(column))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    slots: Vec<Slot>,
}

impl Column {
    fn new(rows: usize) -> Self {
        Self {
            slots: vec![Slot::Empty; rows],
        }
    }

    pub fn row_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, row: usize) -> Slot {
        self.slots[row]
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Slot::is_filled)
    }

    pub fn lowest_empty_index(&self) -> Option<usize> {
        self.slots.iter().rposition(|slot| !slot.is_filled())
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_filled()).count()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    columns: Vec<Column>,
    rows: usize,
}

impl Board {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns: vec![Column::new(rows); columns],
            rows,
        }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_COLUMNS, STANDARD_ROWS)
    }

    pub fn into_handle(self) -> BoardHandle<Board> {
        Rc::new(RefCell::new(self))
    }

    /// Builds a board from text rows, top row first: `.` empty, `R` red,
    /// `Y` yellow. Whitespace inside a row is ignored.
    pub fn parse(rows: &[&str]) -> Result<Self, String> {
        let grid: Vec<Vec<Slot>> = rows
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| {
                        Slot::from_symbol(c)
                            .ok_or_else(|| format!("Unknown symbol '{}' in row {}", c, row))
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<_, _>>()?;

        let width = grid.first().map_or(0, Vec::len);
        if width == 0 {
            return Err("Board must have at least one row and one column".to_string());
        }
        if let Some(row) = grid.iter().position(|cells| cells.len() != width) {
            return Err(format!(
                "Row {} has {} slots, expected {}",
                row,
                grid[row].len(),
                width
            ));
        }

        let mut board = Board::new(width, grid.len());
        for (row, cells) in grid.iter().enumerate() {
            for (column, slot) in cells.iter().enumerate() {
                board.columns[column].slots[row] = *slot;
            }
        }

        if let Some(column) = board.first_floating_column() {
            return Err(format!("Column {} has a token above an empty slot", column));
        }

        Ok(board)
    }

    pub fn column(&self, index: usize) -> &Column {
        &self.columns[index]
    }

    pub fn filled_count(&self) -> usize {
        self.columns.iter().map(Column::filled_count).sum()
    }

    pub fn is_full(&self) -> bool {
        self.columns.iter().all(Column::is_full)
    }

    /// Host-side drop: lands `color` on top of `column` and returns its row.
    pub fn drop_token(&mut self, column: usize, color: Color) -> Result<usize, String> {
        let target = self
            .columns
            .get_mut(column)
            .ok_or_else(|| format!("Column {} is out of range", column))?;
        let row = target
            .lowest_empty_index()
            .ok_or_else(|| format!("Column {} is full", column))?;
        target.slots[row] = Slot::Occupied(color);
        Ok(row)
    }

    /// First column holding a token with an empty slot beneath it.
    pub fn first_floating_column(&self) -> Option<usize> {
        self.columns.iter().position(|column| {
            column
                .slots
                .windows(2)
                .any(|pair| pair[0].is_filled() && !pair[1].is_filled())
        })
    }
}

impl GameBoard for Board {
    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn row_count(&self) -> usize {
        self.rows
    }

    fn slot(&self, column: usize, row: usize) -> Slot {
        self.columns[column].slot(row)
    }

    fn place(&mut self, column: usize, row: usize, color: Color) {
        self.columns[column].slots[row] = Slot::Occupied(color);
    }

    fn is_column_full(&self, column: usize) -> bool {
        self.columns[column].is_full()
    }

    fn lowest_empty_index(&self, column: usize) -> Option<usize> {
        self.columns[column].lowest_empty_index()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for column in &self.columns {
                write!(f, "{}", column.slot(row).symbol())?;
            }
        }
        Ok(())
    }
}
