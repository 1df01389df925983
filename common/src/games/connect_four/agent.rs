use super::board::GameBoard;
use super::types::Color;

/// A player seated at a shared board.
pub trait Agent {
    /// Places exactly one token of [`Agent::color`] and returns its column.
    /// Returns `None` without touching the board when no column is open.
    fn make_move(&mut self) -> Option<usize>;

    fn name(&self) -> &str;

    fn color(&self) -> Color;
}

/// Drops `color` into the lowest empty slot of `column`. Full or unknown
/// columns are left alone. Returns the row written.
pub fn drop_into<B: GameBoard + ?Sized>(board: &mut B, column: usize, color: Color) -> Option<usize> {
    if column >= board.column_count() {
        return None;
    }
    let row = board.lowest_empty_index(column)?;
    board.place(column, row, color);
    Some(row)
}
