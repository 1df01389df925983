use super::board::{Board, GameBoard};
use super::types::{Color, Slot};

/// Compares the board before and after a turn and returns the `(column, row)`
/// of the single token `color` was allowed to add.
pub fn validate_move(before: &Board, after: &Board, color: Color) -> Result<(usize, usize), String> {
    if before.column_count() != after.column_count() || before.row_count() != after.row_count() {
        return Err("Board dimensions changed".to_string());
    }

    let mut placed = Vec::new();
    for column in 0..before.column_count() {
        for row in 0..before.row_count() {
            match (before.slot(column, row), after.slot(column, row)) {
                (old, new) if old == new => {}
                (Slot::Empty, Slot::Occupied(new)) => placed.push((column, row, new)),
                (Slot::Occupied(_), _) => {
                    return Err(format!(
                        "Token at column {} row {} was removed or recolored",
                        column, row
                    ));
                }
                (Slot::Empty, Slot::Empty) => {}
            }
        }
    }

    let (column, row, placed_color) = match placed.as_slice() {
        [] => return Err("No token was placed".to_string()),
        [single] => *single,
        many => return Err(format!("{} tokens were placed", many.len())),
    };

    if placed_color != color {
        return Err(format!("{} placed a {} token", color, placed_color));
    }
    if row + 1 < after.row_count() && !after.slot(column, row + 1).is_filled() {
        return Err(format!(
            "Token at column {} row {} has an empty slot below it",
            column, row
        ));
    }

    Ok((column, row))
}
