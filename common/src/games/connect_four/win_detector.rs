use super::board::GameBoard;
use super::types::Color;

pub const WIN_COUNT: usize = 4;

/// (column step, row step) for each line orientation. Rows grow downward, so
/// `(1, -1)` climbs to the right.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

fn color_at<B: GameBoard + ?Sized>(board: &B, column: isize, row: isize) -> Option<Color> {
    if column < 0 || row < 0 {
        return None;
    }
    let (column, row) = (column as usize, row as usize);
    if column >= board.column_count() || row >= board.row_count() {
        return None;
    }
    board.slot(column, row).color()
}

fn run_through<B: GameBoard + ?Sized>(
    board: &B,
    column: usize,
    row: usize,
    color: Color,
    (dc, dr): (isize, isize),
) -> usize {
    let count_towards = |sign: isize| {
        (1..WIN_COUNT as isize)
            .take_while(|&i| {
                color_at(board, column as isize + sign * dc * i, row as isize + sign * dr * i)
                    == Some(color)
            })
            .count()
    };
    1 + count_towards(1) + count_towards(-1)
}

/// Winner by a line through `(column, row)`, the slot just filled.
pub fn check_win_at<B: GameBoard + ?Sized>(board: &B, column: usize, row: usize) -> Option<Color> {
    let color = board.slot(column, row).color()?;
    DIRECTIONS
        .iter()
        .any(|&direction| run_through(board, column, row, color, direction) >= WIN_COUNT)
        .then_some(color)
}

/// Any four in a row on the whole board. Red is reported first if both
/// colors somehow have one.
pub fn check_win<B: GameBoard + ?Sized>(board: &B) -> Option<Color> {
    let mut winner = None;
    for column in 0..board.column_count() {
        for row in 0..board.row_count() {
            match check_win_at(board, column, row) {
                Some(Color::Red) => return Some(Color::Red),
                Some(Color::Yellow) => winner = Some(Color::Yellow),
                None => {}
            }
        }
    }
    winner
}
