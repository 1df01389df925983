use crate::games::SessionRng;
use super::agent::{Agent, drop_into};
use super::board::{BoardHandle, GameBoard};
use super::types::Color;

pub const RANDOM_AGENT_NAME: &str = "Random Agent";

/// Baseline opponent: any open column, uniformly.
pub struct RandomAgent<B: GameBoard> {
    board: BoardHandle<B>,
    color: Color,
    rng: SessionRng,
}

impl<B: GameBoard> RandomAgent<B> {
    pub fn new(board: BoardHandle<B>, color: Color, rng: SessionRng) -> Self {
        Self { board, color, rng }
    }
}

pub fn open_columns<B: GameBoard + ?Sized>(board: &B) -> Vec<usize> {
    (0..board.column_count())
        .filter(|&column| !board.is_column_full(column))
        .collect()
}

impl<B: GameBoard> Agent for RandomAgent<B> {
    fn make_move(&mut self) -> Option<usize> {
        let mut board = self.board.borrow_mut();
        let column = *self.rng.choose(&open_columns(&*board))?;
        drop_into(&mut *board, column, self.color)?;
        Some(column)
    }

    fn name(&self) -> &str {
        RANDOM_AGENT_NAME
    }

    fn color(&self) -> Color {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::connect_four::Board;

    #[test]
    fn test_open_columns() {
        let board = Board::parse(&["R.Y.", "Y.R."]).unwrap();
        assert_eq!(open_columns(&board), vec![1, 3]);
    }

    #[test]
    fn test_random_agent_plays_open_column() {
        let board = Board::parse(&["R.Y.", "Y.R."]).unwrap().into_handle();
        let mut agent = RandomAgent::new(board.clone(), Color::Yellow, SessionRng::new(3));
        for _ in 0..4 {
            let column = agent.make_move().unwrap();
            assert!(column == 1 || column == 3);
        }
        assert!(board.borrow().is_full());
        assert_eq!(agent.make_move(), None);
    }

    #[test]
    fn test_random_agent_name() {
        let board = Board::standard().into_handle();
        let agent = RandomAgent::new(board, Color::Red, SessionRng::new(0));
        assert_eq!(agent.name(), "Random Agent");
        assert_eq!(agent.color(), Color::Red);
    }
}
