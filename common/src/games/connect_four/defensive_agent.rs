use crate::games::SessionRng;
use crate::log;
use super::agent::{Agent, drop_into};
use super::board::{BoardHandle, GameBoard};
use super::threat_selector::find_threat;
use super::types::Color;

pub const DEFENSIVE_AGENT_NAME: &str = "My Defensive Agent";

/// Blocks the opponent's immediate win when it can see one and otherwise
/// drops into a random open column. It never plays for its own win.
pub struct DefensiveAgent<B: GameBoard> {
    board: BoardHandle<B>,
    color: Color,
    rng: SessionRng,
}

impl<B: GameBoard> DefensiveAgent<B> {
    pub fn new(board: BoardHandle<B>, is_red: bool, rng: SessionRng) -> Self {
        Self {
            board,
            color: Color::from_is_red(is_red),
            rng,
        }
    }

    pub fn with_seed(board: BoardHandle<B>, is_red: bool, seed: u64) -> Self {
        Self::new(board, is_red, SessionRng::new(seed))
    }

    pub fn from_random(board: BoardHandle<B>, is_red: bool) -> Self {
        Self::new(board, is_red, SessionRng::from_random())
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Column where the opponent would complete four on their next drop.
    pub fn find_opponent_threat(&self) -> Option<usize> {
        let board = self.board.borrow();
        find_threat(&*board, self.color.opponent()).map(|threat| threat.column)
    }

    /// Uniform draw over all columns, redrawn until it hits one with room.
    /// Never returns on a board with every column full.
    pub fn random_move(&mut self) -> usize {
        let board = self.board.borrow();
        let columns = board.column_count();
        loop {
            let column = self.rng.random_range(0..columns);
            if !board.is_column_full(column) {
                return column;
            }
        }
    }

    /// Drops the agent's token into `column`; a full column is left as is.
    pub fn commit_move(&mut self, column: usize) -> Option<usize> {
        let mut board = self.board.borrow_mut();
        drop_into(&mut *board, column, self.color)
    }
}

impl<B: GameBoard> Agent for DefensiveAgent<B> {
    fn make_move(&mut self) -> Option<usize> {
        if !self.board.borrow().has_open_column() {
            log!("{} asked to move on a full board", DEFENSIVE_AGENT_NAME);
            return None;
        }

        let column = match self.find_opponent_threat() {
            Some(column) => column,
            None => self.random_move(),
        };
        self.commit_move(column);
        Some(column)
    }

    fn name(&self) -> &str {
        DEFENSIVE_AGENT_NAME
    }

    fn color(&self) -> Color {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::connect_four::{Board, Slot};

    fn yellow_agent(rows: &[&str], seed: u64) -> (BoardHandle<Board>, DefensiveAgent<Board>) {
        let board = Board::parse(rows).unwrap().into_handle();
        let agent = DefensiveAgent::with_seed(board.clone(), false, seed);
        (board, agent)
    }

    #[test]
    fn test_blocks_vertical_stack() {
        let (board, mut agent) = yellow_agent(
            &[
                ".......",
                ".......",
                ".......",
                "..R....",
                "..R....",
                "..R....",
            ],
            1,
        );
        assert_eq!(agent.find_opponent_threat(), Some(2));
        assert_eq!(agent.make_move(), Some(2));
        assert_eq!(board.borrow().slot(2, 2), Slot::Occupied(Color::Yellow));
        assert_eq!(board.borrow().filled_count(), 4);
    }

    #[test]
    fn test_blocks_bottom_row() {
        let (board, mut agent) = yellow_agent(
            &[
                ".......",
                ".......",
                ".......",
                ".......",
                ".......",
                "RRR....",
            ],
            2,
        );
        let mut board_before = board.borrow().clone();
        assert_eq!(agent.make_move(), Some(3));
        board_before.place(3, 5, Color::Yellow);
        assert_eq!(*board.borrow(), board_before);
    }

    #[test]
    fn test_red_agent_blocks_yellow() {
        let board = Board::parse(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "..YYY..",
        ])
        .unwrap()
        .into_handle();
        let mut agent = DefensiveAgent::with_seed(board.clone(), true, 3);
        assert_eq!(agent.color(), Color::Red);
        assert_eq!(agent.make_move(), Some(1));
        assert_eq!(board.borrow().slot(1, 5), Slot::Occupied(Color::Red));
    }

    #[test]
    fn test_ignores_own_threats() {
        let (_, agent) = yellow_agent(
            &[
                ".......",
                ".......",
                ".......",
                "....Y..",
                "....Y..",
                "....Y..",
            ],
            4,
        );
        assert_eq!(agent.find_opponent_threat(), None);
    }

    #[test]
    fn test_falls_back_to_random_column() {
        let (board, mut agent) = yellow_agent(
            &[
                ".......",
                ".......",
                ".......",
                ".......",
                ".......",
                ".......",
            ],
            5,
        );
        assert_eq!(agent.find_opponent_threat(), None);
        let column = agent.make_move().unwrap();
        assert!(column < 7);
        assert_eq!(board.borrow().slot(column, 5), Slot::Occupied(Color::Yellow));
        assert_eq!(board.borrow().filled_count(), 1);
    }

    #[test]
    fn test_random_move_skips_full_columns() {
        let (_, mut agent) = yellow_agent(
            &[
                "RR.RR.R",
                "YY.YY.Y",
                "RR.RR.R",
                "YY.YY.Y",
                "RR.RR.R",
                "YY.YY.Y",
            ],
            6,
        );
        let mut counts = [0usize; 7];
        for _ in 0..4000 {
            counts[agent.random_move()] += 1;
        }
        for column in [0, 1, 3, 4, 6] {
            assert_eq!(counts[column], 0);
        }
        assert_eq!(counts[2] + counts[5], 4000);
        assert!((1800..=2200).contains(&counts[2]), "column 2 drawn {} times", counts[2]);
    }

    #[test]
    fn test_random_move_is_uniform_over_open_columns() {
        let (_, mut agent) = yellow_agent(&["......."; 6], 7);
        let mut counts = [0usize; 7];
        for _ in 0..7000 {
            counts[agent.random_move()] += 1;
        }
        for count in counts {
            assert!((850..=1150).contains(&count), "counts {:?}", counts);
        }
    }

    #[test]
    fn test_commit_move_lands_on_lowest_empty_row() {
        let (board, mut agent) = yellow_agent(&["....", "....", "R...", "Y..."], 8);
        assert_eq!(agent.commit_move(0), Some(1));
        assert_eq!(agent.commit_move(1), Some(3));
        assert_eq!(board.borrow().slot(0, 1), Slot::Occupied(Color::Yellow));
        assert_eq!(board.borrow().filled_count(), 4);
    }

    #[test]
    fn test_commit_move_on_full_column_is_noop() {
        let (board, mut agent) = yellow_agent(&["R...", "Y...", "R...", "Y..."], 9);
        let before = board.borrow().clone();
        assert_eq!(agent.commit_move(0), None);
        assert_eq!(agent.commit_move(4), None);
        assert_eq!(*board.borrow(), before);
    }

    #[test]
    fn test_full_board_guard() {
        let (board, mut agent) = yellow_agent(&["RYRY", "YRYR", "RYRY", "YRYR"], 10);
        let before = board.borrow().clone();
        assert_eq!(agent.make_move(), None);
        assert_eq!(*board.borrow(), before);
    }

    #[test]
    fn test_same_seed_same_moves() {
        let play = |seed| {
            let board = Board::standard().into_handle();
            let mut agent = DefensiveAgent::with_seed(board, true, seed);
            (0..10).map(|_| agent.make_move()).collect::<Vec<_>>()
        };
        assert_eq!(play(11), play(11));
    }

    #[test]
    fn test_name() {
        let (_, agent) = yellow_agent(&["...."], 12);
        assert_eq!(agent.name(), "My Defensive Agent");
        assert_eq!(agent.seed(), 12);
    }
}
