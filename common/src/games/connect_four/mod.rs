mod agent;
mod board;
mod defensive_agent;
mod line_scanner;
mod match_runner;
mod move_validator;
mod random_agent;
mod threat_selector;
mod types;
mod win_detector;

pub use agent::{Agent, drop_into};
pub use board::{Board, BoardHandle, Column, GameBoard, STANDARD_COLUMNS, STANDARD_ROWS};
pub use defensive_agent::{DEFENSIVE_AGENT_NAME, DefensiveAgent};
pub use line_scanner::{
    Direction, diagonal_starts, find_diagonal_threat, find_horizontal_threat,
    find_vertical_threat, scan_line,
};
pub use match_runner::{AgentRecord, MatchOutcome, MatchReport, SeriesStats, play_match};
pub use move_validator::validate_move;
pub use random_agent::{RANDOM_AGENT_NAME, RandomAgent, open_columns};
pub use threat_selector::{Threat, ThreatKind, find_threat};
pub use types::{Color, Slot};
pub use win_detector::{WIN_COUNT, check_win, check_win_at};
