use std::collections::BTreeMap;
use std::fmt;

use crate::log;
use super::agent::Agent;
use super::board::{Board, BoardHandle};
use super::move_validator::validate_move;
use super::types::Color;
use super::win_detector::{check_win, check_win_at};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    Winner(Color),
    Draw,
    /// `color` made an illegal move and loses.
    Forfeit { color: Color, reason: String },
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOutcome::Winner(color) => write!(f, "{} wins", color),
            MatchOutcome::Draw => write!(f, "draw"),
            MatchOutcome::Forfeit { color, reason } => {
                write!(f, "{} forfeits ({})", color, reason)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchReport {
    pub outcome: MatchOutcome,
    pub moves: usize,
}

/// Plays `red` against `yellow` on `board` until someone connects four, the
/// board fills up, or a move fails validation. Red moves first.
pub fn play_match(
    board: &BoardHandle<Board>,
    red: &mut dyn Agent,
    yellow: &mut dyn Agent,
) -> Result<MatchReport, String> {
    if red.color() != Color::Red || yellow.color() != Color::Yellow {
        return Err(format!(
            "Seat mismatch: {} plays {}, {} plays {}",
            red.name(),
            red.color(),
            yellow.name(),
            yellow.color()
        ));
    }
    if let Some(winner) = check_win(&*board.borrow()) {
        return Err(format!("Board already won by {}", winner));
    }

    let mut current = Color::Red;
    let mut moves = 0;

    loop {
        if board.borrow().is_full() {
            return Ok(MatchReport { outcome: MatchOutcome::Draw, moves });
        }

        let before = board.borrow().clone();
        let agent: &mut dyn Agent = match current {
            Color::Red => &mut *red,
            Color::Yellow => &mut *yellow,
        };
        agent.make_move();

        let placed = validate_move(&before, &board.borrow(), current);
        let (column, row) = match placed {
            Ok(position) => position,
            Err(reason) => {
                log!("{} ({}) made an illegal move: {}", agent.name(), current, reason);
                let outcome = MatchOutcome::Forfeit { color: current, reason };
                return Ok(MatchReport { outcome, moves });
            }
        };
        moves += 1;

        if check_win_at(&*board.borrow(), column, row) == Some(current) {
            return Ok(MatchReport { outcome: MatchOutcome::Winner(current), moves });
        }
        current = current.opponent();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AgentRecord {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub forfeits: u32,
}

impl AgentRecord {
    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    pub fn win_rate(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            games => f64::from(self.wins) / f64::from(games),
        }
    }
}

/// Results per agent name across a series of matches.
#[derive(Clone, Debug, Default)]
pub struct SeriesStats {
    records: BTreeMap<String, AgentRecord>,
    games: u32,
}

impl SeriesStats {
    pub fn record(&mut self, red_name: &str, yellow_name: &str, outcome: &MatchOutcome) {
        self.games += 1;
        let (red_won, yellow_won) = match outcome {
            MatchOutcome::Winner(Color::Red) => (true, false),
            MatchOutcome::Winner(Color::Yellow) => (false, true),
            MatchOutcome::Forfeit { color, .. } => (*color == Color::Yellow, *color == Color::Red),
            MatchOutcome::Draw => (false, false),
        };

        for (name, won, lost, color) in [
            (red_name, red_won, yellow_won, Color::Red),
            (yellow_name, yellow_won, red_won, Color::Yellow),
        ] {
            let record = self.records.entry(name.to_string()).or_default();
            match (won, lost) {
                (true, _) => record.wins += 1,
                (_, true) => record.losses += 1,
                _ => record.draws += 1,
            }
            if matches!(outcome, MatchOutcome::Forfeit { color: c, .. } if *c == color) {
                record.forfeits += 1;
            }
        }
    }

    pub fn games(&self) -> u32 {
        self.games
    }

    pub fn get(&self, name: &str) -> Option<&AgentRecord> {
        self.records.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AgentRecord)> {
        self.records.iter().map(|(name, record)| (name.as_str(), record))
    }
}
