use super::board::GameBoard;
use super::line_scanner::{find_diagonal_threat, find_horizontal_threat, find_vertical_threat};
use super::types::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThreatKind {
    Vertical,
    Horizontal,
    Diagonal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Threat {
    pub column: usize,
    pub kind: ThreatKind,
}

/// First column where `color` completes four, checking vertical lines, then
/// horizontal, then diagonal. Later kinds are not consulted once one hits,
/// so this is the first threat by precedence rather than the most urgent.
pub fn find_threat<B: GameBoard + ?Sized>(board: &B, color: Color) -> Option<Threat> {
    let detectors: [(ThreatKind, fn(&B, Color) -> Option<usize>); 3] = [
        (ThreatKind::Vertical, find_vertical_threat::<B>),
        (ThreatKind::Horizontal, find_horizontal_threat::<B>),
        (ThreatKind::Diagonal, find_diagonal_threat::<B>),
    ];

    detectors
        .into_iter()
        .find_map(|(kind, detect)| detect(board, color).map(|column| Threat { column, kind }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::connect_four::Board;

    #[test]
    fn test_vertical_takes_precedence() {
        let board = Board::parse(&[
            ".......",
            ".......",
            ".......",
            "......R",
            "......R",
            "RRR...R",
        ])
        .unwrap();
        assert_eq!(
            find_threat(&board, Color::Red),
            Some(Threat { column: 6, kind: ThreatKind::Vertical })
        );
    }

    #[test]
    fn test_horizontal_before_diagonal() {
        let board = Board::parse(&[
            "........",
            "........",
            "........",
            "..RY....",
            ".RYY....",
            "RYYY.RRR",
        ])
        .unwrap();
        assert_eq!(find_diagonal_threat(&board, Color::Red), Some(3));
        assert_eq!(
            find_threat(&board, Color::Red),
            Some(Threat { column: 4, kind: ThreatKind::Horizontal })
        );
    }

    #[test]
    fn test_diagonal_when_nothing_else() {
        let board = Board::parse(&[
            ".......",
            ".......",
            ".......",
            "...YR..",
            "...YYR.",
            "...YYYR",
        ])
        .unwrap();
        assert_eq!(
            find_threat(&board, Color::Red),
            Some(Threat { column: 3, kind: ThreatKind::Diagonal })
        );
    }

    #[test]
    fn test_no_threat() {
        let board = Board::parse(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "...Y...",
            "..RRY..",
        ])
        .unwrap();
        assert_eq!(find_threat(&board, Color::Red), None);
        assert_eq!(find_threat(&board, Color::Yellow), None);
    }
}
