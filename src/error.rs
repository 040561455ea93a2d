use crate::piece::{Coord, Direction};

/// A layout or piece list that does not describe a legal starting board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("unrecognized symbol {symbol:?} at row {row}, column {col}")]
    UnrecognizedSymbol { row: usize, col: usize, symbol: char },

    #[error("expected {expected} rows, found {found}")]
    WrongRowCount { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    WrongRowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("expected exactly one goal piece, found {0}")]
    GoalCount(usize),

    #[error("goal block anchored at {0} is not a full 2x2 square")]
    IncompleteGoal(Coord),

    #[error("{symbol:?} at {at} is not attached to a matching half")]
    OrphanHalf { at: Coord, symbol: char },

    #[error("piece anchored at {0} does not fit on the board")]
    OutOfBounds(Coord),

    #[error("pieces overlap at {0}")]
    Overlap(Coord),

    #[error("a board needs exactly two empty cells, found {0}")]
    EmptyCellCount(usize),
}

/// A board invariant broken during search. Always a defect in move
/// generation or application.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsistencyError {
    #[error("board has {0} empty cells instead of two")]
    EmptyCellCount(usize),

    #[error("board has {0} goal pieces instead of one")]
    GoalCount(usize),

    #[error("no piece is anchored at {0}")]
    NoPieceAt(Coord),

    #[error("moving the piece at {anchor} {direction} leaves the board")]
    OffBoard { anchor: Coord, direction: Direction },
}

/// Any failure that stops a solve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("consistency violation: {0}")]
    Consistency(#[from] ConsistencyError),
}
