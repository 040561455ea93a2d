use std::fmt;

use crate::error::{ConfigurationError, ConsistencyError};
use crate::piece::{Coord, Move, Piece};

pub const WIDTH: usize = 4;
pub const HEIGHT: usize = 5;

/// Where the goal piece's anchor has to end up: the 2x2 block then covers
/// the two middle columns of the bottom two rows.
pub const TARGET_ANCHOR: Coord = Coord::new(1, 3);

/// One grid cell as drawn in a layout file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Goal,
    Single,
    /// Left half of a horizontal double.
    Left,
    /// Right half of a horizontal double.
    Right,
    /// Top half of a vertical double.
    Top,
    /// Bottom half of a vertical double.
    Bottom,
}

impl Cell {
    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Goal => '1',
            Cell::Single => '2',
            Cell::Left => '<',
            Cell::Right => '>',
            Cell::Top => '^',
            Cell::Bottom => 'v',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Cell::Empty),
            '1' => Some(Cell::Goal),
            '2' => Some(Cell::Single),
            '<' => Some(Cell::Left),
            '>' => Some(Cell::Right),
            '^' => Some(Cell::Top),
            'v' => Some(Cell::Bottom),
            _ => None,
        }
    }

    fn code(&self) -> u64 {
        match self {
            Cell::Empty => 0,
            Cell::Goal => 1,
            Cell::Single => 2,
            Cell::Left => 3,
            Cell::Right => 4,
            Cell::Top => 5,
            Cell::Bottom => 6,
        }
    }
}

/// Content-derived identity of a board: the grid packed three bits per
/// cell, row by row. Two boards share a signature exactly when they draw
/// the same grid, whatever order their pieces are listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature(u64);

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:015x}", self.0)
    }
}

/// The symbol matrix drawn by a list of pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid([[Cell; WIDTH]; HEIGHT]);

impl Grid {
    pub fn get(&self, at: Coord) -> Cell {
        self.0[at.y][at.x]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; WIDTH]> {
        self.0.iter()
    }

    pub fn empty_cells(&self) -> Vec<Coord> {
        let mut empty = Vec::with_capacity(2);
        for (y, row) in self.0.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if *cell == Cell::Empty {
                    empty.push(Coord::new(x, y));
                }
            }
        }
        empty
    }

    pub fn signature(&self) -> Signature {
        Signature(
            self.0
                .iter()
                .flatten()
                .fold(0u64, |acc, cell| (acc << 3) | cell.code()),
        )
    }
}

/// Draw `pieces` onto an empty grid. Pieces must fit on the board; where
/// two overlap the later one wins, so overlap is checked separately by
/// [`Board::new`].
pub fn construct_grid(pieces: &[Piece]) -> Grid {
    let mut cells = [[Cell::Empty; WIDTH]; HEIGHT];
    for piece in pieces {
        for (at, cell) in piece.cells() {
            cells[at.y][at.x] = cell;
        }
    }
    Grid(cells)
}

/// A full puzzle configuration: the pieces plus the grid they draw.
///
/// The grid is rebuilt from the pieces by [`construct_grid`] whenever an
/// anchor changes, so it never goes stale.
#[derive(Debug, Clone)]
pub struct Board {
    pieces: Vec<Piece>,
    grid: Grid,
}

impl Board {
    /// Validate `pieces` and build the board: every piece on the board, no
    /// overlaps, one goal piece, two empty cells.
    pub fn new(pieces: Vec<Piece>) -> Result<Self, ConfigurationError> {
        if let Some(piece) = pieces.iter().find(|p| !p.fits()) {
            return Err(ConfigurationError::OutOfBounds(piece.anchor));
        }

        let goals = pieces.iter().filter(|p| p.is_goal()).count();
        if goals != 1 {
            return Err(ConfigurationError::GoalCount(goals));
        }

        let mut covered = [[false; WIDTH]; HEIGHT];
        for piece in &pieces {
            for (at, _) in piece.cells() {
                if covered[at.y][at.x] {
                    return Err(ConfigurationError::Overlap(at));
                }
                covered[at.y][at.x] = true;
            }
        }

        let grid = construct_grid(&pieces);
        let empty = grid.empty_cells().len();
        if empty != 2 {
            return Err(ConfigurationError::EmptyCellCount(empty));
        }

        Ok(Self { pieces, grid })
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn signature(&self) -> Signature {
        self.grid.signature()
    }

    /// The two uncovered cells in row-major order.
    pub fn empty_cells(&self) -> Result<[Coord; 2], ConsistencyError> {
        let empty = self.grid.empty_cells();
        match empty[..] {
            [a, b] => Ok([a, b]),
            _ => Err(ConsistencyError::EmptyCellCount(empty.len())),
        }
    }

    pub fn goal_anchor(&self) -> Result<Coord, ConsistencyError> {
        let mut goals = self.pieces.iter().filter(|p| p.is_goal());
        match (goals.next(), goals.next()) {
            (Some(goal), None) => Ok(goal.anchor),
            (None, _) => Err(ConsistencyError::GoalCount(0)),
            (Some(_), Some(_)) => Err(ConsistencyError::GoalCount(2 + goals.count())),
        }
    }

    /// Manhattan distance from the goal anchor to [`TARGET_ANCHOR`]. Every
    /// move shifts one anchor by one cell, so this never overestimates.
    pub fn heuristic(&self) -> Result<u32, ConsistencyError> {
        Ok(self.goal_anchor()?.manhattan(TARGET_ANCHOR))
    }

    pub fn is_solved(&self) -> Result<bool, ConsistencyError> {
        Ok(self.goal_anchor()? == TARGET_ANCHOR)
    }

    /// Shift the piece anchored at `mv.anchor` one cell and redraw the grid.
    ///
    /// Legality is the move generator's job; this only refuses moves that
    /// name no piece or push a piece off the board.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), ConsistencyError> {
        let piece = self
            .pieces
            .iter_mut()
            .find(|p| p.anchor == mv.anchor)
            .ok_or(ConsistencyError::NoPieceAt(mv.anchor))?;

        let off_board = ConsistencyError::OffBoard {
            anchor: mv.anchor,
            direction: mv.direction,
        };
        let moved = Piece::new(
            piece.kind,
            mv.anchor.step(mv.direction).ok_or(off_board.clone())?,
        );
        if !moved.fits() {
            return Err(off_board);
        }
        *piece = moved;

        self.grid = construct_grid(&self.pieces);
        Ok(())
    }

    /// A copy of this board with `mv` applied.
    pub fn with_move(&self, mv: Move) -> Result<Self, ConsistencyError> {
        let mut next = self.clone();
        next.apply_move(mv)?;
        Ok(next)
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
