use std::fmt;

use crate::board::{Cell, HEIGHT, WIDTH};

/// A cell position, `x` counting columns from the left and `y` rows from
/// the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `direction`, or `None` off the board.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.as_offset();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < WIDTH && y < HEIGHT).then_some(Self { x, y })
    }

    pub fn manhattan(self, other: Self) -> u32 {
        (self.x.abs_diff(other.x) + self.y.abs_diff(other.y)) as u32
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// `(dx, dy)` with `y` growing downwards.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Direction::Up => "Up",
            Direction::Left => "Left",
            Direction::Down => "Down",
            Direction::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// The 2x2 block that has to reach the exit.
    Goal,
    Single,
    /// 1 tall, 2 wide (`<>`).
    HorizontalDouble,
    /// 2 tall, 1 wide (`^` over `v`).
    VerticalDouble,
}

impl PieceKind {
    /// Footprint as `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        match self {
            PieceKind::Goal => (2, 2),
            PieceKind::Single => (1, 1),
            PieceKind::HorizontalDouble => (2, 1),
            PieceKind::VerticalDouble => (1, 2),
        }
    }

    /// The grid symbol drawn at offset `(dx, dy)` inside the footprint.
    fn cell_at(&self, dx: usize, dy: usize) -> Cell {
        match self {
            PieceKind::Goal => Cell::Goal,
            PieceKind::Single => Cell::Single,
            PieceKind::HorizontalDouble if dx == 0 => Cell::Left,
            PieceKind::HorizontalDouble => Cell::Right,
            PieceKind::VerticalDouble if dy == 0 => Cell::Top,
            PieceKind::VerticalDouble => Cell::Bottom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    /// Top-left cell of the footprint.
    pub anchor: Coord,
}

impl Piece {
    pub const fn new(kind: PieceKind, anchor: Coord) -> Self {
        Self { kind, anchor }
    }

    pub fn is_goal(&self) -> bool {
        self.kind == PieceKind::Goal
    }

    /// Whether the whole footprint lies on the board.
    pub fn fits(&self) -> bool {
        let (w, h) = self.kind.size();
        self.anchor.x + w <= WIDTH && self.anchor.y + h <= HEIGHT
    }

    /// Every covered cell together with the symbol it shows.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let (w, h) = self.kind.size();
        (0..h).flat_map(move |dy| {
            (0..w).map(move |dx| {
                (
                    Coord::new(self.anchor.x + dx, self.anchor.y + dy),
                    self.kind.cell_at(dx, dy),
                )
            })
        })
    }
}

/// Slide the piece anchored at `anchor` one cell towards `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub anchor: Coord,
    pub direction: Direction,
}

impl Move {
    pub const fn new(anchor: Coord, direction: Direction) -> Self {
        Self { anchor, direction }
    }

    /// The move that slides the same piece back where it came from.
    pub fn reversed(&self) -> Option<Self> {
        Some(Self {
            anchor: self.anchor.step(self.direction)?,
            direction: self.direction.opposite(),
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.anchor, self.direction)
    }
}
