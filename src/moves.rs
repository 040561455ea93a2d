//! Legal move enumeration.
//!
//! Everything is read off the grid around the two empty cells. A piece that
//! is one cell wide across its direction of travel only needs one empty cell
//! in front of it; those are the single slides. A piece two cells wide
//! across its direction of travel (the goal block, or a double lying
//! crosswise) needs both empty cells, side by side, in front of it; those
//! are the paired slides. No piece can do both in the same direction, so
//! the two lists never overlap.

use crate::board::{Board, Cell, Grid};
use crate::error::ConsistencyError;
use crate::piece::{Coord, Direction, Move};

/// All legal slides on `board`, in a fixed order: single slides for each
/// empty cell (row-major), then paired slides.
pub fn generate_moves(board: &Board) -> Result<Vec<Move>, ConsistencyError> {
    let grid = board.grid();
    let [a, b] = board.empty_cells()?;

    let mut moves = Vec::with_capacity(8);
    for empty in [a, b] {
        for side in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
            if let Some(mv) = single_slide(grid, empty, side) {
                moves.push(mv);
            }
        }
    }

    let sides = if a.y == b.y && b.x == a.x + 1 {
        Some([Direction::Up, Direction::Down])
    } else if a.x == b.x && b.y == a.y + 1 {
        Some([Direction::Left, Direction::Right])
    } else {
        None
    };
    if let Some(sides) = sides {
        for side in sides {
            if let Some(mv) = paired_slide(grid, a, b, side) {
                moves.push(mv);
            }
        }
    }

    Ok(moves)
}

/// A piece on `side` of `empty` that can slide into it alone.
///
/// Only the face of the piece nearest the empty cell qualifies: a single, or
/// the leading half of a double lying along the direction of travel. When
/// that half is the bottom or right one, the anchor is a further cell away.
fn single_slide(grid: &Grid, empty: Coord, side: Direction) -> Option<Move> {
    let near = empty.step(side)?;
    let extent = match (side, grid.get(near)) {
        (_, Cell::Single) => 1,
        (Direction::Left, Cell::Right) | (Direction::Up, Cell::Bottom) => 2,
        (Direction::Right, Cell::Left) | (Direction::Down, Cell::Top) => 2,
        _ => return None,
    };
    Some(Move::new(anchor_from(near, side, extent)?, side.opposite()))
}

/// A piece on `side` of the adjacent empty pair `a`, `b` whose near face
/// exactly covers both cells: the goal block, or a double lying across the
/// direction of travel.
fn paired_slide(grid: &Grid, a: Coord, b: Coord, side: Direction) -> Option<Move> {
    let near_a = a.step(side)?;
    let near_b = b.step(side)?;
    let extent = match (grid.get(near_a), grid.get(near_b)) {
        (Cell::Goal, Cell::Goal) => 2,
        (Cell::Left, Cell::Right) if matches!(side, Direction::Up | Direction::Down) => 1,
        (Cell::Top, Cell::Bottom) if matches!(side, Direction::Left | Direction::Right) => 1,
        _ => return None,
    };
    Some(Move::new(anchor_from(near_a, side, extent)?, side.opposite()))
}

/// Anchor of a piece whose cell touching the empty space is `near`, lying
/// on `side` of it and spanning `extent` cells away from the gap.
fn anchor_from(near: Coord, side: Direction, extent: usize) -> Option<Coord> {
    match (side, extent) {
        (Direction::Left | Direction::Up, 2) => near.step(side),
        _ => Some(near),
    }
}
