//! Layouts and helpers shared by the integration tests.

#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};

use hrd_solver::board::Cell;
use hrd_solver::{generate_moves, parse_layout, Board, Direction, Move, Piece, SolutionPath};

/// The traditional opening: four vertical doubles around the goal block.
pub const CLASSIC: &str = "^11^\nv11v\n^<>^\nv22v\n2..2\n";

/// Shortest solution of [`CLASSIC`] counted in single-cell slides.
pub const CLASSIC_OPTIMUM: usize = 116;

/// Goal block already home.
pub const SOLVED: &str = "^^^^\nvvvv\n^..^\nv11v\n2112\n";

/// Goal block one cell above home with the gap right below it.
pub const ONE_AWAY: &str = "^^^^\nvvvv\n^11^\nv11v\n2..2\n";

/// Only horizontal pieces besides the goal: every row keeps an even number
/// of gaps, so the goal can never shift sideways into the middle columns.
pub const STUCK: &str = "11<>\n11<>\n<><>\n<><>\n..<>\n";

/// Number of boards reachable from [`STUCK`].
pub const STUCK_REACHABLE: usize = 44;

/// Three horizontal doubles stacked in the middle column pair.
pub const HORIZONTAL: &str = "^11^\nv11v\n2<>2\n2<>2\n.<>.\n";

/// Number of boards reachable from [`HORIZONTAL`].
pub const HORIZONTAL_REACHABLE: usize = 81_462;

pub fn board(layout: &str) -> Board {
    parse_layout(layout).unwrap()
}

/// Every legal move found the slow way: try each piece in each direction
/// and keep the slide if the piece lands on its own old cells or empty ones.
pub fn reference_moves(board: &Board) -> HashSet<Move> {
    let grid = board.grid();
    let mut legal = HashSet::new();
    for piece in board.pieces() {
        let own: Vec<_> = piece.cells().map(|(at, _)| at).collect();
        for direction in Direction::ALL {
            let Some(anchor) = piece.anchor.step(direction) else {
                continue;
            };
            let moved = Piece::new(piece.kind, anchor);
            let clear = moved.fits()
                && moved
                    .cells()
                    .all(|(at, _)| own.contains(&at) || grid.get(at) == Cell::Empty);
            if clear {
                legal.insert(Move::new(piece.anchor, direction));
            }
        }
    }
    legal
}

/// Every board reachable from `start`, in breadth-first order.
pub fn reachable(start: &Board) -> Vec<Board> {
    let mut seen = HashSet::from([start.signature()]);
    let mut boards = vec![start.clone()];
    let mut next = 0;
    while let Some(board) = boards.get(next).cloned() {
        next += 1;
        for mv in reference_moves(&board) {
            let moved = board.with_move(mv).unwrap();
            if seen.insert(moved.signature()) {
                boards.push(moved);
            }
        }
    }
    boards
}

/// Shortest solution length by plain breadth-first search.
pub fn bfs_distance(start: &Board) -> Option<usize> {
    let mut seen = HashSet::from([start.signature()]);
    let mut queue = VecDeque::from([(start.clone(), 0)]);
    while let Some((board, distance)) = queue.pop_front() {
        if board.is_solved().unwrap() {
            return Some(distance);
        }
        for mv in generate_moves(&board).unwrap() {
            let next = board.with_move(mv).unwrap();
            if seen.insert(next.signature()) {
                queue.push_back((next, distance + 1));
            }
        }
    }
    None
}

/// Each step is a legal move from the previous board and the path ends solved.
pub fn assert_valid_path(start: &Board, path: &SolutionPath) {
    let boards = path.boards();
    assert_eq!(boards.len(), path.moves().len() + 1);
    assert_eq!(&boards[0], start);
    for (i, mv) in path.moves().iter().enumerate() {
        let legal = generate_moves(&boards[i]).unwrap();
        assert!(legal.contains(mv), "step {i}: {mv} is not legal");
        assert_eq!(boards[i].with_move(*mv).unwrap(), boards[i + 1]);
    }
    assert!(boards.last().unwrap().is_solved().unwrap());
}
