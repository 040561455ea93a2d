use crate::board::Board;
use crate::node::{NodeId, SearchNode};
use crate::piece::Move;

/// The boards from the start position to a solved one, and the move taken
/// between each consecutive pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionPath {
    boards: Vec<Board>,
    moves: Vec<Move>,
}

impl SolutionPath {
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of moves; one less than the number of boards.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True when the start position was already solved.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl IntoIterator for SolutionPath {
    type Item = Board;
    type IntoIter = std::vec::IntoIter<Board>;

    fn into_iter(self) -> Self::IntoIter {
        self.boards.into_iter()
    }
}

/// Follow parent links from `terminal` up to the root and return the path in
/// root-first order.
///
/// Parents are always created before their children, so every link points to
/// a smaller id and the walk ends at the root.
pub fn reconstruct(nodes: &[SearchNode], terminal: NodeId) -> SolutionPath {
    let mut boards = Vec::new();
    let mut moves = Vec::new();

    let mut current = Some(terminal);
    while let Some(id) = current {
        let node = &nodes[id];
        boards.push(node.board.clone());
        moves.extend(node.producing_move);
        debug_assert!(node.parent.map_or(true, |parent| parent < id));
        current = node.parent;
    }

    boards.reverse();
    moves.reverse();
    SolutionPath { boards, moves }
}
