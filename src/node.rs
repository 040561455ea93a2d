use crate::board::{Board, Signature};
use crate::error::ConsistencyError;
use crate::piece::Move;

/// Index of a node in the search tree arena.
pub type NodeId = usize;

/// One point in the search tree.
///
/// Nodes live in an arena owned by the search and point at their parent by
/// index, so the chain back to the root stays valid for as long as the
/// arena does and no node is ever touched after it is created.
///
/// The arena is only freed when the search returns. Children that are
/// later popped and skipped as duplicates stay in it until then, so memory
/// grows with nodes generated rather than boards expanded.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub board: Board,
    pub signature: Signature,
    /// Moves taken from the root.
    pub g: u32,
    /// Goal-distance estimate for `board`.
    pub h: u32,
    pub depth: u32,
    pub parent: Option<NodeId>,
    /// The move that turned the parent's board into this one.
    pub producing_move: Option<Move>,
    /// Assigned in strictly increasing order as nodes are created.
    pub creation_order: u64,
}

impl SearchNode {
    pub fn root(board: Board) -> Result<Self, ConsistencyError> {
        Ok(Self {
            signature: board.signature(),
            h: board.heuristic()?,
            board,
            g: 0,
            depth: 0,
            parent: None,
            producing_move: None,
            creation_order: 0,
        })
    }

    /// A node one move below `self`, stored at `parent` in the arena.
    pub fn child(
        &self,
        parent: NodeId,
        board: Board,
        producing_move: Move,
        creation_order: u64,
    ) -> Result<Self, ConsistencyError> {
        Ok(Self {
            signature: board.signature(),
            h: board.heuristic()?,
            board,
            g: self.g + 1,
            depth: self.depth + 1,
            parent: Some(parent),
            producing_move: Some(producing_move),
            creation_order,
        })
    }

    pub fn f(&self) -> u32 {
        self.g + self.h
    }

    pub fn is_terminal(&self) -> Result<bool, ConsistencyError> {
        self.board.is_solved()
    }
}

/// Best-first ordering: lower `f` first, then older `creation_order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub f: u32,
    pub creation_order: u64,
}

impl From<&SearchNode> for FrontierKey {
    fn from(node: &SearchNode) -> Self {
        Self {
            f: node.f(),
            creation_order: node.creation_order,
        }
    }
}
