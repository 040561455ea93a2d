//! Solver for the 4x5 sliding-block puzzle with one 2x2 goal block,
//! dominoes and single squares.
//!
//! ```text
//! layout ─► Board ─► moves::generate_moves ─► search::solve ─► SolutionPath
//! ```
//!
//! The goal block is home when its top-left cell sits at
//! [`board::TARGET_ANCHOR`].

#![forbid(unsafe_code)]

pub mod board;
pub mod display;
pub mod error;
pub mod frontier;
pub mod layout;
pub mod moves;
pub mod node;
pub mod path;
pub mod piece;
pub mod scramble;
pub mod search;

pub use board::{Board, Signature, TARGET_ANCHOR};
pub use error::{ConfigurationError, ConsistencyError, SolveError};
pub use layout::{parse_layout, render_solution};
pub use moves::generate_moves;
pub use path::SolutionPath;
pub use piece::{Coord, Direction, Move, Piece, PieceKind};
pub use search::{solve, solve_layout, SearchConfig, SearchOutcome, SearchStats, Strategy};
