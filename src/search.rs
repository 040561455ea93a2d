//! Search entry point and expansion loop.
//!
//! Both strategies run the same loop: pop a node, skip it if its board has
//! already been expanded, stop if it is solved, otherwise push one child per
//! legal move. Only the frontier differs.

use std::collections::HashMap;
use std::fmt;

use log::{debug, info, warn};

use crate::board::{Board, Signature};
use crate::error::{ConsistencyError, SolveError};
use crate::frontier::{Frontier, PriorityFrontier, StackFrontier};
use crate::layout::parse_layout;
use crate::moves::generate_moves;
use crate::node::{FrontierKey, NodeId, SearchNode};
use crate::path::{reconstruct, SolutionPath};

const PROGRESS_INTERVAL: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Strategy {
    /// Best-first on `g + h`; finds a shortest solution.
    #[value(name = "astar")]
    AStar,
    /// Depth-first; finds some solution.
    #[value(name = "dfs")]
    Dfs,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::AStar => write!(f, "astar"),
            Strategy::Dfs => write!(f, "dfs"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub strategy: Strategy,
    /// Keep every expansion in [`SearchStats::trace`].
    pub record_trace: bool,
}

impl SearchConfig {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            record_trace: false,
        }
    }

    pub fn with_trace(mut self) -> Self {
        self.record_trace = true;
        self
    }
}

/// A board taken off the frontier and expanded, with its cost at the time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expansion {
    pub signature: Signature,
    pub g: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded: usize,
    /// Child boards produced by applying legal moves.
    pub generated: usize,
    /// Children dropped before queuing plus nodes skipped on pop, because
    /// their board had already been expanded at no greater cost.
    pub duplicates_discarded: usize,
    pub frontier_high_water: usize,
    /// Expansions in order; empty unless tracing was requested.
    pub trace: Vec<Expansion>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Solved {
        path: SolutionPath,
        stats: SearchStats,
    },
    /// The frontier ran dry without reaching the goal.
    Unsolvable { stats: SearchStats },
}

impl SearchOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved { .. })
    }

    pub fn path(&self) -> Option<&SolutionPath> {
        match self {
            SearchOutcome::Solved { path, .. } => Some(path),
            SearchOutcome::Unsolvable { .. } => None,
        }
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Solved { stats, .. } | SearchOutcome::Unsolvable { stats } => stats,
        }
    }
}

/// Boards already expanded, with the cost they were expanded at.
struct Expanded {
    best_g: HashMap<Signature, u32>,
    /// Allow a board to be expanded again when reached more cheaply.
    reopen_cheaper: bool,
}

impl Expanded {
    fn new(strategy: Strategy) -> Self {
        Self {
            best_g: HashMap::new(),
            reopen_cheaper: strategy == Strategy::AStar,
        }
    }

    fn covers(&self, signature: Signature, g: u32) -> bool {
        match self.best_g.get(&signature) {
            Some(&seen) => !self.reopen_cheaper || seen <= g,
            None => false,
        }
    }

    fn record(&mut self, signature: Signature, g: u32) {
        self.best_g.insert(signature, g);
    }
}

/// Search from `start` until the goal is reached or the frontier is empty.
pub fn solve(start: Board, config: &SearchConfig) -> Result<SearchOutcome, ConsistencyError> {
    match config.strategy {
        Strategy::AStar => run(start, config, PriorityFrontier::new()),
        Strategy::Dfs => run(start, config, StackFrontier::new()),
    }
}

/// Parse a text layout and solve it.
pub fn solve_layout(text: &str, config: &SearchConfig) -> Result<SearchOutcome, SolveError> {
    let start = parse_layout(text)?;
    Ok(solve(start, config)?)
}

fn run<F: Frontier>(
    start: Board,
    config: &SearchConfig,
    mut frontier: F,
) -> Result<SearchOutcome, ConsistencyError> {
    let root = SearchNode::root(start)?;
    info!(
        "{} search from {} (h = {})",
        config.strategy, root.signature, root.h
    );

    let mut nodes: Vec<SearchNode> = Vec::new();
    let mut expanded = Expanded::new(config.strategy);
    let mut stats = SearchStats::default();
    let mut next_order: u64 = 1;

    frontier.push(0, FrontierKey::from(&root));
    nodes.push(root);

    while let Some(id) = frontier.pop() {
        let (signature, g) = (nodes[id].signature, nodes[id].g);
        if expanded.covers(signature, g) {
            stats.duplicates_discarded += 1;
            continue;
        }
        expanded.record(signature, g);
        stats.expanded += 1;
        if config.record_trace {
            stats.trace.push(Expansion { signature, g });
        }

        if nodes[id].is_terminal()? {
            stats.frontier_high_water = frontier.high_water();
            let path = reconstruct(&nodes, id);
            info!(
                "solved in {} moves after {} expansions ({} generated, {} duplicates)",
                path.len(),
                stats.expanded,
                stats.generated,
                stats.duplicates_discarded
            );
            return Ok(SearchOutcome::Solved { path, stats });
        }

        let moves = generate_moves(&nodes[id].board)?;
        for mv in moves {
            let board = nodes[id].board.with_move(mv)?;
            board.empty_cells()?;
            stats.generated += 1;

            if expanded.covers(board.signature(), g + 1) {
                stats.duplicates_discarded += 1;
                continue;
            }
            let child = nodes[id].child(id, board, mv, next_order)?;
            next_order += 1;
            let child_id: NodeId = nodes.len();
            frontier.push(child_id, FrontierKey::from(&child));
            nodes.push(child);
        }

        if stats.expanded % PROGRESS_INTERVAL == 0 {
            debug!(
                "{} expanded, frontier {}, current g {}",
                stats.expanded,
                frontier.len(),
                g
            );
        }
    }

    stats.frontier_high_water = frontier.high_water();
    warn!(
        "frontier exhausted after {} expansions; no solution",
        stats.expanded
    );
    Ok(SearchOutcome::Unsolvable { stats })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str = "^^^^\nvvvv\n^..^\nv11v\n2112\n";
    const ONE_AWAY: &str = "^^^^\nvvvv\n^11^\nv11v\n2..2\n";
    const STUCK: &str = "11<>\n11<>\n<><>\n<><>\n..<>\n";

    fn outcome(layout: &str, strategy: Strategy) -> SearchOutcome {
        solve_layout(layout, &SearchConfig::new(strategy).with_trace()).unwrap()
    }

    #[test]
    fn already_solved_stops_at_root() {
        for strategy in [Strategy::AStar, Strategy::Dfs] {
            let result = outcome(SOLVED, strategy);
            let path = result.path().unwrap();
            assert!(path.is_empty());
            assert_eq!(path.boards().len(), 1);
            assert_eq!(result.stats().expanded, 1);
            assert_eq!(result.stats().generated, 0);
        }
    }

    #[test]
    fn astar_takes_the_single_step() {
        let result = outcome(ONE_AWAY, Strategy::AStar);
        let path = result.path().unwrap();
        assert_eq!(path.boards().len(), 2);
        assert_eq!(path.boards()[1].to_string(), SOLVED);
    }

    #[test]
    fn dfs_finds_a_solution() {
        let result = outcome(ONE_AWAY, Strategy::Dfs);
        let path = result.path().unwrap();
        assert!(path.boards().last().unwrap().is_solved().unwrap());
    }

    #[test]
    fn exhausted_frontier_is_unsolvable() {
        for strategy in [Strategy::AStar, Strategy::Dfs] {
            let result = outcome(STUCK, strategy);
            assert!(!result.is_solved());
            assert!(result.path().is_none());
            // Every reachable board gets expanded exactly once.
            assert_eq!(result.stats().expanded, 44);
            assert_eq!(result.stats().trace.len(), 44);
        }
    }

    #[test]
    fn trace_is_off_by_default() {
        let result = solve_layout(ONE_AWAY, &SearchConfig::new(Strategy::AStar)).unwrap();
        assert!(result.stats().trace.is_empty());
        assert_eq!(result.stats().expanded, 2);
    }

    #[test]
    fn solve_layout_reports_bad_input() {
        let err = solve_layout("....\n", &SearchConfig::new(Strategy::Dfs)).unwrap_err();
        assert!(matches!(err, SolveError::Configuration(_)));
    }

    #[test]
    fn strategy_names() {
        use clap::ValueEnum;
        assert_eq!(Strategy::AStar.to_string(), "astar");
        assert_eq!(Strategy::from_str("dfs", false), Ok(Strategy::Dfs));
    }
}
