//! Bounded-deepening driver.
//!
//! Repeated breadth-style sweeps over an explicit FIFO frontier, each capped
//! by a score bound that starts at the root heuristic and grows by one
//! whenever a sweep exhausts the frontier without reaching the goal. No node
//! above the bound is ever expanded, and the bound only grows, so the first
//! success carries the optimal cost for an admissible heuristic.
//!
//! The frontier is deliberately first-in-first-out within a bound rather than
//! score-ordered: the bound alone preserves optimality, and a plain queue
//! keeps each sweep free of heap bookkeeping.

use std::collections::{HashSet, VecDeque};
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::board::{is_solvable, Board, Direction};
use crate::heuristic::GoalBoard;
use crate::search::SearchNode;

/// Per-solve knobs. The defaults reproduce the bare algorithm with the
/// parity guard enabled and no external caps.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Reject unsolvable instances before searching. Without it an
    /// unsolvable board grows the bound forever, so disabling this only
    /// makes sense together with one of the caps below.
    pub check_solvability: bool,
    /// Wall-clock cap; `None` means unlimited.
    pub timeout: Option<Duration>,
    /// Refuse to raise the bound past this value; `None` means unlimited.
    pub max_bound: Option<u32>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            check_solvability: true,
            timeout: None,
            max_bound: None,
        }
    }
}

/// Terminal failures of one solve call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("puzzle is not solvable: tile parity does not match the goal")]
    Unsolvable,
    #[error("search timed out after {0:?}")]
    Timeout(Duration),
    #[error("no solution within score bound {0}")]
    BoundExceeded(u32),
}

/// A solution plus run statistics.
#[derive(Debug, Clone)]
pub struct SolverResult {
    /// Number of moves from the initial board to the goal.
    pub cost: u32,
    /// Blank moves transforming the initial board into the goal.
    pub moves: Vec<Direction>,
    /// Boards expanded across all bound iterations.
    pub nodes_expanded: usize,
    /// Bound iterations run, the successful one included.
    pub bounds_tried: usize,
    /// The bound in force when the goal was reached.
    pub final_bound: u32,
    pub time_elapsed_ms: u64,
}

/// Solve one sliding-tile instance.
///
/// Seeds the frontier with the root at `bound = heuristic(root)`, sweeps it
/// first-in-first-out, and restarts with `bound + 1`, a fresh frontier and a
/// fresh visited set whenever it drains without success. A board may sit in
/// the frontier more than once but is expanded at most once per iteration.
pub fn solve(
    initial: &Board,
    goal: &GoalBoard,
    config: &SolverConfig,
) -> Result<SolverResult, SolveError> {
    let start = Instant::now();
    let deadline = config.timeout.map(|limit| (start + limit, limit));

    if config.check_solvability && !is_solvable(initial, goal.board()) {
        return Err(SolveError::Unsolvable);
    }

    let root = SearchNode::root(initial.clone(), goal);
    let mut bound = root.heuristic;
    let mut bounds_tried = 0usize;
    let mut nodes_expanded = 0usize;

    loop {
        bounds_tried += 1;
        let mut frontier: VecDeque<SearchNode> = VecDeque::new();
        frontier.push_back(root.clone());
        // Keyed by the canonical row-major layout; same membership semantics
        // as comparing whole boards.
        let mut visited: HashSet<Vec<u8>> = HashSet::new();

        while let Some(current) = frontier.pop_front() {
            if let Some((at, limit)) = deadline {
                if Instant::now() > at {
                    return Err(SolveError::Timeout(limit));
                }
            }

            if goal.is_goal(&current.board) {
                tracing::debug!(
                    cost = current.path_cost,
                    nodes_expanded,
                    bounds_tried,
                    "goal reached"
                );
                return Ok(SolverResult {
                    cost: current.path_cost,
                    moves: current.moves,
                    nodes_expanded,
                    bounds_tried,
                    final_bound: bound,
                    time_elapsed_ms: start.elapsed().as_millis() as u64,
                });
            }

            if visited.insert(current.board.layout().to_vec()) {
                nodes_expanded += 1;
                frontier.extend(current.expand(goal, bound));
            }
        }

        if let Some(cap) = config.max_bound {
            if bound >= cap {
                return Err(SolveError::BoundExceeded(cap));
            }
        }
        bound += 1;
        tracing::debug!(bound, nodes_expanded, "frontier exhausted, raising bound");
    }
}
