//! Search nodes and move generation.
//!
//! A node is a board plus the bookkeeping the driver needs: accumulated path
//! cost, heuristic value, combined score, the move sequence from the root and
//! the last move applied. Expansion prunes children above the current bound
//! and never offers the move that would immediately undo the parent's.

use smallvec::SmallVec;

use crate::board::{Board, Direction};
use crate::heuristic::GoalBoard;

/// Fixed expansion priority; ties between candidate moves always resolve in
/// this order.
pub const MOVE_ORDER: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
];

/// Directions that keep the blank on the board and do not reverse
/// `last_move`, in [`MOVE_ORDER`].
pub fn legal_moves(board: &Board, last_move: Option<Direction>) -> SmallVec<[Direction; 4]> {
    let (col, row) = board.blank_position();
    let dimension = board.dimension();

    MOVE_ORDER
        .iter()
        .copied()
        .filter(|&direction| {
            if last_move.map_or(false, |last| direction == last.inverse()) {
                return false;
            }
            match direction {
                Direction::Left => col > 0,
                Direction::Right => col + 1 < dimension,
                Direction::Up => row > 0,
                Direction::Down => row + 1 < dimension,
            }
        })
        .collect()
}

/// One entry of the search frontier.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub board: Board,
    pub path_cost: u32,
    pub heuristic: u32,
    /// `path_cost + heuristic`; compared against the driver's bound.
    pub score: u32,
    pub moves: Vec<Direction>,
    pub last_move: Option<Direction>,
}

impl SearchNode {
    /// The root node: zero cost, empty move path, no reversal exclusion.
    pub fn root(board: Board, goal: &GoalBoard) -> SearchNode {
        let heuristic = goal.manhattan(&board);
        SearchNode {
            board,
            path_cost: 0,
            heuristic,
            score: heuristic,
            moves: Vec::new(),
            last_move: None,
        }
    }

    /// Children of this node whose score stays within `bound`.
    ///
    /// Children over the bound are dropped here; that cutoff is what turns
    /// each frontier sweep into one bounded deepening pass.
    pub fn expand(&self, goal: &GoalBoard, bound: u32) -> SmallVec<[SearchNode; 4]> {
        let mut children = SmallVec::new();
        for direction in legal_moves(&self.board, self.last_move) {
            let Some(board) = self.board.shifted(direction) else {
                continue;
            };
            let path_cost = self.path_cost + 1;
            let heuristic = goal.manhattan(&board);
            let score = path_cost + heuristic;
            if score > bound {
                continue;
            }

            let mut moves = self.moves.clone();
            moves.push(direction);
            children.push(SearchNode {
                board,
                path_cost,
                heuristic,
                score,
                moves,
                last_move: Some(direction),
            });
        }
        children
    }
}
