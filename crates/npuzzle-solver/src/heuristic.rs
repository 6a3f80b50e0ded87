//! Goal context and the Manhattan-distance heuristic.
//!
//! The solver's per-run parameters (goal board, dimension) live here instead
//! of in globals: a [`GoalBoard`] is built once per solve and passed into
//! expansion and the driver, so several solves can share one process safely.

use crate::board::{Board, InputError};

/// The goal configuration plus a tile -> goal coordinate table.
///
/// The table makes the heuristic a single pass over the cells rather than a
/// scan of the goal layout per tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalBoard {
    board: Board,
    positions: Vec<(u8, u8)>,
}

impl GoalBoard {
    /// The canonical goal: tiles `1..=n` in row-major order with the blank at
    /// the last cell, or at `blank_index` when given.
    pub fn standard(tile_count: usize, blank_index: Option<usize>) -> Result<GoalBoard, InputError> {
        let blank = blank_index.unwrap_or(tile_count);
        if blank > tile_count {
            return Err(InputError::BlankIndexOutOfRange {
                index: blank,
                tile_count,
            });
        }
        if tile_count > u8::MAX as usize {
            return Err(InputError::TooManyTiles(tile_count));
        }

        let mut layout: Vec<u8> = Vec::with_capacity(tile_count + 1);
        let mut next = 1usize;
        for cell in 0..=tile_count {
            if cell == blank {
                layout.push(0);
            } else {
                layout.push(next as u8);
                next += 1;
            }
        }

        Ok(GoalBoard::from_board(Board::from_layout(&layout)?))
    }

    /// Use an arbitrary board as the goal.
    pub fn from_board(board: Board) -> GoalBoard {
        let dimension = board.dimension();
        let mut positions = vec![(0u8, 0u8); board.layout().len()];
        for (i, &tile) in board.layout().iter().enumerate() {
            positions[tile as usize] = ((i % dimension) as u8, (i / dimension) as u8);
        }
        GoalBoard { board, positions }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Termination check: structural equality against the goal.
    pub fn is_goal(&self, board: &Board) -> bool {
        *board == self.board
    }

    /// Sum of per-tile Manhattan distances to the goal, the blank excluded.
    ///
    /// Admissible (every move fixes at most one unit of distance) and
    /// consistent (one move changes exactly one tile's distance by one).
    pub fn manhattan(&self, board: &Board) -> u32 {
        let dimension = board.dimension();
        let mut total = 0u32;
        for (i, &tile) in board.layout().iter().enumerate() {
            if tile == 0 {
                continue;
            }
            let (goal_col, goal_row) = self.positions[tile as usize];
            let col = i % dimension;
            let row = i / dimension;
            total += (col.abs_diff(goal_col as usize) + row.abs_diff(goal_row as usize)) as u32;
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Direction;

    #[test]
    fn test_standard_goal_layouts() {
        let goal = GoalBoard::standard(8, None).unwrap();
        assert_eq!(goal.board().layout(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);

        let front = GoalBoard::standard(8, Some(0)).unwrap();
        assert_eq!(front.board().layout(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);

        let middle = GoalBoard::standard(8, Some(4)).unwrap();
        assert_eq!(middle.board().layout(), &[1, 2, 3, 4, 0, 5, 6, 7, 8]);
    }

    #[test]
    fn test_standard_goal_rejects_bad_blank_index() {
        assert_eq!(
            GoalBoard::standard(8, Some(9)),
            Err(InputError::BlankIndexOutOfRange {
                index: 9,
                tile_count: 8
            })
        );
    }

    #[test]
    fn test_manhattan_is_zero_at_goal() {
        let goal = GoalBoard::standard(8, None).unwrap();
        assert!(goal.is_goal(goal.board()));
        assert_eq!(goal.manhattan(goal.board()), 0);
    }

    #[test]
    fn test_manhattan_known_value() {
        let goal = GoalBoard::standard(8, None).unwrap();
        // Tiles 5 and 8 are each one cell away from home.
        let board = Board::from_layout(&[1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
        assert_eq!(goal.manhattan(&board), 2);
    }

    #[test]
    fn test_manhattan_ignores_blank() {
        let goal = GoalBoard::standard(3, None).unwrap();
        // Blank and tile 3 swapped: only tile 3 counts.
        let board = Board::from_layout(&[1, 2, 0, 3]).unwrap();
        assert_eq!(goal.manhattan(&board), 1);
    }

    #[test]
    fn test_manhattan_consistency_over_neighbours() {
        let goal = GoalBoard::standard(8, None).unwrap();
        let start = Board::from_layout(&[1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();

        // Enumerate every board within four moves of the start and compare
        // each parent/child pair.
        let mut layer = vec![start];
        for _ in 0..4 {
            let mut next = Vec::new();
            for parent in &layer {
                let h_parent = goal.manhattan(parent);
                for direction in [
                    Direction::Left,
                    Direction::Right,
                    Direction::Up,
                    Direction::Down,
                ] {
                    if let Some(child) = parent.shifted(direction) {
                        let h_child = goal.manhattan(&child);
                        assert!(h_parent.abs_diff(h_child) <= 1);
                        next.push(child);
                    }
                }
            }
            layer = next;
        }
    }
}
