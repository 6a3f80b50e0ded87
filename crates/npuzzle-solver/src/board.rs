//! Board representation for sliding-tile puzzles.
//!
//! A board is a `dimension x dimension` grid holding a permutation of the
//! tile labels `0..=n`, where `0` is the blank. Boards are immutable values:
//! applying a move produces a new board, and two boards compare equal exactly
//! when their tile layouts match.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Direction the blank tile moves when a move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Column/row delta of the blank for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// The move that exactly undoes this one.
    pub fn inverse(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
            Direction::Up => "UP",
            Direction::Down => "DOWN",
        };
        write!(f, "{}", label)
    }
}

/// Errors raised while decoding an input layout into a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("layout is empty")]
    EmptyLayout,
    #[error("layout length {0} is not a perfect square")]
    NotSquare(usize),
    #[error("layout is not a permutation of 0..={0}")]
    NotPermutation(usize),
    #[error("tile count {0} exceeds the supported maximum of 255")]
    TooManyTiles(usize),
    #[error("blank goal index {index} out of range for {tile_count} tiles")]
    BlankIndexOutOfRange { index: usize, tile_count: usize },
}

/// A puzzle configuration.
///
/// Cells are stored in row-major order; cell `i` sits at column `i % dimension`
/// and row `i / dimension`. The blank cell index is cached so move generation
/// does not rescan the layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    dimension: usize,
    cells: Vec<u8>,
    blank: usize,
}

impl Board {
    /// Decode a row-major tile layout into a board.
    ///
    /// The layout must be a permutation of `0..=n` whose length `n + 1` is a
    /// perfect square.
    pub fn from_layout(layout: &[u8]) -> Result<Board, InputError> {
        if layout.is_empty() {
            return Err(InputError::EmptyLayout);
        }
        if layout.len() > u8::MAX as usize + 1 {
            return Err(InputError::TooManyTiles(layout.len() - 1));
        }

        let dimension = {
            let mut d = 0usize;
            while d * d < layout.len() {
                d += 1;
            }
            if d * d != layout.len() {
                return Err(InputError::NotSquare(layout.len()));
            }
            d
        };

        let mut seen = vec![false; layout.len()];
        for &tile in layout {
            let tile = tile as usize;
            if tile >= layout.len() || seen[tile] {
                return Err(InputError::NotPermutation(layout.len() - 1));
            }
            seen[tile] = true;
        }

        // Permutation check guarantees exactly one 0.
        let blank = layout.iter().position(|&t| t == 0).ok_or_else(|| {
            InputError::NotPermutation(layout.len() - 1)
        })?;

        Ok(Board {
            dimension,
            cells: layout.to_vec(),
            blank,
        })
    }

    /// Grid side length.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Count of numbered tiles (the blank excluded).
    pub fn tile_count(&self) -> usize {
        self.cells.len() - 1
    }

    /// Row-major tile layout; re-encodes the board exactly as it was decoded.
    pub fn layout(&self) -> &[u8] {
        &self.cells
    }

    /// `(col, row)` coordinate of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank % self.dimension, self.blank / self.dimension)
    }

    /// `(col, row)` coordinate of a tile, or `None` if the label is not on
    /// this board.
    pub fn position_of(&self, tile: u8) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&t| t == tile)
            .map(|i| (i % self.dimension, i / self.dimension))
    }

    /// Apply one blank move, producing the successor board.
    ///
    /// Returns `None` when the move would push the blank off the grid.
    pub fn shifted(&self, direction: Direction) -> Option<Board> {
        let (dc, dr) = direction.delta();
        let (col, row) = self.blank_position();
        let col = col as i32 + dc;
        let row = row as i32 + dr;
        if col < 0 || row < 0 || col >= self.dimension as i32 || row >= self.dimension as i32 {
            return None;
        }

        let target = row as usize * self.dimension + col as usize;
        let mut cells = self.cells.clone();
        cells.swap(self.blank, target);
        Some(Board {
            dimension: self.dimension,
            cells,
            blank: target,
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.dimension) {
            for &tile in row {
                write!(f, "{:3}", tile)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parity-based solvability check.
///
/// Every blank move is one transposition of the layout and changes the
/// taxicab distance of the blank by one, so a goal is reachable exactly when
/// the permutation parity between the two layouts matches the parity of the
/// blank's Manhattan displacement. Boards of different sizes never reach one
/// another, so a dimension mismatch is simply unsolvable.
pub fn is_solvable(initial: &Board, goal: &Board) -> bool {
    if initial.dimension != goal.dimension {
        return false;
    }

    let mut goal_index = vec![0usize; goal.cells.len()];
    for (i, &tile) in goal.cells.iter().enumerate() {
        goal_index[tile as usize] = i;
    }

    // Parity via cycle decomposition of the cell permutation.
    let permutation: Vec<usize> = initial
        .cells
        .iter()
        .map(|&tile| goal_index[tile as usize])
        .collect();
    let mut seen = vec![false; permutation.len()];
    let mut transpositions = 0usize;
    for start in 0..permutation.len() {
        if seen[start] {
            continue;
        }
        let mut cursor = start;
        let mut length = 0usize;
        while !seen[cursor] {
            seen[cursor] = true;
            cursor = permutation[cursor];
            length += 1;
        }
        transpositions += length - 1;
    }

    let (ic, ir) = initial.blank_position();
    let (gc, gr) = goal.blank_position();
    let blank_distance = ic.abs_diff(gc) + ir.abs_diff(gr);

    transpositions % 2 == blank_distance % 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_bijection(board: &Board) {
        let mut tiles: Vec<u8> = board.layout().to_vec();
        tiles.sort_unstable();
        let expected: Vec<u8> = (0..board.layout().len() as u8).collect();
        assert_eq!(tiles, expected);
        assert_eq!(board.position_of(0), Some(board.blank_position()));
    }

    #[test]
    fn test_decode_round_trip() {
        let layout = [1u8, 2, 3, 4, 0, 6, 7, 5, 8];
        let board = Board::from_layout(&layout).unwrap();
        assert_eq!(board.dimension(), 3);
        assert_eq!(board.tile_count(), 8);
        assert_eq!(board.layout(), &layout);
        assert_eq!(board.blank_position(), (1, 1));
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert_eq!(Board::from_layout(&[]), Err(InputError::EmptyLayout));
        assert_eq!(
            Board::from_layout(&[1, 2, 0]),
            Err(InputError::NotSquare(3))
        );
        assert_eq!(
            Board::from_layout(&[1, 1, 2, 0]),
            Err(InputError::NotPermutation(3))
        );
        // Labels outside 0..=n are not a permutation either.
        assert_eq!(
            Board::from_layout(&[1, 2, 3, 9]),
            Err(InputError::NotPermutation(3))
        );
    }

    #[test]
    fn test_shifted_swaps_blank_with_neighbour() {
        let board = Board::from_layout(&[0, 1, 2, 3]).unwrap();

        let right = board.shifted(Direction::Right).unwrap();
        assert_eq!(right.layout(), &[1, 0, 2, 3]);
        assert_eq!(right.blank_position(), (1, 0));

        let down = board.shifted(Direction::Down).unwrap();
        assert_eq!(down.layout(), &[2, 1, 0, 3]);
        assert_eq!(down.blank_position(), (0, 1));

        assert!(board.shifted(Direction::Left).is_none());
        assert!(board.shifted(Direction::Up).is_none());
    }

    #[test]
    fn test_moves_preserve_bijection() {
        let mut board = Board::from_layout(&[1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
        assert_bijection(&board);

        for direction in [
            Direction::Down,
            Direction::Right,
            Direction::Up,
            Direction::Up,
            Direction::Left,
            Direction::Left,
        ] {
            board = board.shifted(direction).unwrap();
            assert_bijection(&board);
        }
    }

    #[test]
    fn test_shifted_is_a_value_copy() {
        let board = Board::from_layout(&[1, 2, 3, 0]).unwrap();
        let child = board.shifted(Direction::Up).unwrap();
        assert_ne!(board, child);
        assert_eq!(board.layout(), &[1, 2, 3, 0]);
    }

    #[test]
    fn test_solvability_parity() {
        let goal = Board::from_layout(&[1, 2, 3, 4, 5, 6, 7, 8, 0]).unwrap();

        let solvable = Board::from_layout(&[1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
        assert!(is_solvable(&solvable, &goal));
        assert!(is_solvable(&goal, &goal));

        // A single tile swap flips parity.
        let swapped = Board::from_layout(&[2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        assert!(!is_solvable(&swapped, &goal));
    }

    #[test]
    fn test_solvability_accounts_for_blank_displacement() {
        // Same tile cyclic order, blank moved one cell: odd permutation
        // distance but odd blank distance, still solvable.
        let goal = Board::from_layout(&[1, 2, 3, 0]).unwrap();
        let initial = Board::from_layout(&[1, 2, 0, 3]).unwrap();
        assert!(is_solvable(&initial, &goal));

        let crossed = Board::from_layout(&[2, 1, 0, 3]).unwrap();
        assert!(!is_solvable(&crossed, &goal));
    }

    #[test]
    fn test_direction_serializes_as_uppercase_labels() {
        for (direction, label) in [
            (Direction::Left, "\"LEFT\""),
            (Direction::Right, "\"RIGHT\""),
            (Direction::Up, "\"UP\""),
            (Direction::Down, "\"DOWN\""),
        ] {
            assert_eq!(serde_json::to_string(&direction).unwrap(), label);
            assert_eq!(
                serde_json::from_str::<Direction>(label).unwrap(),
                direction
            );
            assert_eq!(format!("\"{}\"", direction), label);
        }
    }

    #[test]
    fn test_mismatched_dimensions_are_unsolvable() {
        let initial = Board::from_layout(&[1, 2, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        let goal = Board::from_layout(&[1, 2, 3, 0]).unwrap();
        assert!(!is_solvable(&initial, &goal));
        assert!(!is_solvable(&goal, &initial));
    }

    #[test]
    fn test_fifteen_puzzle_lloyd_swap_is_unsolvable() {
        let mut layout: Vec<u8> = (1..=15).chain([0]).collect();
        let goal = Board::from_layout(&layout).unwrap();
        layout.swap(13, 14);
        let lloyd = Board::from_layout(&layout).unwrap();
        assert!(!is_solvable(&lloyd, &goal));
    }
}
