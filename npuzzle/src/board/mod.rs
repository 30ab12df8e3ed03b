//! Immutable configuration of the n x n sliding puzzle.

pub mod heuristic;
pub mod neighbors;

use crate::error::InvalidConfiguration;
use arrayvec::ArrayVec;
use neighbors::{cell_coords, cell_nr, neighbors_of};
use std::fmt;

/// The smallest supported board dimension.
pub const MIN_DIMENSION: usize = 2;

/// The largest supported board dimension.
pub const MAX_DIMENSION: usize = 127;

/// Board state: dimension `n` and tiles `0..n*n` (`0` is the blank) stored row by row.
///
/// Two boards are equal iff they have the same dimension and the same tiles in every cell.
/// Boards are never modified after construction; moving the blank always produces a new board.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    dimension: u8,

    /// Indexed by cell numbers, gives tiles that occupy given board cell.
    tiles: Box<[u16]>,

    // Index of blank (to speed up operations).
    blank: usize
}

impl Board {
    /// Constructs a board from `grid`, where `grid[row][col]` is the tile at `(row, col)`.
    ///
    /// The grid must be square with dimension in range [`MIN_DIMENSION`]`..=`[`MAX_DIMENSION`]
    /// and contain every value of `0..n*n` exactly once.
    pub fn new<R: AsRef<[i32]>>(grid: &[R]) -> Result<Self, InvalidConfiguration> {
        let n = grid.len();
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&n) {
            return Err(InvalidConfiguration::Dimension(n));
        }
        let cells = n * n;
        let mut seen = vec![false; cells];
        let mut tiles = Vec::with_capacity(cells);
        let mut blank = 0;
        for (row, values) in grid.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != n {
                return Err(InvalidConfiguration::RowLength { row, len: values.len(), expected: n });
            }
            for (col, &value) in values.iter().enumerate() {
                let tile = usize::try_from(value).ok()
                    .filter(|tile| *tile < cells)
                    .ok_or(InvalidConfiguration::OutOfRange { row, col, value, limit: cells })?;
                if std::mem::replace(&mut seen[tile], true) {
                    return Err(InvalidConfiguration::Repeated { row, col, value });
                }
                if tile == 0 { blank = tiles.len(); }
                tiles.push(tile as u16);
            }
        }
        // n*n distinct values of 0..n*n, so exactly one blank
        Ok(Self { dimension: n as u8, tiles: tiles.into_boxed_slice(), blank })
    }

    /// Constructs a board of given `dimension` from its tiles listed row by row.
    pub fn from_row_major(dimension: usize, tiles: &[i32]) -> Result<Self, InvalidConfiguration> {
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
            return Err(InvalidConfiguration::Dimension(dimension));
        }
        let rows: Vec<&[i32]> = tiles.chunks(dimension).collect();
        if rows.len() != dimension {
            return Err(InvalidConfiguration::RowLength {
                row: rows.len().min(dimension),
                len: rows.get(dimension).map_or(0, |r| r.len()),
                expected: dimension
            });
        }
        Self::new(&rows)
    }

    /// Constructs goal board with given `dimension`: tiles `1, 2, ..., n*n-1` in row-major order, then the blank.
    pub fn goal(dimension: usize) -> Result<Self, InvalidConfiguration> {
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
            return Err(InvalidConfiguration::Dimension(dimension));
        }
        let cells = dimension * dimension;
        let tiles = (1..cells).chain(std::iter::once(0)).map(|t| t as u16).collect();
        Ok(Self { dimension: dimension as u8, tiles, blank: cells - 1 })
    }

    /// Returns board dimension `n`.
    #[inline] pub fn dimension(&self) -> usize { self.dimension as usize }

    /// Returns the tile at `(row, col)`, `0` for the blank.
    ///
    /// # Panics
    /// Panics if `row` or `col` is not less than [`Self::dimension`].
    #[inline] pub fn tile_at(&self, row: usize, col: usize) -> u16 {
        assert!(col < self.dimension(), "column {} is out of board", col);
        self.tiles[cell_nr(self.dimension(), col, row)]
    }

    /// Returns `(row, col)` of the blank.
    #[inline] pub fn blank_position(&self) -> (usize, usize) {
        cell_coords(self.dimension(), self.blank)
    }

    /// Returns tiles row by row, in the format accepted by [`Self::new`].
    pub fn to_grid(&self) -> Vec<Vec<i32>> {
        self.tiles.chunks(self.dimension()).map(|row| row.iter().map(|t| *t as i32).collect()).collect()
    }

    /// Returns a copy of `self` with the blank swapped with the tile at `new_blank` cell.
    fn with_blank_moved(&self, new_blank: usize) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, new_blank);
        Self { dimension: self.dimension, tiles, blank: new_blank }
    }

    /// Returns all boards reachable by a single move of the blank.
    ///
    /// The blank is moved (in order) left, up, right and down, skipping directions that leave the board,
    /// so the result contains 2 (corner), 3 (edge) or 4 (interior) boards.
    pub fn neighbors(&self) -> ArrayVec<Board, 4> {
        neighbors_of(self.dimension(), self.blank).into_iter()
            .map(|cell| self.with_blank_moved(cell))
            .collect()
    }

    /// Returns the board obtained by swapping the first (in row-major order) pair of
    /// horizontally adjacent tiles that are both not blank.
    ///
    /// Exactly one of `self` and `self.twin()` is solvable.
    pub fn twin(&self) -> Self {
        let n = self.dimension();
        let cell = (0..self.tiles.len() - 1)
            .find(|&i| (i + 1) % n != 0 && self.tiles[i] != 0 && self.tiles[i + 1] != 0)
            .expect("each row without the blank has two adjacent tiles");
        let mut tiles = self.tiles.clone();
        tiles.swap(cell, cell + 1);
        Self { dimension: self.dimension, tiles, blank: self.blank }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.dimension)?;
        for row in self.tiles.chunks(self.dimension()) {
            for tile in row {
                write!(f, "{:2} ", tile)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board").field("tiles", &self.to_grid()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{board, distances_from_goal, permutations};

    #[test]
    fn test_new_and_tile_at() {
        let b = board(&[[8, 1, 3], [4, 0, 2], [7, 6, 5]]);
        assert_eq!(b.dimension(), 3);
        assert_eq!(b.tile_at(0, 0), 8);
        assert_eq!(b.tile_at(0, 2), 3);
        assert_eq!(b.tile_at(1, 1), 0);
        assert_eq!(b.tile_at(2, 1), 6);
        assert_eq!(b.blank_position(), (1, 1));
        assert_eq!(b.to_grid(), vec![vec![8, 1, 3], vec![4, 0, 2], vec![7, 6, 5]]);
        assert_eq!(Board::new(&b.to_grid()), Ok(b));
    }

    #[test]
    fn test_invalid_configurations() {
        assert_eq!(Board::new::<Vec<i32>>(&[]), Err(InvalidConfiguration::Dimension(0)));
        assert_eq!(Board::new(&[[0]]), Err(InvalidConfiguration::Dimension(1)));
        assert_eq!(Board::new(&vec![vec![0; 128]; 128]), Err(InvalidConfiguration::Dimension(128)));
        assert_eq!(Board::new(&[vec![1, 2], vec![3]]),
                   Err(InvalidConfiguration::RowLength { row: 1, len: 1, expected: 2 }));
        assert_eq!(Board::new(&[[1, 2], [3, 4]]),
                   Err(InvalidConfiguration::OutOfRange { row: 1, col: 1, value: 4, limit: 4 }));
        assert_eq!(Board::new(&[[1, -2], [3, 0]]),
                   Err(InvalidConfiguration::OutOfRange { row: 0, col: 1, value: -2, limit: 4 }));
        assert_eq!(Board::new(&[[1, 1], [3, 0]]),
                   Err(InvalidConfiguration::Repeated { row: 0, col: 1, value: 1 }));
        assert_eq!(Board::new(&[[0, 1], [0, 3]]),
                   Err(InvalidConfiguration::Repeated { row: 1, col: 0, value: 0 }));
    }

    #[test]
    fn test_wrong_blank_count_reported_by_permutation_checks() {
        assert_eq!(Board::from_row_major(3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]),
                   Err(InvalidConfiguration::OutOfRange { row: 2, col: 2, value: 9, limit: 9 }));
        assert_eq!(Board::from_row_major(3, &[1, 0, 3, 4, 0, 6, 7, 0, 8]),
                   Err(InvalidConfiguration::Repeated { row: 1, col: 1, value: 0 }));
    }

    #[test]
    fn test_from_row_major() {
        assert_eq!(Board::from_row_major(2, &[1, 2, 3, 0]), Board::goal(2));
        assert_eq!(Board::from_row_major(1, &[0]), Err(InvalidConfiguration::Dimension(1)));
        assert_eq!(Board::from_row_major(2, &[1, 2, 0]),
                   Err(InvalidConfiguration::RowLength { row: 1, len: 1, expected: 2 }));
        assert_eq!(Board::from_row_major(2, &[1, 2]),
                   Err(InvalidConfiguration::RowLength { row: 1, len: 0, expected: 2 }));
    }

    #[test]
    fn test_goal() {
        assert_eq!(Board::goal(3), Ok(board(&[[1, 2, 3], [4, 5, 6], [7, 8, 0]])));
        assert_eq!(Board::goal(4).map(|b| b.blank_position()), Ok((3, 3)));
        assert_eq!(Board::goal(128), Err(InvalidConfiguration::Dimension(128)));
        assert_eq!(Board::goal(MAX_DIMENSION).map(|b| b.tile_at(126, 125)), Ok(127 * 127 - 1));
    }

    #[test]
    fn test_equality() {
        let b = board(&[[1, 2], [0, 3]]);
        assert_eq!(b, b.clone());
        assert_ne!(b, board(&[[1, 2], [3, 0]]));
        assert_ne!(Board::goal(2).unwrap(), Board::goal(3).unwrap());
    }

    #[test]
    fn test_display() {
        let b = board(&[[8, 1, 3], [4, 0, 2], [7, 6, 5]]);
        assert_eq!(b.to_string(), "3\n 8  1  3 \n 4  0  2 \n 7  6  5 \n");
    }

    #[test]
    fn test_neighbors_of_interior_blank() {
        let b = board(&[[8, 1, 3], [4, 0, 2], [7, 6, 5]]);
        let neighbors = b.neighbors();
        assert_eq!(neighbors.as_slice(), &[
            board(&[[8, 1, 3], [0, 4, 2], [7, 6, 5]]),
            board(&[[8, 0, 3], [4, 1, 2], [7, 6, 5]]),
            board(&[[8, 1, 3], [4, 2, 0], [7, 6, 5]]),
            board(&[[8, 1, 3], [4, 6, 2], [7, 0, 5]]),
        ]);
        assert_eq!(b, board(&[[8, 1, 3], [4, 0, 2], [7, 6, 5]]));
    }

    #[test]
    fn test_neighbors_counts() {
        assert_eq!(board(&[[0, 1, 3], [4, 2, 5], [7, 8, 6]]).neighbors().len(), 2);
        assert_eq!(board(&[[1, 0, 3], [4, 2, 5], [7, 8, 6]]).neighbors().len(), 3);
        assert_eq!(Board::goal(4).unwrap().neighbors().len(), 2);
    }

    #[test]
    fn test_neighbors_differ_by_one_blank_swap() {
        for b in distances_from_goal(2).into_keys().chain(Board::goal(4)) {
            let neighbors = b.neighbors();
            assert!((2..=4).contains(&neighbors.len()));
            for n in neighbors {
                let differ: Vec<usize> = (0..b.tiles.len()).filter(|&i| b.tiles[i] != n.tiles[i]).collect();
                assert_eq!(differ, { let mut d = vec![b.blank, n.blank]; d.sort(); d });
                assert!(n.neighbors().contains(&b));
            }
        }
    }

    #[test]
    fn test_twin() {
        assert_eq!(board(&[[1, 2, 3], [4, 5, 6], [7, 8, 0]]).twin(), board(&[[2, 1, 3], [4, 5, 6], [7, 8, 0]]));
        assert_eq!(board(&[[0, 1, 3], [4, 2, 5], [7, 8, 6]]).twin(), board(&[[0, 3, 1], [4, 2, 5], [7, 8, 6]]));
        assert_eq!(board(&[[1, 0], [2, 3]]).twin(), board(&[[1, 0], [3, 2]]));
        assert_eq!(board(&[[1, 3, 0], [4, 2, 5], [7, 8, 6]]).twin(), board(&[[3, 1, 0], [4, 2, 5], [7, 8, 6]]));
        let b = board(&[[5, 0, 3], [4, 2, 1], [7, 8, 6]]);
        assert_eq!(b.twin().twin(), b);
    }

    #[test]
    fn test_twin_negates_solvability_2x2() {
        let solvable = distances_from_goal(2);
        assert_eq!(solvable.len(), 12);
        for tiles in permutations(4) {
            let b = Board::from_row_major(2, &tiles).unwrap();
            assert_ne!(solvable.contains_key(&b), solvable.contains_key(&b.twin()), "{}", b);
        }
    }

    #[test]
    fn test_twin_negates_solvability_3x3() {
        let solvable = distances_from_goal(3);
        assert_eq!(solvable.len(), 181440);
        // twin is an involution, so twins of solvable boards cover all unsolvable ones
        for b in solvable.keys() {
            assert!(!solvable.contains_key(&b.twin()), "{}", b);
        }
    }
}
