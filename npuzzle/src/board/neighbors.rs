use arrayvec::ArrayVec;

/// Directions in which the blank can move, in the order neighbors are produced.
pub const LEFT: usize = 0;
pub const UP: usize  = 1;
pub const RIGHT: usize  = 2;
pub const DOWN: usize  = 3;

/// Returns cell number = index of cell with given (c, r) coordinates in the board with given dimension.
#[inline(always)] pub fn cell_nr(dimension: usize, c: usize, r: usize) -> usize { r * dimension + c }

/// Returns (row, col) coordinates of the cell with given number.
#[inline(always)] pub fn cell_coords(dimension: usize, cell: usize) -> (usize, usize) {
    (cell / dimension, cell % dimension)
}

/// Returns the cell reached from `cell` by moving in the direction `dir`, or `None` if that leaves the board.
pub fn neighbor_in(dimension: usize, cell: usize, dir: usize) -> Option<usize> {
    let (r, c) = cell_coords(dimension, cell);
    match dir {
        LEFT if c != 0 => Some(cell_nr(dimension, c-1, r)),
        UP if r != 0 => Some(cell_nr(dimension, c, r-1)),
        RIGHT if c+1 != dimension => Some(cell_nr(dimension, c+1, r)),
        DOWN if r+1 != dimension => Some(cell_nr(dimension, c, r+1)),
        _ => None
    }
}

/// Returns neighbors (cell numbers) of the given `cell`, in the order: left, up, right, down.
pub fn neighbors_of(dimension: usize, cell: usize) -> ArrayVec<usize, 4> {
    (LEFT..=DOWN).filter_map(|dir| neighbor_in(dimension, cell, dir)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::iter::FromIterator;

    #[test]
    fn test_cell_nrs() {
        assert_eq!(cell_nr(2, 0, 0), 0);
        assert_eq!(cell_nr(2, 1, 0), 1);
        assert_eq!(cell_nr(2, 0, 1), 2);
        assert_eq!(cell_nr(2, 1, 1), 3);
        assert_eq!(cell_coords(3, 5), (1, 2));
        assert_eq!(cell_coords(3, 6), (2, 0));
    }

    #[test]
    fn test_neighbors_3x3() {
        assert_eq!(neighbor_in(3, cell_nr(3, 0, 0), LEFT), None);
        assert_eq!(neighbor_in(3, cell_nr(3, 0, 0), UP), None);
        assert_eq!(neighbor_in(3, cell_nr(3, 0, 0), RIGHT), Some(cell_nr(3, 1, 0)));
        assert_eq!(neighbor_in(3, cell_nr(3, 0, 0), DOWN), Some(cell_nr(3, 0, 1)));
        let neighbors_of_00 = neighbors_of(3, cell_nr(3, 0, 0));
        assert_eq!(neighbors_of_00.len(), 2);
        assert_eq!(HashSet::<usize>::from_iter([cell_nr(3, 1, 0), cell_nr(3, 0, 1)]),
                   HashSet::from_iter(neighbors_of_00));

        assert_eq!(neighbors_of(3, cell_nr(3, 1, 0)).len(), 3);
        assert_eq!(neighbors_of(3, cell_nr(3, 1, 1)).as_slice(),
                   &[cell_nr(3, 0, 1), cell_nr(3, 1, 0), cell_nr(3, 2, 1), cell_nr(3, 1, 2)]);

        assert_eq!(neighbor_in(3, cell_nr(3, 2, 2), RIGHT), None);
        assert_eq!(neighbor_in(3, cell_nr(3, 2, 2), DOWN), None);
        assert_eq!(neighbors_of(3, cell_nr(3, 2, 2)).as_slice(), &[cell_nr(3, 1, 2), cell_nr(3, 2, 1)]);
    }
}
