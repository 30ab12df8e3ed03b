use crate::board::Board;
use crate::board::neighbors::cell_coords;
use serde::{Deserialize, Serialize};
use std::fmt;

impl Board {
    /// Iterates over `(cell, goal_cell)` pairs of all tiles except the blank.
    #[inline] fn tiles_with_goal_cells(&self) -> impl Iterator<Item=(usize, usize)> + '_ {
        self.tiles.iter().enumerate()
            .filter(|(_, t)| **t != 0)
            .map(|(cell, t)| (cell, *t as usize - 1))
    }

    /// Returns the number of tiles (the blank is not counted) that are not at their goal positions.
    pub fn hamming(&self) -> u32 {
        self.tiles_with_goal_cells().filter(|(cell, goal)| cell != goal).count() as u32
    }

    /// Returns the sum of Manhattan distances between tiles (the blank is not counted) and their goal positions.
    pub fn manhattan(&self) -> u32 {
        let n = self.dimension();
        self.tiles_with_goal_cells().map(|(cell, goal)| {
            let (r, c) = cell_coords(n, cell);
            let (goal_r, goal_c) = cell_coords(n, goal);
            (r.abs_diff(goal_r) + c.abs_diff(goal_c)) as u32
        }).sum()
    }

    /// Checks whether `self` is the goal board.
    #[inline] pub fn is_goal(&self) -> bool { self.hamming() == 0 }
}

/// Admissible estimation of the number of moves needed to reach the goal.
pub trait Heuristic {
    fn value_for_board(&self, board: &Board) -> u32;
}

/// Number of misplaced tiles.
#[derive(Default, Copy, Clone, Debug)]
pub struct Hamming;

impl Heuristic for Hamming {
    #[inline(always)] fn value_for_board(&self, board: &Board) -> u32 { board.hamming() }
}

/// Sum of Manhattan distances of tiles to their goal positions.
#[derive(Default, Copy, Clone, Debug)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline(always)] fn value_for_board(&self, board: &Board) -> u32 { board.manhattan() }
}

/// Heuristic chosen at runtime, for example by [`SolverConfig`](crate::config::SolverConfig).
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    Hamming,
    #[default]
    Manhattan
}

impl Heuristic for HeuristicKind {
    #[inline] fn value_for_board(&self, board: &Board) -> u32 {
        match self {
            HeuristicKind::Hamming => Hamming.value_for_board(board),
            HeuristicKind::Manhattan => Manhattan.value_for_board(board),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HeuristicKind::Hamming => "hamming",
            HeuristicKind::Manhattan => "manhattan",
        })
    }
}
