//! Helpers shared by unit tests.

use crate::board::Board;
use std::collections::{HashMap, VecDeque};

/// Constructs a board from a literal grid.
pub fn board<const N: usize>(grid: &[[i32; N]]) -> Board {
    Board::new(grid).unwrap()
}

/// Returns exact number of moves to the goal for every board of given `dimension` that can reach the goal.
/// Uses breadth-first search from the goal, so it is feasible only for dimensions 2 and 3.
pub fn distances_from_goal(dimension: usize) -> HashMap<Board, u32> {
    let goal = Board::goal(dimension).unwrap();
    let mut distances = HashMap::new();
    let mut queue = VecDeque::new();
    distances.insert(goal.clone(), 0);
    queue.push_back(goal);
    while let Some(board) = queue.pop_front() {
        let distance = distances[&board] + 1;
        for neighbor in board.neighbors() {
            if !distances.contains_key(&neighbor) {
                distances.insert(neighbor.clone(), distance);
                queue.push_back(neighbor);
            }
        }
    }
    distances
}

/// Returns all permutations of `0..len`.
pub fn permutations(len: i32) -> Vec<Vec<i32>> {
    if len == 0 { return vec![Vec::new()]; }
    let mut result = Vec::new();
    for shorter in permutations(len - 1) {
        for position in 0..=shorter.len() {
            let mut p = shorter.clone();
            p.insert(position, len - 1);
            result.push(p);
        }
    }
    result
}
