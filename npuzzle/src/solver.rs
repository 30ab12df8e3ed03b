use crate::board::Board;
use crate::board::heuristic::{Heuristic, HeuristicKind};
use crate::config::SolverConfig;
use crate::error::{Error, Result};
use crate::stats::{Limited, SearchAllStats, SearchStatsCollector};
use arrayvec::ArrayVec;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, info, trace};

/// Result of the search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The goal is reachable; holds boards of a shortest solution, from the initial board to the goal (inclusive).
    Solved(Vec<Board>),
    /// The goal is not reachable (the twin of the initial board has been solved).
    Unsolvable,
    /// The search has been cancelled by the expansion limit before deciding solvability.
    LimitReached
}

impl Outcome {
    /// Returns short name of the outcome: `solved`, `unsolvable` or `limit_reached`.
    pub fn name(&self) -> &'static str {
        match self {
            Outcome::Solved(_) => "solved",
            Outcome::Unsolvable => "unsolvable",
            Outcome::LimitReached => "limit_reached",
        }
    }
}

struct SearchNode {
    board: Board,
    /// Number of moves from the root.
    moves: u32,
    /// Index of predecessor in the arena, `None` for the root.
    previous: Option<usize>
}

/// Queue entry. Nodes with lower priority come first; among equal priorities, the earlier inserted
/// (with lower index in the arena) comes first.
#[derive(PartialEq, Eq)]
struct QueueEntry {
    priority: u32,
    node: usize
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed as BinaryHeap is a max-heap
        other.priority.cmp(&self.priority)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

enum Step {
    /// The goal has been popped, it is the node with given index.
    Goal(usize),
    Expanded,
    Cancelled,
    /// The queue is empty. Never happens for valid boards, as each node has a neighbor other than its predecessor.
    Exhausted
}

/// Single A* search. All created nodes are kept in the arena to reconstruct the path.
struct Search<'h, H: Heuristic> {
    name: &'static str,
    nodes: Vec<SearchNode>,
    queue: BinaryHeap<QueueEntry>,
    heuristic: &'h H,
    stats: SearchAllStats
}

impl<'h, H: Heuristic> Search<'h, H> {
    fn new(name: &'static str, root: Board, heuristic: &'h H) -> Self {
        let mut result = Self { name, nodes: Vec::new(), queue: BinaryHeap::new(), heuristic, stats: SearchAllStats::default() };
        result.push(root, 0, None);
        result
    }

    fn push(&mut self, board: Board, moves: u32, previous: Option<usize>) {
        let priority = moves + self.heuristic.value_for_board(&board);
        let node = self.nodes.len();
        self.nodes.push(SearchNode { board, moves, previous });
        self.queue.push(QueueEntry { priority, node });
    }

    /// Pops the node with the lowest priority and expands it (unless it is the goal).
    /// The neighbor equal to the board of the predecessor is skipped.
    fn step(&mut self, collector: &mut impl SearchStatsCollector) -> Step {
        let QueueEntry { priority, node } = match self.queue.pop() {
            Some(entry) => entry,
            None => return Step::Exhausted
        };
        let current = &self.nodes[node];
        if current.board.is_goal() { return Step::Goal(node); }
        if !collector.expanded() { return Step::Cancelled; }
        self.stats.expanded();
        trace!(search = self.name, moves = current.moves, priority, queued = self.queue.len(), "expand");
        let previous_board = current.previous.map(|p| &self.nodes[p].board);
        let moves = current.moves + 1;
        let neighbors: ArrayVec<Board, 4> = current.board.neighbors().into_iter()
            .filter(|neighbor| previous_board != Some(neighbor))
            .collect();
        for neighbor in neighbors {
            self.push(neighbor, moves, Some(node));
            self.stats.generated();
            collector.generated();
        }
        Step::Expanded
    }

    /// Returns boards on the path from the root to the node with given index.
    fn path(&self, mut node: usize) -> Vec<Board> {
        let mut result = Vec::with_capacity(self.nodes[node].moves as usize + 1);
        loop {
            let n = &self.nodes[node];
            result.push(n.board.clone());
            match n.previous {
                Some(previous) => node = previous,
                None => break
            }
        }
        result.reverse();
        result
    }
}

/// Finds a shortest solution of the sliding puzzle, or proves that there is none.
///
/// Two A* searches run in alternation, one expanded node at a time: from the initial board and from its twin.
/// Exactly one of them can reach the goal, and that one decides solvability.
pub struct Solver {
    outcome: Outcome,
    primary_stats: SearchAllStats,
    twin_stats: SearchAllStats
}

impl Solver {
    /// Solves `initial` using Manhattan heuristic and no expansion limit.
    pub fn new(initial: Board) -> Self {
        Self::with_config(initial, &SolverConfig::default())
    }

    /// Constructs the board from `grid` (see [`Board::new`]) and solves it.
    pub fn from_grid<R: AsRef<[i32]>>(grid: &[R]) -> Result<Self> {
        Ok(Self::new(Board::new(grid)?))
    }

    /// Solves `initial` using heuristic and expansion limit given by `config`.
    pub fn with_config(initial: Board, config: &SolverConfig) -> Self {
        debug!(heuristic = %config.heuristic, expansion_limit = ?config.expansion_limit, "solver configured");
        match config.expansion_limit {
            Some(limit) => Self::with_stats(initial, &config.heuristic, &mut Limited::with_limit(limit)),
            None => Self::with_stats(initial, &config.heuristic, &mut ())
        }
    }

    /// Solves `initial` using given `heuristic`. Collects statistics of both searches during search.
    /// The search is cancelled (and the outcome is [`Outcome::LimitReached`]) when `collector` refuses an expansion.
    pub fn with_stats<H: Heuristic>(initial: Board, heuristic: &H, collector: &mut impl SearchStatsCollector) -> Self {
        debug!(dimension = initial.dimension(), hamming = initial.hamming(), manhattan = initial.manhattan(), "search started");
        let twin = initial.twin();
        let mut primary = Search::new("primary", initial, heuristic);
        let mut twin = Search::new("twin", twin, heuristic);
        let outcome = loop {
            match primary.step(collector) {
                Step::Goal(node) => break Outcome::Solved(primary.path(node)),
                Step::Cancelled => break Outcome::LimitReached,
                Step::Exhausted => break Outcome::Unsolvable,
                Step::Expanded => {}
            }
            match twin.step(collector) {
                Step::Goal(_) | Step::Exhausted => break Outcome::Unsolvable,
                Step::Cancelled => break Outcome::LimitReached,
                Step::Expanded => {}
            }
        };
        let result = Self { outcome, primary_stats: primary.stats, twin_stats: twin.stats };
        info!(
            event = "solve_end",
            outcome = result.outcome.name(),
            moves = result.moves(),
            primary_expanded = result.primary_stats.expanded,
            twin_expanded = result.twin_stats.expanded,
            nodes = primary.nodes.len() + twin.nodes.len(),
        );
        result
    }

    /// Returns the outcome of the search.
    #[inline] pub fn outcome(&self) -> &Outcome { &self.outcome }

    /// Checks whether the goal is reachable from the initial board.
    /// Returns `false` also if the search has been cancelled by the expansion limit.
    #[inline] pub fn is_solvable(&self) -> bool { matches!(self.outcome, Outcome::Solved(_)) }

    /// Returns the minimal number of moves to solve the initial board, or `None` if it is not solvable.
    pub fn moves_to_solve(&self) -> Option<u32> {
        self.solution().map(|boards| boards.len() as u32 - 1)
    }

    /// Returns the minimal number of moves to solve the initial board, or -1 if it is not solvable.
    pub fn moves(&self) -> i32 {
        self.moves_to_solve().map_or(-1, |moves| moves as i32)
    }

    /// Returns boards of a shortest solution, from the initial board to the goal (inclusive),
    /// or `None` if the initial board is not solvable.
    pub fn solution(&self) -> Option<&[Board]> {
        match &self.outcome {
            Outcome::Solved(boards) => Some(boards),
            _ => None
        }
    }

    /// Returns the solution, see [`Self::solution`].
    pub fn into_solution(self) -> Option<Vec<Board>> {
        match self.outcome {
            Outcome::Solved(boards) => Some(boards),
            _ => None
        }
    }

    /// Returns statistics of the search from the initial board and the search from its twin.
    #[inline] pub fn stats(&self) -> (SearchAllStats, SearchAllStats) { (self.primary_stats, self.twin_stats) }
}

impl TryFrom<Option<Board>> for Solver {
    type Error = Error;

    fn try_from(initial: Option<Board>) -> Result<Self> {
        initial.map(Solver::new).ok_or(Error::InvalidArgument("initial board is absent"))
    }
}

/// Returns the number of moves needed to solve `initial` using `heuristic`, or `None` if it is not solvable.
pub fn moves_to_solve(initial: Board, heuristic: HeuristicKind) -> Option<u32> {
    Solver::with_config(initial, &SolverConfig::new().with_heuristic(heuristic)).moves_to_solve()
}
