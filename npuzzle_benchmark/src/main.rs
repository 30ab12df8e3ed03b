#![doc = include_str!("../README.md")]

use npuzzle::board::Board;
use npuzzle::board::heuristic::HeuristicKind;
use npuzzle::config::SolverConfig;
use npuzzle::error::{ConfigError, InvalidConfiguration};
use npuzzle::solver::{Outcome, Solver};
use npuzzle::stats::SearchAllStats;
use cpu_time::ProcessTime;
use fsum::FSum;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Expansion limit used by the "limited" case if the configuration does not give one.
const DEFAULT_EXPANSION_LIMIT: u64 = 100_000;

struct TestBoardSolution {
    who_solved: String,
    moves_to_solve: Option<u32>
}

/// Board to be tested.
struct TestBoard {
    board: Board,
    solution: Option<TestBoardSolution>
}

impl TestBoard {
    pub fn new(board: Board) -> Self { Self{ board, solution: None } }
}

struct Test {
    goal: Board,
    test_boards: Vec<TestBoard>,
    config: SolverConfig,
    store_details: bool
}

// https://en.wikipedia.org/wiki/Algorithms_for_calculating_variance
fn sdev(sum: u64, sqrsum: u64, n: u64) -> f64 {
    if n < 2 { return 0.0; }
    let sum = sum as f64;
    ((sqrsum as f64 - sum * sum / n as f64) / (n-1) as f64).sqrt()
}

impl Test {
    fn new(dimension: usize, config: SolverConfig) -> Result<Self, InvalidConfiguration> {
        Ok(Self {
            goal: Board::goal(dimension)?,
            test_boards: Vec::new(),
            config,
            store_details: false
        })
    }

    fn print_heuristic_stats(&self) {
        let n = self.test_boards.len() as u64;
        let (mut hamming, mut hamming_sqr, mut manhattan, mut manhattan_sqr) = (0u64, 0u64, 0u64, 0u64);
        for test in &self.test_boards {
            let h = test.board.hamming() as u64;
            let m = test.board.manhattan() as u64;
            hamming += h; hamming_sqr += h*h;
            manhattan += m; manhattan_sqr += m*m;
        }
        println!("{} test boards: hamming {:.2} (sdev {:.2}), manhattan {:.2} (sdev {:.2}).",
                 n, hamming as f64 / n as f64, sdev(hamming, hamming_sqr, n),
                 manhattan as f64 / n as f64, sdev(manhattan, manhattan_sqr, n));
    }

    /// Returns random solvable board, reached from the goal by a random walk of the blank.
    fn rand_board(&self, rng: &mut ChaCha8Rng) -> Board {
        let mut board = self.goal.clone();
        let mut previous: Option<Board> = None; // to: (1) do not undo moves; (2) randomized number of moves made
        for _ in 0..1000 {
            let neighbors = board.neighbors();
            let Some(next) = neighbors.choose(rng) else { break };
            if previous.as_ref() == Some(next) { continue; }
            previous = Some(std::mem::replace(&mut board, next.clone()));
        }
        board
    }

    fn add_test_board(&mut self, board: Board) {
        self.test_boards.push(TestBoard::new(board));
    }

    /// Adds `how_many` random boards, every second of them unsolvable.
    fn add_random_test_boards(&mut self, rng: &mut ChaCha8Rng, how_many: usize) {
        for i in 0..how_many {
            let board = self.rand_board(rng);
            self.add_test_board(if i % 2 == 0 { board } else { board.twin() });
        }
    }

    /// Parses a board given by its dimension followed by tiles in row-major order.
    /// Boards of dimension other than the goal's are rejected.
    fn parse_test_board(&self, line: &str) -> Result<Board, String> {
        let values: Vec<i32> = line.split_whitespace().map(str::parse::<i32>).collect::<Result<_, _>>().map_err(|e| e.to_string())?;
        let dimension = match values.first() {
            Some(&d) if d >= 0 => d as usize,
            _ => return Err("missing dimension".to_owned())
        };
        if dimension != self.goal.dimension() {
            return Err(format!("dimension {} differs from tested {}", dimension, self.goal.dimension()));
        }
        Board::from_row_major(dimension, &values[1..]).map_err(|e| e.to_string())
    }

    /// Adds boards listed in the file, one per line: dimension followed by tiles in row-major order.
    /// Returns the number of added boards.
    fn add_test_boards_from_file(&mut self, file_name: &str) -> io::Result<usize> {
        let f = BufReader::new(File::open(file_name)?);
        let mut added = 0;
        for (line_nr, line) in f.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() { continue; }
            match self.parse_test_board(&line) {
                Ok(board) => { self.add_test_board(board); added += 1; }
                Err(e) => warn!(file = file_name, line = line_nr + 1, "skipping board: {}", e)
            }
        }
        Ok(added)
    }

    fn create_file(&self, name: &str) -> io::Result<(File, Option<File>)> {
        let file_name = format!("{}x{}_{}.csv", self.goal.dimension(), self.goal.dimension(), name.replace(' ', "_"));
        println!("{}", file_name);
        let mut file = File::create(&file_name)?;
        writeln!(file, "method,heuristic,expansion_limit,\
                        boards,solved,unsolvable,limit_reached,moves_avg,\
                        expanded,expanded_per_board,expanded_per_board_sdev,\
                        generated,time_per_board")?;
        if self.store_details {
            let mut file_details = File::create(format!("details_{}", file_name))?;
            writeln!(file_details, "board_index,outcome,moves,primary_expanded,twin_expanded,time")?;
            Ok((file, Some(file_details)))
        } else {
            Ok((file, None))
        }
    }

    fn test_solver(&mut self, name: &str, heuristic: HeuristicKind, expansion_limit: Option<u64>) -> io::Result<()> {
        let (mut file, mut file_details) = self.create_file(name)?;
        let config = SolverConfig { heuristic, expansion_limit };
        let mut total_visits = SearchAllStats::default();
        let mut total_expanded_sqr = 0;
        let mut total_seconds = FSum::new();
        let mut total_moves = 0u64;
        let mut outcomes = HashMap::<&'static str, usize>::new();
        for (board_idx, test) in self.test_boards.iter_mut().enumerate() {
            let start_moment = ProcessTime::try_now()?;
            let solver = Solver::with_config(test.board.clone(), &config);
            let seconds = start_moment.try_elapsed()?.as_secs_f64();
            let (primary, twin) = solver.stats();
            let mut visits = primary;
            visits += twin;
            total_visits += visits;
            total_expanded_sqr += visits.expanded * visits.expanded;
            total_seconds += seconds;
            *outcomes.entry(solver.outcome().name()).or_default() += 1;
            let ans = solver.moves_to_solve();
            total_moves += ans.unwrap_or(0) as u64;
            if solver.outcome() != &Outcome::LimitReached {
                if let Some(ref solution) = test.solution {
                    if ans != solution.moves_to_solve {
                        warn!("{}: wrong answer given for board {:?}: {:?} (got) != {:?} (by {})",
                              name, test.board, ans, solution.moves_to_solve, solution.who_solved);
                    }
                } else {
                    test.solution = Some(TestBoardSolution{who_solved: name.to_owned(), moves_to_solve: ans});
                }
            }
            if let Some(ref mut file_details) = file_details {
                writeln!(file_details, "{},{},{},{},{},{}", board_idx, solver.outcome().name(), solver.moves(),
                         primary.expanded, twin.expanded, seconds)?;
            }
        }
        let boards = self.test_boards.len();
        let solved = outcomes.get("solved").copied().unwrap_or(0);
        let seconds_per_board = total_seconds.value() / boards as f64;
        println!("  {} solved, {} unsolvable, {} cancelled,",
                 solved, outcomes.get("unsolvable").copied().unwrap_or(0), outcomes.get("limit_reached").copied().unwrap_or(0));
        println!("  {:.2} moves/solved case, {:.0} nodes/case expanded, {} sec/case.",
                 total_moves as f64 / solved.max(1) as f64,
                 total_visits.expanded as f64 / boards as f64,
                 seconds_per_board);
        writeln!(file, "{},{},{},{},{},{},{},{},{},{},{},{},{}",
                 name, heuristic, expansion_limit.map_or(String::new(), |l| l.to_string()),
                 boards, solved,
                 outcomes.get("unsolvable").copied().unwrap_or(0),
                 outcomes.get("limit_reached").copied().unwrap_or(0),
                 total_moves as f64 / solved.max(1) as f64,
                 total_visits.expanded, total_visits.expanded as f64 / boards as f64,
                 sdev(total_visits.expanded, total_expanded_sqr, boards as u64),
                 total_visits.generated, seconds_per_board)?;
        Ok(())
    }
}

enum Args {
    Run(HashMap<String, bool>),
    Help(Vec<String>)
}

impl Args {
    fn new() -> Self {
        let args: HashMap<String, bool> = env::args().skip(1).map(|s| (s, false)).collect();
        if args.is_empty() { Self::Help(Vec::new()) } else { Self::Run(args) }
    }

    fn case(&mut self, s: &str) -> bool {
        match self {
            &mut Self::Run(ref mut set) => {
                if let Some(used) = set.get_mut(s) {
                    *used = true;
                    info!("---=== run {} ===---", s);
                    true
                } else { false }
            }
            &mut Self::Help(ref mut v) => { v.push(s.to_string()); false }
        }
    }
}

impl Drop for Args {
    fn drop(&mut self) {
        match self {
            Self::Run(ref set) => {
                for (k, used) in set {
                    if !used { warn!("Unrecognized argument: {}", k); }
                }
            }
            Self::Help(ref v) => {
                println!("Acceptable arguments:");
                for a in v { println!(" {}", a); }
            }
        }
    }
}

fn load_config() -> SolverConfig {
    match SolverConfig::load("solver.toml") {
        Ok(config) => { info!(?config, "configuration loaded from solver.toml"); config }
        Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => SolverConfig::default(),
        Err(e) => { warn!("{}, default configuration is used", e); SolverConfig::default() }
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,npuzzle=warn")))
        .init();

    let mut args = Args::new();

    let mut test = match Test::new(3, load_config()) {
        Ok(test) => test,
        Err(e) => return Err(io::Error::new(io::ErrorKind::InvalidInput, e))
    };
    test.add_random_test_boards(&mut ChaCha8Rng::seed_from_u64(123), 200);
    match test.add_test_boards_from_file("boards.txt") {
        Ok(added) => info!(added, "boards loaded from boards.txt"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => warn!("cannot read boards.txt: {}", e)
    }

    test.store_details = test.test_boards.len() <= 1000;

    test.print_heuristic_stats();

    if args.case("manhattan") {
        test.test_solver("manhattan", HeuristicKind::Manhattan, None)?;
    }
    if args.case("hamming") {
        test.test_solver("hamming", HeuristicKind::Hamming, None)?;
    }
    if args.case("limited") {
        let limit = test.config.expansion_limit.unwrap_or(DEFAULT_EXPANSION_LIMIT);
        test.test_solver(&format!("limited {}", limit), test.config.heuristic, Some(limit))?;
    }
    Ok(())
}
