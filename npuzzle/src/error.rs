//! Error types of the crate.

use thiserror::Error;

/// Reasons for rejecting a grid passed to [`Board::new`](crate::board::Board::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidConfiguration {
    /// The number of rows is not in range `MIN_DIMENSION..=MAX_DIMENSION`.
    /// An absent (empty) grid is reported with dimension 0.
    #[error("board dimension {0} is not in range 2..128")]
    Dimension(usize),

    /// The row has a different number of tiles than the number of rows.
    #[error("row {row} has {len} tiles, but {expected} are expected")]
    RowLength { row: usize, len: usize, expected: usize },

    /// The tile value is negative or not less than the number of cells.
    #[error("tile {value} at ({row}, {col}) is not in range 0..{limit}")]
    OutOfRange { row: usize, col: usize, value: i32, limit: usize },

    /// The tile value occurs more than once.
    #[error("tile {value} at ({row}, {col}) is repeated")]
    Repeated { row: usize, col: usize, value: i32 },

    /// The grid does not contain exactly one blank (0).
    ///
    /// [`Board::new`](crate::board::Board::new) checks ranges and repetitions first, and a grid passing them
    /// is a permutation of `0..n*n`, so a missing blank is reported as [`Self::OutOfRange`]
    /// and a repeated one as [`Self::Repeated`]; this variant is never returned by it.
    #[error("there must be exactly one blank, found {0}")]
    BlankCount(usize),
}

/// Main error type of the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The grid does not describe a valid board.
    #[error("invalid board configuration: {0}")]
    InvalidConfiguration(#[from] InvalidConfiguration),

    /// The solver was given no board.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Result type alias for the operations of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error of loading [`SolverConfig`](crate::config::SolverConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
