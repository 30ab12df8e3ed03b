//! Solver configuration.
//!
//! Load configuration from TOML string:
//!
//! ```
//! use npuzzle::config::SolverConfig;
//! use npuzzle::board::heuristic::HeuristicKind;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     heuristic = "hamming"
//!     expansion_limit = 100000
//! "#).unwrap();
//!
//! assert_eq!(config.heuristic, HeuristicKind::Hamming);
//! assert_eq!(config.expansion_limit, Some(100000));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use npuzzle::config::SolverConfig;
//!
//! let config = SolverConfig::load("solver.toml").unwrap_or_default();
//! ```

use crate::board::heuristic::HeuristicKind;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters of [`Solver`](crate::solver::Solver).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Heuristic added to the number of moves to get the priority of a search node.
    #[serde(default)]
    pub heuristic: HeuristicKind,

    /// Maximal total number of nodes expanded by both searches, `None` (default) for no limit.
    #[serde(default)]
    pub expansion_limit: Option<u64>,
}

impl SolverConfig {
    /// Creates a new default configuration: Manhattan heuristic, no expansion limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_expansion_limit(mut self, limit: u64) -> Self {
        self.expansion_limit = Some(limit);
        self
    }
}
