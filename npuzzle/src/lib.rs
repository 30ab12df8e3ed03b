#![doc = include_str!("../README.md")]

pub mod board;
pub mod config;
pub mod error;
pub mod solver;
pub mod stats;

#[cfg(test)]
mod testing;
