//! Shared helpers for Advent of Code 2024 puzzles: a character grid with word
//! search, a deterministic topological sorter, and small parsing and search
//! utilities.

pub mod error;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod math;
pub mod pattern;
pub mod search;
pub mod toposort;

pub use error::{Error, Result};
pub use geometry::{Point, Range};
pub use grid::Grid;
pub use toposort::TopologicalSorter;
