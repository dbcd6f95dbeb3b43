//! Puzzle level data.
//!
//! The puzzle service describes a board as text: one line per row, cells
//! separated by single spaces, followed by a blank line and metadata that is
//! not part of the grid.

use log::warn;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelDataError {
    #[error("level data contains no grid rows")]
    Empty,
}

/// Board tokens parsed from level data, row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleGrid {
    cells: Vec<Vec<String>>,
}

impl PuzzleGrid {
    /// Parse the grid part of a level data string.
    pub fn from_level_data(data: &str) -> Result<Self, LevelDataError> {
        let grid_part = data.split("\n\n").next().unwrap_or_default();

        let mut cells: Vec<Vec<String>> = grid_part
            .split('\n')
            .map(|line| line.trim_end_matches('\r'))
            .map(|line| line.split(' ').map(str::to_owned).collect())
            .collect();
        while cells
            .last()
            .is_some_and(|row| row.iter().all(String::is_empty))
        {
            cells.pop();
        }
        if cells.is_empty() {
            return Err(LevelDataError::Empty);
        }

        let width = cells[0].len();
        if let Some((i, row)) = cells.iter().enumerate().find(|(_, r)| r.len() != width) {
            warn!(
                "level data row {i} has {} cells, first row has {width}",
                row.len()
            );
        }

        Ok(Self { cells })
    }

    /// Number of grid rows.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of grid columns, taken from the first row.
    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Token at `(row, col)`, if present.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col).map(String::as_str)
    }

    pub fn row_tokens(&self) -> impl Iterator<Item = &[String]> {
        self.cells.iter().map(Vec::as_slice)
    }
}

impl FromStr for PuzzleGrid {
    type Err = LevelDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_level_data(s)
    }
}
