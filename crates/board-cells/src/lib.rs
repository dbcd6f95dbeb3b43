//! Puzzle-board cell identification.
//!
//! An external detector crops the board and reports the bounding rectangles
//! of the cells it found. Those rectangles are noisy: some cells are missing,
//! some are reported twice, and the found set may not reach the board edges.
//! This crate assigns every rectangle its `(row, col)` slot in a board of
//! known dimensions.
//!
//! ## Quickstart
//!
//! ```
//! use board_cells::{identify_grid_cells, BoardSize, PixelRect};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let board = BoardSize::new(500, 500);
//! let rects = vec![
//!     PixelRect::from_origin_size(5, 5, 90, 90),
//!     PixelRect::from_origin_size(405, 205, 90, 90),
//! ];
//! let cells = identify_grid_cells(board, 5, 5, &rects)?;
//! assert_eq!((cells[1].row, cells[1].col), (2, 4));
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - [`GridCellMapper`]: per-axis solving and merge into [`Cell`]s.
//! - [`PuzzleGrid`]: grid dimensions from puzzle level data.
//! - [`CellDetectConfig`] / [`CellReport`]: JSON files used by the
//!   `board-cells` binary.
//! - [`axis`]: the underlying one-dimensional solver.

mod io;
mod level;
mod mapper;

pub use io::{CellDetectConfig, CellReport, CellsConfigError, CellsIoError};
pub use level::{LevelDataError, PuzzleGrid};
pub use mapper::{
    identify_grid_cells, GridCellMapper, GridCellMapperParams, GridCellMapping, MapError,
    SlotCenter,
};

pub use board_cells_core::{Axis, BoardSize, Cell, PixelRect};
pub use grid_axis as axis;
