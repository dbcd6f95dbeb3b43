//! Two-axis cell mapping.
//!
//! Rectangle centers are split into x and y coordinates, each axis is solved
//! independently, and the slot pairs are zipped back onto the rectangles.

mod error;
mod params;
mod pipeline;
mod result;

pub use error::MapError;
pub use params::GridCellMapperParams;
pub use pipeline::{identify_grid_cells, GridCellMapper};
pub use result::{GridCellMapping, SlotCenter};
