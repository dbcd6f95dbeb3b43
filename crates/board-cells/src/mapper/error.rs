use board_cells_core::Axis;
use grid_axis::{AxisError, AxisErrorKind};

/// Errors returned by the cell mapper.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MapError {
    #[error("observed rectangles are empty")]
    Empty,
    #[error("{axis}-axis identification failed: {source}")]
    Axis {
        axis: Axis,
        #[source]
        source: AxisError,
    },
}

impl MapError {
    /// Input vs. overflow classification, looking through axis failures.
    pub fn kind(&self) -> AxisErrorKind {
        match self {
            MapError::Empty => AxisErrorKind::Input,
            MapError::Axis { source, .. } => source.kind(),
        }
    }

    /// Axis that failed, if the failure came from a solver.
    pub fn axis(&self) -> Option<Axis> {
        match self {
            MapError::Empty => None,
            MapError::Axis { axis, .. } => Some(*axis),
        }
    }
}
