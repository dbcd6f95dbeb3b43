use board_cells_core::Axis;
use grid_axis::AxisSolverParams;
use serde::{Deserialize, Serialize};

/// Configuration for [`super::GridCellMapper`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridCellMapperParams {
    /// Solver parameters for the horizontal axis (columns).
    pub columns: AxisSolverParams,
    /// Solver parameters for the vertical axis (rows).
    pub rows: AxisSolverParams,
}

impl GridCellMapperParams {
    /// Same solver parameters on both axes.
    pub fn uniform(axis: AxisSolverParams) -> Self {
        Self {
            columns: axis,
            rows: axis,
        }
    }

    pub fn for_axis(&self, axis: Axis) -> &AxisSolverParams {
        match axis {
            Axis::X => &self.columns,
            Axis::Y => &self.rows,
        }
    }
}
