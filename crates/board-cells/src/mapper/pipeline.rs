use super::{GridCellMapperParams, GridCellMapping, MapError};
use board_cells_core::{Axis, BoardSize, Cell, PixelRect};
use grid_axis::{AxisSolution, AxisSolver};
use log::debug;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Assigns detected rectangles to `(row, col)` grid slots.
#[derive(Clone, Debug, Default)]
pub struct GridCellMapper {
    params: GridCellMapperParams,
}

impl GridCellMapper {
    pub fn new(params: GridCellMapperParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &GridCellMapperParams {
        &self.params
    }

    /// Map `rects` onto a `total_rows × total_cols` grid covering `board`.
    ///
    /// The x axis (board width, `total_cols`) and the y axis (board height,
    /// `total_rows`) are solved independently. The returned cells are
    /// index-aligned with `rects`.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, rects), fields(rects = rects.len()))
    )]
    pub fn identify(
        &self,
        board: BoardSize,
        total_rows: usize,
        total_cols: usize,
        rects: &[PixelRect],
    ) -> Result<GridCellMapping, MapError> {
        if rects.is_empty() {
            return Err(MapError::Empty);
        }

        let x = self.solve_axis(Axis::X, board, total_cols, rects)?;
        let y = self.solve_axis(Axis::Y, board, total_rows, rects)?;

        let cells: Vec<Cell> = rects
            .iter()
            .zip(x.indices.iter().zip(&y.indices))
            .map(|(&rect, (&col, &row))| Cell { rect, row, col })
            .collect();
        debug!(
            "mapped {} rectangles onto {total_rows}x{total_cols} grid ({} columns, {} rows occupied)",
            cells.len(),
            x.clusters.len(),
            y.clusters.len()
        );

        Ok(GridCellMapping {
            cells,
            total_rows,
            total_cols,
            x,
            y,
        })
    }

    fn solve_axis(
        &self,
        axis: Axis,
        board: BoardSize,
        slots: usize,
        rects: &[PixelRect],
    ) -> Result<AxisSolution, MapError> {
        let coords: Vec<f64> = rects.iter().map(|r| r.center_on(axis)).collect();
        AxisSolver::new(*self.params.for_axis(axis))
            .solve(board.length(axis), slots, &coords)
            .map_err(|source| MapError::Axis { axis, source })
    }
}

/// Map rectangles to cells with default parameters.
pub fn identify_grid_cells(
    board: BoardSize,
    total_rows: usize,
    total_cols: usize,
    rects: &[PixelRect],
) -> Result<Vec<Cell>, MapError> {
    GridCellMapper::default()
        .identify(board, total_rows, total_cols, rects)
        .map(|m| m.cells)
}
