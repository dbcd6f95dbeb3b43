use board_cells_core::{Axis, Cell};
use grid_axis::AxisSolution;
use log::warn;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Predicted pixel center of one grid slot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotCenter {
    pub row: usize,
    pub col: usize,
    pub center: Point2<f64>,
}

/// Output of a cell mapping run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridCellMapping {
    /// One cell per input rectangle, in input order.
    pub cells: Vec<Cell>,
    pub total_rows: usize,
    pub total_cols: usize,
    /// Horizontal axis solution (column slots).
    pub x: AxisSolution,
    /// Vertical axis solution (row slots).
    pub y: AxisSolution,
}

impl GridCellMapping {
    pub fn solution(&self, axis: Axis) -> &AxisSolution {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    /// Number of slots on the board, saturating for absurd dimensions.
    pub fn slot_count(&self) -> usize {
        self.total_rows.saturating_mul(self.total_cols)
    }

    /// Centers of every slot on the board, row-major, whether or not a
    /// rectangle was detected there.
    pub fn slot_centers(&self) -> Vec<SlotCenter> {
        let xs: Vec<f64> = (0..self.total_cols).map(|c| self.x.slot_center(c)).collect();
        let ys: Vec<f64> = (0..self.total_rows).map(|r| self.y.slot_center(r)).collect();

        let mut out = Vec::with_capacity(self.slot_count());
        for (row, &y) in ys.iter().enumerate() {
            for (col, &x) in xs.iter().enumerate() {
                out.push(SlotCenter {
                    row,
                    col,
                    center: Point2::new(x, y),
                });
            }
        }
        out
    }

    /// `occupancy()[row][col]` lists the input rectangles mapped to that slot.
    ///
    /// Cells outside the grid (only possible in hand-edited mappings) are
    /// skipped.
    pub fn occupancy(&self) -> Vec<Vec<Vec<usize>>> {
        let mut table = vec![vec![Vec::new(); self.total_cols]; self.total_rows];
        for (i, cell) in self.cells.iter().enumerate() {
            match table.get_mut(cell.row).and_then(|r| r.get_mut(cell.col)) {
                Some(hits) => hits.push(i),
                None => warn!(
                    "cell #{i} at ({}, {}) lies outside the {}x{} grid",
                    cell.row, cell.col, self.total_rows, self.total_cols
                ),
            }
        }
        table
    }

    /// Slots without any detection, row-major.
    pub fn missing_slots(&self) -> Vec<(usize, usize)> {
        let table = self.occupancy();
        let mut missing = Vec::new();
        for (row, cols) in table.iter().enumerate() {
            for (col, hits) in cols.iter().enumerate() {
                if hits.is_empty() {
                    missing.push((row, col));
                }
            }
        }
        missing
    }

    /// Whether two or more rectangles landed in the same slot.
    pub fn has_collisions(&self) -> bool {
        self.occupancy()
            .iter()
            .flatten()
            .any(|hits| hits.len() > 1)
    }
}
