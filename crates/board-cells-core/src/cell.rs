use crate::PixelRect;
use serde::{Deserialize, Serialize};

/// A detected rectangle together with the grid slot it occupies.
///
/// `row` indexes the vertical axis, `col` the horizontal one; both are
/// zero-based and always lie inside the target grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub rect: PixelRect,
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Slot as `(row, col)`.
    #[inline]
    pub fn slot(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}
