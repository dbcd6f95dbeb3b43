use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis-aligned rectangle in pixel space.
///
/// `min` is the top-left corner, `max` the bottom-right one (exclusive, as
/// produced by bounding-rectangle extraction).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub min: Point2<i32>,
    pub max: Point2<i32>,
}

impl PixelRect {
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min: Point2::new(min_x, min_y),
            max: Point2::new(max_x, max_y),
        }
    }

    /// Rectangle of size `width × height` with its top-left corner at `(x, y)`.
    pub fn from_origin_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Midpoint of the two corners.
    pub fn center(&self) -> Point2<f64> {
        Point2::new(
            f64::from(self.min.x + self.max.x) / 2.0,
            f64::from(self.min.y + self.max.y) / 2.0,
        )
    }

    /// Center coordinate along a single axis.
    #[inline]
    pub fn center_on(&self, axis: Axis) -> f64 {
        let c = self.center();
        match axis {
            Axis::X => c.x,
            Axis::Y => c.y,
        }
    }
}

/// Pixel extent of the cropped board region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSize {
    pub width: u32,
    pub height: u32,
}

impl BoardSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Board length along `axis`, in pixels.
    #[inline]
    pub fn length(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => f64::from(self.width),
            Axis::Y => f64::from(self.height),
        }
    }
}

/// One spatial dimension of the board.
///
/// `X` runs horizontally and indexes columns, `Y` runs vertically and
/// indexes rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}
