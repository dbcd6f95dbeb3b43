//! Core types for puzzle-board cell detection.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any image type or contour extractor; detections arrive as
//! already-reduced pixel rectangles.

mod cell;
mod geometry;
mod logger;

pub use cell::Cell;
pub use geometry::{Axis, BoardSize, PixelRect};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
