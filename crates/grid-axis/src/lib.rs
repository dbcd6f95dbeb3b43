//! One-dimensional grid slot assignment.
//!
//! Given the pixel length of one board axis, the number of slots along it, and
//! a noisy set of observed coordinates (cell centers projected onto that
//! axis), [`AxisSolver`] decides which absolute slot `0..max_slots` every
//! observation occupies. Observations may be missing, duplicated, or only
//! cover part of the axis.
//!
//! The pipeline, per call:
//!
//! 1. sort and cluster observations closer than a fraction of the ideal pitch,
//! 2. index clusters relative to the first one, widening the pitch while the
//!    relative range overflows the slot count (with a gap-compression
//!    fallback),
//! 3. fit a line `coordinate = slope * index + intercept` through the clusters,
//! 4. pick the integer shift that best centers that line on the board.
//!
//! ```
//! use grid_axis::solve_axis;
//!
//! // 5 slots of 100 px, the fourth one is missing.
//! let slots = solve_axis(500.0, 5, &[10.0, 110.0, 210.0, 410.0]).unwrap();
//! assert_eq!(slots, vec![0, 1, 2, 4]);
//! ```

mod cluster;
mod error;
mod fit;
mod params;
mod relative;
mod solver;

pub use cluster::ClusterSummary;
pub use error::{AxisError, AxisErrorKind};
pub use fit::LineFit;
pub use params::AxisSolverParams;
pub use solver::{solve_axis, AxisSolution, AxisSolver};
