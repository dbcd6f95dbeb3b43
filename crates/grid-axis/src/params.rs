use serde::{Deserialize, Serialize};

/// Tuning knobs for [`crate::AxisSolver`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisSolverParams {
    /// Neighbouring sorted coordinates closer than
    /// `cluster_ratio * ideal_pitch` are merged into one cluster.
    ///
    /// Values in `0.45..=0.5` work well: large enough to absorb detector
    /// jitter, small enough to never merge adjacent slots.
    pub cluster_ratio: f64,
    /// Maximum number of relative indexings tried while widening the pitch.
    pub max_pitch_attempts: usize,
    /// Lower bound on the per-attempt pitch growth factor.
    pub min_widen_factor: f64,
    /// Regression denominators below this are treated as degenerate.
    pub degenerate_eps: f64,
}

impl Default for AxisSolverParams {
    fn default() -> Self {
        Self {
            cluster_ratio: 0.45,
            max_pitch_attempts: 10,
            min_widen_factor: 1.01,
            degenerate_eps: 1e-9,
        }
    }
}
