use crate::cluster::{cluster_sorted, sorted_observations, ClusterSummary};
use crate::relative::{compress_gaps, slot_count, span, widen_to_fit};
use crate::{AxisError, AxisSolverParams, LineFit};
use log::debug;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Result of solving one axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisSolution {
    /// Absolute slot per input coordinate, in input order.
    pub indices: Vec<usize>,
    /// Clusters in ascending coordinate order.
    pub clusters: Vec<ClusterSummary>,
    /// Line through `(relative index, cluster mean)`.
    pub fit: LineFit,
    /// Offset added to relative indices to obtain absolute slots.
    pub shift: i64,
    /// Pitch used for the final relative indexing.
    pub pitch: f64,
    /// Number of slots on the axis.
    pub max_slots: usize,
    /// Whether the gap-compression fallback had to run.
    pub compressed: bool,
}

impl AxisSolution {
    /// Predicted pixel coordinate of the center of `slot`.
    ///
    /// Works for every slot on the axis, including ones nothing was observed
    /// in. With a flat fit (a single cluster) the prediction steps away from
    /// the observed cluster by the solver pitch instead.
    pub fn slot_center(&self, slot: usize) -> f64 {
        let rel = slot as f64 - self.shift as f64;
        if self.fit.is_flat() {
            self.fit.intercept + rel * self.pitch
        } else {
            self.fit.predict(rel)
        }
    }

    /// Slots that received at least one observation, ascending.
    pub fn occupied_slots(&self) -> Vec<usize> {
        self.clusters.iter().map(|c| c.slot).collect()
    }
}

/// Maps noisy 1D coordinates to absolute grid slots.
#[derive(Clone, Debug, Default)]
pub struct AxisSolver {
    params: AxisSolverParams,
}

impl AxisSolver {
    pub fn new(params: AxisSolverParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AxisSolverParams {
        &self.params
    }

    /// Assign each of `coords` to a slot in `0..max_slots` on an axis of
    /// `board_len` pixels.
    ///
    /// Fails with an input error for empty input, non-finite coordinates or a
    /// non-positive board length, and with [`AxisError::TooManyPositions`]
    /// when more distinct positions than slots are observed.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, coords), fields(n = coords.len()))
    )]
    pub fn solve(
        &self,
        board_len: f64,
        max_slots: usize,
        coords: &[f64],
    ) -> Result<AxisSolution, AxisError> {
        if coords.is_empty() {
            return Err(AxisError::Empty);
        }
        if !(board_len.is_finite() && board_len > 0.0) {
            return Err(AxisError::InvalidBoardLength { length: board_len });
        }
        if let Some(index) = coords.iter().position(|v| !v.is_finite()) {
            return Err(AxisError::NonFiniteCoordinate { index });
        }

        let obs = sorted_observations(coords);
        let ideal_pitch = board_len / max_slots as f64;
        let clusters = cluster_sorted(&obs, ideal_pitch * self.params.cluster_ratio);
        debug!(
            "{} coordinates -> {} clusters (ideal pitch {ideal_pitch:.2}, {max_slots} slots)",
            coords.len(),
            clusters.len()
        );
        if clusters.len() > max_slots {
            return Err(AxisError::TooManyPositions {
                clusters: clusters.len(),
                slots: max_slots,
            });
        }

        let means: Vec<f64> = clusters.iter().map(|c| c.mean).collect();
        let widened = widen_to_fit(
            &means,
            max_slots,
            ideal_pitch,
            self.params.max_pitch_attempts,
            self.params.min_widen_factor,
        );
        let pitch = widened.pitch;
        let attempts = widened.attempts;
        let mut relative = widened.indices;

        let compressed = span(&relative) > slot_count(max_slots);
        if compressed {
            let fits = compress_gaps(&mut relative, max_slots);
            debug_assert!(fits, "clusters <= slots, compression must converge");
        }

        let xs: Vec<f64> = relative.iter().map(|&r| r as f64).collect();
        let fit = LineFit::least_squares(&xs, &means, self.params.degenerate_eps);

        let min_rel = relative.first().copied().unwrap_or(0);
        let max_rel = relative.last().copied().unwrap_or(0);
        let shift = best_shift(&fit, min_rel, max_rel, max_slots, board_len);
        debug!(
            "fit slope {:.3} intercept {:.3}, pitch {pitch:.3} after {attempts} attempt(s), shift {shift}",
            fit.slope, fit.intercept
        );

        let last_slot = slot_count(max_slots) - 1;
        let mut indices = vec![0usize; coords.len()];
        let mut summaries = Vec::with_capacity(clusters.len());
        for (cluster, &rel) in clusters.iter().zip(&relative) {
            let slot = rel.saturating_add(shift).clamp(0, last_slot) as usize;
            for o in &obs[cluster.members.clone()] {
                indices[o.original_index] = slot;
            }
            summaries.push(ClusterSummary {
                mean: cluster.mean,
                len: cluster.members.len(),
                slot,
            });
        }

        Ok(AxisSolution {
            indices,
            clusters: summaries,
            fit,
            shift,
            pitch,
            max_slots,
            compressed,
        })
    }
}

/// Shift in `[-min_rel, max_slots - 1 - max_rel]` that puts the fitted line's
/// grid center closest to the board center. The smallest shift wins ties; an
/// empty range falls back to `-min_rel`.
///
/// The error is the absolute value of a line in the shift, so only the range
/// start and the integers around the line's root can be the first minimum.
fn best_shift(
    fit: &LineFit,
    min_rel: i64,
    max_rel: i64,
    max_slots: usize,
    board_len: f64,
) -> i64 {
    let lo = -min_rel;
    let hi = slot_count(max_slots) - 1 - max_rel;
    if hi < lo {
        return lo;
    }
    let grid_center = (max_slots as f64 - 1.0) / 2.0;
    let board_center = board_len / 2.0;
    let error = |s: i64| (fit.predict(grid_center - s as f64) - board_center).abs();

    let mut candidates = vec![lo];
    if !fit.is_flat() {
        let floor = (grid_center - (board_center - fit.intercept) / fit.slope).floor();
        if floor.is_finite() {
            candidates.extend([floor, floor + 1.0].map(|s| (s as i64).clamp(lo, hi)));
        }
    }

    let mut best: Option<(i64, f64)> = None;
    for s in candidates {
        let err = error(s);
        if best.is_none_or(|(bs, e)| err < e || (err == e && s < bs)) {
            best = Some((s, err));
        }
    }
    best.map_or(lo, |(s, _)| s)
}

/// Solve one axis with default parameters and return only the slots.
pub fn solve_axis(
    board_len: f64,
    max_slots: usize,
    coords: &[f64],
) -> Result<Vec<usize>, AxisError> {
    AxisSolver::default()
        .solve(board_len, max_slots, coords)
        .map(|s| s.indices)
}
