//! Gap-based 1D clustering of sorted observations.
//!
//! Clusters are stored as contiguous ranges into the sorted observation
//! arena, so no observation is shared or aliased between clusters.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// One input coordinate, remembering where it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Observation {
    pub value: f64,
    pub original_index: usize,
}

/// A run of sorted observations that represent one physical grid line.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Cluster {
    pub members: Range<usize>,
    pub mean: f64,
}

/// Per-cluster outcome reported with an [`crate::AxisSolution`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    /// Mean coordinate of the members.
    pub mean: f64,
    /// Number of observations in the cluster.
    pub len: usize,
    /// Absolute slot shared by every member.
    pub slot: usize,
}

/// Pair coordinates with their input position and sort them ascending.
///
/// The sort is stable, so equal coordinates keep input order.
pub(crate) fn sorted_observations(coords: &[f64]) -> Vec<Observation> {
    let mut obs: Vec<Observation> = coords
        .iter()
        .enumerate()
        .map(|(original_index, &value)| Observation {
            value,
            original_index,
        })
        .collect();
    obs.sort_by(|a, b| a.value.total_cmp(&b.value));
    obs
}

/// Split sorted observations wherever the gap to the previous point is
/// `>= threshold`.
///
/// Returns an empty list for empty input; otherwise every observation belongs
/// to exactly one cluster and clusters are in ascending coordinate order.
pub(crate) fn cluster_sorted(obs: &[Observation], threshold: f64) -> Vec<Cluster> {
    let mut clusters = Vec::new();
    if obs.is_empty() {
        return clusters;
    }

    let mut start = 0;
    for i in 1..obs.len() {
        if obs[i].value - obs[i - 1].value >= threshold {
            clusters.push(make_cluster(obs, start..i));
            start = i;
        }
    }
    clusters.push(make_cluster(obs, start..obs.len()));
    clusters
}

fn make_cluster(obs: &[Observation], members: Range<usize>) -> Cluster {
    let slice = &obs[members.clone()];
    let sum: f64 = slice.iter().map(|o| o.value).sum();
    Cluster {
        mean: sum / slice.len() as f64,
        members,
    }
}
