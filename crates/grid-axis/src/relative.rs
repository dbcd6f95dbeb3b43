//! Relative cluster indexing: rounding against a pitch, adaptive widening and
//! the gap-compression fallback.

use log::{debug, warn};

/// Upper bound for a single relative index. Far outliers and tiny pitches
/// round to this instead of saturating, so span and shift arithmetic stays
/// inside `i64`.
pub(crate) const MAX_RELATIVE_INDEX: i64 = 1 << 53;

/// `max_slots` as a signed slot count, saturating at `i64::MAX`.
#[inline]
pub(crate) fn slot_count(max_slots: usize) -> i64 {
    i64::try_from(max_slots).unwrap_or(i64::MAX)
}

/// Index every cluster mean relative to the first one.
///
/// The first cluster gets 0; each next one gets
/// `round((mean - first) / pitch)` capped at [`MAX_RELATIVE_INDEX`], bumped
/// to `previous + 1` when rounding would not strictly increase it.
pub(crate) fn relative_indices(means: &[f64], pitch: f64) -> Vec<i64> {
    let mut indices: Vec<i64> = Vec::with_capacity(means.len());
    let Some(&base) = means.first() else {
        return indices;
    };

    for &mean in means {
        let ratio = ((mean - base) / pitch).round();
        let mut idx = ratio.min(MAX_RELATIVE_INDEX as f64) as i64;
        if let Some(&prev) = indices.last() {
            if idx <= prev {
                idx = prev.saturating_add(1);
            }
        }
        indices.push(idx);
    }
    indices
}

/// Number of slots covered by strictly increasing relative indices.
#[inline]
pub(crate) fn span(indices: &[i64]) -> i64 {
    match (indices.first(), indices.last()) {
        (Some(first), Some(last)) => last.saturating_sub(*first).saturating_add(1),
        _ => 0,
    }
}

/// Relative indexing after adaptive pitch widening.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Widened {
    pub indices: Vec<i64>,
    pub pitch: f64,
    pub attempts: usize,
}

/// Index clusters starting at `pitch`, enlarging the pitch while the span
/// overflows `max_slots`.
///
/// At most `max_attempts` indexings are computed. Each failed attempt grows
/// the pitch by `max(span / max_slots, min_factor)`. The returned indexing is
/// the last one computed and may still overflow.
pub(crate) fn widen_to_fit(
    means: &[f64],
    max_slots: usize,
    pitch: f64,
    max_attempts: usize,
    min_factor: f64,
) -> Widened {
    let slots = slot_count(max_slots);
    let mut pitch = pitch;
    let mut indices = relative_indices(means, pitch);
    let mut attempts = 1;

    while span(&indices) > slots && attempts < max_attempts {
        let ratio = (span(&indices) as f64 / max_slots as f64).max(min_factor);
        pitch *= ratio;
        debug!(
            "span {} exceeds {max_slots} slots, widening pitch to {pitch:.3}",
            span(&indices)
        );
        indices = relative_indices(means, pitch);
        attempts += 1;
    }

    Widened {
        indices,
        pitch,
        attempts,
    }
}

/// Squeeze strictly increasing indices until their span fits `max_slots`.
///
/// Equivalent to repeatedly shrinking the largest gap above 1 (first one on
/// ties) by one slot, computed as a water level over the gaps so huge
/// excesses cost no more than small ones. Returns `false` if the span still
/// overflows once every gap is closed; the clustering pigeonhole check makes
/// that unreachable in the solver.
pub(crate) fn compress_gaps(indices: &mut [i64], max_slots: usize) -> bool {
    let excess = span(indices).saturating_sub(slot_count(max_slots));
    if excess <= 0 {
        return true;
    }
    warn!(
        "relative indices still span {} slots (max {max_slots}); compressing gaps",
        span(indices)
    );

    let mut gaps: Vec<i64> = indices.windows(2).map(|w| w[1] - w[0]).collect();
    let reducible = |level: i64| {
        gaps.iter().fold(0i64, |acc, &g| acc.saturating_add((g - level).max(0)))
    };

    let fits = reducible(1) >= excess;
    let (level, mut remainder) = if fits {
        // Smallest level whose reduction does not exceed the excess.
        let (mut lo, mut hi) = (1, gaps.iter().copied().max().unwrap_or(1));
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if reducible(mid) <= excess {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        (lo, excess - reducible(lo))
    } else {
        (1, 0)
    };

    for g in &mut gaps {
        if *g >= level {
            *g = level;
            if remainder > 0 {
                *g -= 1;
                remainder -= 1;
            }
        }
    }
    for (i, gap) in gaps.into_iter().enumerate() {
        indices[i + 1] = indices[i] + gap;
    }
    fits
}
