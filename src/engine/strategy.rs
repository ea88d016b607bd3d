//! Q-strategy selection.
//!
//! Observational only: both strategies produce identical override vectors,
//! so the pick never changes output, only cost.

use std::collections::HashSet;

use crate::periods::Period;

/// Which q-override algorithm the engine runs for a given workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QStrategy {
    /// Priority-queue sweep (see [`super::q_overrides_heap`]).
    Heap,
    /// Reverse-priority union-find sweep (see [`super::q_overrides_dsu`]).
    Dsu,
}

/// Below this many q-intervals the heap always wins.
const DSU_MIN_Q: usize = 2048;
/// At most this many q-intervals are sampled for the duplicate-bounds ratio.
const BOUNDS_SAMPLE_MAX: usize = 4096;
/// Duplicate-bounds ratio at which the DSU's cache and early exit dominate.
const DUPLICATE_RATIO_CUTOFF: f64 = 0.25;
/// Hysteresis: the DSU estimate must beat the heap by this margin.
const DSU_ADVANTAGE: f64 = 0.85;

/// Pick the q-override strategy for this workload.
#[must_use]
pub fn choose_q_strategy(times: &[i64], q_periods: &[Period]) -> QStrategy {
    let q_count = q_periods.len();
    let tx_count = times.len();
    if q_count == 0 || tx_count == 0 || q_count < DSU_MIN_Q {
        return QStrategy::Heap;
    }

    let sample_size = q_count.min(BOUNDS_SAMPLE_MAX);
    let unique_bounds: HashSet<(i64, i64)> = q_periods[..sample_size]
        .iter()
        .map(|q| (q.start_epoch, q.end_epoch))
        .collect();
    #[allow(clippy::cast_precision_loss)]
    let duplicate_ratio = 1.0 - unique_bounds.len() as f64 / sample_size as f64;
    if duplicate_ratio >= DUPLICATE_RATIO_CUTOFF {
        return QStrategy::Dsu;
    }

    #[allow(clippy::cast_precision_loss)]
    let (q_count, tx_count) = (q_count as f64, tx_count as f64);
    let heap_estimate = (2.0 * q_count + tx_count) * (q_count + 1.0).log2();
    let dsu_estimate = q_count * (tx_count + 1.0).log2() + tx_count;
    if dsu_estimate * DSU_ADVANTAGE < heap_estimate {
        QStrategy::Dsu
    } else {
        QStrategy::Heap
    }
}
