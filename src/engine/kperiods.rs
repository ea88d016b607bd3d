//! K evaluation windows: merging, membership, and range-sum aggregation.

use rust_decimal::Decimal;

use crate::core::money::money;
use crate::periods::Period;
use crate::transactions::Transaction;

/// Total adjusted savings inside one k evaluation window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowTotal {
    /// The window's original normalized start timestamp.
    pub start: String,
    /// The window's original normalized end timestamp.
    pub end: String,
    /// Sum of adjusted remanents with epochs inside the window.
    pub amount: Decimal,
}

/// Merge k-intervals into disjoint spans, coalescing overlaps and gaps of at
/// most one second.
#[must_use]
pub fn merge_k_periods(k_periods: &[Period]) -> Vec<(i64, i64)> {
    if k_periods.is_empty() {
        return Vec::new();
    }

    let mut spans: Vec<(i64, i64)> = k_periods
        .iter()
        .map(|k| (k.start_epoch, k.end_epoch))
        .collect();
    spans.sort_unstable();

    let mut merged = Vec::with_capacity(spans.len());
    let (mut current_start, mut current_end) = spans[0];
    for &(start, end) in &spans[1..] {
        if start <= current_end + 1 {
            if end > current_end {
                current_end = end;
            }
        } else {
            merged.push((current_start, current_end));
            current_start = start;
            current_end = end;
        }
    }
    merged.push((current_start, current_end));
    merged
}

/// Membership of each transaction (indexed by input position) in the union
/// of k-intervals. An empty k list admits everything.
///
/// `order` must be the epoch-sorted permutation returned by
/// [`super::apply_temporal_rules`] or [`super::sorted_order`].
#[must_use]
pub fn membership_in_k(
    transactions: &[Transaction],
    k_periods: &[Period],
    order: &[usize],
) -> Vec<bool> {
    if transactions.is_empty() {
        return Vec::new();
    }
    if k_periods.is_empty() {
        return vec![true; transactions.len()];
    }

    let merged = merge_k_periods(k_periods);
    let mut membership = vec![false; transactions.len()];
    let mut span = 0;

    for &tx_index in order {
        let ts = transactions[tx_index].epoch;
        while span < merged.len() && merged[span].1 < ts {
            span += 1;
        }
        if let Some(&(start, end)) = merged.get(span) {
            membership[tx_index] = start <= ts && ts <= end;
        }
    }
    membership
}

/// Range-sum the adjusted remanents per k-interval via prefix sums over the
/// epoch-sorted permutation. Results follow k input order and carry each
/// window's original start/end strings.
#[must_use]
pub fn aggregate_savings_by_k(
    transactions: &[Transaction],
    order: &[usize],
    k_periods: &[Period],
) -> Vec<WindowTotal> {
    if k_periods.is_empty() {
        return Vec::new();
    }

    let times: Vec<i64> = order.iter().map(|&i| transactions[i].epoch).collect();
    let mut prefix = Vec::with_capacity(times.len() + 1);
    let mut running = Decimal::ZERO;
    prefix.push(running);
    for &i in order {
        running += transactions[i].effective_remanent();
        prefix.push(running);
    }

    k_periods
        .iter()
        .map(|period| {
            let left = times.partition_point(|&t| t < period.start_epoch);
            let right = times.partition_point(|&t| t <= period.end_epoch);
            WindowTotal {
                start: period.start.clone(),
                end: period.end.clone(),
                amount: money(prefix[right] - prefix[left]),
            }
        })
        .collect()
}
