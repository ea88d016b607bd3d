//! Temporal adjustment engine.
//!
//! Given epoch-ordered transactions and the q/p rule sets, computes each
//! transaction's `adjusted_remanent`: the q-override (latest-started
//! containing q-interval wins, ties broken by insertion order) replacing the
//! base remanent, plus the sum of `extra` values of every containing
//! p-interval. Q resolution ships two interchangeable strategies — a sweep
//! with a priority queue and a reverse-priority sweep over a next-unassigned
//! union-find — behind a cost-model selector. Both produce identical
//! override vectors on every input.

mod dsu;
mod heap;
pub mod kperiods;
mod strategy;

pub use strategy::{QStrategy, choose_q_strategy};

use rust_decimal::Decimal;

use crate::core::money::money;
use crate::periods::Period;
use crate::transactions::Transaction;

/// Indices of `transactions` ordered by `(epoch, input position)`.
#[must_use]
pub fn sorted_order(transactions: &[Transaction]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..transactions.len()).collect();
    order.sort_by_key(|&i| (transactions[i].epoch, i));
    order
}

/// Q-override vector for epoch-sorted `times`, using the strategy the cost
/// model picks. `overrides[i]` is the winning q value at `times[i]`, if any.
#[must_use]
pub fn q_overrides(times: &[i64], q_periods: &[Period]) -> Vec<Option<Decimal>> {
    match choose_q_strategy(times, q_periods) {
        QStrategy::Heap => heap::q_overrides(times, q_periods),
        QStrategy::Dsu => dsu::q_overrides(times, q_periods),
    }
}

/// Heap-based q resolution, exposed for strategy-equivalence checks.
#[must_use]
pub fn q_overrides_heap(times: &[i64], q_periods: &[Period]) -> Vec<Option<Decimal>> {
    heap::q_overrides(times, q_periods)
}

/// Union-find-based q resolution, exposed for strategy-equivalence checks.
#[must_use]
pub fn q_overrides_dsu(times: &[i64], q_periods: &[Period]) -> Vec<Option<Decimal>> {
    dsu::q_overrides(times, q_periods)
}

/// Apply the q/p temporal rules, writing `adjusted_remanent` into every
/// transaction. Returns the epoch-sorted permutation for reuse by the
/// k-membership and aggregation passes.
pub fn apply_temporal_rules(
    transactions: &mut [Transaction],
    q_periods: &[Period],
    p_periods: &[Period],
) -> Vec<usize> {
    let order = sorted_order(transactions);
    if transactions.is_empty() {
        return order;
    }

    let times: Vec<i64> = order.iter().map(|&i| transactions[i].epoch).collect();
    let strategy = choose_q_strategy(&times, q_periods);
    let overrides = match strategy {
        QStrategy::Heap => heap::q_overrides(&times, q_periods),
        QStrategy::Dsu => dsu::q_overrides(&times, q_periods),
    };
    tracing::debug!(
        ?strategy,
        transactions = times.len(),
        q = q_periods.len(),
        p = p_periods.len(),
        "resolved q overrides"
    );

    // P-extra event sweep: start events at start_epoch, end events one second
    // past end_epoch (both endpoints inclusive).
    let mut start_events: Vec<(i64, Decimal)> = p_periods
        .iter()
        .map(|p| (p.start_epoch, p.value))
        .collect();
    start_events.sort();
    let mut end_events: Vec<(i64, Decimal)> = p_periods
        .iter()
        .map(|p| (p.end_epoch + 1, p.value))
        .collect();
    end_events.sort();

    let mut next_start = 0;
    let mut next_end = 0;
    let mut running_extra = Decimal::ZERO;

    for (position, &tx_index) in order.iter().enumerate() {
        let ts = times[position];
        while next_start < start_events.len() && start_events[next_start].0 <= ts {
            running_extra += start_events[next_start].1;
            next_start += 1;
        }
        while next_end < end_events.len() && end_events[next_end].0 <= ts {
            running_extra -= end_events[next_end].1;
            next_end += 1;
        }

        let base = overrides[position].unwrap_or(transactions[tx_index].remanent);
        transactions[tx_index].adjusted_remanent = Some(money(base + running_extra));
    }

    order
}
