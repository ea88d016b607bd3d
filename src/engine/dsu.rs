//! Q-override resolution with a next-unassigned union-find.
//!
//! Process q-intervals highest-priority first (latest `start_epoch`, then
//! earliest `index`); each interval claims every still-unassigned sorted
//! position inside its `[start_epoch, end_epoch]` range. `find(i)` yields the
//! smallest unassigned position `>= i`, so already-claimed runs are skipped
//! in near-constant time. Repeated `(start_epoch, end_epoch)` pairs hit a
//! bounds cache instead of re-running the binary searches.

use std::cmp::Reverse;
use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::periods::Period;

fn find(parent: &mut [usize], mut position: usize) -> usize {
    // Path halving.
    while parent[position] != position {
        parent[position] = parent[parent[position]];
        position = parent[position];
    }
    position
}

pub(super) fn q_overrides(times: &[i64], q_periods: &[Period]) -> Vec<Option<Decimal>> {
    let size = times.len();
    let mut overrides = vec![None; size];
    if size == 0 || q_periods.is_empty() {
        return overrides;
    }

    let mut by_priority: Vec<&Period> = q_periods.iter().collect();
    by_priority.sort_by_key(|q| (Reverse(q.start_epoch), q.index));

    // parent[i] points at the smallest still-unassigned position >= i;
    // slot `size` is the past-the-end sentinel.
    let mut parent: Vec<usize> = (0..=size).collect();
    // (start_epoch, end_epoch) -> half-open position range. Unbounded; grows
    // with the number of distinct q bounds.
    let mut bounds_cache: HashMap<(i64, i64), (usize, usize)> = HashMap::new();
    let mut assigned = 0;

    for q in by_priority {
        if assigned >= size {
            break;
        }

        let (left, right) = *bounds_cache
            .entry((q.start_epoch, q.end_epoch))
            .or_insert_with(|| {
                let left = times.partition_point(|&t| t < q.start_epoch);
                let right = times.partition_point(|&t| t <= q.end_epoch);
                (left, right)
            });
        if left >= right {
            continue;
        }

        let mut position = find(&mut parent, left);
        while position < right {
            overrides[position] = Some(q.value);
            assigned += 1;
            parent[position] = find(&mut parent, position + 1);
            position = parent[position];
        }
    }
    overrides
}
