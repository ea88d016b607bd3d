//! Q-override resolution with a priority queue.
//!
//! Walk the epoch-sorted times once, pushing q-intervals as they start and
//! lazily discarding expired ones from the top of the heap. The top of the
//! heap is always the winning interval: latest `start_epoch`, ties broken by
//! earliest insertion `index`.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rust_decimal::Decimal;

use crate::periods::Period;

struct ActiveInterval {
    start_epoch: i64,
    index: usize,
    end_epoch: i64,
    value: Decimal,
}

impl PartialEq for ActiveInterval {
    fn eq(&self, other: &Self) -> bool {
        self.start_epoch == other.start_epoch && self.index == other.index
    }
}

impl Eq for ActiveInterval {}

impl PartialOrd for ActiveInterval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ActiveInterval {
    // Max-heap priority: latest start first, then earliest insertion.
    fn cmp(&self, other: &Self) -> Ordering {
        self.start_epoch
            .cmp(&other.start_epoch)
            .then_with(|| other.index.cmp(&self.index))
    }
}

pub(super) fn q_overrides(times: &[i64], q_periods: &[Period]) -> Vec<Option<Decimal>> {
    let mut overrides = vec![None; times.len()];
    if times.is_empty() || q_periods.is_empty() {
        return overrides;
    }

    let mut by_start: Vec<&Period> = q_periods.iter().collect();
    by_start.sort_by_key(|q| (q.start_epoch, q.index));

    let mut next = 0;
    let mut active: BinaryHeap<ActiveInterval> = BinaryHeap::new();

    for (position, &ts) in times.iter().enumerate() {
        while next < by_start.len() && by_start[next].start_epoch <= ts {
            let q = by_start[next];
            active.push(ActiveInterval {
                start_epoch: q.start_epoch,
                index: q.index,
                end_epoch: q.end_epoch,
                value: q.value,
            });
            next += 1;
        }

        // Lazy expiry: expired intervals below the top stay in the heap and
        // are dropped whenever they surface.
        while let Some(top) = active.peek() {
            if top.end_epoch < ts {
                active.pop();
            } else {
                break;
            }
        }

        if let Some(top) = active.peek() {
            overrides[position] = Some(top.value);
        }
    }
    overrides
}
