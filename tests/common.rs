#![allow(dead_code)]

use std::str::FromStr;

use rust_decimal::Decimal;

use nestegg::periods::{Period, PeriodKind, RawPeriod, build_periods};
use nestegg::transactions::{RawTransaction, Transaction, build_transactions};

#[must_use]
pub fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

#[must_use]
pub fn epoch(stamp: &str) -> i64 {
    nestegg::core::timestamp::parse_timestamp(stamp).unwrap().1
}

#[must_use]
pub fn expense(stamp: &str, amount: f64) -> RawTransaction {
    RawTransaction {
        timestamp: Some(stamp.to_string()),
        amount: Some(amount),
        ..Default::default()
    }
}

#[must_use]
pub fn dated(stamp: &str, amount: f64) -> RawTransaction {
    RawTransaction {
        date: Some(stamp.to_string()),
        amount: Some(amount),
        ..Default::default()
    }
}

#[must_use]
pub fn strict(stamp: &str, amount: f64, ceiling: f64, remanent: f64) -> RawTransaction {
    RawTransaction {
        date: Some(stamp.to_string()),
        amount: Some(amount),
        ceiling: Some(ceiling),
        remanent: Some(remanent),
        ..Default::default()
    }
}

/// Canonicalize a single expense through the parse pipeline.
#[must_use]
pub fn canonical(stamp: &str, amount: f64) -> Transaction {
    build_transactions(&[dated(stamp, amount)])
        .unwrap()
        .transactions
        .remove(0)
}

#[must_use]
pub fn span(start: &str, end: &str) -> RawPeriod {
    RawPeriod {
        start: Some(start.to_string()),
        end: Some(end.to_string()),
        ..Default::default()
    }
}

#[must_use]
pub fn q_span(fixed: f64, start: &str, end: &str) -> RawPeriod {
    RawPeriod {
        fixed: Some(fixed),
        ..span(start, end)
    }
}

#[must_use]
pub fn p_span(extra: f64, start: &str, end: &str) -> RawPeriod {
    RawPeriod {
        extra: Some(extra),
        ..span(start, end)
    }
}

#[must_use]
pub fn q_periods(raw: &[RawPeriod]) -> Vec<Period> {
    build_periods(raw, PeriodKind::Q).unwrap()
}

#[must_use]
pub fn p_periods(raw: &[RawPeriod]) -> Vec<Period> {
    build_periods(raw, PeriodKind::P).unwrap()
}

#[must_use]
pub fn k_periods(raw: &[RawPeriod]) -> Vec<Period> {
    build_periods(raw, PeriodKind::K).unwrap()
}

/// Build a q/p interval directly from epochs, for engine-level tests that
/// don't care about the timestamp strings.
#[must_use]
pub fn interval(index: usize, start_epoch: i64, end_epoch: i64, value: &str) -> Period {
    Period {
        start: String::new(),
        end: String::new(),
        start_epoch,
        end_epoch,
        index,
        value: dec(value),
    }
}

/// Deterministic 64-bit LCG for reproducible synthetic workloads.
pub struct Lcg(u64);

impl Lcg {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Lcg(seed)
    }

    pub fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0
    }

    pub fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}
