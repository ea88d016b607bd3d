use nestegg::QStrategy;
use nestegg::engine::{choose_q_strategy, q_overrides, q_overrides_dsu, q_overrides_heap};
use nestegg::periods::Period;

use crate::common::{Lcg, interval};

fn sorted_times(rng: &mut Lcg, count: usize, span: u64) -> Vec<i64> {
    let mut times: Vec<i64> = (0..count).map(|_| rng.below(span) as i64).collect();
    times.sort_unstable();
    times
}

fn random_intervals(rng: &mut Lcg, count: usize, span: u64) -> Vec<Period> {
    (0..count)
        .map(|index| {
            let a = rng.below(span) as i64;
            let b = rng.below(span) as i64;
            let value = (rng.below(400) + 1).to_string();
            interval(index, a.min(b), a.max(b), &value)
        })
        .collect()
}

fn repeated_intervals(rng: &mut Lcg, count: usize, span: u64) -> Vec<Period> {
    let distinct: Vec<(i64, i64)> = (0..20)
        .map(|_| {
            let a = rng.below(span) as i64;
            let b = rng.below(span) as i64;
            (a.min(b), a.max(b))
        })
        .collect();
    (0..count)
        .map(|index| {
            let (start, end) = distinct[rng.below(distinct.len() as u64) as usize];
            let value = (rng.below(400) + 1).to_string();
            interval(index, start, end, &value)
        })
        .collect()
}

#[test]
fn trivial_and_small_workloads_use_the_heap() {
    assert_eq!(choose_q_strategy(&[], &[]), QStrategy::Heap);
    assert_eq!(choose_q_strategy(&[1, 2, 3], &[]), QStrategy::Heap);

    let mut rng = Lcg::new(7);
    let q = random_intervals(&mut rng, 2047, 100_000);
    assert_eq!(choose_q_strategy(&[1, 2, 3], &q), QStrategy::Heap);
    assert_eq!(choose_q_strategy(&[], &q), QStrategy::Heap);
}

#[test]
fn heavily_repeated_bounds_switch_to_the_dsu() {
    let mut rng = Lcg::new(11);
    let times = sorted_times(&mut rng, 100, 100_000);
    let q = repeated_intervals(&mut rng, 4000, 100_000);
    assert_eq!(choose_q_strategy(&times, &q), QStrategy::Dsu);
}

#[test]
fn both_strategies_agree_on_handcrafted_tie_breaks() {
    let times = [10, 20, 30, 40, 50];
    let q = vec![
        interval(0, 5, 45, "1"),
        interval(1, 15, 35, "2"),
        interval(2, 15, 55, "3"),
        interval(3, 25, 25, "4"),
        interval(4, 60, 70, "5"),
    ];
    let heap = q_overrides_heap(&times, &q);
    let dsu = q_overrides_dsu(&times, &q);
    assert_eq!(heap, dsu);
    // positions 1-2: at equal start (15) the lower index wins; position 2
    // also shows the zero-length interval at 25 already expired. From t=40
    // interval 1 has ended and interval 2 takes over.
    assert_eq!(
        heap,
        vec![
            Some(crate::common::dec("1")),
            Some(crate::common::dec("2")),
            Some(crate::common::dec("2")),
            Some(crate::common::dec("3")),
            Some(crate::common::dec("3")),
        ]
    );
}

#[test]
fn both_strategies_agree_on_random_workloads() {
    for seed in [1_u64, 2, 3, 4] {
        let mut rng = Lcg::new(seed);
        let times = sorted_times(&mut rng, 300, 50_000);
        let q = random_intervals(&mut rng, 3000, 50_000);
        assert_eq!(
            q_overrides_heap(&times, &q),
            q_overrides_dsu(&times, &q),
            "seed {seed}"
        );
    }
}

#[test]
fn both_strategies_agree_on_duplicate_heavy_workloads() {
    let mut rng = Lcg::new(42);
    let times = sorted_times(&mut rng, 300, 10_000);
    let q = repeated_intervals(&mut rng, 4096, 10_000);
    assert_eq!(q_overrides_heap(&times, &q), q_overrides_dsu(&times, &q));
    // This workload crosses the selection threshold, so the dispatching
    // entry point must agree with both as well.
    assert_eq!(q_overrides(&times, &q), q_overrides_heap(&times, &q));
}

#[test]
fn strategies_handle_intervals_covering_nothing() {
    let times = [100, 200];
    let q = vec![interval(0, 300, 400, "1"), interval(1, 0, 50, "2")];
    assert_eq!(q_overrides_heap(&times, &q), vec![None, None]);
    assert_eq!(q_overrides_dsu(&times, &q), vec![None, None]);
}

#[test]
fn strategies_handle_duplicate_times() {
    let times = [100, 100, 100, 200];
    let q = vec![interval(0, 100, 150, "6"), interval(1, 90, 260, "8")];
    let expected = vec![
        Some(crate::common::dec("6")),
        Some(crate::common::dec("6")),
        Some(crate::common::dec("6")),
        Some(crate::common::dec("8")),
    ];
    assert_eq!(q_overrides_heap(&times, &q), expected);
    assert_eq!(q_overrides_dsu(&times, &q), expected);
}
