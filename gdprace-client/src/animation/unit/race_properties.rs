// Properties of race frame computation over the built-in GDP table
// and small hand-built tables

use super::interpolate::RaceAnimator;
use super::scheduler::LoopScheduler;
use gdprace_utils::{gdp, Color, Dataset, Series, Timeline};
use std::sync::Arc;
use std::time::Duration;

fn builtin() -> RaceAnimator {
    RaceAnimator::new(Arc::new(gdp::dataset().unwrap()), 10)
}

fn progress_steps(count: usize) -> Vec<f64> {
    (0..=count).map(|i| i as f64 / count as f64).collect()
}

#[test]
fn test_endpoints_are_exact_years() {
    let animator = builtin();
    let dataset = animator.dataset();

    let start = animator.compute_frame(0.0);
    assert_eq!(start.year, dataset.timeline().first());
    for entry in &start.entries {
        let series = dataset.series().iter().find(|s| s.code == entry.code).unwrap();
        assert_eq!(Some(entry.value), series.value(2000));
    }

    let end = animator.compute_frame(1.0);
    assert_eq!(end.year, dataset.timeline().last());
    for entry in &end.entries {
        let series = dataset.series().iter().find(|s| s.code == entry.code).unwrap();
        assert_eq!(Some(entry.value), series.value(2023));
    }
}

#[test]
fn test_values_stay_between_bracketing_years() {
    let animator = builtin();
    let dataset = animator.dataset();
    let last = dataset.timeline().len() - 1;

    for progress in progress_steps(997) {
        let index = progress * last as f64;
        let lo = (index.floor() as usize).min(last);
        let hi = (lo + 1).min(last);
        let frame = animator.compute_frame(progress);

        for entry in &frame.entries {
            let i = dataset
                .series()
                .iter()
                .position(|s| s.code == entry.code)
                .unwrap();
            let a = dataset.value_at(i, lo);
            let b = dataset.value_at(i, hi);
            assert!(
                entry.value >= a.min(b) && entry.value <= a.max(b),
                "{} = {} outside [{}, {}] at progress {}",
                entry.code,
                entry.value,
                a.min(b),
                a.max(b),
                progress
            );
        }
    }
}

#[test]
fn test_year_is_monotonic() {
    let animator = builtin();
    let years: Vec<i32> = progress_steps(1000)
        .into_iter()
        .map(|p| animator.compute_frame(p).year)
        .collect();

    assert!(years.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(years.first(), Some(&2000));
    assert_eq!(years.last(), Some(&2023));
}

#[test]
fn test_deterministic() {
    let animator = builtin();
    for progress in progress_steps(50) {
        let a = animator.compute_frame(progress);
        let b = animator.compute_frame(progress);
        assert_eq!(a, b);
        for (x, y) in a.entries.iter().zip(&b.entries) {
            assert_eq!(x.value.to_bits(), y.value.to_bits());
        }
    }
}

#[test]
fn test_sorted_descending_and_truncated() {
    let animator = builtin();
    assert!(animator.dataset().len() > 10);

    for progress in progress_steps(200) {
        let frame = animator.compute_frame(progress);
        assert_eq!(frame.entries.len(), 10);
        assert!(frame
            .entries
            .windows(2)
            .all(|pair| pair[0].value >= pair[1].value));
        assert_eq!(frame.max_value, frame.entries[0].value);
        for (position, entry) in frame.entries.iter().enumerate() {
            assert_eq!(entry.rank, position + 1);
        }
    }
}

#[test]
fn test_ties_keep_declaration_order() {
    let black = Color::new(0, 0, 0);
    let dataset = Dataset::new(
        Timeline::range(2000, 2002).unwrap(),
        vec![
            Series::new("C", "Gamma", black).with_values_from(2000, &[5.0, 5.0, 5.0]),
            Series::new("A", "Alpha", black).with_values_from(2000, &[5.0, 5.0, 5.0]),
            Series::new("D", "Delta", black).with_values_from(2000, &[9.0, 1.0, 9.0]),
            Series::new("B", "Beta", black).with_values_from(2000, &[5.0, 5.0, 5.0]),
        ],
    )
    .unwrap();
    let animator = RaceAnimator::new(Arc::new(dataset), 10);

    assert_eq!(animator.compute_frame(0.0).codes(), vec!["D", "C", "A", "B"]);
    assert_eq!(animator.compute_frame(0.5).codes(), vec!["C", "A", "B", "D"]);
    assert_eq!(animator.compute_frame(1.0).codes(), vec!["D", "C", "A", "B"]);
}

#[test]
fn test_top_n_larger_than_table() {
    let animator = RaceAnimator::new(Arc::new(gdp::dataset().unwrap()), 50);
    assert_eq!(animator.compute_frame(0.3).entries.len(), 15);
}

#[test]
fn test_restart_frame_equals_start_frame() {
    let animator = builtin();
    let mut scheduler = LoopScheduler::new(Duration::from_secs(24), Duration::from_secs(2));

    let start = animator.compute_frame(scheduler.tick(Duration::ZERO));
    animator.compute_frame(scheduler.tick(Duration::from_secs(12)));
    let end = animator.compute_frame(scheduler.tick(Duration::from_secs(24)));
    assert_eq!(end.year, 2023);

    let held = animator.compute_frame(scheduler.tick(Duration::from_secs(25)));
    assert_eq!(held, end);

    let restarted = animator.compute_frame(scheduler.tick(Duration::from_secs(26)));
    assert_eq!(restarted, start);
}
