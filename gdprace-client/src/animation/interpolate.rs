// Race frame computation
//
// Pure mapping from progress along the timeline to a ranked, interpolated
// snapshot. Holds no mutable state; the scheduler owns the clock.

use gdprace_utils::{Dataset, Frame, FrameEntry};
use std::sync::Arc;

/// Linear interpolation between `a` and `b`
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Round to the nearest integer, halves going up (2000.5 -> 2001)
pub fn round_half_up(x: f64) -> i32 {
    (x + 0.5).floor() as i32
}

/// Computes ranked frames for a dataset.
///
/// The dataset is shared: every view that animates the same table holds its
/// own `RaceAnimator` over one `Arc<Dataset>`.
#[derive(Debug, Clone)]
pub struct RaceAnimator {
    dataset: Arc<Dataset>,
    top_n: usize,
}

impl RaceAnimator {
    pub fn new(dataset: Arc<Dataset>, top_n: usize) -> Self {
        Self { dataset, top_n }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Snapshot of every series at `progress`.
    ///
    /// `progress` must lie in [0, 1]; the scheduler clamps it. At 0 and 1 the
    /// frame is exactly the first and last timeline year.
    pub fn compute_frame(&self, progress: f64) -> Frame {
        let timeline = self.dataset.timeline();
        let last = timeline.len() - 1;

        let index = progress * last as f64;
        let lo = (index.floor() as usize).min(last);
        let hi = (lo + 1).min(last);

        let (year, t) = if lo == hi {
            (timeline.year_at(lo), 0.0)
        } else {
            let t = index - lo as f64;
            let year = lerp(
                timeline.year_at(lo) as f64,
                timeline.year_at(hi) as f64,
                t,
            );
            (round_half_up(year), t)
        };

        let mut ranked: Vec<(usize, f64)> = (0..self.dataset.len())
            .map(|i| {
                let a = self.dataset.value_at(i, lo);
                let b = self.dataset.value_at(i, hi);
                (i, lerp(a, b, t).clamp(a.min(b), a.max(b)))
            })
            .collect();

        // sort_by is stable: equal values keep declaration order
        ranked.sort_by(|x, y| y.1.total_cmp(&x.1));
        ranked.truncate(self.top_n);

        let series = self.dataset.series();
        let entries: Vec<FrameEntry> = ranked
            .into_iter()
            .enumerate()
            .map(|(position, (i, value))| FrameEntry {
                rank: position + 1,
                code: series[i].code.clone(),
                name: series[i].name.clone(),
                color: series[i].color,
                value,
            })
            .collect();

        let max_value = entries.first().map(|e| e.value).unwrap_or(0.0);

        Frame {
            year,
            progress,
            entries,
            max_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdprace_utils::{Color, Series, Timeline};

    fn scenario() -> RaceAnimator {
        let black = Color::new(0, 0, 0);
        let dataset = Dataset::new(
            Timeline::new(vec![2000, 2001]).unwrap(),
            vec![
                Series::new("A", "Alpha", black).with_values_from(2000, &[10.0, 20.0]),
                Series::new("B", "Beta", black).with_values_from(2000, &[15.0, 12.0]),
            ],
        )
        .unwrap();
        RaceAnimator::new(Arc::new(dataset), 10)
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
        assert_eq!(lerp(15.0, 12.0, 0.5), 13.5);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2000.5), 2001);
        assert_eq!(round_half_up(2000.49), 2000);
        assert_eq!(round_half_up(2000.0), 2000);
    }

    #[test]
    fn test_midpoint_scenario() {
        let frame = scenario().compute_frame(0.5);
        assert_eq!(frame.year, 2001);
        assert_eq!(frame.codes(), vec!["A", "B"]);
        assert_eq!(frame.entries[0].value, 15.0);
        assert_eq!(frame.entries[1].value, 13.5);
        assert_eq!(frame.max_value, 15.0);
        assert_eq!(frame.entries[0].rank, 1);
        assert_eq!(frame.entries[1].rank, 2);
    }

    #[test]
    fn test_start_of_timeline() {
        let frame = scenario().compute_frame(0.0);
        assert_eq!(frame.year, 2000);
        assert_eq!(frame.codes(), vec!["B", "A"]);
        assert_eq!(frame.entries[0].value, 15.0);
        assert_eq!(frame.entries[1].value, 10.0);
    }

    #[test]
    fn test_end_of_timeline() {
        let frame = scenario().compute_frame(1.0);
        assert_eq!(frame.year, 2001);
        assert_eq!(frame.codes(), vec!["A", "B"]);
        assert_eq!(frame.entries[0].value, 20.0);
        assert_eq!(frame.entries[1].value, 12.0);
    }

    #[test]
    fn test_single_year_timeline() {
        let dataset = Dataset::new(
            Timeline::new(vec![1999]).unwrap(),
            vec![Series::new("A", "Alpha", Color::new(0, 0, 0)).with_value(1999, 4.0)],
        )
        .unwrap();
        let animator = RaceAnimator::new(Arc::new(dataset), 10);
        for progress in [0.0, 0.5, 1.0] {
            let frame = animator.compute_frame(progress);
            assert_eq!(frame.year, 1999);
            assert_eq!(frame.max_value, 4.0);
        }
    }

    #[test]
    fn test_empty_series_table() {
        let dataset = Dataset::new(Timeline::range(2000, 2002).unwrap(), vec![]).unwrap();
        let frame = RaceAnimator::new(Arc::new(dataset), 10).compute_frame(0.3);
        assert!(frame.entries.is_empty());
        assert_eq!(frame.max_value, 0.0);
    }
}
