// RaceAnimation: the looping bar-chart race as an AnimationEngine

use super::bars::BarChart;
use super::engine::{AnimationEngine, AnimationFrame};
use super::interpolate::RaceAnimator;
use super::scheduler::LoopScheduler;
use gdprace_utils::{AnimatorConfig, Dataset};
use std::sync::Arc;
use std::time::Duration;

/// One view's race animation: its own clock, frame computation and renderer.
/// Infinite: `next_frame` always returns `Some`.
pub struct RaceAnimation {
    animator: RaceAnimator,
    scheduler: LoopScheduler,
    chart: BarChart,
    fps: u32,
}

impl RaceAnimation {
    pub fn new(dataset: Arc<Dataset>, config: &AnimatorConfig) -> Self {
        let total = config.loop_duration(dataset.timeline().len());
        let name_width = dataset
            .series()
            .iter()
            .map(|s| s.name.chars().count())
            .max()
            .unwrap_or(0);

        Self {
            animator: RaceAnimator::new(dataset, config.top_n),
            scheduler: LoopScheduler::new(total, config.pause),
            chart: BarChart::new(config.bar_width, 0, 0).with_name_width(name_width),
            fps: config.fps,
        }
    }

    /// Paint rows in their series colour
    pub fn with_color(mut self, color: bool) -> Self {
        self.chart = self.chart.with_color(color);
        self
    }

    pub fn scheduler(&self) -> &LoopScheduler {
        &self.scheduler
    }
}

impl AnimationEngine for RaceAnimation {
    fn next_frame(&mut self, elapsed: Duration) -> Option<AnimationFrame> {
        let progress = self.scheduler.tick(elapsed);
        let snapshot = self.animator.compute_frame(progress);
        let (content, dirty_regions) = self.chart.render(&snapshot);

        Some(
            AnimationFrame::new(snapshot, content, dirty_regions)
                .with_loops_completed(self.scheduler.loops_completed()),
        )
    }

    fn target_fps(&self) -> u32 {
        self.fps
    }

    fn reset(&mut self) {
        self.scheduler.reset();
        self.chart.reset();
    }
}
