// Progress clock for the looping race
//
// Running -> PausedAtEnd when progress reaches 1, PausedAtEnd -> Running
// (origin reset, progress 0) once the pause has elapsed. No terminal state.

use log::debug;
use std::time::Duration;

/// Normalized position for `elapsed` out of `total`, clamped to [0, 1].
/// A zero `total` is already complete.
pub fn advance(elapsed: Duration, total: Duration) -> f64 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Running,
    PausedAtEnd,
}

/// Owns the progress of one animator instance.
///
/// Timestamps passed to [`LoopScheduler::tick`] are measured from any fixed
/// point (the frame loop uses the time since mount) and must not go
/// backwards.
#[derive(Debug, Clone)]
pub struct LoopScheduler {
    total: Duration,
    pause: Duration,
    state: SchedulerState,
    /// Clock origin of the current pass; set by the first tick
    origin: Option<Duration>,
    paused_at: Duration,
    progress: f64,
    loops_completed: u64,
}

impl LoopScheduler {
    pub fn new(total: Duration, pause: Duration) -> Self {
        Self {
            total,
            pause,
            state: SchedulerState::Running,
            origin: None,
            paused_at: Duration::ZERO,
            progress: 0.0,
            loops_completed: 0,
        }
    }

    /// Advance the clock to `now` and return the progress to render
    pub fn tick(&mut self, now: Duration) -> f64 {
        match self.state {
            SchedulerState::Running => {
                let origin = *self.origin.get_or_insert(now);
                self.progress = advance(now.saturating_sub(origin), self.total);
                if self.progress >= 1.0 {
                    self.state = SchedulerState::PausedAtEnd;
                    self.paused_at = now;
                    self.loops_completed += 1;
                    debug!(
                        "Race loop {} finished, holding final frame for {:?}",
                        self.loops_completed, self.pause
                    );
                }
            }
            SchedulerState::PausedAtEnd => {
                if now.saturating_sub(self.paused_at) >= self.pause {
                    self.state = SchedulerState::Running;
                    self.origin = Some(now);
                    self.progress = 0.0;
                    debug!("Race loop restarting");
                }
            }
        }
        self.progress
    }

    /// Back to the initial state: running, progress 0, no origin
    pub fn reset(&mut self) {
        self.state = SchedulerState::Running;
        self.origin = None;
        self.paused_at = Duration::ZERO;
        self.progress = 0.0;
        self.loops_completed = 0;
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Number of passes that reached the end of the timeline
    pub fn loops_completed(&self) -> u64 {
        self.loops_completed
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn pause(&self) -> Duration {
        self.pause
    }
}
