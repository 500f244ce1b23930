// AnimationEngine trait and core frame types
use gdprace_utils::Frame;
use std::time::{Duration, Instant};

/// Defines a rectangular region that needs to be redrawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirtyRegion {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// A single tick's output: the ranked snapshot and its rendering
#[derive(Debug, Clone)]
pub struct AnimationFrame {
    /// Structured snapshot for consumers that draw their own bars
    pub snapshot: Frame,
    /// The rendered text for this frame
    pub content: String,
    /// Regions that changed from the previous frame
    pub dirty_regions: Vec<DirtyRegion>,
    /// Passes that had reached the end when this frame was produced
    pub loops_completed: u64,
    /// Frame timestamp for FPS calculation
    pub timestamp: Instant,
}

impl AnimationFrame {
    pub fn new(snapshot: Frame, content: String, dirty_regions: Vec<DirtyRegion>) -> Self {
        Self {
            snapshot,
            content,
            dirty_regions,
            loops_completed: 0,
            timestamp: Instant::now(),
        }
    }

    pub fn with_loops_completed(mut self, loops_completed: u64) -> Self {
        self.loops_completed = loops_completed;
        self
    }
}

/// Frame-based animation interface
pub trait AnimationEngine: Send {
    /// Generate the frame for `elapsed` time since the animation was mounted.
    /// Returns None if the animation is complete (for finite animations)
    fn next_frame(&mut self, elapsed: Duration) -> Option<AnimationFrame>;

    /// Get the target FPS for this animation
    fn target_fps(&self) -> u32;

    /// Get the frame duration based on target FPS
    fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps().max(1) as f64)
    }

    /// Reset animation to initial state
    fn reset(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockAnimation;

    impl AnimationEngine for MockAnimation {
        fn next_frame(&mut self, _elapsed: Duration) -> Option<AnimationFrame> {
            None
        }
        fn target_fps(&self) -> u32 {
            60
        }
        fn reset(&mut self) {}
    }

    #[test]
    fn test_dirty_region_equality() {
        let region1 = DirtyRegion { x: 0, y: 0, width: 10, height: 1 };
        let region2 = DirtyRegion { x: 0, y: 0, width: 10, height: 1 };
        assert_eq!(region1, region2);
    }

    #[test]
    fn test_frame_duration_60fps() {
        let duration = MockAnimation.frame_duration();
        // 60fps = ~16.67ms per frame
        assert!(duration.as_millis() >= 16 && duration.as_millis() <= 17);
    }

    #[test]
    fn test_loops_completed_defaults_to_zero() {
        let snapshot = Frame {
            year: 2000,
            progress: 0.0,
            entries: Vec::new(),
            max_value: 0.0,
        };
        let frame = AnimationFrame::new(snapshot, String::new(), Vec::new());
        assert_eq!(frame.loops_completed, 0);
        assert_eq!(frame.with_loops_completed(3).loops_completed, 3);
    }
}
