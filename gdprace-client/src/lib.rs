// gdprace client: the race animator and the loop that drives it

pub mod animation;
pub mod frame_loop;

pub use animation::{
    AnimationEngine, AnimationFrame, BarChart, DirtyRegion, LoopScheduler, RaceAnimation,
    RaceAnimator, SchedulerState,
};
pub use frame_loop::{FrameLoop, FrameLoopError, FrameLoopResult};
