// Race animation
// Frame computation, progress clock and bar rendering for the ranked race

pub mod bars;
pub mod engine;
pub mod interpolate;
pub mod race;
pub mod scheduler;

pub use bars::BarChart;
pub use engine::{AnimationEngine, AnimationFrame, DirtyRegion};
pub use interpolate::RaceAnimator;
pub use race::RaceAnimation;
pub use scheduler::{advance, LoopScheduler, SchedulerState};

#[cfg(test)]
#[path = "./unit/race_properties.rs"]
mod race_properties;
