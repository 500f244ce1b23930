// Frame loop
//
// Drives one AnimationEngine per view on a tokio task and streams its frames
// over a bounded channel:
//
// ```text
// view mounts ──► FrameLoop::start(engine) ──► Receiver<AnimationFrame>
//                        │
//                 interval tick ─► engine.next_frame(elapsed) ─► send
//                        │
// view unmounts ─► FrameLoop::stop()   (or the receiver is dropped)
// ```
//
// Each tick runs to completion before the next one starts. Missed ticks are
// skipped rather than bursted.

mod error;
mod runner;

pub use error::{FrameLoopError, FrameLoopResult};
pub use runner::{FrameLoop, DEFAULT_CHANNEL_CAPACITY};
