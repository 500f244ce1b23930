// Frame loop runner: register on mount, unregister on unmount

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use log::info;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval, Instant, MissedTickBehavior};

use super::error::{FrameLoopError, FrameLoopResult};
use crate::animation::{AnimationEngine, AnimationFrame};

/// Frames buffered between the loop and a slow view
pub const DEFAULT_CHANNEL_CAPACITY: usize = 4;

/// Owns the tokio task ticking one animation engine.
///
/// Dropping a `FrameLoop` aborts its task, so a torn-down view never has
/// callbacks invoked on its behalf.
pub struct FrameLoop {
    /// Capacity of the frame channel (bounded to apply backpressure)
    channel_capacity: usize,

    /// Handle to the running loop task
    handle: Option<JoinHandle<()>>,

    /// Channel to signal shutdown
    shutdown_tx: Option<oneshot::Sender<()>>,

    /// Flag indicating if the loop task is alive
    is_running: Arc<AtomicBool>,

    /// Frames delivered since the last start
    frames_sent: Arc<AtomicU64>,
}

impl FrameLoop {
    pub fn new(channel_capacity: usize) -> Self {
        Self {
            channel_capacity: channel_capacity.max(1),
            handle: None,
            shutdown_tx: None,
            is_running: Arc::new(AtomicBool::new(false)),
            frames_sent: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Register `engine` and start ticking it at its target FPS.
    ///
    /// Frames arrive on the returned receiver. The loop ends on `stop`, when
    /// the receiver is dropped, or when a finite engine runs out of frames.
    pub fn start<E>(&mut self, engine: E) -> FrameLoopResult<Receiver<AnimationFrame>>
    where
        E: AnimationEngine + 'static,
    {
        if self.is_running() {
            return Err(FrameLoopError::AlreadyRunning);
        }
        let runtime = Handle::try_current().map_err(|_| FrameLoopError::NoRuntime)?;

        let (frame_tx, frame_rx) = mpsc::channel(self.channel_capacity);
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        self.is_running.store(true, Ordering::Relaxed);
        self.frames_sent.store(0, Ordering::Relaxed);

        let task = run_loop(
            engine,
            frame_tx,
            shutdown_rx,
            Arc::clone(&self.is_running),
            Arc::clone(&self.frames_sent),
        );
        self.handle = Some(runtime.spawn(task));
        self.shutdown_tx = Some(shutdown_tx);

        Ok(frame_rx)
    }

    /// Unregister the loop and wait for its task to finish.
    /// Calling this when nothing is running is a no-op.
    pub async fn stop(&mut self) -> FrameLoopResult<()> {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            // The task may already have exited on its own
            let _ = shutdown_tx.send(());
        }

        let result = match self.handle.take() {
            Some(handle) => handle.await.map_err(FrameLoopError::from),
            None => Ok(()),
        };

        self.is_running.store(false, Ordering::Relaxed);
        result
    }

    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }

    pub fn frames_sent(&self) -> u64 {
        self.frames_sent.load(Ordering::Relaxed)
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

async fn run_loop<E: AnimationEngine>(
    mut engine: E,
    frame_tx: Sender<AnimationFrame>,
    mut shutdown_rx: oneshot::Receiver<()>,
    is_running: Arc<AtomicBool>,
    frames_sent: Arc<AtomicU64>,
) {
    let mut ticker = interval(engine.frame_duration());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mounted = Instant::now();

    info!("Frame loop started at {}fps", engine.target_fps());

    loop {
        tokio::select! {
            _ = &mut shutdown_rx => {
                info!("Frame loop stopped");
                break;
            }
            _ = ticker.tick() => {
                let frame = match engine.next_frame(mounted.elapsed()) {
                    Some(frame) => frame,
                    None => {
                        info!("Animation finished, frame loop exiting");
                        break;
                    }
                };

                // A view that stops reading must not block shutdown
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        info!("Frame loop stopped");
                        break;
                    }
                    sent = frame_tx.send(frame) => {
                        if sent.is_err() {
                            info!("Frame receiver dropped, frame loop exiting");
                            break;
                        }
                        frames_sent.fetch_add(1, Ordering::Relaxed);
                    }
                }
            }
        }
    }

    is_running.store(false, Ordering::Relaxed);
}
