//! Smooth-scroll controller lifecycle.
//!
//! Acquire-on-mount, release-on-dispose: `mount` spawns a recurring per-frame
//! task (~60 fps) that interpolates the current position toward the target and
//! invokes the caller's frame callback. The loop has exactly one termination
//! path, explicit disposal, matching the page lifecycle that owns it.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, Instant, MissedTickBehavior};

/// ~60 fps, the animation-frame cadence the controller was tuned for.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Distance below which the animation snaps to its target.
const SNAP_EPSILON: f64 = 0.5;

/// The two fixed tuning parameters of the controller.
#[derive(Debug, Clone, Copy)]
pub struct ScrollTuning {
    /// Upper bound on any one scroll animation, in seconds.
    pub duration_secs: f64,
    /// Per-frame interpolation factor toward the target (0, 1].
    pub lerp: f64,
}

impl Default for ScrollTuning {
    fn default() -> Self {
        Self {
            duration_secs: 1.2,
            lerp: 0.1,
        }
    }
}

#[derive(Debug)]
struct ScrollState {
    current: f64,
    target: f64,
    /// Set by `scroll_to`, cleared once the animation settles.
    started_at: Option<Instant>,
}

/// A mounted smooth-scroll controller.
///
/// Dropping an undisposed controller aborts the frame task, but callers that
/// need the post-teardown guarantee ("no callback after disposal") should use
/// `dispose`, which also awaits the task's completion.
pub struct SmoothScroll {
    state: Arc<Mutex<ScrollState>>,
    frame_task: Option<JoinHandle<()>>,
}

impl SmoothScroll {
    /// Mounts the controller and starts the per-frame loop.
    ///
    /// `on_frame` receives the interpolated position once per frame, idle
    /// frames included.
    pub fn mount<F>(tuning: ScrollTuning, on_frame: F) -> Self
    where
        F: Fn(f64) + Send + 'static,
    {
        let state = Arc::new(Mutex::new(ScrollState {
            current: 0.0,
            target: 0.0,
            started_at: None,
        }));

        let task_state = Arc::clone(&state);
        let frame_task = tokio::spawn(async move {
            let mut ticker = interval(FRAME_INTERVAL);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                let position = {
                    let Ok(mut s) = task_state.lock() else { break };
                    advance_frame(&mut s, &tuning);
                    s.current
                };
                on_frame(position);
            }
        });

        Self {
            state,
            frame_task: Some(frame_task),
        }
    }

    /// Retargets the animation. The frame loop carries the position there.
    pub fn scroll_to(&self, target: f64) {
        if let Ok(mut s) = self.state.lock() {
            s.target = target;
            s.started_at = Some(Instant::now());
        }
    }

    /// Current interpolated position.
    pub fn position(&self) -> f64 {
        self.state.lock().map(|s| s.current).unwrap_or(0.0)
    }

    /// Tears the controller down. After this resolves, the frame callback is
    /// never invoked again.
    pub async fn dispose(mut self) {
        if let Some(task) = self.frame_task.take() {
            task.abort();
            // Cancelled JoinError is the expected outcome here.
            let _ = task.await;
        }
    }
}

impl Drop for SmoothScroll {
    fn drop(&mut self) {
        if let Some(task) = &self.frame_task {
            task.abort();
        }
    }
}

/// One frame step: snap when converged or overdue, otherwise lerp.
fn advance_frame(s: &mut ScrollState, tuning: &ScrollTuning) {
    let delta = s.target - s.current;
    if delta.abs() < SNAP_EPSILON {
        s.current = s.target;
        s.started_at = None;
        return;
    }
    let overdue = s
        .started_at
        .map(|t| t.elapsed().as_secs_f64() >= tuning.duration_secs)
        .unwrap_or(false);
    if overdue {
        s.current = s.target;
        s.started_at = None;
    } else {
        s.current += delta * tuning.lerp;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
