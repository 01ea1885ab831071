//! Pointer-as-gaze focus tracking.
//!
//! `GazeTracker` is a plain state machine: the host feeds it pointer moves and
//! a hit-test, and it returns the notifications to emit. Dispatch is left to
//! the caller so listeners never run while the tracker is borrowed.

use crate::config::GazeConfig;
use crate::error::GazeError;
use crate::events::GazeEvent;
use smallvec::SmallVec;

/// Lifecycle of one tracker instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GazePhase {
    #[default]
    Uninitialized,
    Initializing,
    Tracking,
    Failed,
    Stopped,
}

/// A held capture session (on the web, a camera `MediaStream`).
pub trait CaptureResource {
    /// Stop the underlying device. Called at most once.
    fn release(&mut self);
}

/// What the caller of `begin_initialize` should do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitStep {
    /// Already tracking; report success.
    Ready,
    /// Another initialization is awaiting capture; report failure.
    InFlight,
    /// Request capture, then pass this attempt number to `finish_initialize`.
    Acquire(u64),
}

pub type GazeEvents<E> = SmallVec<[GazeEvent<E>; 3]>;

pub struct GazeTracker<E> {
    x: f64,
    y: f64,
    focus: Option<E>,
    focus_start_ms: f64,
    phase: GazePhase,
    // Bumped by every `Acquire` and every `stop()`; a capture tagged with an
    // older value belongs to a cancelled attempt.
    generation: u64,
    capture: Option<Box<dyn CaptureResource>>,
    config: GazeConfig,
}

impl<E: Clone + PartialEq> GazeTracker<E> {
    pub fn new(config: GazeConfig) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            focus: None,
            focus_start_ms: 0.0,
            phase: GazePhase::Uninitialized,
            generation: 0,
            capture: None,
            config,
        }
    }

    pub fn phase(&self) -> GazePhase {
        self.phase
    }

    pub fn is_tracking(&self) -> bool {
        self.phase == GazePhase::Tracking
    }

    pub fn has_capture(&self) -> bool {
        self.capture.is_some()
    }

    pub fn begin_initialize(&mut self) -> InitStep {
        match self.phase {
            GazePhase::Tracking => InitStep::Ready,
            GazePhase::Initializing => InitStep::InFlight,
            _ => {
                self.phase = GazePhase::Initializing;
                self.generation += 1;
                InitStep::Acquire(self.generation)
            }
        }
    }

    /// Complete the attempt that `InitStep::Acquire(generation)` started.
    ///
    /// If `stop()` ran while capture was pending, the capture is released and
    /// the attempt reports failure, even when a newer attempt is now pending.
    pub fn finish_initialize(
        &mut self,
        generation: u64,
        result: Result<Box<dyn CaptureResource>, GazeError>,
    ) -> bool {
        let current = generation == self.generation && self.phase == GazePhase::Initializing;
        match result {
            Ok(mut capture) => {
                if !current {
                    log::warn!(
                        "[gaze] capture for cancelled attempt {} arrived; releasing",
                        generation
                    );
                    capture.release();
                    return false;
                }
                if let Some(mut old) = self.capture.take() {
                    old.release();
                }
                self.capture = Some(capture);
                self.phase = GazePhase::Tracking;
                log::info!("[gaze] tracking initialized (pointer as gaze source)");
                true
            }
            Err(e) => {
                log::error!("[gaze] failed to initialize gaze tracking: {}", e);
                if current {
                    self.phase = GazePhase::Failed;
                }
                false
            }
        }
    }

    /// Process one pointer move. Ignored unless tracking.
    ///
    /// `hit_test` returns the topmost element at the given coordinates.
    pub fn handle_pointer_move(
        &mut self,
        x: f64,
        y: f64,
        now_ms: f64,
        hit_test: impl FnOnce(f64, f64) -> Option<E>,
    ) -> GazeEvents<E> {
        let mut out = GazeEvents::new();
        if !self.is_tracking() {
            return out;
        }
        self.x = x;
        self.y = y;
        out.push(GazeEvent::Move {
            x,
            y,
            timestamp_ms: now_ms,
        });
        let target = hit_test(x, y);
        self.resolve_focus(target, now_ms, &mut out);
        out
    }

    fn resolve_focus(&mut self, target: Option<E>, now_ms: f64, out: &mut GazeEvents<E>) {
        if target != self.focus {
            if let Some(prev) = self.focus.take() {
                out.push(GazeEvent::Blur {
                    element: prev,
                    duration_ms: now_ms - self.focus_start_ms,
                    x: self.x,
                    y: self.y,
                });
            }
            self.focus_start_ms = now_ms;
            if let Some(el) = &target {
                out.push(GazeEvent::Focus {
                    element: el.clone(),
                    x: self.x,
                    y: self.y,
                    focus_duration_ms: None,
                });
            }
            self.focus = target;
            return;
        }
        if let Some(el) = &self.focus {
            let dwell = now_ms - self.focus_start_ms;
            if dwell > self.config.dwell_refocus_ms {
                out.push(GazeEvent::Focus {
                    element: el.clone(),
                    x: self.x,
                    y: self.y,
                    focus_duration_ms: Some(dwell),
                });
            }
        }
    }

    /// Disable tracking and release capture. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if matches!(self.phase, GazePhase::Tracking | GazePhase::Initializing) {
            self.phase = GazePhase::Stopped;
            self.generation += 1;
            log::info!("[gaze] tracking stopped");
        }
        if let Some(mut capture) = self.capture.take() {
            capture.release();
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn focus_element(&self) -> Option<&E> {
        self.focus.as_ref()
    }

    pub fn focus_start_ms(&self) -> Option<f64> {
        self.focus.as_ref().map(|_| self.focus_start_ms)
    }
}

impl<E: Clone + PartialEq> Default for GazeTracker<E> {
    fn default() -> Self {
        Self::new(GazeConfig::default())
    }
}
