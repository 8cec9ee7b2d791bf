use std::cell::Cell;

/// Lifecycle of a recurring per-frame callback.
///
/// The component that creates a scheduler owns it and must `stop` it on
/// teardown. `start` on a running scheduler and `stop` on a stopped one are
/// no-ops, and `stop` may be called from inside a frame.
pub trait FrameScheduler {
    fn start(&self);
    fn stop(&self);
    fn is_running(&self) -> bool;
}

/// Scheduler driven by hand, one frame per `advance`.
///
/// Used where there is no display refresh to wait on. It counts frame
/// requests and cancellations the way the browser loop issues them.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    running: Cell<bool>,
    pending: Cell<bool>,
    requests: Cell<usize>,
    cancels: Cell<usize>,
    frames: Cell<usize>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn request(&self) {
        self.pending.set(true);
        self.requests.set(self.requests.get() + 1);
    }

    /// Runs the pending frame, if any. Returns whether `frame` was called.
    pub fn advance(&self, frame: impl FnOnce(&Self)) -> bool {
        if !self.pending.replace(false) || !self.running.get() {
            return false;
        }
        self.frames.set(self.frames.get() + 1);
        frame(self);
        if self.running.get() {
            self.request();
        }
        true
    }

    pub fn requests(&self) -> usize {
        self.requests.get()
    }

    pub fn cancels(&self) -> usize {
        self.cancels.get()
    }

    pub fn frames(&self) -> usize {
        self.frames.get()
    }
}

impl FrameScheduler for ManualScheduler {
    fn start(&self) {
        if self.running.replace(true) {
            return;
        }
        self.request();
    }

    fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if self.pending.replace(false) {
            self.cancels.set(self.cancels.get() + 1);
        }
    }

    fn is_running(&self) -> bool {
        self.running.get()
    }
}
