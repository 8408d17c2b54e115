/// Bookkeeping for a cancelable per-frame callback.
///
/// `H` is the host's frame request handle (`requestAnimationFrame` ids in
/// the browser, counters in tests). The loop holds at most one pending
/// request: starting a running loop is a no-op, and a frame callback only
/// re-schedules while the loop is still running.
#[derive(Clone, Debug)]
pub struct FrameLoop<H> {
    pending: Option<H>,
    running: bool,
}

impl<H> Default for FrameLoop<H> {
    fn default() -> Self {
        Self {
            pending: None,
            running: false,
        }
    }
}

impl<H> FrameLoop<H> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn pending(&self) -> Option<&H> {
        self.pending.as_ref()
    }

    /// Start the loop. Returns false if it was already running or the
    /// host refused to schedule a frame.
    pub fn start(&mut self, schedule: impl FnOnce() -> Option<H>) -> bool {
        if self.running {
            return false;
        }
        self.pending = schedule();
        self.running = self.pending.is_some();
        self.running
    }

    /// Stop the loop and release the pending request. Returns false if it
    /// was not running.
    pub fn stop(&mut self, cancel: impl FnOnce(H)) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        if let Some(handle) = self.pending.take() {
            cancel(handle);
        }
        true
    }

    /// Enter a frame callback: the request that fired is spent. Returns
    /// whether the frame body should run.
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        self.running
    }

    /// Leave a frame callback, scheduling the next frame if still running.
    pub fn end_frame(&mut self, schedule: impl FnOnce() -> Option<H>) {
        if self.running && self.pending.is_none() {
            self.pending = schedule();
            self.running = self.pending.is_some();
        }
    }

    /// Visibility gating: run only while the surface is on screen.
    pub fn set_visible(
        &mut self,
        visible: bool,
        schedule: impl FnOnce() -> Option<H>,
        cancel: impl FnOnce(H),
    ) -> bool {
        if visible {
            self.start(schedule)
        } else {
            self.stop(cancel)
        }
    }
}
