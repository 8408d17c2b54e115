/// At most one pending host timer.
///
/// `H` is the host's timer handle (`setTimeout` ids in the browser). A
/// request while a timer is pending is dropped. The owner must `cancel` on
/// teardown so the host never fires a callback that no longer exists.
#[derive(Clone, Debug)]
pub struct Throttle<H> {
    pending: Option<H>,
}

impl<H> Default for Throttle<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> Throttle<H> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Arm the timer unless one is already pending. Returns true when the
    /// host accepted a new timer.
    pub fn schedule(&mut self, schedule: impl FnOnce() -> Option<H>) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = schedule();
        self.pending.is_some()
    }

    /// The timer fired. Returns false for a callback nobody is waiting on.
    pub fn fire(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Release the pending timer, if any.
    pub fn cancel(&mut self, cancel: impl FnOnce(H)) -> bool {
        match self.pending.take() {
            Some(handle) => {
                cancel(handle);
                true
            }
            None => false,
        }
    }
}
