use crate::host::{FrameHandle, Host};
use std::cell::Cell;
use std::rc::Rc;

/// Scroll offset past which the header collapses into its compact form.
pub const SHRINK_THRESHOLD_PX: f64 = 56.0;

pub type ShrunkCallback = Box<dyn Fn(bool)>;

/// Derives the header's "shrunk" flag from the scroll offset.
///
/// Scroll events arrive much faster than the display refreshes, so
/// recomputation is coalesced to at most once per animation frame. Nothing
/// here is persisted; the flag is rederived from the live offset each
/// session.
pub struct ScrollHeader {
    inner: Rc<Inner>,
}

struct Inner {
    host: Rc<dyn Host>,
    threshold: f64,
    shrunk: Cell<bool>,
    pending: Cell<Option<FrameHandle>>,
    on_change: ShrunkCallback,
}

impl Inner {
    fn recompute(&self) {
        let shrunk = self.host.scroll_y() > self.threshold;
        if shrunk != self.shrunk.get() {
            self.shrunk.set(shrunk);
            (self.on_change)(shrunk);
        }
    }
}

impl ScrollHeader {
    pub fn new(host: Rc<dyn Host>, threshold: f64, on_change: ShrunkCallback) -> Self {
        Self {
            inner: Rc::new(Inner {
                host,
                threshold,
                shrunk: Cell::new(false),
                pending: Cell::new(None),
                on_change,
            }),
        }
    }

    pub fn is_shrunk(&self) -> bool {
        self.inner.shrunk.get()
    }

    /// Scroll event entry point. Schedules one recomputation for the next
    /// frame; further events arriving before that frame fires are absorbed.
    pub fn on_scroll(&self) {
        if self.inner.pending.get().is_some() {
            return;
        }
        let inner = Rc::clone(&self.inner);
        match self.inner.host.request_frame(Box::new(move |_ts| {
            inner.pending.set(None);
            inner.recompute();
        })) {
            Some(handle) => self.inner.pending.set(Some(handle)),
            // No frame scheduler: recompute inline.
            None => self.inner.recompute(),
        }
    }

    /// Cancels any scheduled recomputation. Called on unmount so a stale
    /// frame cannot fire after the header is gone.
    pub fn detach(&self) {
        if let Some(handle) = self.inner.pending.take() {
            self.inner.host.cancel_frame(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fake_host::FakeHost;
    use std::cell::RefCell;

    fn tracked(host: &Rc<FakeHost>) -> (ScrollHeader, Rc<RefCell<Vec<bool>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let header = ScrollHeader::new(
            host.clone(),
            SHRINK_THRESHOLD_PX,
            Box::new(move |v| sink.borrow_mut().push(v)),
        );
        (header, seen)
    }

    #[test]
    fn shrinks_only_above_threshold() {
        let host = FakeHost::new();
        let (header, _) = tracked(&host);

        host.scroll.set(SHRINK_THRESHOLD_PX);
        header.on_scroll();
        host.run_frame(16.0);
        assert!(!header.is_shrunk());

        host.scroll.set(SHRINK_THRESHOLD_PX + 1.0);
        header.on_scroll();
        host.run_frame(32.0);
        assert!(header.is_shrunk());

        host.scroll.set(0.0);
        header.on_scroll();
        host.run_frame(48.0);
        assert!(!header.is_shrunk());
    }

    #[test]
    fn coalesces_rapid_events_to_one_frame() {
        let host = FakeHost::new();
        let (header, seen) = tracked(&host);

        host.scroll.set(400.0);
        for _ in 0..5 {
            header.on_scroll();
        }
        assert_eq!(host.frames_requested.get(), 1);
        assert_eq!(host.pending_frames(), 1);

        host.run_frame(16.0);
        assert_eq!(seen.borrow().as_slice(), &[true]);

        // A frame has fired; the next event schedules again.
        header.on_scroll();
        assert_eq!(host.frames_requested.get(), 2);
    }

    #[test]
    fn detach_cancels_pending_frame() {
        let host = FakeHost::new();
        let (header, seen) = tracked(&host);

        host.scroll.set(400.0);
        header.on_scroll();
        assert_eq!(host.pending_frames(), 1);

        header.detach();
        assert_eq!(host.pending_frames(), 0);
        assert_eq!(host.cancelled.borrow().len(), 1);

        host.run_frame(16.0);
        assert!(seen.borrow().is_empty());
        assert!(!header.is_shrunk());
    }

    #[test]
    fn recomputes_inline_without_frame_scheduler() {
        let host = FakeHost::new();
        host.frames_available.set(false);
        let (header, seen) = tracked(&host);

        host.scroll.set(400.0);
        header.on_scroll();
        assert!(header.is_shrunk());
        assert_eq!(seen.borrow().as_slice(), &[true]);
    }

    #[test]
    fn unchanged_value_does_not_notify() {
        let host = FakeHost::new();
        let (header, seen) = tracked(&host);

        host.scroll.set(10.0);
        header.on_scroll();
        host.run_frame(16.0);
        assert!(seen.borrow().is_empty());
    }
}
