use crate::host::{FrameHandle, Host};
use std::cell::Cell;
use std::rc::Rc;

/// How long a counter takes to reach its target.
pub const COUNT_DURATION_MS: f64 = 1_000.0;

pub type ValueCallback = Box<dyn Fn(u64)>;

/// Animates a displayed integer from 0 to a target over a fixed duration.
///
/// `displayed = floor(min(1, elapsed / duration) * target)`, advanced once
/// per animation frame and monotonically non-decreasing. A target change
/// mid-flight cancels the running loop and restarts from zero with the new
/// target; it never resumes from the current displayed value. Hosts without
/// a frame scheduler, and users preferring reduced motion, get the target
/// immediately.
pub struct AnimatedCounter {
    inner: Rc<Inner>,
}

struct Inner {
    host: Rc<dyn Host>,
    target: Cell<u64>,
    duration_ms: Cell<f64>,
    displayed: Cell<u64>,
    started_at: Cell<Option<f64>>,
    pending: Cell<Option<FrameHandle>>,
    // Bumped on every restart/cancel so a frame scheduled by a superseded
    // run cannot mutate the new one.
    run: Cell<u64>,
    on_change: ValueCallback,
}

impl Inner {
    fn set_displayed(&self, value: u64) {
        if value != self.displayed.get() {
            self.displayed.set(value);
            (self.on_change)(value);
        }
    }

    fn finish(&self) {
        self.set_displayed(self.target.get());
    }

    fn step(self: &Rc<Self>, ts: f64) {
        let started = match self.started_at.get() {
            Some(s) => s,
            None => {
                // First frame of this run establishes the time origin.
                self.started_at.set(Some(ts));
                ts
            }
        };
        let ratio = ((ts - started) / self.duration_ms.get()).clamp(0.0, 1.0);
        let value = (ratio * self.target.get() as f64).floor() as u64;
        if value > self.displayed.get() {
            self.set_displayed(value);
        }
        if ratio < 1.0 {
            self.schedule();
        }
    }

    fn schedule(self: &Rc<Self>) {
        let run = self.run.get();
        let inner = Rc::clone(self);
        match self.host.request_frame(Box::new(move |ts| {
            inner.pending.set(None);
            if inner.run.get() == run {
                inner.step(ts);
            }
        })) {
            Some(handle) => self.pending.set(Some(handle)),
            None => self.finish(),
        }
    }
}

impl AnimatedCounter {
    pub fn new(host: Rc<dyn Host>, on_change: ValueCallback) -> Self {
        Self {
            inner: Rc::new(Inner {
                host,
                target: Cell::new(0),
                duration_ms: Cell::new(COUNT_DURATION_MS),
                displayed: Cell::new(0),
                started_at: Cell::new(None),
                pending: Cell::new(None),
                run: Cell::new(0),
                on_change,
            }),
        }
    }

    pub fn displayed(&self) -> u64 {
        self.inner.displayed.get()
    }

    /// Begins (or restarts) the animation toward `target`. Any in-flight
    /// run is cancelled and the displayed value resets to zero first.
    pub fn start(&self, target: u64, duration_ms: f64) {
        self.cancel();
        let inner = &self.inner;
        inner.target.set(target);
        inner.duration_ms.set(duration_ms);
        inner.started_at.set(None);
        inner.displayed.set(0);
        (inner.on_change)(0);

        if target == 0 || duration_ms <= 0.0 || inner.host.prefers_reduced_motion() {
            inner.finish();
            return;
        }
        inner.schedule();
    }

    /// Stops the frame loop without completing. Called on unmount.
    pub fn cancel(&self) {
        self.inner.run.set(self.inner.run.get() + 1);
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

    fn tracked(host: &Rc<FakeHost>) -> (AnimatedCounter, Rc<RefCell<Vec<u64>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let counter = AnimatedCounter::new(
            host.clone(),
            Box::new(move |v| sink.borrow_mut().push(v)),
        );
        (counter, seen)
    }

    #[test]
    fn interpolates_from_zero_to_target() {
        let host = FakeHost::new();
        let (counter, _) = tracked(&host);

        counter.start(1_000, 1_000.0);
        host.run_frame(0.0);
        assert_eq!(counter.displayed(), 0);

        host.run_frame(500.0);
        assert_eq!(counter.displayed(), 500);

        host.run_frame(1_000.0);
        assert_eq!(counter.displayed(), 1_000);
        // Terminal: no further frames are scheduled.
        assert_eq!(host.pending_frames(), 0);
    }

    #[test]
    fn overshooting_timestamps_clamp_to_target() {
        let host = FakeHost::new();
        let (counter, _) = tracked(&host);

        counter.start(333, 1_000.0);
        host.run_frame(10.0);
        host.run_frame(5_000.0);
        assert_eq!(counter.displayed(), 333);
        assert_eq!(host.pending_frames(), 0);
    }

    #[test]
    fn displayed_sequence_is_monotonic() {
        let host = FakeHost::new();
        let (counter, seen) = tracked(&host);

        counter.start(1_000, 1_000.0);
        for ts in [0.0, 120.0, 119.0, 480.0, 479.0, 900.0, 1_000.0] {
            host.run_frame(ts);
        }
        let seen = seen.borrow();
        assert!(seen.windows(2).all(|w| w[0] <= w[1]), "{seen:?}");
        assert_eq!(*seen.last().unwrap(), 1_000);
    }

    #[test]
    fn target_change_restarts_from_zero() {
        let host = FakeHost::new();
        let (counter, seen) = tracked(&host);

        counter.start(1_000, 1_000.0);
        host.run_frame(0.0);
        host.run_frame(600.0);
        assert_eq!(counter.displayed(), 600);

        counter.start(50, 1_000.0);
        assert_eq!(counter.displayed(), 0);
        assert_eq!(*seen.borrow().last().unwrap(), 0);

        // Timing restarts at the next frame, not from the old origin.
        host.run_frame(700.0);
        assert_eq!(counter.displayed(), 0);
        host.run_frame(1_700.0);
        assert_eq!(counter.displayed(), 50);
        assert_eq!(host.pending_frames(), 0);
    }

    #[test]
    fn cancel_stops_scheduling() {
        let host = FakeHost::new();
        let (counter, _) = tracked(&host);

        counter.start(1_000, 1_000.0);
        host.run_frame(0.0);
        assert_eq!(host.pending_frames(), 1);

        counter.cancel();
        assert_eq!(host.pending_frames(), 0);
        host.run_frame(500.0);
        assert_eq!(counter.displayed(), 0);
    }

    #[test]
    fn no_frame_scheduler_resolves_immediately() {
        let host = FakeHost::new();
        host.frames_available.set(false);
        let (counter, _) = tracked(&host);

        counter.start(4_200, 1_000.0);
        assert_eq!(counter.displayed(), 4_200);
    }

    #[test]
    fn reduced_motion_resolves_immediately() {
        let host = FakeHost::new();
        host.reduced_motion.set(true);
        let (counter, _) = tracked(&host);

        counter.start(4_200, 1_000.0);
        assert_eq!(counter.displayed(), 4_200);
        assert_eq!(host.pending_frames(), 0);
    }
}
