//! In-memory stand-in for the browser, used by the manager tests.

use crate::host::{FrameCallback, FrameHandle, Host};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Storage is a `HashMap`, frames are pumped manually with explicit
/// timestamps, and attribute/focus changes are recorded for assertions.
pub struct FakeHost {
    pub storage: RefCell<HashMap<String, String>>,
    pub storage_available: Cell<bool>,
    pub dark: Cell<bool>,
    pub reduced_motion: Cell<bool>,
    pub scroll: Cell<f64>,
    pub frames_available: Cell<bool>,
    pub frames_requested: Cell<usize>,
    pub cancelled: RefCell<Vec<u64>>,
    pub root_attrs: RefCell<HashMap<String, String>>,
    pub focused: RefCell<Option<String>>,
    next_frame: Cell<u64>,
    pending: RefCell<Vec<(u64, FrameCallback)>>,
}

impl FakeHost {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            storage: RefCell::new(HashMap::new()),
            storage_available: Cell::new(true),
            dark: Cell::new(false),
            reduced_motion: Cell::new(false),
            scroll: Cell::new(0.0),
            frames_available: Cell::new(true),
            frames_requested: Cell::new(0),
            cancelled: RefCell::new(Vec::new()),
            root_attrs: RefCell::new(HashMap::new()),
            focused: RefCell::new(None),
            next_frame: Cell::new(1),
            pending: RefCell::new(Vec::new()),
        })
    }

    pub fn pending_frames(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Fires every frame callback queued so far, in order, with timestamp
    /// `ts`. Callbacks that schedule follow-up frames queue them for the
    /// next pump, matching real frame cadence.
    pub fn run_frame(&self, ts: f64) {
        let batch: Vec<(u64, FrameCallback)> = self.pending.borrow_mut().drain(..).collect();
        for (_, cb) in batch {
            cb(ts);
        }
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.storage.borrow().get(key).cloned()
    }

    pub fn root_attr(&self, name: &str) -> Option<String> {
        self.root_attrs.borrow().get(name).cloned()
    }
}

impl Host for FakeHost {
    fn read_key(&self, key: &str) -> Option<String> {
        if !self.storage_available.get() {
            return None;
        }
        self.storage.borrow().get(key).cloned()
    }

    fn write_key(&self, key: &str, value: &str) {
        if !self.storage_available.get() {
            return;
        }
        self.storage
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn prefers_dark(&self) -> bool {
        self.dark.get()
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion.get()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll.get()
    }

    fn request_frame(&self, cb: FrameCallback) -> Option<FrameHandle> {
        if !self.frames_available.get() {
            return None;
        }
        let id = self.next_frame.get();
        self.next_frame.set(id + 1);
        self.frames_requested.set(self.frames_requested.get() + 1);
        self.pending.borrow_mut().push((id, cb));
        Some(FrameHandle(id))
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.pending.borrow_mut().retain(|(id, _)| *id != handle.0);
        self.cancelled.borrow_mut().push(handle.0);
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        self.root_attrs
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn active_element(&self) -> Option<String> {
        self.focused.borrow().clone()
    }

    fn focus_element(&self, id: &str) {
        *self.focused.borrow_mut() = Some(id.to_string());
    }
}
