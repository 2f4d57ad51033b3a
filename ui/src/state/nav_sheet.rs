use crate::host::Host;
use std::cell::RefCell;
use std::rc::Rc;

pub type OpenCallback = Box<dyn Fn(bool)>;

enum SheetState {
    Closed,
    Open {
        restore_to: Option<String>,
        focusables: Vec<String>,
    },
}

/// Open/closed state machine for the mobile navigation overlay, including
/// the focus trap.
///
/// The ordered focusable set is supplied once when the sheet opens; Tab and
/// Shift+Tab wrap around it with index arithmetic, so focus cannot reach
/// the page behind the overlay. Closing by any path (close button, backdrop
/// activation, Escape) restores focus to the element that was focused when
/// the sheet opened.
pub struct NavSheet {
    host: Rc<dyn Host>,
    state: RefCell<SheetState>,
    on_change: OpenCallback,
}

impl NavSheet {
    pub fn new(host: Rc<dyn Host>, on_change: OpenCallback) -> Self {
        Self {
            host,
            state: RefCell::new(SheetState::Closed),
            on_change,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(*self.state.borrow(), SheetState::Open { .. })
    }

    /// closed -> open. Captures the currently focused element for later
    /// restoration and moves focus to the first entry of `focusables`.
    pub fn open(&self, focusables: Vec<String>) {
        if self.is_open() {
            return;
        }
        let restore_to = self.host.active_element();
        if let Some(first) = focusables.first() {
            self.host.focus_element(first);
        }
        *self.state.borrow_mut() = SheetState::Open {
            restore_to,
            focusables,
        };
        (self.on_change)(true);
    }

    /// open -> closed, from any close path.
    pub fn close(&self) {
        let prev = std::mem::replace(&mut *self.state.borrow_mut(), SheetState::Closed);
        match prev {
            SheetState::Closed => {}
            SheetState::Open { restore_to, .. } => {
                if let Some(id) = restore_to {
                    self.host.focus_element(&id);
                }
                (self.on_change)(false);
            }
        }
    }

    /// Escape pressed while the sheet has focus.
    pub fn handle_escape(&self) {
        self.close();
    }

    /// Tab / Shift+Tab while open. Returns true when the event was consumed
    /// and the caller must suppress the browser's default focus move.
    pub fn handle_tab(&self, shift: bool) -> bool {
        let state = self.state.borrow();
        let SheetState::Open { focusables, .. } = &*state else {
            return false;
        };
        if focusables.is_empty() {
            return true;
        }
        let len = focusables.len();
        let position = self
            .host
            .active_element()
            .and_then(|id| focusables.iter().position(|f| *f == id))
            .unwrap_or(0);
        let next = if shift {
            (position + len - 1) % len
        } else {
            (position + 1) % len
        };
        self.host.focus_element(&focusables[next]);
        true
    }
}
