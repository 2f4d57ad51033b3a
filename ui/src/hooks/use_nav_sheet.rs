use crate::host;
use crate::state::nav_sheet::NavSheet;
use dioxus::html::input_data::keyboard_types::{Key, Modifiers};
use dioxus::prelude::*;
use std::rc::Rc;

/// Handle returned by [`use_nav_sheet`]; copyable into event handlers.
#[derive(Clone, Copy)]
pub struct UseNavSheet {
    open: Signal<bool>,
    sheet: Signal<Rc<NavSheet>>,
}

impl UseNavSheet {
    pub fn is_open(&self) -> bool {
        *self.open.read()
    }

    pub fn open(&self, focusables: Vec<String>) {
        self.sheet.peek().open(focusables);
    }

    pub fn close(&self) {
        self.sheet.peek().close();
    }

    /// Keyboard handler for the overlay element; consumes Escape and Tab.
    /// The handler only exists while the overlay is rendered, so no global
    /// listener outlives the open state.
    pub fn on_key_down(&self, event: Event<KeyboardData>) {
        let sheet = self.sheet.peek();
        match event.data().key() {
            Key::Escape => sheet.handle_escape(),
            Key::Tab => {
                let shift = event.data().modifiers().contains(Modifiers::SHIFT);
                if sheet.handle_tab(shift) {
                    event.prevent_default();
                }
            }
            _ => {}
        }
    }
}

pub fn use_nav_sheet() -> UseNavSheet {
    let open = use_signal(|| false);
    let sheet = use_signal(move || {
        Rc::new(NavSheet::new(
            host::default_host(),
            Box::new(move |is_open| {
                let mut open = open;
                open.set(is_open);
            }),
        ))
    });
    UseNavSheet { open, sheet }
}
