use crate::host;
use crate::state::theme::{Theme, ThemeManager};
use dioxus::prelude::*;
use std::rc::Rc;

/// Handle returned by [`use_theme`]; copyable into event handlers.
#[derive(Clone, Copy)]
pub struct UseTheme {
    theme: Signal<Theme>,
    manager: Signal<Rc<ThemeManager>>,
}

impl UseTheme {
    pub fn theme(&self) -> Theme {
        *self.theme.read()
    }

    pub fn toggle(&self) {
        let next = self.manager.peek().toggle();
        let mut theme = self.theme;
        theme.set(next);
    }
}

/// Resolves the theme once at mount (applying the `data-theme` root
/// attribute as a side effect) and exposes the toggle.
pub fn use_theme() -> UseTheme {
    let manager = use_signal(|| Rc::new(ThemeManager::new(host::default_host())));
    let theme = use_signal(move || manager.peek().current());
    UseTheme { theme, manager }
}
