use crate::host;
use crate::state::banner::BannerState;
use dioxus::prelude::*;
use std::rc::Rc;

/// Handle returned by [`use_banner`]; copyable into event handlers.
#[derive(Clone, Copy)]
pub struct UseBanner {
    dismissed: Signal<bool>,
    state: Signal<Rc<BannerState>>,
}

impl UseBanner {
    pub fn is_dismissed(&self) -> bool {
        *self.dismissed.read()
    }

    pub fn dismiss(&self) {
        self.state.peek().dismiss();
        let mut dismissed = self.dismissed;
        dismissed.set(true);
    }
}

/// Reads the persisted dismissed flag once at mount.
pub fn use_banner() -> UseBanner {
    let state = use_signal(|| Rc::new(BannerState::new(host::default_host())));
    let dismissed = use_signal(move || state.peek().is_dismissed());
    UseBanner { dismissed, state }
}
