use crate::host::Host;
use std::cell::Cell;
use std::rc::Rc;

pub const BANNER_DISMISSED_KEY: &str = "announce-dismissed";

/// Persisted dismissed/shown flag for the announcement banner.
///
/// Dismissal is one-way: nothing in the UI clears the flag again, so the
/// banner stays gone across reloads until the stored key is removed
/// externally.
pub struct BannerState {
    host: Rc<dyn Host>,
    dismissed: Cell<bool>,
}

impl BannerState {
    pub fn new(host: Rc<dyn Host>) -> Self {
        let dismissed = host.read_key(BANNER_DISMISSED_KEY).as_deref() == Some("1");
        Self {
            host,
            dismissed: Cell::new(dismissed),
        }
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed.get()
    }

    pub fn dismiss(&self) {
        self.dismissed.set(true);
        self.host.write_key(BANNER_DISMISSED_KEY, "1");
    }
}
