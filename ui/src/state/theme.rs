use crate::host::Host;
use std::cell::Cell;
use std::rc::Rc;

pub const THEME_KEY: &str = "theme";

/// Visual mode for the whole page, mirrored onto the document root as a
/// `data-theme` attribute so every component can derive styling from it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Resolves and persists the light/dark preference.
///
/// Mutated only by the explicit user toggle; the persisted value is read
/// once when the UI mounts.
pub struct ThemeManager {
    host: Rc<dyn Host>,
    current: Cell<Theme>,
}

impl ThemeManager {
    /// Resolution order: valid persisted value, then the OS color-scheme
    /// signal, then light.
    pub fn initial(host: &dyn Host) -> Theme {
        if let Some(stored) = host.read_key(THEME_KEY).and_then(|v| Theme::from_str(&v)) {
            return stored;
        }
        if host.prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn new(host: Rc<dyn Host>) -> Self {
        let current = Self::initial(host.as_ref());
        host.set_root_attribute("data-theme", current.as_str());
        Self {
            host,
            current: Cell::new(current),
        }
    }

    pub fn current(&self) -> Theme {
        self.current.get()
    }

    /// Flips the theme, persists it (best-effort), and reapplies the root
    /// attribute. Returns the new value.
    pub fn toggle(&self) -> Theme {
        let next = self.current.get().toggled();
        self.current.set(next);
        self.host.write_key(THEME_KEY, next.as_str());
        self.host.set_root_attribute("data-theme", next.as_str());
        next
    }
}
