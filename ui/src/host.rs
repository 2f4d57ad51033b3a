//! Host capabilities behind the presentation-state managers.
//!
//! Everything the managers need from the surrounding environment (persisted
//! storage, media queries, scroll offset, frame scheduling, focus) sits
//! behind the [`Host`] trait, so the state logic can be driven by the
//! browser in production and by an in-memory fake in tests.

use std::rc::Rc;

/// Identifies a scheduled animation-frame callback so it can be cancelled.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FrameHandle(pub u64);

pub type FrameCallback = Box<dyn FnOnce(f64)>;

pub trait Host {
    /// Best-effort read of a persisted key. `None` when the key is missing
    /// or storage is unavailable.
    fn read_key(&self, key: &str) -> Option<String>;

    /// Best-effort write. Failures (private browsing, quota) are swallowed;
    /// the in-memory value still governs rendering.
    fn write_key(&self, key: &str, value: &str);

    /// OS-level `(prefers-color-scheme: dark)` signal, polled once at mount.
    fn prefers_dark(&self) -> bool;

    /// OS-level `(prefers-reduced-motion: reduce)` signal.
    fn prefers_reduced_motion(&self) -> bool;

    /// Current vertical scroll offset in pixels.
    fn scroll_y(&self) -> f64;

    /// Schedules `cb` for the next animation frame, passing a timestamp in
    /// milliseconds. Returns `None` where no frame scheduler exists
    /// (server-side rendering, headless hosts); callers treat that as
    /// instant completion.
    fn request_frame(&self, cb: FrameCallback) -> Option<FrameHandle>;

    fn cancel_frame(&self, handle: FrameHandle);

    /// Sets an attribute on the document root, used for the `data-theme`
    /// visual mode flag.
    fn set_root_attribute(&self, name: &str, value: &str);

    /// Id of the currently focused element, when it has one.
    fn active_element(&self) -> Option<String>;

    /// Moves focus to the element with the given id, if present.
    fn focus_element(&self, id: &str);
}

/// The host the running app binds to: the browser on wasm, a no-op
/// stand-in everywhere else (server-side rendering never animates).
pub fn default_host() -> Rc<dyn Host> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(wasm32::BrowserHost)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(HeadlessHost)
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use super::{FrameCallback, FrameHandle, Host};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Storage, Window};

    fn window() -> Option<Window> {
        web_sys::window()
    }

    fn local_storage() -> Option<Storage> {
        window()?.local_storage().ok().flatten()
    }

    fn media_matches(query: &str) -> bool {
        window()
            .and_then(|w| w.match_media(query).ok().flatten())
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }

    /// [`Host`] bound to the real browser via `web-sys`.
    pub struct BrowserHost;

    impl Host for BrowserHost {
        fn read_key(&self, key: &str) -> Option<String> {
            local_storage()?.get_item(key).ok().flatten()
        }

        fn write_key(&self, key: &str, value: &str) {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }

        fn prefers_dark(&self) -> bool {
            media_matches("(prefers-color-scheme: dark)")
        }

        fn prefers_reduced_motion(&self) -> bool {
            media_matches("(prefers-reduced-motion: reduce)")
        }

        fn scroll_y(&self) -> f64 {
            window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
        }

        fn request_frame(&self, cb: FrameCallback) -> Option<FrameHandle> {
            let win = window()?;
            let closure = Closure::once(move |ts: f64| cb(ts));
            let id = win
                .request_animation_frame(closure.as_ref().unchecked_ref())
                .ok()?;
            closure.forget();
            Some(FrameHandle(id as u64))
        }

        fn cancel_frame(&self, handle: FrameHandle) {
            if let Some(win) = window() {
                let _ = win.cancel_animation_frame(handle.0 as i32);
            }
        }

        fn set_root_attribute(&self, name: &str, value: &str) {
            if let Some(root) = window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = root.set_attribute(name, value);
            }
        }

        fn active_element(&self) -> Option<String> {
            let el = window()?.document()?.active_element()?;
            let id = el.id();
            if id.is_empty() {
                None
            } else {
                Some(id)
            }
        }

        fn focus_element(&self, id: &str) {
            if let Some(el) = window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(id))
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            {
                let _ = el.focus();
            }
        }
    }

    /// Window scroll subscription that detaches on drop.
    pub struct ScrollListener {
        closure: Closure<dyn FnMut()>,
    }

    impl ScrollListener {
        pub fn attach(on_scroll: impl Fn() + 'static) -> Option<Self> {
            let win = window()?;
            let closure = Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);
            win.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
                .ok()?;
            Some(Self { closure })
        }
    }

    impl Drop for ScrollListener {
        fn drop(&mut self) {
            if let Some(win) = window() {
                let _ = win.remove_event_listener_with_callback(
                    "scroll",
                    self.closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

/// Host for non-browser contexts: storage is absent and frames never fire,
/// so animations resolve instantly and persistence reads fall back to
/// defaults.
#[cfg(not(target_arch = "wasm32"))]
pub struct HeadlessHost;

#[cfg(not(target_arch = "wasm32"))]
impl Host for HeadlessHost {
    fn read_key(&self, _key: &str) -> Option<String> {
        None
    }

    fn write_key(&self, _key: &str, _value: &str) {}

    fn prefers_dark(&self) -> bool {
        false
    }

    fn prefers_reduced_motion(&self) -> bool {
        false
    }

    fn scroll_y(&self) -> f64 {
        0.0
    }

    fn request_frame(&self, _cb: FrameCallback) -> Option<FrameHandle> {
        None
    }

    fn cancel_frame(&self, _handle: FrameHandle) {}

    fn set_root_attribute(&self, _name: &str, _value: &str) {}

    fn active_element(&self) -> Option<String> {
        None
    }

    fn focus_element(&self, _id: &str) {}
}
