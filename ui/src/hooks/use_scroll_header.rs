use crate::host;
use crate::state::scroll_header::{ScrollHeader, SHRINK_THRESHOLD_PX};
use dioxus::prelude::*;
use std::rc::Rc;

/// Subscribes the header to window scroll and returns the "shrunk" flag.
///
/// The scroll listener and any pending frame are both torn down when the
/// owning component unmounts.
pub fn use_scroll_header() -> Signal<bool> {
    let shrunk = use_signal(|| false);

    let header = use_hook(|| {
        Rc::new(ScrollHeader::new(
            host::default_host(),
            SHRINK_THRESHOLD_PX,
            Box::new(move |value| {
                let mut shrunk = shrunk;
                shrunk.set(value);
            }),
        ))
    });

    // Window scroll events only exist in the browser; elsewhere the header
    // simply stays expanded. The listener detaches when the hook value is
    // dropped.
    #[cfg(target_arch = "wasm32")]
    let _listener = use_hook(|| {
        let header = Rc::clone(&header);
        Rc::new(host::ScrollListener::attach(move || header.on_scroll()))
    });

    use_drop({
        let header = Rc::clone(&header);
        move || header.detach()
    });

    shrunk
}
