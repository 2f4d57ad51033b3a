use crate::hooks::use_banner::use_banner;
use dioxus::prelude::*;

#[component]
pub fn AnnouncementBanner() -> Element {
    let banner = use_banner();

    // Once dismissed the banner leaves the tree entirely (zero layout
    // footprint), it is not merely hidden.
    if banner.is_dismissed() {
        return rsx! {};
    }

    rsx! {
        aside {
            class: "announce",
            role: "status",
            p { "New: cohort-based courses open for fall enrollment." }
            button {
                class: "announce-dismiss",
                "aria-label": "Dismiss announcement",
                onclick: move |_| banner.dismiss(),
                "\u{00d7}"
            }
        }
    }
}
