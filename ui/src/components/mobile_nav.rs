use crate::components::site_header::NAV_LINKS;
use crate::hooks::use_nav_sheet::use_nav_sheet;
use dioxus::prelude::*;

/// Tab order inside the sheet, computed when it opens: the close button
/// first, then the navigation links.
fn sheet_focus_order() -> Vec<String> {
    let mut order = vec!["m-nav-close".to_string()];
    order.extend(NAV_LINKS.iter().map(|(id, _, _)| format!("m-nav-{id}")));
    order
}

/// The mobile "hamburger" trigger plus the navigation sheet it opens.
///
/// The backdrop and key handlers are part of the overlay subtree, so they
/// exist only while the sheet is open.
#[component]
pub fn MobileNav() -> Element {
    let nav = use_nav_sheet();

    rsx! {
        button {
            id: "nav-open",
            class: "nav-trigger",
            "aria-label": "Open navigation",
            "aria-expanded": if nav.is_open() { "true" } else { "false" },
            onclick: move |_| nav.open(sheet_focus_order()),
            "\u{2261}"
        }
        if nav.is_open() {
            div {
                class: "sheet-backdrop",
                onclick: move |_| nav.close(),
            }
            div {
                class: "nav-sheet",
                role: "dialog",
                "aria-modal": "true",
                onkeydown: move |event| nav.on_key_down(event),
                button {
                    id: "m-nav-close",
                    class: "sheet-close",
                    "aria-label": "Close navigation",
                    onclick: move |_| nav.close(),
                    "\u{00d7}"
                }
                for (id, label, href) in NAV_LINKS {
                    a {
                        id: "m-nav-{id}",
                        class: "sheet-link",
                        href,
                        onclick: move |_| nav.close(),
                        "{label}"
                    }
                }
            }
        }
    }
}
