use crate::components::mobile_nav::MobileNav;
use crate::hooks::use_scroll_header::use_scroll_header;
use crate::hooks::use_theme::use_theme;
use crate::state::theme::Theme;
use dioxus::prelude::*;

/// Top-level navigation entries, shared by the desktop header and the
/// mobile sheet.
pub const NAV_LINKS: [(&str, &str, &str); 4] = [
    ("courses", "Courses", "#courses"),
    ("mentors", "Mentors", "#mentors"),
    ("pricing", "Pricing", "#pricing"),
    ("stories", "Stories", "#stories"),
];

#[component]
pub fn SiteHeader() -> Element {
    let shrunk = use_scroll_header();
    let theme = use_theme();

    let header_class = if shrunk() {
        "site-header shrunk"
    } else {
        "site-header"
    };
    let (theme_icon, theme_label) = match theme.theme() {
        Theme::Light => ("\u{263e}", "Switch to dark theme"),
        Theme::Dark => ("\u{2600}", "Switch to light theme"),
    };

    rsx! {
        header { class: "{header_class}",
            nav {
                a { class: "brand", href: "#", "Meridian Academy" }
                ul { class: "nav-links",
                    for (_id, label, href) in NAV_LINKS {
                        li {
                            a { href, "{label}" }
                        }
                    }
                }
                div { class: "header-actions",
                    button {
                        class: "theme-toggle",
                        "aria-label": theme_label,
                        onclick: move |_| theme.toggle(),
                        "{theme_icon}"
                    }
                    MobileNav {}
                }
            }
        }
    }
}
