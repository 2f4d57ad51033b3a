use dioxus::prelude::*;

#[component]
pub fn Hero(tagline: String) -> Element {
    rsx! {
        section { class: "hero",
            h1 { "Level up your craft with courses that stick." }
            p { class: "hero-tagline", "{tagline}" }
            div { class: "hero-cta",
                a { class: "cta-primary", href: "#courses", "Browse courses" }
                a { class: "cta-secondary", href: "#pricing", "See pricing" }
            }
        }
    }
}
