use crate::compat;
use crate::components::pico::{Button, ButtonType, Card};
use crate::state::carousel::Carousel;
use dioxus::prelude::*;
use std::time::Duration;

const SLIDES: [(&str, &str); 3] = [
    (
        "Maya R.",
        "The mentor feedback loop is unreal. I shipped my first production service three weeks into the backend track.",
    ),
    (
        "Jonas K.",
        "I'd bounced off online courses for years. The cohort format finally made it stick.",
    ),
    (
        "Priya S.",
        "Moved from support to a junior data role in eight months. The projects were the difference.",
    ),
];

const ADVANCE_EVERY: Duration = Duration::from_secs(7);

#[component]
pub fn Testimonials() -> Element {
    let mut carousel = use_signal(|| Carousel::new(SLIDES.len()));
    let mut paused = use_signal(|| false);

    // Auto-advance, suspended while the pointer is over the section.
    use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        loop {
            compat::sleep(ADVANCE_EVERY).await;
            if !paused() {
                carousel.write().next();
            }
        }
    });

    let (author, quote) = SLIDES[carousel().index()];

    rsx! {
        section {
            class: "testimonials",
            id: "stories",
            onmouseenter: move |_| paused.set(true),
            onmouseleave: move |_| paused.set(false),
            h2 { "Learner stories" }
            Card {
                blockquote { "{quote}" }
                p { class: "attribution", "\u{2014} {author}" }
            }
            div { class: "carousel-controls",
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    aria_label: "Previous story".to_string(),
                    on_click: move |_| carousel.write().prev(),
                    "\u{2039}"
                }
                span { class: "carousel-position",
                    {format!("{} / {}", carousel().index() + 1, SLIDES.len())}
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    aria_label: "Next story".to_string(),
                    on_click: move |_| carousel.write().next(),
                    "\u{203a}"
                }
            }
        }
    }
}
