//! A small set of reusable, lifetime-free Dioxus components in the
//! Pico.css spirit.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(optional)]
    aria_label: Option<String>,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let mut class = match props.button_type {
        ButtonType::Primary => String::new(),
        ButtonType::Secondary => "secondary".to_string(),
        ButtonType::Contrast => "contrast".to_string(),
    };
    if props.outline {
        if !class.is_empty() {
            class.push(' ');
        }
        class.push_str("outline");
    }
    rsx! {
        button {
            class: "{class}",
            "aria-label": props.aria_label.as_deref().unwrap_or_default(),
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
