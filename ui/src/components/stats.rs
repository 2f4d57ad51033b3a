//! The animated stats strip under the hero.

use crate::hooks::use_animated_counter::use_animated_counter;
use dioxus::prelude::*;

const STATS: [(&str, u64); 3] = [
    ("Active learners", 48_000),
    ("Courses", 320),
    ("Expert mentors", 450),
];

#[component]
pub fn StatsStrip() -> Element {
    rsx! {
        section { class: "stats",
            for (label, target) in STATS {
                StatCounter { label, target }
            }
        }
    }
}

#[component]
fn StatCounter(label: &'static str, target: u64) -> Element {
    let value = use_animated_counter(target);
    rsx! {
        div { class: "stat",
            span { class: "stat-value", "{value()}" }
            span { class: "stat-label", "{label}" }
        }
    }
}
