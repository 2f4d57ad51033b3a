//! Hooks bridging the state managers into Dioxus signals.

pub mod use_animated_counter;
pub mod use_banner;
pub mod use_nav_sheet;
pub mod use_scroll_header;
pub mod use_theme;
