//! The components module contains all shared components for our app.
//! Components are the building blocks of dioxus apps. Here they are the
//! landing page sections plus a small set of generic elements.

pub mod announcement_banner;
pub mod hero;
pub mod mobile_nav;
pub mod pico;
pub mod site_header;
pub mod stats;
pub mod testimonials;
