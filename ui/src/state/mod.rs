//! Presentation-state managers for the landing page.
//!
//! Each manager is independent, owns its current value, and pushes changes
//! through a callback supplied at construction; the hooks in
//! [`crate::hooks`] forward those changes into Dioxus signals. All ambient
//! access goes through [`crate::host::Host`], which keeps every manager
//! testable against an in-memory fake.

pub mod banner;
pub mod carousel;
pub mod counter;
pub mod nav_sheet;
pub mod scroll_header;
pub mod theme;

#[cfg(test)]
pub(crate) mod fake_host;
