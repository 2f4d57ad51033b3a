use crate::components::announcement_banner::AnnouncementBanner;
use crate::components::hero::Hero;
use crate::components::pico::Container;
use crate::components::site_header::SiteHeader;
use crate::components::stats::StatsStrip;
use crate::components::testimonials::Testimonials;
use dioxus::prelude::*;

#[component]
pub fn LandingScreen() -> Element {
    // Fetched once on mount. Until the response arrives, and forever if it
    // fails, the hero shows the static fallback; failures are logged only.
    let welcome = use_server_future(move || async move { api::welcome().await })?;

    let tagline = match &*welcome.read() {
        Some(Ok(w)) => w.message.clone(),
        Some(Err(e)) => {
            dioxus_logger::tracing::warn!("welcome endpoint failed: {e}");
            "Loading...".to_string()
        }
        None => "Loading...".to_string(),
    };

    rsx! {
        AnnouncementBanner {}
        SiteHeader {}
        Container {
            Hero { tagline }
            StatsStrip {}
            section { class: "feature-grid", id: "courses",
                h2 { "Tracks that go somewhere" }
                div { class: "features",
                    article {
                        h3 { "Backend engineering" }
                        p { "Twelve weeks from fundamentals to a deployed service." }
                    }
                    article {
                        h3 { "Data analytics" }
                        p { "Work real datasets with a mentor reviewing every project." }
                    }
                    article {
                        h3 { "Product design" }
                        p { "Portfolio-first curriculum with weekly critique." }
                    }
                }
            }
            section { class: "mentors", id: "mentors",
                h2 { "Mentors from the industry" }
                p { "Every cohort is paired with working engineers and designers." }
            }
            section { class: "pricing", id: "pricing",
                h2 { "Simple pricing" }
                p { "One subscription, every track. Cancel anytime." }
            }
            Testimonials {}
        }
        footer { class: "site-footer",
            p { "\u{00a9} 2026 Meridian Academy" }
        }
    }
}
