// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod compat;
mod components;
pub mod hooks;
pub mod host;
mod screens;
pub mod state;

use screens::landing::LandingScreen;

#[allow(non_snake_case)]
pub fn App() -> Element {
    let landing_css = r#"
    * { box-sizing: border-box; }

    :root {
        --bg: #ffffff;
        --fg: #1d2430;
        --muted: #5b6676;
        --surface: #f4f6f9;
        --accent: #0d6e6e;
        --accent-contrast: #ffffff;
        --border: #d8dee8;
    }
    [data-theme="dark"] {
        --bg: #12161d;
        --fg: #e8ecf2;
        --muted: #9aa6b5;
        --surface: #1b212b;
        --accent: #3bb8b8;
        --accent-contrast: #0c1014;
        --border: #2a323e;
    }

    html, body {
        margin: 0;
        padding: 0;
        background-color: var(--bg);
        color: var(--fg);
        font-family: system-ui, sans-serif;
    }

    /* --- ANNOUNCEMENT BANNER --- */
    .announce {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.75rem;
        padding: 0.5rem 1rem;
        background-color: var(--accent);
        color: var(--accent-contrast);
    }
    .announce p { margin: 0; }
    .announce-dismiss {
        background: none;
        border: none;
        color: inherit;
        font-size: 1.1rem;
        cursor: pointer;
    }

    /* --- HEADER --- */
    .site-header {
        position: sticky;
        top: 0;
        z-index: 50;
        background-color: var(--bg);
        border-bottom: 1px solid var(--border);
        transition: padding 0.2s ease, box-shadow 0.2s ease;
        padding: 1rem 1.5rem;
    }
    .site-header.shrunk {
        padding: 0.35rem 1.5rem;
        box-shadow: 0 2px 8px rgba(0, 0, 0, 0.12);
    }
    .site-header nav {
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 1rem;
    }
    .brand { font-weight: 700; color: var(--fg); text-decoration: none; }
    .nav-links {
        display: flex;
        gap: 1.25rem;
        list-style: none;
        margin: 0;
        padding: 0;
    }
    .nav-links a { color: var(--muted); text-decoration: none; }
    .nav-links a:hover { color: var(--fg); }
    .header-actions { display: flex; align-items: center; gap: 0.5rem; }
    .theme-toggle, .nav-trigger {
        background: none;
        border: 1px solid var(--border);
        border-radius: 6px;
        color: var(--fg);
        padding: 0.25rem 0.6rem;
        font-size: 1rem;
        cursor: pointer;
    }
    .nav-trigger { display: none; }

    /* --- MOBILE SHEET --- */
    .sheet-backdrop {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.45);
        z-index: 90;
    }
    .nav-sheet {
        position: fixed;
        top: 0;
        right: 0;
        bottom: 0;
        width: min(20rem, 85vw);
        background-color: var(--bg);
        border-left: 1px solid var(--border);
        padding: 1.25rem;
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
        z-index: 100;
    }
    .sheet-close {
        align-self: flex-end;
        background: none;
        border: none;
        color: var(--fg);
        font-size: 1.4rem;
        cursor: pointer;
    }
    .sheet-link { color: var(--fg); text-decoration: none; padding: 0.4rem 0; }

    @media (max-width: 720px) {
        .nav-links { display: none; }
        .nav-trigger { display: inline-block; }
    }

    /* --- CONTENT --- */
    .container { max-width: 64rem; margin: 0 auto; padding: 0 1.5rem; }
    .hero { padding: 4rem 0 2rem; text-align: center; }
    .hero h1 { font-size: 2.4rem; margin-bottom: 0.5rem; }
    .hero-tagline { color: var(--muted); font-size: 1.15rem; }
    .hero-cta { display: flex; justify-content: center; gap: 1rem; margin-top: 1.5rem; }
    .cta-primary, .cta-secondary {
        padding: 0.6rem 1.4rem;
        border-radius: 8px;
        text-decoration: none;
    }
    .cta-primary { background-color: var(--accent); color: var(--accent-contrast); }
    .cta-secondary { border: 1px solid var(--border); color: var(--fg); }

    .stats {
        display: flex;
        justify-content: space-around;
        gap: 1rem;
        padding: 2rem 0;
        border-top: 1px solid var(--border);
        border-bottom: 1px solid var(--border);
    }
    .stat { display: flex; flex-direction: column; align-items: center; }
    .stat-value { font-size: 2rem; font-weight: 700; }
    .stat-label { color: var(--muted); }

    .feature-grid, .mentors, .pricing { padding: 2.5rem 0; }
    .features { display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 1rem; }
    .features article, .testimonials article {
        background-color: var(--surface);
        border: 1px solid var(--border);
        border-radius: 10px;
        padding: 1rem 1.25rem;
    }

    .testimonials { padding: 2.5rem 0; }
    .testimonials blockquote { margin: 0 0 0.75rem; font-style: italic; }
    .attribution { color: var(--muted); margin: 0; }
    .carousel-controls {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 1rem;
        margin-top: 1rem;
    }
    .carousel-controls button {
        background: none;
        border: 1px solid var(--border);
        border-radius: 6px;
        color: var(--fg);
        padding: 0.2rem 0.7rem;
        cursor: pointer;
    }
    .carousel-position { color: var(--muted); }

    .site-footer {
        border-top: 1px solid var(--border);
        color: var(--muted);
        text-align: center;
        padding: 1.5rem;
        margin-top: 3rem;
    }
"#;

    rsx! {
        document::Title { "Meridian Academy" }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style { "{landing_css}" }
        LandingScreen {}
    }
}
