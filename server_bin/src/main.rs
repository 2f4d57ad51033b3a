use dioxus::fullstack::prelude::*;
use dioxus::prelude::*;
use dioxus_logger::tracing;
use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    dioxus_logger::init(tracing::Level::INFO).expect("failed to init logger");

    // The landing page never touches the database; a failed bootstrap is
    // logged and the server still comes up.
    match api::db::bootstrap().await {
        Ok(_pool) => tracing::info!("database ready"),
        Err(e) => tracing::warn!("database bootstrap failed: {e}"),
    }

    let addr: SocketAddr = std::env::var("MERIDIAN_BIND_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()
        .expect("invalid MERIDIAN_BIND_ADDR");
    println!("Server listening on http://{}", addr);

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfigBuilder::default(), App)
        .into_make_service();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind server address");
    axum::serve(listener, router)
        .await
        .expect("server error");
}

#[component]
fn App() -> Element {
    ui::App()
}
