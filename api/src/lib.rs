//! This crate contains all shared fullstack server functions.

#[cfg(not(target_arch = "wasm32"))]
pub mod db;

use dioxus::prelude::*;
use serde::Deserialize;
use serde::Serialize;

pub type ApiError = ServerFnError;

/// Wire type of the placeholder endpoint: `{ "message": "..." }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Welcome {
    pub message: String,
}

/// Placeholder endpoint consumed by the landing page hero.
///
/// There is no dynamic data behind this yet; it exists so the page
/// exercises a full round trip through the server.
#[server(WelcomeFn)]
pub async fn welcome() -> Result<Welcome, ServerFnError> {
    Ok(Welcome {
        message: "Learn anything, anywhere.".to_string(),
    })
}
