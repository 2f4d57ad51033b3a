//! Database connection bootstrap.
//!
//! The landing page does not read from the database; this only verifies at
//! startup that a pool can be established for the demo endpoints that will.

use dioxus_logger::tracing;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

const CONNECT_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(2);

pub fn database_url() -> String {
    const DEFAULT_URL: &str = "postgres://localhost:5432/meridian";
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_URL.to_string())
}

/// Establishes the connection pool, retrying a fixed number of times.
pub async fn bootstrap() -> Result<PgPool, sqlx::Error> {
    let url = database_url();
    let mut last_err = None;

    for attempt in 1..=CONNECT_ATTEMPTS {
        match PgPoolOptions::new().max_connections(5).connect(&url).await {
            Ok(pool) => {
                tracing::info!("database pool established on attempt {attempt}");
                return Ok(pool);
            }
            Err(e) => {
                tracing::warn!(
                    "database connect attempt {attempt}/{CONNECT_ATTEMPTS} failed: {e}"
                );
                last_err = Some(e);
                if attempt < CONNECT_ATTEMPTS {
                    tokio::time::sleep(RETRY_DELAY).await;
                }
            }
        }
    }

    Err(last_err.unwrap_or(sqlx::Error::PoolClosed))
}
