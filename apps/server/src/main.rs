//! # Stockroom Server
//!
//! REST API over the stockroom-core managers.
//!
//! ## Startup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  main()                                                             │
//! │    │                                                                │
//! │    ├── init tracing (RUST_LOG env-filter, default "info")           │
//! │    │                                                                │
//! │    ├── AppState::new()   ← managers created ONCE, live for the      │
//! │    │                       process lifetime                         │
//! │    │                                                                │
//! │    └── HttpServer::bind(STOCKROOM_ADDR, default 127.0.0.1:3000)     │
//! │              │                                                      │
//! │              └── App::configure(routes::configure)                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod error;
mod routes;
mod state;

#[cfg(test)]
mod tests;

use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

/// Env var overriding the bind address.
const ADDR_ENV: &str = "STOCKROOM_ADDR";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let addr = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let app_state = web::Data::new(AppState::new());

    info!(%addr, "stockroom server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(routes::configure)
    })
    .bind(&addr)?
    .run()
    .await
}
