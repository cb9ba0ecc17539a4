//! cf-recommender · Codeforces practice problem recommender
//!
//! - Axum HTTP API
//! - Pulls profile, submissions and the problem catalog from the Codeforces API per request
//! - Recommends a batch of six unsolved problems matched to the user's rating tier
//!
//! Important env variables:
//!   PORT                     : u16 (default 3000)
//!   CODEFORCES_API_BASE_URL  : default "https://codeforces.com/api"
//!   RECOMMENDER_CONFIG_PATH  : path to TOML config (upstream + recommendation settings)
//!   LOG_LEVEL                : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT               : "pretty" (default) or "json"

mod telemetry;
mod util;
mod domain;
mod config;
mod error;
mod tiers;
mod analyzer;
mod topics;
mod sampler;
mod codeforces;
mod state;
mod protocol;
mod recommend;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::config::AppConfig;
use crate::routes::build_router;
use crate::state::AppState;

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let cfg = AppConfig::from_env();

  // Shared application state (Codeforces client + settings).
  let state = Arc::new(AppState::new(&cfg)?);

  // Build the HTTP router with routes, CORS and tracing layers.
  let app = build_router(state);

  // Read port from env or default to 3000.
  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "cf_recommender", %addr, "HTTP server listening");
  axum::serve(listener, app).await?;
  Ok(())
}
