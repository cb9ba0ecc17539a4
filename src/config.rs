//! Loading service configuration (upstream client + recommendation knobs) from TOML.
//!
//! Every field has a default, so an absent or partial file is fine. The tier
//! tables themselves live in `tiers` and are not configurable.

use serde::Deserialize;
use tracing::{error, info};

use crate::topics::DEFAULT_STRUGGLE_THRESHOLD;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
  #[serde(default)]
  pub upstream: UpstreamConfig,
  #[serde(default)]
  pub recommend: RecommendConfig,
}

/// Codeforces API client settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
  pub base_url: String,
  pub timeout_secs: u64,
  pub user_agent: String,
}

impl Default for UpstreamConfig {
  fn default() -> Self {
    Self {
      base_url: "https://codeforces.com/api".into(),
      timeout_secs: 20,
      user_agent: "cf-recommender/0.1".into(),
    }
  }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
  /// Users need strictly more submissions than this before struggle tags count.
  pub struggle_activity_threshold: usize,
}

impl Default for RecommendConfig {
  fn default() -> Self {
    Self { struggle_activity_threshold: DEFAULT_STRUGGLE_THRESHOLD }
  }
}

impl AppConfig {
  /// Read RECOMMENDER_CONFIG_PATH (if set), then apply env overrides.
  pub fn from_env() -> Self {
    let mut cfg = load_config_from_env().unwrap_or_default();
    if let Ok(url) = std::env::var("CODEFORCES_API_BASE_URL") {
      cfg.upstream.base_url = url;
    }
    cfg.upstream.base_url = cfg.upstream.base_url.trim_end_matches('/').to_string();
    cfg
  }
}

/// Attempt to load `AppConfig` from RECOMMENDER_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_config_from_env() -> Option<AppConfig> {
  let path = std::env::var("RECOMMENDER_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<AppConfig>(&s) {
      Ok(cfg) => {
        info!(target: "cf_recommender", %path, "Loaded config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "cf_recommender", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "cf_recommender", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
