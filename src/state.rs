//! Application state: upstream client and recommendation settings.
//!
//! Nothing here is mutated after startup. Each request runs the whole
//! recommendation flow against fresh upstream data; there is no cache.

use tracing::{info, instrument};

use crate::codeforces::{CodeforcesClient, ProblemSource};
use crate::config::{AppConfig, RecommendConfig};
use crate::error::RecommendError;

#[derive(Clone)]
pub struct AppState<S = CodeforcesClient> {
    pub source: S,
    pub recommend: RecommendConfig,
}

impl AppState<CodeforcesClient> {
    /// Build state from config: Codeforces client plus recommendation knobs.
    #[instrument(level = "info", skip_all)]
    pub fn new(cfg: &AppConfig) -> Result<Self, RecommendError> {
        let source = CodeforcesClient::new(&cfg.upstream)?;
        info!(
            target: "cf_recommender",
            base_url = %source.base_url,
            timeout_secs = cfg.upstream.timeout_secs,
            struggle_threshold = cfg.recommend.struggle_activity_threshold,
            "Codeforces client ready."
        );
        Ok(Self::with_source(source, cfg.recommend.clone()))
    }
}

impl<S: ProblemSource> AppState<S> {
    pub fn with_source(source: S, recommend: RecommendConfig) -> Self {
        Self { source, recommend }
    }
}
