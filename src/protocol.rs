//! Public response structs for the HTTP endpoints (serde ready).
//! Keys mirror what the web frontend already consumes, so keep them stable.

use serde::Serialize;

use crate::domain::{Problem, UserProfile};

/// Payload of `GET /api/recommend/:handle`.
#[derive(Debug, Serialize)]
pub struct RecommendationOut {
    pub user_info: UserProfile,
    pub recommended_problems: Vec<Problem>,
    /// Base topics of the user's tier, in table order.
    pub important_topics: Vec<String>,
    /// Top failure tags; empty unless the user is active enough.
    pub struggle_topics: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorOut {
    pub error: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
