//! HTTP endpoint handlers. These are thin wrappers that forward to the recommendation flow.
//! Each handler is instrumented and logs the handle and basic result info.

use std::sync::Arc;
use axum::{extract::{Path, State}, Json, response::IntoResponse};
use tracing::{info, instrument, warn};

use crate::codeforces::ProblemSource;
use crate::domain::UserProfile;
use crate::error::RecommendError;
use crate::protocol::*;
use crate::recommend::{recommend, user_info};
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state), fields(%handle))]
pub async fn http_user_info<S: ProblemSource>(
  State(state): State<Arc<AppState<S>>>,
  Path(handle): Path<String>,
) -> Result<Json<UserProfile>, RecommendError> {
  match user_info(&state.source, &handle).await {
    Ok(user) => {
      info!(target: "cf_recommender", %handle, tier = ?user.tier, "HTTP user info served");
      Ok(Json(user))
    }
    Err(e) => {
      warn!(target: "cf_recommender", %handle, error = %e, "HTTP user info failed");
      Err(e)
    }
  }
}

#[instrument(level = "info", skip(state), fields(%handle))]
pub async fn http_recommend<S: ProblemSource>(
  State(state): State<Arc<AppState<S>>>,
  Path(handle): Path<String>,
) -> Result<Json<RecommendationOut>, RecommendError> {
  match recommend(&state.source, &state.recommend, &handle).await {
    Ok(out) => {
      info!(target: "cf_recommender", %handle, count = out.recommended_problems.len(), "HTTP recommendation served");
      Ok(Json(out))
    }
    Err(e) => {
      warn!(target: "cf_recommender", %handle, error = %e, "HTTP recommendation failed");
      Err(e)
    }
  }
}
