//! Errors that can end a recommendation request.
//!
//! Only the profile fetch is fatal; submissions and catalog degrade to empty.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use thiserror::Error;

use crate::protocol::ErrorOut;

#[derive(Debug, Error)]
pub enum RecommendError {
  /// Upstream has no such handle.
  #[error("User not found: {0}")]
  NotFound(String),

  /// Upstream answered with something we could not make sense of.
  #[error("Invalid response from Codeforces API: {0}")]
  Upstream(String),
}

impl RecommendError {
  pub fn status(&self) -> StatusCode {
    match self {
      RecommendError::NotFound(_) => StatusCode::NOT_FOUND,
      RecommendError::Upstream(_) => StatusCode::BAD_GATEWAY,
    }
  }
}

impl From<reqwest::Error> for RecommendError {
  fn from(e: reqwest::Error) -> Self {
    RecommendError::Upstream(e.to_string())
  }
}

impl IntoResponse for RecommendError {
  fn into_response(self) -> Response {
    (self.status(), Json(ErrorOut { error: self.to_string() })).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn not_found_and_upstream_map_to_distinct_statuses() {
    assert_eq!(RecommendError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
    assert_eq!(RecommendError::Upstream("bad".into()).status(), StatusCode::BAD_GATEWAY);
  }

  #[test]
  fn display_carries_context() {
    let e = RecommendError::NotFound("ghost".into());
    assert!(e.to_string().contains("ghost"));
    let e = RecommendError::Upstream("user.info returned garbage".into());
    assert!(e.to_string().starts_with("Invalid response from Codeforces API"));
  }
}
