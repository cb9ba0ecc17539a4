//! Minimal Codeforces API client for our use-cases.
//!
//! We only call `user.info`, `user.status` and `problemset.problems`. Every
//! response is the standard envelope `{status, comment?, result?}`; the HTTP
//! status code is not trusted (unknown handles come back as 400 + FAILED).
//!
//! Calls are instrumented and log latencies and response sizes, not contents.

use std::future::Future;
use std::time::{Duration, Instant};

use reqwest::header::USER_AGENT;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::config::UpstreamConfig;
use crate::domain::{Problem, Submission, UserProfile};
use crate::error::RecommendError;
use crate::util::trunc_for_log;

/// Read-only provider of the three record collections the recommender needs.
pub trait ProblemSource: Send + Sync {
  /// Fatal on failure: NotFound for unknown handles, Upstream for garbage.
  fn fetch_user_profile(&self, handle: &str) -> impl Future<Output = Result<UserProfile, RecommendError>> + Send;

  /// Empty on any upstream problem.
  fn fetch_submissions(&self, handle: &str) -> impl Future<Output = Vec<Submission>> + Send;

  /// Empty on any upstream problem.
  fn fetch_problem_catalog(&self) -> impl Future<Output = Vec<Problem>> + Send;
}

#[derive(Deserialize)]
struct Envelope<T> {
  status: String,
  comment: Option<String>,
  result: Option<T>,
}

#[derive(Deserialize)]
struct ProblemsetResult {
  problems: Vec<Problem>,
}

#[derive(Clone)]
pub struct CodeforcesClient {
  pub client: reqwest::Client,
  pub base_url: String,
  pub user_agent: String,
}

impl CodeforcesClient {
  pub fn new(cfg: &UpstreamConfig) -> Result<Self, RecommendError> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(cfg.timeout_secs))
      .build()?;
    Ok(Self { client, base_url: cfg.base_url.clone(), user_agent: cfg.user_agent.clone() })
  }

  /// GET `{base}/{method}` and decode the envelope. Transport and decode failures are `Upstream`.
  #[instrument(level = "info", skip(self, query), fields(%method))]
  async fn call<T: DeserializeOwned>(&self, method: &str, query: &[(&str, &str)]) -> Result<Envelope<T>, RecommendError> {
    let url = format!("{}/{}", self.base_url, method);
    let started = Instant::now();

    let res = self.client.get(&url)
      .header(USER_AGENT, &self.user_agent)
      .query(query)
      .send().await?;
    let http_status = res.status();
    let body = res.text().await?;

    info!(target: "cf_recommender", %method, status = %http_status, bytes = body.len(), elapsed_ms = started.elapsed().as_millis() as u64, "Codeforces response");

    serde_json::from_str::<Envelope<T>>(&body).map_err(|e| {
      RecommendError::Upstream(format!("{} ({}): {}", method, e, trunc_for_log(&body, 200)))
    })
  }

  /// Like `call`, but a non-OK envelope or missing result is also an error.
  async fn call_ok<T: DeserializeOwned>(&self, method: &str, query: &[(&str, &str)]) -> Result<T, RecommendError> {
    let env = self.call::<T>(method, query).await?;
    if env.status != "OK" {
      return Err(RecommendError::Upstream(format!(
        "{} returned {}: {}",
        method,
        env.status,
        env.comment.unwrap_or_default()
      )));
    }
    env.result.ok_or_else(|| RecommendError::Upstream(format!("{} returned no result", method)))
  }
}

impl ProblemSource for CodeforcesClient {
  #[instrument(level = "info", skip(self), fields(%handle))]
  async fn fetch_user_profile(&self, handle: &str) -> Result<UserProfile, RecommendError> {
    let env = self.call::<Vec<UserProfile>>("user.info", &[("handles", handle)]).await?;
    if env.status != "OK" {
      warn!(target: "cf_recommender", %handle, comment = ?env.comment, "user.info rejected handle");
      return Err(RecommendError::NotFound(handle.to_string()));
    }
    env.result
      .and_then(|users| users.into_iter().next())
      .ok_or_else(|| RecommendError::NotFound(handle.to_string()))
  }

  #[instrument(level = "info", skip(self), fields(%handle))]
  async fn fetch_submissions(&self, handle: &str) -> Vec<Submission> {
    match self.call_ok::<Vec<Submission>>("user.status", &[("handle", handle)]).await {
      Ok(subs) => subs,
      Err(e) => {
        warn!(target: "cf_recommender", %handle, error = %e, "Submission fetch failed; continuing with empty history");
        Vec::new()
      }
    }
  }

  #[instrument(level = "info", skip(self))]
  async fn fetch_problem_catalog(&self) -> Vec<Problem> {
    match self.call_ok::<ProblemsetResult>("problemset.problems", &[]).await {
      Ok(r) => r.problems,
      Err(e) => {
        warn!(target: "cf_recommender", error = %e, "Catalog fetch failed; continuing with empty catalog");
        Vec::new()
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn failed_envelope_has_no_result() {
    let env: Envelope<Vec<UserProfile>> =
      serde_json::from_str(r#"{"status":"FAILED","comment":"handles: User with handle zz not found"}"#).unwrap();
    assert_eq!(env.status, "FAILED");
    assert!(env.result.is_none());
    assert!(env.comment.unwrap().contains("not found"));
  }

  #[test]
  fn problemset_decodes_and_ignores_statistics() {
    let body = r#"{"status":"OK","result":{"problems":[
      {"contestId":2000,"index":"A","name":"Primary Task","type":"PROGRAMMING","rating":800,"tags":["implementation","math","strings"]},
      {"contestId":2000,"index":"H","name":"Ksyusha","type":"PROGRAMMING","tags":[]}
    ],"problemStatistics":[{"contestId":2000,"index":"A","solvedCount":30000}]}}"#;
    let env: Envelope<ProblemsetResult> = serde_json::from_str(body).unwrap();
    let problems = env.result.unwrap().problems;
    assert_eq!(problems.len(), 2);
    assert_eq!(problems[0].rating, Some(800));
    assert_eq!(problems[1].rating, None);
  }

  #[test]
  fn submissions_decode_with_missing_verdict() {
    let body = r#"{"status":"OK","result":[
      {"id":1,"contestId":1,"problem":{"contestId":1,"index":"A","name":"x","tags":["math"]},"verdict":"OK"},
      {"id":2,"contestId":1,"problem":{"contestId":1,"index":"B","name":"y","tags":["dp"]}}
    ]}"#;
    let env: Envelope<Vec<Submission>> = serde_json::from_str(body).unwrap();
    let subs = env.result.unwrap();
    assert!(subs[0].is_accepted());
    assert!(!subs[1].is_accepted());
  }

  #[test]
  fn client_builds_from_default_config() {
    let c = CodeforcesClient::new(&UpstreamConfig::default()).unwrap();
    assert_eq!(c.base_url, "https://codeforces.com/api");
  }
}
