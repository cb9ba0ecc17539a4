//! Recommendation flow shared by the HTTP handlers.
//!
//! profile -> tier, submissions -> (solved, struggles), tier + struggles -> topics,
//! catalog + topics + solved -> sampled batch. Only the profile fetch can fail.

use rand::thread_rng;
use tracing::{info, instrument};

use crate::analyzer::analyze_submissions;
use crate::codeforces::ProblemSource;
use crate::config::RecommendConfig;
use crate::domain::UserProfile;
use crate::error::RecommendError;
use crate::protocol::RecommendationOut;
use crate::sampler::sample_problems;
use crate::tiers::classify_rating;
use crate::topics::{select_topics, struggle_topics};

/// Fetch a profile and attach its tier.
#[instrument(level = "info", skip(source), fields(%handle))]
pub async fn user_info<S: ProblemSource>(source: &S, handle: &str) -> Result<UserProfile, RecommendError> {
  let mut user = source.fetch_user_profile(handle).await?;
  user.tier = Some(classify_rating(user.rating_or_zero()));
  Ok(user)
}

#[instrument(level = "info", skip(source, cfg), fields(%handle))]
pub async fn recommend<S: ProblemSource>(
  source: &S,
  cfg: &RecommendConfig,
  handle: &str,
) -> Result<RecommendationOut, RecommendError> {
  let user = user_info(source, handle).await?;
  let tier = classify_rating(user.rating_or_zero());

  let submissions = source.fetch_submissions(handle).await;
  let submission_count = submissions.len();
  let analysis = analyze_submissions(&submissions);

  let threshold = cfg.struggle_activity_threshold;
  let topics = select_topics(tier, &analysis.struggles, submission_count, threshold);

  let catalog = source.fetch_problem_catalog().await;
  let recommended = {
    let mut rng = thread_rng();
    sample_problems(&catalog, &topics, &analysis.solved, tier.quotas(), &mut rng)
  };

  info!(
    target: "recommend",
    %handle,
    rating = user.rating_or_zero(),
    %tier,
    submissions = submission_count,
    catalog = catalog.len(),
    recommended = recommended.len(),
    "Recommendation assembled"
  );

  Ok(RecommendationOut {
    user_info: user,
    recommended_problems: recommended,
    important_topics: tier.topics().iter().map(|t| t.to_string()).collect(),
    struggle_topics: struggle_topics(&analysis.struggles, submission_count, threshold),
  })
}
