//! Domain models: tiers, problem identity, catalog entries, submissions and user profiles.
//!
//! Field names follow the Codeforces wire format so the same types decode the
//! upstream payloads and serialize back out in the API responses.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Skill bracket derived from a rating. Ordered: `A < B < C < D`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
  A,
  B,
  C,
  D,
}

impl fmt::Display for Tier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      Tier::A => "A",
      Tier::B => "B",
      Tier::C => "C",
      Tier::D => "D",
    };
    f.write_str(s)
  }
}

/// Identity key of a problem: `(contestId, index)`.
/// Either half may be missing in upstream data; such a ref is not "identified".
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProblemRef {
  pub contest_id: Option<i64>,
  pub index: Option<String>,
}

impl ProblemRef {
  #[cfg(test)]
  pub fn new(contest_id: i64, index: impl Into<String>) -> Self {
    Self { contest_id: Some(contest_id), index: Some(index.into()) }
  }

  pub fn is_identified(&self) -> bool {
    self.contest_id.is_some() && self.index.is_some()
  }
}

/// Catalog entry (also the `problem` object embedded in a submission).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub contest_id: Option<i64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub index: Option<String>,
  #[serde(default)]
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub rating: Option<i64>,
  #[serde(default)]
  pub tags: Vec<String>,
}

impl Problem {
  pub fn key(&self) -> ProblemRef {
    ProblemRef { contest_id: self.contest_id, index: self.index.clone() }
  }

  pub fn has_any_tag(&self, topics: &std::collections::HashSet<String>) -> bool {
    self.tags.iter().any(|t| topics.contains(t))
  }
}

/// One entry of `user.status`. Only the fields the analyzer needs are kept.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Submission {
  pub problem: Problem,
  /// Absent while a submission is still being judged.
  #[serde(default)]
  pub verdict: Option<String>,
}

impl Submission {
  pub fn is_accepted(&self) -> bool {
    self.verdict.as_deref() == Some("OK")
  }
}

/// `user.info` record plus the derived tier (exposed as `group`).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
  pub handle: String,
  #[serde(default)]
  pub rating: Option<i64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub max_rating: Option<i64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub rank: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub max_rank: Option<String>,
  /// Filled in after fetch; upstream never sends it.
  #[serde(default, rename = "group", skip_serializing_if = "Option::is_none")]
  pub tier: Option<Tier>,
}

impl UserProfile {
  /// Missing rating counts as 0 (unrated accounts).
  pub fn rating_or_zero(&self) -> i64 {
    self.rating.unwrap_or(0)
  }
}
