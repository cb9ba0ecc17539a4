//! Interest topic selection: tier defaults, optionally widened by struggle tags.

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::analyzer::StruggleCounts;
use crate::domain::Tier;

/// How many struggle tags are considered for augmentation (and reported).
pub const STRUGGLE_TOP_N: usize = 3;

/// Default submission count a user must exceed before struggle tags are trusted.
pub const DEFAULT_STRUGGLE_THRESHOLD: usize = 200;

/// Struggle tags to report back, or nothing if history is too thin.
pub fn struggle_topics(struggles: &StruggleCounts, submission_count: usize, threshold: usize) -> Vec<String> {
  if submission_count > threshold {
    struggles.most_common(STRUGGLE_TOP_N)
  } else {
    Vec::new()
  }
}

/// Tier base topics plus up to three of the user's top struggle tags not already present.
#[instrument(level = "debug", skip(struggles), fields(%tier))]
pub fn select_topics(
  tier: Tier,
  struggles: &StruggleCounts,
  submission_count: usize,
  threshold: usize,
) -> HashSet<String> {
  let mut topics: HashSet<String> = tier.topics().iter().map(|t| t.to_string()).collect();

  let extra: Vec<String> = struggle_topics(struggles, submission_count, threshold)
    .into_iter()
    .filter(|t| !topics.contains(t))
    .take(STRUGGLE_TOP_N)
    .collect();

  if !extra.is_empty() {
    debug!(target: "recommend", %tier, added = ?extra, "Interest topics widened by struggle tags");
  }
  topics.extend(extra);
  topics
}

#[cfg(test)]
mod tests {
  use super::*;

  fn counts(tags: &[(&str, usize)]) -> StruggleCounts {
    let mut c = StruggleCounts::default();
    for (t, n) in tags {
      for _ in 0..*n {
        c.record(t);
      }
    }
    c
  }

  #[test]
  fn active_user_gets_struggle_topic() {
    let c = counts(&[("dp", 10)]);
    let topics = select_topics(Tier::A, &c, 250, DEFAULT_STRUGGLE_THRESHOLD);
    assert!(topics.contains("dp"));
    assert_eq!(topics.len(), Tier::A.topics().len() + 1);
  }

  #[test]
  fn sparse_history_keeps_base_topics() {
    let c = counts(&[("dp", 10)]);
    let topics = select_topics(Tier::A, &c, 50, DEFAULT_STRUGGLE_THRESHOLD);
    assert!(!topics.contains("dp"));
    assert_eq!(topics.len(), Tier::A.topics().len());
    // exactly at the threshold is still sparse
    assert!(!select_topics(Tier::A, &c, 200, DEFAULT_STRUGGLE_THRESHOLD).contains("dp"));
  }

  #[test]
  fn only_top_three_are_considered() {
    // math is in tier A already, so only dp and fft are new; trees is 4th and ignored
    let c = counts(&[("math", 9), ("dp", 8), ("fft", 7), ("trees", 6)]);
    let topics = select_topics(Tier::A, &c, 300, DEFAULT_STRUGGLE_THRESHOLD);
    assert!(topics.contains("dp"));
    assert!(topics.contains("fft"));
    assert!(!topics.contains("trees"));
    assert_eq!(topics.len(), Tier::A.topics().len() + 2);
  }

  #[test]
  fn tier_d_is_unchanged() {
    let c = counts(&[("dp", 50), ("fft", 40)]);
    let topics = select_topics(Tier::D, &c, 1000, DEFAULT_STRUGGLE_THRESHOLD);
    assert_eq!(topics.len(), Tier::D.topics().len());
  }

  #[test]
  fn reported_struggles_follow_the_gate() {
    let c = counts(&[("a", 3), ("b", 2), ("c", 1), ("d", 1)]);
    assert_eq!(struggle_topics(&c, 201, 200), vec!["a", "b", "c"]);
    assert!(struggle_topics(&c, 200, 200).is_empty());
  }
}
