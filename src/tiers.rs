//! Tier classification and the fixed per-tier tables (topics + rating quotas).
//!
//! The tables are plain statics: built into the binary, never mutated.

use crate::domain::Tier;

/// Number of problems in one recommendation batch. Every quota table sums to this.
pub const BATCH_SIZE: usize = 6;

/// Full Codeforces tag vocabulary. Tier D draws from all of it.
pub static TOPICS: &[&str] = &[
  "2-sat", "binary search", "bitmasks", "brute force", "chinese remainder theorem",
  "combinatorics", "constructive algorithms", "data structures", "dfs and similar",
  "divide and conquer", "dp", "dsu", "expression parsing", "fft", "flows", "games",
  "geometry", "graph matchings", "graphs", "greedy", "hashing", "implementation",
  "interactive", "math", "matrices", "meet-in-the-middle", "number theory",
  "probabilities", "schedules", "shortest paths", "sortings", "string suffix structures",
  "strings", "ternary search", "trees", "two pointers",
];

static TOPICS_A: &[&str] = &[
  "brute force", "constructive algorithms", "data structures", "implementation", "math",
  "sortings", "strings", "two pointers", "greedy",
];

static TOPICS_B: &[&str] = &[
  "binary search", "bitmasks", "dfs and similar", "geometry", "graphs", "greedy",
  "interactive", "matrices", "ternary search", "trees",
];

static TOPICS_C: &[&str] = &[
  "greedy", "2-sat", "combinatorics", "divide and conquer", "dp", "dsu", "games",
  "number theory", "probabilities", "trees", "graphs", "shortest paths",
];

/// One quota bucket: sample `count` problems rated exactly `rating`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quota {
  pub rating: i64,
  pub count: usize,
}

const fn q(rating: i64, count: usize) -> Quota {
  Quota { rating, count }
}

static QUOTAS_A: &[Quota] = &[q(800, 1), q(900, 2), q(1000, 3)];
static QUOTAS_B: &[Quota] = &[q(1100, 1), q(1200, 1), q(1300, 3), q(1400, 1)];
static QUOTAS_C: &[Quota] = &[q(1300, 1), q(1400, 2), q(1500, 2), q(1600, 1)];
static QUOTAS_D: &[Quota] = &[q(1500, 1), q(1600, 1), q(1700, 2), q(1800, 2)];

impl Tier {
  /// Base interest topics, in table order.
  pub fn topics(self) -> &'static [&'static str] {
    match self {
      Tier::A => TOPICS_A,
      Tier::B => TOPICS_B,
      Tier::C => TOPICS_C,
      Tier::D => TOPICS,
    }
  }

  /// Ordered (rating, count) buckets.
  pub fn quotas(self) -> &'static [Quota] {
    match self {
      Tier::A => QUOTAS_A,
      Tier::B => QUOTAS_B,
      Tier::C => QUOTAS_C,
      Tier::D => QUOTAS_D,
    }
  }
}

/// Map a rating onto a tier. Total over `i64`; boundaries at 1000, 1200, 1400.
pub fn classify_rating(rating: i64) -> Tier {
  match rating {
    r if r < 1000 => Tier::A,
    1000..=1199 => Tier::B,
    1200..=1399 => Tier::C,
    _ => Tier::D,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn boundaries() {
    assert_eq!(classify_rating(i64::MIN), Tier::A);
    assert_eq!(classify_rating(0), Tier::A);
    assert_eq!(classify_rating(999), Tier::A);
    assert_eq!(classify_rating(1000), Tier::B);
    assert_eq!(classify_rating(1199), Tier::B);
    assert_eq!(classify_rating(1200), Tier::C);
    assert_eq!(classify_rating(1399), Tier::C);
    assert_eq!(classify_rating(1400), Tier::D);
    assert_eq!(classify_rating(3800), Tier::D);
  }

  #[test]
  fn classification_is_monotonic() {
    let mut prev = classify_rating(-500);
    for r in -500..4000 {
      let t = classify_rating(r);
      assert!(t >= prev, "tier dropped at rating {}", r);
      assert_eq!(t, classify_rating(r));
      prev = t;
    }
  }

  #[test]
  fn every_quota_table_fills_one_batch() {
    for tier in [Tier::A, Tier::B, Tier::C, Tier::D] {
      let total: usize = tier.quotas().iter().map(|q| q.count).sum();
      assert_eq!(total, BATCH_SIZE, "tier {}", tier);
    }
  }

  #[test]
  fn lower_tier_topics_come_from_the_vocabulary() {
    let vocab: HashSet<&str> = TOPICS.iter().copied().collect();
    for tier in [Tier::A, Tier::B, Tier::C] {
      assert!(tier.topics().len() < TOPICS.len());
      assert!(tier.topics().iter().all(|t| vocab.contains(t)), "tier {}", tier);
    }
    assert_eq!(Tier::D.topics().len(), TOPICS.len());
    assert_eq!(Tier::A.topics().len(), 9);
  }
}
