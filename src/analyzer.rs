//! Submission analysis: which problems are solved, and which tags show up in failures.

use std::collections::{HashMap, HashSet};

use tracing::{debug, instrument};

use crate::domain::{ProblemRef, Submission};

/// Tag -> failed submission count, remembering first-seen order for tie-breaks.
#[derive(Clone, Debug, Default)]
pub struct StruggleCounts {
  order: Vec<String>,
  counts: HashMap<String, usize>,
}

impl StruggleCounts {
  pub fn record(&mut self, tag: &str) {
    match self.counts.get_mut(tag) {
      Some(n) => *n += 1,
      None => {
        self.order.push(tag.to_string());
        self.counts.insert(tag.to_string(), 1);
      }
    }
  }

  #[cfg(test)]
  pub fn get(&self, tag: &str) -> usize {
    self.counts.get(tag).copied().unwrap_or(0)
  }

  pub fn is_empty(&self) -> bool {
    self.order.is_empty()
  }

  /// Up to `n` tags by descending count; equal counts keep first-seen order.
  pub fn most_common(&self, n: usize) -> Vec<String> {
    let mut ranked: Vec<&String> = self.order.iter().collect();
    // stable sort keeps insertion order among ties
    ranked.sort_by(|a, b| self.counts[*b].cmp(&self.counts[*a]));
    ranked.into_iter().take(n).cloned().collect()
  }
}

#[derive(Clone, Debug, Default)]
pub struct SubmissionAnalysis {
  pub solved: HashSet<ProblemRef>,
  pub struggles: StruggleCounts,
}

/// Split submissions into solved refs and failure tag counts.
///
/// Accepted submissions with a full `(contestId, index)` go into the solved set.
/// Any non-accepted submission (failed or still unjudged) adds its tags to the
/// struggle counts, whether or not its problem is identifiable.
#[instrument(level = "debug", skip_all, fields(submissions = submissions.len()))]
pub fn analyze_submissions(submissions: &[Submission]) -> SubmissionAnalysis {
  let mut out = SubmissionAnalysis::default();

  for s in submissions {
    if s.is_accepted() {
      let key = s.problem.key();
      if key.is_identified() {
        out.solved.insert(key);
      }
    } else {
      for tag in &s.problem.tags {
        out.struggles.record(tag);
      }
    }
  }

  if out.struggles.is_empty() {
    debug!(target: "recommend", solved = out.solved.len(), "Submissions analyzed; no failures");
  } else {
    debug!(target: "recommend", solved = out.solved.len(), struggle_tags = out.struggles.order.len(), "Submissions analyzed");
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Problem;

  fn sub(contest: Option<i64>, index: Option<&str>, verdict: Option<&str>, tags: &[&str]) -> Submission {
    Submission {
      problem: Problem {
        contest_id: contest,
        index: index.map(str::to_string),
        name: String::new(),
        rating: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
      },
      verdict: verdict.map(str::to_string),
    }
  }

  #[test]
  fn accepted_identified_problems_are_solved() {
    let subs = vec![
      sub(Some(1), Some("A"), Some("WRONG_ANSWER"), &["math"]),
      sub(Some(1), Some("A"), Some("OK"), &["math"]),
      sub(Some(2), Some("B"), Some("TIME_LIMIT_EXCEEDED"), &["dp"]),
    ];
    let a = analyze_submissions(&subs);
    assert!(a.solved.contains(&ProblemRef::new(1, "A")));
    assert!(!a.solved.contains(&ProblemRef::new(2, "B")));
    assert_eq!(a.solved.len(), 1);
    assert_eq!(a.struggles.get("math"), 1);
    assert_eq!(a.struggles.get("dp"), 1);
  }

  #[test]
  fn unidentified_accepted_problem_is_not_solved() {
    let subs = vec![sub(None, Some("A"), Some("OK"), &["math"]), sub(Some(7), None, Some("OK"), &[])];
    let a = analyze_submissions(&subs);
    assert!(a.solved.is_empty());
    assert!(a.struggles.is_empty());
  }

  #[test]
  fn failures_count_even_without_identity() {
    let subs = vec![
      sub(None, None, Some("WRONG_ANSWER"), &["graphs", "dp"]),
      sub(Some(3), Some("C"), None, &["graphs"]),
    ];
    let a = analyze_submissions(&subs);
    assert_eq!(a.struggles.get("graphs"), 2);
    assert_eq!(a.struggles.get("dp"), 1);
  }

  #[test]
  fn most_common_breaks_ties_by_first_seen() {
    let mut c = StruggleCounts::default();
    for t in ["strings", "dp", "math", "dp", "trees", "math", "strings", "greedy"] {
      c.record(t);
    }
    // strings=2 dp=2 math=2 trees=1 greedy=1
    assert_eq!(c.most_common(3), vec!["strings", "dp", "math"]);
    assert_eq!(c.most_common(10).len(), 5);
    assert_eq!(c.most_common(10)[3], "trees");
  }

  #[test]
  fn empty_history() {
    let a = analyze_submissions(&[]);
    assert!(a.solved.is_empty());
    assert!(a.struggles.most_common(3).is_empty());
  }
}
