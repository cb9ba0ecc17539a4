//! Problem sampling: per-rating quota buckets, recency-biased candidate pools,
//! uniform picks without replacement, and a backfill pass when buckets come up short.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, instrument};

use crate::domain::{Problem, ProblemRef};
use crate::tiers::{Quota, BATCH_SIZE};

/// Candidate pool is this many times larger than the number of picks.
const OVERSAMPLE: usize = 3;

/// Pick `amount` distinct entries uniformly (or all of them if the pool is smaller).
pub fn sample_distinct<T: Clone, R: Rng + ?Sized>(pool: &[T], amount: usize, rng: &mut R) -> Vec<T> {
  pool.choose_multiple(rng, amount.min(pool.len())).cloned().collect()
}

/// Sort by contest id, newest first; missing ids sink. Stable, so catalog order breaks ties.
fn newest_first(problems: &mut [&Problem]) {
  problems.sort_by(|a, b| b.contest_id.unwrap_or(0).cmp(&a.contest_id.unwrap_or(0)));
}

/// Drop repeated refs, keeping the first occurrence in catalog order.
fn unique_by_key<'a>(candidates: impl Iterator<Item = &'a Problem>) -> Vec<&'a Problem> {
  let mut seen: HashSet<ProblemRef> = HashSet::new();
  candidates.filter(|p| seen.insert(p.key())).collect()
}

/// Sort, cut to `pool` candidates, then draw `want` from the cut.
fn draw<'a, R: Rng + ?Sized>(mut eligible: Vec<&'a Problem>, pool: usize, want: usize, rng: &mut R) -> Vec<&'a Problem> {
  newest_first(&mut eligible);
  eligible.truncate(pool);
  sample_distinct(&eligible, want, rng)
}

/// Select up to `BATCH_SIZE` unsolved, on-topic problems following `quotas`.
///
/// Never fails: empty buckets defer to backfill, and an exhausted catalog
/// simply yields a shorter list.
#[instrument(level = "debug", skip_all, fields(catalog = catalog.len(), topics = topics.len(), solved = solved.len()))]
pub fn sample_problems<R: Rng + ?Sized>(
  catalog: &[Problem],
  topics: &HashSet<String>,
  solved: &HashSet<ProblemRef>,
  quotas: &[Quota],
  rng: &mut R,
) -> Vec<Problem> {
  let mut picked: Vec<&Problem> = Vec::with_capacity(BATCH_SIZE);
  let mut taken: HashSet<ProblemRef> = HashSet::new();

  let eligible = |p: &Problem, taken: &HashSet<ProblemRef>| {
    let key = p.key();
    p.has_any_tag(topics) && !solved.contains(&key) && !taken.contains(&key)
  };

  for quota in quotas {
    let bucket = unique_by_key(
      catalog.iter().filter(|p| p.rating == Some(quota.rating) && eligible(*p, &taken)),
    );
    let pool_size = bucket.len();
    let chosen = draw(bucket, quota.count.saturating_mul(OVERSAMPLE), quota.count, rng);
    debug!(target: "recommend", rating = quota.rating, want = quota.count, pool_size, got = chosen.len(), "Quota bucket sampled");
    for p in chosen {
      taken.insert(p.key());
      picked.push(p);
    }
  }

  if picked.len() < BATCH_SIZE {
    let ratings: HashSet<i64> = quotas.iter().map(|q| q.rating).collect();
    let extra = unique_by_key(
      catalog.iter().filter(|p| p.rating.map_or(false, |r| ratings.contains(&r)) && eligible(*p, &taken)),
    );
    let missing = BATCH_SIZE - picked.len();
    let pool_size = extra.len();
    // pool is sized for a full batch, not just the shortfall
    let chosen = draw(extra, BATCH_SIZE * OVERSAMPLE, missing, rng);
    debug!(target: "recommend", missing, pool_size, got = chosen.len(), "Backfill sampled");
    picked.extend(chosen);
  }

  if picked.len() > BATCH_SIZE {
    picked = sample_distinct(&picked, BATCH_SIZE, rng);
  }

  picked.into_iter().cloned().collect()
}
