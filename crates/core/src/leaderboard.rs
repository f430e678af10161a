//! Per-city leaderboard aggregation.
//!
//! Derives [`CityAggregate`]s from a set of submissions: group by
//! case-normalized (city, region), count, and rank. The output is a
//! pure function of the input set: recomputing on any permutation of
//! the same submissions yields an identical result.

use std::collections::HashMap;

use serde::Serialize;

use crate::submission::Submission;
use crate::types::DbId;

/// Signup count required to unlock a premiere, unless overridden via
/// configuration.
pub const DEFAULT_THRESHOLD: u32 = 100;

/// Derived per-city signup count and progress toward the unlock
/// threshold. Never stored; always recomputed from submissions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityAggregate {
    /// Display city name (casing of the lowest-id submission in the group).
    pub city: String,
    /// Display region/state abbreviation.
    pub region: String,
    pub signup_count: u64,
    pub threshold: u32,
    /// `min(1, signup_count / threshold)`.
    pub progress_ratio: f64,
    /// Whether the city reached its premiere threshold.
    pub unlocked: bool,
}

impl CityAggregate {
    /// `"City, Region"`: the name shown on the leaderboard and used as
    /// the deterministic tiebreak when counts are equal.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.city, self.region)
    }
}

/// Group submissions by case-normalized (city, region), count each
/// group, and rank by count descending with ties broken by ascending
/// display name.
///
/// The display casing for a group is taken from its lowest-id
/// submission, so mixed-casing groups aggregate to the same result on
/// any permutation of the input.
///
/// Submissions without a resolved city are excluded (an unknown city
/// cannot be ranked) but remain in the raw set for map display.
pub fn aggregate(submissions: &[Submission], threshold: u32) -> Vec<CityAggregate> {
    // key -> (display city, display region, count, lowest id seen)
    let mut groups: HashMap<(String, String), (String, String, u64, DbId)> = HashMap::new();

    for submission in submissions {
        let Some(city) = submission.city.as_deref().filter(|c| !c.trim().is_empty()) else {
            continue;
        };
        let region = submission.region.as_deref().unwrap_or("");

        let key = (city.to_lowercase(), region.to_lowercase());
        groups
            .entry(key)
            .and_modify(|(display_city, display_region, count, min_id)| {
                *count += 1;
                if submission.id < *min_id {
                    *min_id = submission.id;
                    *display_city = city.to_string();
                    *display_region = region.to_string();
                }
            })
            .or_insert_with(|| (city.to_string(), region.to_string(), 1, submission.id));
    }

    let mut aggregates: Vec<CityAggregate> = groups
        .into_values()
        .map(|(city, region, signup_count, _)| {
            let progress_ratio = progress(signup_count, threshold);
            CityAggregate {
                city,
                region,
                signup_count,
                threshold,
                progress_ratio,
                unlocked: progress_ratio >= 1.0,
            }
        })
        .collect();

    aggregates.sort_by(|a, b| {
        b.signup_count
            .cmp(&a.signup_count)
            .then_with(|| a.display_name().cmp(&b.display_name()))
    });

    aggregates
}

/// Progress toward the threshold, capped at 1. A zero threshold counts
/// as already unlocked.
fn progress(signup_count: u64, threshold: u32) -> f64 {
    if threshold == 0 {
        return 1.0;
    }
    (signup_count as f64 / f64::from(threshold)).min(1.0)
}
