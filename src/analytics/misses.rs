//! Miss counting and ranking.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::habits::{CheckoffLog, HabitId};

/// How many times a habit was missed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissCount {
    pub habit_id: HabitId,
    pub count: u32,
}

/// Rank habits by how often they were missed, most missed first.
///
/// Only logs with `missed == true` are counted; habits with no miss logs
/// are absent from the result rather than present with zero. Equal counts
/// order by ascending habit id: the counter map iterates ascending and the
/// stable sort preserves that as the secondary key. Empty input, or input
/// with no misses, yields an empty ranking.
#[must_use]
pub fn most_missed(logs: &[CheckoffLog]) -> Vec<MissCount> {
    let mut counts: BTreeMap<HabitId, u32> = BTreeMap::new();
    for log in logs.iter().filter(|l| l.missed) {
        *counts.entry(log.habit_id).or_insert(0) += 1;
    }

    let mut ranking: Vec<MissCount> = counts
        .into_iter()
        .map(|(habit_id, count)| MissCount { habit_id, count })
        .collect();
    ranking.sort_by(|a, b| b.count.cmp(&a.count));

    ranking
}
