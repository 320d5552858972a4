//! Per-mission completion progress.
//!
//! Joins mission membership against the set of places a user has visited.
//! Everything here is pure; the caller fetches the rows and hands them in.

use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::types::DbId;

/// A resolved mission: its id and the slug the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionKey {
    pub id: DbId,
    pub slug: String,
}

/// Completion state of one mission for one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub total: usize,
    pub completed: usize,
    pub visited_place_ids: Vec<DbId>,
}

/// Progress across every requested mission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub by_mission: IndexMap<String, ProgressEntry>,
    pub visited_all_place_ids: Vec<DbId>,
}

/// Build the progress report.
///
/// - `requested` is the caller's slug list; it fixes the order of
///   `by_mission`. Slugs missing from `resolved` are dropped, repeated slugs
///   yield one entry.
/// - `memberships` are `(mission_id, place_id)` rows in membership order.
///   Rows for missions not in `resolved` are ignored and a place listed twice
///   for the same mission counts once.
/// - `visited` holds every place id the user has at least one visit for.
pub fn aggregate(
    requested: &[String],
    resolved: &[MissionKey],
    memberships: &[(DbId, DbId)],
    visited: &HashSet<DbId>,
) -> ProgressReport {
    let mut places_by_mission: IndexMap<DbId, IndexSet<DbId>> = IndexMap::new();
    for (mission_id, place_id) in memberships {
        places_by_mission
            .entry(*mission_id)
            .or_default()
            .insert(*place_id);
    }

    let mut report = ProgressReport::default();
    let mut seen_all: IndexSet<DbId> = IndexSet::new();

    for slug in requested {
        if report.by_mission.contains_key(slug) {
            continue;
        }
        let Some(mission) = resolved.iter().find(|m| &m.slug == slug) else {
            continue;
        };

        let entry = match places_by_mission.get(&mission.id) {
            Some(place_ids) => {
                let visited_place_ids: Vec<DbId> = place_ids
                    .iter()
                    .filter(|id| visited.contains(*id))
                    .copied()
                    .collect();
                ProgressEntry {
                    total: place_ids.len(),
                    completed: visited_place_ids.len(),
                    visited_place_ids,
                }
            }
            None => ProgressEntry::default(),
        };

        seen_all.extend(entry.visited_place_ids.iter().copied());
        report.by_mission.insert(slug.clone(), entry);
    }

    report.visited_all_place_ids = seen_all.into_iter().collect();
    report
}
