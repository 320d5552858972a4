//! Place query helpers: slug-list parsing and per-place grouping.

use indexmap::IndexMap;
use serde::Serialize;

use crate::types::DbId;

/// Upper bound on joined `(place, mission)` rows fetched for one viewport.
pub const MAX_PLACE_ROWS: i64 = 1000;

/// A place annotated with every selected mission it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceFeature<P> {
    pub place: P,
    pub mission_slugs: Vec<String>,
}

/// Split a comma-separated `missions=` parameter into trimmed, non-empty slugs.
pub fn parse_mission_slugs(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|slug| !slug.is_empty())
        .map(str::to_string)
        .collect()
}

/// Collapse `(place_id, place, mission_slug)` rows into one feature per place.
///
/// Places keep the order in which they were first seen; each place's
/// `mission_slugs` accumulates distinct slugs in first-seen order.
pub fn group_features<P>(rows: impl IntoIterator<Item = (DbId, P, String)>) -> Vec<PlaceFeature<P>> {
    let mut grouped: IndexMap<DbId, PlaceFeature<P>> = IndexMap::new();

    for (place_id, place, slug) in rows {
        match grouped.get_mut(&place_id) {
            Some(feature) => {
                if !feature.mission_slugs.contains(&slug) {
                    feature.mission_slugs.push(slug);
                }
            }
            None => {
                grouped.insert(
                    place_id,
                    PlaceFeature {
                        place,
                        mission_slugs: vec![slug],
                    },
                );
            }
        }
    }

    grouped.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn parse_trims_and_drops_empty() {
        assert_eq!(
            parse_mission_slugs(Some(" shikoku , ,saigoku,")),
            vec!["shikoku".to_string(), "saigoku".to_string()]
        );
    }

    #[test]
    fn parse_missing_param_is_empty() {
        assert!(parse_mission_slugs(None).is_empty());
        assert!(parse_mission_slugs(Some("")).is_empty());
        assert!(parse_mission_slugs(Some(" , ")).is_empty());
    }

    #[test]
    fn groups_places_in_multiple_missions() {
        let (p1, p2) = (Uuid::new_v4(), Uuid::new_v4());
        let rows = vec![
            (p1, "Temple A", "shikoku".to_string()),
            (p2, "Temple B", "shikoku".to_string()),
            (p1, "Temple A", "saigoku".to_string()),
            (p1, "Temple A", "shikoku".to_string()),
        ];

        let features = group_features(rows);

        assert_eq!(features.len(), 2);
        assert_eq!(features[0].place, "Temple A");
        assert_eq!(features[0].mission_slugs, vec!["shikoku", "saigoku"]);
        assert_eq!(features[1].place, "Temple B");
        assert_eq!(features[1].mission_slugs, vec!["shikoku"]);
    }

    #[test]
    fn empty_rows_group_to_nothing() {
        let features: Vec<PlaceFeature<()>> = group_features(Vec::new());
        assert!(features.is_empty());
    }

    #[test]
    fn serializes_camel_case() {
        let feature = PlaceFeature {
            place: serde_json::json!({ "name": "Temple A" }),
            mission_slugs: vec!["shikoku".to_string()],
        };
        let json = serde_json::to_value(&feature).unwrap();
        assert_eq!(json["place"]["name"], "Temple A");
        assert_eq!(json["missionSlugs"][0], "shikoku");
    }
}
