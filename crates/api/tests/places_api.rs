//! HTTP tests for missions and place queries.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, link, seed_mission, seed_place, token_for};
use junrei_db::models::visit::CreateVisit;
use junrei_db::repositories::VisitRepo;
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Missions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missions_in_sort_order(pool: PgPool) {
    seed_mission(&pool, "saigoku", 2, None).await;
    seed_mission(&pool, "shikoku", 1, Some("#10B981")).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/missions").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json[0]["slug"], "shikoku");
    assert_eq!(json[0]["color"], "#10B981");
    assert_eq!(json[1]["slug"], "saigoku");
    assert!(json[1]["color"].is_null());
    assert!(json[0]["id"].is_string());
    assert!(json[0]["title"].is_string());
}

// ---------------------------------------------------------------------------
// Viewport query
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_missing_bbox_is_400() {
    let app = common::build_test_app(common::lazy_pool());
    let response = get(app, "/api/places?missions=shikoku").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid bounding box");
}

#[tokio::test]
async fn test_malformed_bbox_is_400() {
    for bbox in ["1,2,3", "1,2,3,x", "1,2,3,4,5", "NaN,0,1,1"] {
        let app = common::build_test_app(common::lazy_pool());
        let response = get(app, &format!("/api/places?bbox={bbox}&missions=a")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "bbox {bbox}");
    }
}

/// The pool cannot connect, so a 200 proves the database was not queried.
#[tokio::test]
async fn test_empty_missions_short_circuits() {
    for query in ["bbox=0,0,1,1", "bbox=0,0,1,1&missions=", "bbox=0,0,1,1&missions=%20,%20"] {
        let app = common::build_test_app(common::lazy_pool());
        let response = get(app, &format!("/api/places?{query}")).await;
        assert_eq!(response.status(), StatusCode::OK, "query {query}");
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_places_grouped_with_mission_slugs(pool: PgPool) {
    let m1 = seed_mission(&pool, "m1", 0, None).await;
    let m2 = seed_mission(&pool, "m2", 1, None).await;
    let shared = seed_place(&pool, "Shared", 135.0, 34.0).await;
    let only_m2 = seed_place(&pool, "Only M2", 135.2, 34.2).await;
    let far = seed_place(&pool, "Far", 10.0, 10.0).await;
    link(&pool, m1, shared, 1).await;
    link(&pool, m2, shared, 1).await;
    link(&pool, m2, only_m2, 2).await;
    link(&pool, m1, far, 2).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/places?bbox=134,33,136,35&missions=m1,m2,unknown").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let features = json.as_array().unwrap();
    assert_eq!(features.len(), 2);
    assert_eq!(features[0]["place"]["id"], shared.to_string());
    assert_eq!(features[0]["missionSlugs"], serde_json::json!(["m1", "m2"]));
    assert_eq!(features[1]["place"]["name"], "Only M2");
    assert_eq!(features[1]["missionSlugs"], serde_json::json!(["m2"]));
    // Unset optional fields are omitted.
    assert!(features[0]["place"].get("prefecture").is_none());
}

// ---------------------------------------------------------------------------
// Place detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_place_detail(pool: PgPool) {
    let m1 = seed_mission(&pool, "m1", 0, None).await;
    let place = seed_place(&pool, "Temple", 135.0, 34.0).await;
    link(&pool, m1, place, 1).await;
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/api/places/{place}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["place"]["name"], "Temple");
    assert_eq!(json["missions"][0]["slug"], "m1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_place_detail_unknown_or_malformed_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), &format!("/api/places/{}", Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app, "/api/places/not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_place_visits_are_callers_own(pool: PgPool) {
    let place = seed_place(&pool, "Temple", 135.0, 34.0).await;
    let me = Uuid::new_v4();
    let visit = CreateVisit {
        place_id: place,
        visited_at: None,
        note: Some("mine".into()),
    };
    VisitRepo::create(&pool, me, &visit).await.unwrap();
    VisitRepo::create(&pool, Uuid::new_v4(), &visit).await.unwrap();
    let app = common::build_test_app(pool);

    let uri = format!("/api/places/{place}/visits");
    let response = get(app.clone(), &uri).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(app, &uri, &token_for(me, None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["note"], "mine");
    assert_eq!(json[0]["photos_count"], 0);
}
