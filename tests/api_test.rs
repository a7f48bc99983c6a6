//! HTTP surface tests.
//!
//! Requests go through the full router, so route paths, the rocket id capture
//! and `?limit=` extraction are covered along with the handlers.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use mission_logistics_db::ingest::load;
use mission_logistics_db::parser::RawRecord;
use mission_logistics_db::server::build_router;
use mission_logistics_db::Store;

fn records(values: Value) -> Vec<RawRecord> {
    match values {
        Value::Array(items) => items.into_iter().map(RawRecord::from_value).collect(),
        _ => panic!("fixture must be an array"),
    }
}

fn test_router(dir: &TempDir) -> Router {
    let store = Store::new(dir.path().join("api.db"));
    store.create_tables().unwrap();
    load(
        &store,
        &records(json!([
            { "id": "falcon1", "stages": 2 },
            { "id": "falcon9", "stages": 2 },
            { "id": "heavy", "stages": 3 },
        ])),
        &records(json!([
            { "id": "c1", "reuse_count": 0 },
            { "id": "c2", "reuse_count": 3 },
            { "id": "c3", "reuse_count": 7 },
            { "id": "c4", "reuse_count": 1 },
        ])),
        &records(json!([
            { "id": "l1", "rocket": "falcon9", "cores": [{ "core": "c1" }],
              "date_utc": "2020-01-07T02:19:21.000Z", "flight_number": 79, "success": true },
            { "id": "l2", "rocket": "falcon9", "cores": [{ "core": "c2" }],
              "date_utc": "2020-01-29T14:07:00.000Z", "flight_number": 80, "success": false },
            { "id": "l3", "rocket": "heavy", "cores": [{ "core": "c3" }],
              "date_utc": "2019-04-11T22:35:00.000Z", "flight_number": 74, "success": true },
        ])),
    )
    .unwrap();
    build_router(store)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn stages_ascending_uses_default_limit() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir);

    let (status, body) = get(&router, "/rockets/stagesAscending").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["limit"], 2);
    assert_eq!(body["count"], 2);
    assert!(body["rockets"]
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["stages"] == 2));
}

#[tokio::test]
async fn stages_ascending_honours_limit_param() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir);

    let (status, body) = get(&router, "/rockets/stagesAscending?limit=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["limit"], 1);
    assert_eq!(body["count"], 1);
    assert_eq!(body["rockets"][0]["id"], "falcon1");

    let (_, body) = get(&router, "/rockets/stagesAscending?limit=10").await;
    assert_eq!(body["count"], 3);
}

#[tokio::test]
async fn reuse_count_defaults_to_three() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir);

    let (status, body) = get(&router, "/cores/reuseCount").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["limit"], 3);
    let reuse: Vec<_> = body["cores"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["reuseCount"].as_i64().unwrap())
        .collect();
    assert_eq!(reuse, vec![0, 1, 3]);

    let (_, body) = get(&router, "/cores/reuseCount?limit=1").await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["cores"][0]["id"], "c1");
}

#[tokio::test]
async fn launches_by_rocket_id() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir);

    let (status, body) = get(&router, "/launches/byRocketID/falcon9").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rocketID"], "falcon9");
    assert_eq!(body["count"], 2);

    let (status, body) = get(&router, "/launches/byRocketID/falcon1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Rocket has no launches yet" }));
}

#[tokio::test]
async fn counts_and_outcome_lists() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir);

    assert_eq!(get(&router, "/launches/count").await.1, json!({ "totalCount": 3 }));
    assert_eq!(
        get(&router, "/launches/countSuccess").await.1,
        json!({ "totalSuccessCount": 2 })
    );
    assert_eq!(
        get(&router, "/launches/countFailed").await.1,
        json!({ "totalFailCount": 1 })
    );

    let (status, failed) = get(&router, "/launches/failed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(failed["count"], 1);
    assert_eq!(failed["launches"][0]["id"], "l2");

    let (_, succeeded) = get(&router, "/launches/succeeded").await;
    assert_eq!(succeeded["count"], 2);
}

#[tokio::test]
async fn details_high_stage_and_health() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir);

    let (status, details) = get(&router, "/launches/details").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(details["count"], 3);

    let (_, high) = get(&router, "/rockets/highStage").await;
    assert_eq!(high["highStage"], 3);
    assert_eq!(high["rockets"][0]["id"], "heavy");

    let (status, health) = get(&router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health, json!({ "status": "ok" }));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir);

    let req = Request::builder()
        .uri("/launches/nope")
        .body(Body::empty())
        .unwrap();
    let resp = router.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
