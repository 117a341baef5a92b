use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use songapi::management::SongManager;
use songapi::server::build_router;

fn make_app() -> Router {
    build_router(SongManager::seeded())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

// ── GET /songs ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_returns_seed_songs_in_order() {
    let app = make_app();
    let (status, body) = get(&app, "/songs").await;

    assert_eq!(status, StatusCode::OK);
    let songs = body.as_array().unwrap();
    assert_eq!(songs.len(), 2);
    assert_eq!(songs[0]["name"], "Tetris Theme");
    assert_eq!(songs[0]["duration"], 60);
    assert_eq!(songs[1]["name"], "Turrican 2 Theme");
    assert_eq!(songs[1]["duration"], 30);
    assert_eq!(songs[0]["album"], songs[1]["album"]);
    assert_eq!(songs[0]["album"]["name"], "Uke greatest hits");
}

#[tokio::test]
async fn list_with_repeated_id_is_422_with_detail() {
    let app = make_app();
    let (status, body) = get(&app, "/songs?id=a&id=b").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("id"), "got {body}");
}

#[tokio::test]
async fn list_with_empty_id_returns_everything() {
    let app = make_app();
    let (status, body) = get(&app, "/songs?id=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn get_by_id_returns_single_song() {
    let app = make_app();
    let (_, list) = get(&app, "/songs").await;
    let id = list[1]["id"].as_str().unwrap();

    let (status, body) = get(&app, &format!("/songs?id={}", id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, list[1]);
}

#[tokio::test]
async fn get_by_unknown_id_is_404() {
    let app = make_app();
    let (status, body) = get(&app, "/songs?id=does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "song not found" }));
}

#[tokio::test]
async fn album_release_is_iso_8601() {
    let app = make_app();
    let (_, body) = get(&app, "/songs").await;
    let release = body[0]["album"]["release"].as_str().unwrap();

    assert!(chrono::DateTime::parse_from_rfc3339(release).is_ok(), "got {release}");
}

// ── POST /songs ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_returns_song_with_shared_album() {
    let app = make_app();
    let (_, seeds) = get(&app, "/songs").await;

    let (status, song) = send(
        &app,
        Method::POST,
        "/songs",
        Some(json!({ "name": "New Song", "duration": 45 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(song["name"], "New Song");
    assert_eq!(song["duration"], 45);
    assert_eq!(song["album"], seeds[0]["album"]);
    let id = song["id"].as_str().unwrap();
    assert!(seeds.as_array().unwrap().iter().all(|s| s["id"] != id));
}

#[tokio::test]
async fn create_with_missing_field_is_422() {
    let app = make_app();
    let (status, body) = send(&app, Method::POST, "/songs", Some(json!({ "name": "x" }))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("duration"), "got {body}");

    let (_, list) = get(&app, "/songs").await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn create_with_wrong_type_is_422() {
    let app = make_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/songs",
        Some(json!({ "name": "x", "duration": "long" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn create_with_malformed_json_is_422() {
    let app = make_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/songs")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\":"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_without_content_type_is_422() {
    let app = make_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/songs")
        .body(Body::from(json!({ "name": "x", "duration": 1 }).to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(
        body["detail"].as_str().unwrap().contains("Content-Type"),
        "got {body}"
    );

    let (_, list) = get(&app, "/songs").await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

// ── PATCH /songs/{id} ─────────────────────────────────────────────────────────

#[tokio::test]
async fn patch_with_null_field_leaves_it_unchanged() {
    let app = make_app();
    let (_, list) = get(&app, "/songs").await;
    let id = list[0]["id"].as_str().unwrap();

    let (status, song) = send(
        &app,
        Method::PATCH,
        &format!("/songs/{}", id),
        Some(json!({ "name": null, "duration": 61 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(song["name"], "Tetris Theme");
    assert_eq!(song["duration"], 61);
}

#[tokio::test]
async fn patch_with_empty_body_changes_nothing() {
    let app = make_app();
    let (_, list) = get(&app, "/songs").await;
    let id = list[0]["id"].as_str().unwrap();

    let (status, song) = send(
        &app,
        Method::PATCH,
        &format!("/songs/{}", id),
        Some(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(song, list[0]);
}

#[tokio::test]
async fn patch_with_wrong_type_is_422() {
    let app = make_app();
    let (_, before) = get(&app, "/songs").await;
    let id = before[0]["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/songs/{}", id),
        Some(json!({ "duration": "x" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let (_, after) = get(&app, "/songs").await;
    assert_eq!(after, before);
}

#[tokio::test]
async fn patch_unknown_id_is_404() {
    let app = make_app();
    let (status, body) = send(
        &app,
        Method::PATCH,
        "/songs/missing",
        Some(json!({ "duration": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "song not found");
}

// ── DELETE /songs/{id} ────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_unknown_id_is_404() {
    let app = make_app();
    let (status, body) = send(&app, Method::DELETE, "/songs/missing", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "song not found");
}

// ── Full lifecycle ────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_patch_delete_lifecycle() {
    let app = make_app();

    let (_, seeds) = get(&app, "/songs").await;
    assert_eq!(seeds.as_array().unwrap().len(), 2);

    let (status, created) = send(
        &app,
        Method::POST,
        "/songs",
        Some(json!({ "name": "New Song", "duration": 45 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap().to_string();

    let (_, list) = get(&app, "/songs").await;
    assert_eq!(list.as_array().unwrap().len(), 3);
    assert_eq!(list[2], created);

    let (status, fetched) = get(&app, &format!("/songs?id={}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, patched) = send(
        &app,
        Method::PATCH,
        &format!("/songs/{}", id),
        Some(json!({ "duration": 99 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["id"], created["id"]);
    assert_eq!(patched["name"], "New Song");
    assert_eq!(patched["duration"], 99);
    assert_eq!(patched["album"], created["album"]);

    let (status, deleted) = send(&app, Method::DELETE, &format!("/songs/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, patched);

    let (_, list) = get(&app, "/songs").await;
    assert_eq!(list, seeds);

    let (status, body) = get(&app, &format!("/songs?id={}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "song not found");
}

// ── Misc ──────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn health_reports_version() {
    let app = make_app();
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn unknown_route_is_404_with_detail() {
    let app = make_app();
    let (status, body) = get(&app, "/albums").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Not Found" }));
}

#[tokio::test]
async fn unsupported_method_is_405_with_detail() {
    let app = make_app();
    let (status, body) = get(&app, "/songs/abc").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({ "detail": "Method Not Allowed" }));

    let (status, body) = send(&app, Method::PUT, "/songs", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["detail"], "Method Not Allowed");
}
