use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http;
use axum::http::{Request, StatusCode};
use tokio::sync::RwLock;
use tower::ServiceExt;

use hydrosync_api::models::{Cycle, CycleConfig, MAX_CYCLES, RelayMode};
use hydrosync_api::restful::{ConfigPayload, DeletedCycle, ModePayload, TimePayload};
use hydrosync_mock::handles::AppState;
use hydrosync_mock::state::DeviceState;

fn test_app(time_zone: i32) -> Router {
    hydrosync_mock::app_with_state(AppState {
        device: Arc::new(RwLock::new(DeviceState::new(time_zone))),
    })
}

fn json_request(method: http::Method, uri: &str, body: &impl serde::Serialize) -> Request<Body> {
    Request::builder()
        .method(method)
        .header("Content-Type", "application/json")
        .uri(uri)
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

async fn read_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn get_time_reports_clock_and_offset() {
    let app = test_app(330);

    let response = app
        .oneshot(Request::builder().uri("/time").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let payload: TimePayload = read_json(response).await;
    assert_eq!(payload.time_zone, 330);
    assert!(payload.time.ends_with(".000Z"));
}

#[tokio::test]
async fn post_time_moves_the_device_clock() {
    let app = test_app(0);

    let body = serde_json::json!({
        "year": 2031, "month": 7, "day": 15,
        "hour": 10, "minute": 20, "second": 30,
        "timeZone": 345,
    });
    let response = app
        .clone()
        .oneshot(json_request(http::Method::POST, "/time", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let payload: TimePayload = read_json(response).await;
    assert_eq!(payload.time_zone, 345);
    assert!(payload.time.starts_with("2031-07-15T10:20:3"));

    let response = app
        .oneshot(Request::builder().uri("/time").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let payload: TimePayload = read_json(response).await;
    assert!(payload.time.starts_with("2031-07-15T10:20:3"));
}

#[tokio::test]
async fn post_time_accepts_rolling_components() {
    let app = test_app(0);

    // Month 13 rolls into January of the next year.
    let body = serde_json::json!({
        "year": 2030, "month": 13, "day": 1,
        "hour": 0, "minute": 0, "second": 0,
        "timeZone": 0,
    });
    let response = app
        .oneshot(json_request(http::Method::POST, "/time", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload: TimePayload = read_json(response).await;
    assert!(payload.time.starts_with("2031-01-01T00:00:0"));
}

#[tokio::test]
async fn cycle_crud_round_trip() {
    let app = test_app(0);

    let response = app
        .clone()
        .oneshot(json_request(
            http::Method::POST,
            "/cycles",
            &CycleConfig::default(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let mut created: Cycle = read_json(response).await;
    assert!(!created.id.is_empty());

    created.config.fan_enable = false;
    let response = app
        .clone()
        .oneshot(json_request(http::Method::PUT, "/cycles", &created))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Cycle = read_json(response).await;
    assert!(!updated.config.fan_enable);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/config")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let config: ConfigPayload = read_json(response).await;
    assert_eq!(config.cycles.len(), 1);
    assert!(!config.cycles[0].config.fan_enable);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(http::Method::DELETE)
                .uri(format!("/cycles?id={}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let deleted: DeletedCycle = read_json(response).await;
    assert_eq!(deleted.id, created.id);

    let response = app
        .oneshot(
            Request::builder()
                .method(http::Method::DELETE)
                .uri(format!("/cycles?id={}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn the_sixth_cycle_is_rejected() {
    let app = test_app(0);

    for _ in 0..MAX_CYCLES {
        let response = app
            .clone()
            .oneshot(json_request(
                http::Method::POST,
                "/cycles",
                &CycleConfig::default(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(json_request(
            http::Method::POST,
            "/cycles",
            &CycleConfig::default(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn out_of_range_fan_delay_is_rejected() {
    let app = test_app(0);

    let mut config = CycleConfig::default();
    config.fan_delay = 61;

    let response = app
        .oneshot(json_request(http::Method::POST, "/cycles", &config))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn mode_is_echoed_and_stored() {
    let app = test_app(0);

    let response = app
        .clone()
        .oneshot(json_request(
            http::Method::POST,
            "/mode",
            &ModePayload {
                mode: RelayMode::NormallyOpen,
            },
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let payload: ModePayload = read_json(response).await;
    assert_eq!(payload.mode, RelayMode::NormallyOpen);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/config")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let config: ConfigPayload = read_json(response).await;
    assert_eq!(config.mode, RelayMode::NormallyOpen);
}
