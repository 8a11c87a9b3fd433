use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::modules::counters::adapters::inbound::http_error::CounterError;
use crate::modules::counters::core::counter::Counter;
use crate::shell::http::router;
use crate::tests::fixtures::{json_post, make_test_state};

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn counter_lifecycle_over_http() {
    let app = router(make_test_state());

    let response = send(&app, json_post("/api/counters", r#"{"name":"test-counter"}"#)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let created: Counter = body_json(response).await;
    assert_eq!(created, Counter::new("test-counter", 0));

    let response = send(
        &app,
        Request::get("/api/counters/test-counter")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Counter = body_json(response).await;
    assert_eq!(fetched, created);

    let response = send(
        &app,
        Request::get("/api/counters").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let all: Vec<Counter> = body_json(response).await;
    assert_eq!(all.len(), 1);

    let response = send(
        &app,
        Request::put("/api/counters/test-counter")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let incremented: Counter = body_json(response).await;
    assert_eq!(incremented.value, 1);

    let response = send(&app, json_post("/api/counters", r#"{"name":"test-counter"}"#)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let error: CounterError = body_json(response).await;
    assert_eq!(error.error, "resource_conflict");

    let response = send(
        &app,
        Request::get("/api/counters/test-counter")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    let after_conflict: Counter = body_json(response).await;
    assert_eq!(after_conflict.value, 1);
}

#[tokio::test]
async fn unknown_counters_are_not_found() {
    let app = router(make_test_state());

    let response = send(
        &app,
        Request::get("/api/counters/invalid")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(
        &app,
        Request::put("/api/counters/invalid")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: CounterError = body_json(response).await;
    assert_eq!(error.error, "resource_not_found");
    assert_eq!(error.error_description, "invalid not found");
}

#[tokio::test]
async fn blank_names_are_rejected_on_create() {
    let app = router(make_test_state());

    let response = send(&app, json_post("/api/counters", r#"{"name":""}"#)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: CounterError = body_json(response).await;
    assert_eq!(error.error, "validation_error");

    let response = send(
        &app,
        Request::get("/api/counters").body(Body::empty()).unwrap(),
    )
    .await;
    let all: Vec<Counter> = body_json(response).await;
    assert!(all.is_empty());
}
