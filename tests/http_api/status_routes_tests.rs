//! Tests for the `/status` routes.

use crate::http_api::helpers::{app, create_status, send};
use axum::{
    Router,
    http::{Method, StatusCode},
};
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_returns_created_with_null_body(app: Router) {
    let (status, body) = send(&app, Method::PUT, "/status/create?status_name=Todo", None)
        .await
        .expect("request should complete");

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, Value::Null);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_returns_id_and_name(app: Router) {
    let id = create_status(&app, "Doing").await.expect("status setup");

    let (status, body) = send(&app, Method::GET, &format!("/status/get?status_id={id}"), None)
        .await
        .expect("request should complete");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": id, "name": "Doing" }));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_is_empty_then_ordered_by_creation(app: Router) {
    let (_, empty) = send(&app, Method::GET, "/status/get_all_statuses", None)
        .await
        .expect("request should complete");
    assert_eq!(empty, json!([]));

    let first = create_status(&app, "Todo").await.expect("first status");
    let second = create_status(&app, "Done").await.expect("second status");

    let (status, body) = send(&app, Method::GET, "/status/get_all_statuses", None)
        .await
        .expect("request should complete");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "id": first, "name": "Todo" }, { "id": second, "name": "Done" }])
    );
}

#[rstest]
#[case(Method::GET, "/status/get?status_id=42", None)]
#[case(Method::DELETE, "/status/delete?status_id=42", None)]
#[case(Method::PATCH, "/status/update", Some(json!({ "id": 42, "name": "x" })))]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_status_yields_not_found(
    app: Router,
    #[case] method: Method,
    #[case] uri: &str,
    #[case] body: Option<Value>,
) {
    let (status, response) = send(&app, method, uri, body)
        .await
        .expect("request should complete");

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response, json!({ "detail": "Status not found" }));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_with_absent_or_empty_name_keeps_name(app: Router) {
    let id = create_status(&app, "Todo").await.expect("status setup");

    for body in [json!({ "id": id }), json!({ "id": id, "name": "" })] {
        let (status, response) = send(&app, Method::PATCH, "/status/update", Some(body))
            .await
            .expect("request should complete");
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response, Value::Null);
    }

    let (_, fetched) = send(&app, Method::GET, &format!("/status/get?status_id={id}"), None)
        .await
        .expect("request should complete");
    assert_eq!(fetched["name"], "Todo");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_then_delete(app: Router) {
    let id = create_status(&app, "Todo").await.expect("status setup");

    let (updated, _) = send(
        &app,
        Method::PATCH,
        "/status/update",
        Some(json!({ "id": id, "name": "Backlog" })),
    )
    .await
    .expect("request should complete");
    assert_eq!(updated, StatusCode::OK);

    let (deleted, body) = send(&app, Method::DELETE, &format!("/status/delete?status_id={id}"), None)
        .await
        .expect("request should complete");
    assert_eq!(deleted, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (gone, _) = send(&app, Method::GET, &format!("/status/get?status_id={id}"), None)
        .await
        .expect("request should complete");
    assert_eq!(gone, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn over_long_name_is_unprocessable(app: Router) {
    let uri = format!("/status/create?status_name={}", "n".repeat(2049));

    let (status, body) = send(&app, Method::PUT, &uri, None)
        .await
        .expect("request should complete");

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

#[rstest]
#[case(Method::PUT, "/status/create")]
#[case(Method::GET, "/status/get")]
#[case(Method::GET, "/status/get?status_id=abc")]
#[case(Method::DELETE, "/status/delete")]
#[tokio::test(flavor = "multi_thread")]
async fn missing_or_invalid_query_is_unprocessable(
    app: Router,
    #[case] method: Method,
    #[case] uri: &str,
) {
    let (status, _) = send(&app, method, uri, None)
        .await
        .expect("request should complete");
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
