// crossgate-client/tests/gateway_integration.rs
// Gateway behavior against a stub backend: bearer decoration, payload
// normalization, and the centralized 401/403 error paths.

mod common;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use crossgate_client::{
    ClientError, ExportFormat, ListQuery, MemorySessionStore, ResourceRoutes, SessionStore,
};
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Clone, Default)]
struct Captured {
    auth: Arc<Mutex<Option<String>>>,
    query: Arc<Mutex<HashMap<String, String>>>,
}

#[derive(Debug, Deserialize)]
struct Row {
    id: i64,
}

async fn capture_list(
    State(captured): State<Captured>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Json<Value> {
    *captured.auth.lock().unwrap() = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    *captured.query.lock().unwrap() = query;
    Json(json!({"items": [{"id": 1}], "total": 41}))
}

#[tokio::test]
async fn login_stores_token_and_decorates_list_requests() {
    let captured = Captured::default();
    let router = Router::new()
        .route(
            "/api/v1/auth/login",
            post(|Form(fields): Form<HashMap<String, String>>| async move {
                assert_eq!(fields["username"], "admin");
                assert_eq!(fields["password"], "admin123");
                Json(json!({"access_token": "tok-1", "token_type": "bearer"}))
            }),
        )
        .route("/api/v1/scenarios/", get(capture_list))
        .with_state(captured.clone());
    let base = common::spawn(router).await;

    let session = Arc::new(MemorySessionStore::new());
    let client = common::client(&base, session);

    assert!(!client.is_logged_in());
    client.login("admin", "admin123").await.unwrap();
    assert!(client.is_logged_in());

    let mut scenarios = client.controller::<Row>(ResourceRoutes::new("/scenarios/"));
    scenarios.refresh().await.unwrap();

    assert_eq!(scenarios.items()[0].id, 1);
    assert_eq!(scenarios.total(), 41);
    assert!(scenarios.state().is_ready());

    // bearer header attached, first page requested with the default size
    assert_eq!(
        captured.auth.lock().unwrap().as_deref(),
        Some("Bearer tok-1")
    );
    let query = captured.query.lock().unwrap().clone();
    assert_eq!(query["skip"], "0");
    assert_eq!(query["limit"], "10");
}

#[tokio::test]
async fn bare_array_list_normalizes_to_page() {
    let router = Router::new().route(
        "/api/v1/roles/",
        get(|| async { Json(json!([{"id": 1}, {"id": 2}, {"id": 3}])) }),
    );
    let base = common::spawn(router).await;
    let client = common::client(&base, Arc::new(MemorySessionStore::new()));

    let mut roles = client.controller::<Row>(ResourceRoutes::new("/roles/"));
    roles.refresh().await.unwrap();

    assert_eq!(roles.items().len(), 3);
    // no explicit total on the wire, so the item count stands in
    assert_eq!(roles.total(), 3);
}

#[tokio::test]
async fn wrapped_payload_is_unwrapped() {
    let router = Router::new().route(
        "/api/v1/auth/me",
        get(|| async {
            Json(json!({"data": {
                "id": 7,
                "username": "auditor",
                "email": null,
                "full_name": null,
                "is_active": true,
                "is_superuser": false
            }}))
        }),
    );
    let base = common::spawn(router).await;
    let client = common::client(&base, Arc::new(MemorySessionStore::new()));

    let me = client.me().await.unwrap();
    assert_eq!(me.id, 7);
    assert_eq!(me.username, "auditor");
}

#[tokio::test]
async fn rejected_token_clears_session_and_fires_hook_once() {
    let router = Router::new().route(
        "/api/v1/auth/me",
        get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({"detail": "凭证已过期"}))) }),
    );
    let base = common::spawn(router).await;

    let session = Arc::new(MemorySessionStore::new());
    session.set_token("stale-token");

    let fired = Arc::new(AtomicUsize::new(0));
    let counter = fired.clone();
    let client = common::client(&base, session.clone()).with_session_expired_hook(Arc::new(
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        },
    ));

    let err = client.me().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
    assert!(session.token().is_none());

    // the hook is deferred, so give it room to land
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    // a rejected unauthenticated call must not fire the hook again
    let err = client.me().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn rejected_token_on_download_tears_down_session() {
    let router = Router::new().route(
        "/api/v1/export/data-assets",
        get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({"detail": "凭证已过期"}))) }),
    );
    let base = common::spawn(router).await;

    let session = Arc::new(MemorySessionStore::new());
    session.set_token("stale-token");

    let fired = Arc::new(AtomicUsize::new(0));
    let counter = fired.clone();
    let client = common::client(&base, session.clone()).with_session_expired_hook(Arc::new(
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        },
    ));

    let err = client
        .export()
        .download("data-assets", ExportFormat::Csv)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
    assert!(session.token().is_none());

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn forbidden_surfaces_detail_and_keeps_session() {
    let router = Router::new().route(
        "/api/v1/users/",
        get(|| async { (StatusCode::FORBIDDEN, Json(json!({"detail": "权限不足"}))) }),
    );
    let base = common::spawn(router).await;

    let session = Arc::new(MemorySessionStore::new());
    session.set_token("tok-2");
    let client = common::client(&base, session.clone());

    let err = client.users().list(&ListQuery::new()).await.unwrap_err();
    match err {
        ClientError::Forbidden(message) => assert_eq!(message, "权限不足"),
        other => panic!("expected Forbidden, got {:?}", other),
    }
    // denial is not expiry
    assert_eq!(session.token().as_deref(), Some("tok-2"));
}

#[tokio::test]
async fn validation_report_is_rendered_into_the_error() {
    let router = Router::new().route(
        "/api/v1/scenarios/",
        get(|| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"detail": [{"loc": ["query", "skip"], "msg": "field required"}]})),
            )
        }),
    );
    let base = common::spawn(router).await;
    let client = common::client(&base, Arc::new(MemorySessionStore::new()));

    let err = client
        .scenarios()
        .list(&ListQuery::new())
        .await
        .unwrap_err();
    match err {
        ClientError::Validation(message) => assert!(message.contains("field required")),
        other => panic!("expected Validation, got {:?}", other),
    }
}
