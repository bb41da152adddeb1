use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use user_registry_backend::models::dto::HealthResponse;
use user_registry_backend::routes::make_app;
use user_registry_backend::store::UserStore;
use user_registry_backend::{AppState, Config};

#[tokio::test]
async fn health_reports_ok_with_a_timestamp() {
    let state = Arc::new(AppState {
        store: UserStore::new(),
        config: Config { port: 0 },
    });
    let app = make_app(state);

    let before = chrono::Utc::now();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(health.status, "ok");
    assert!(health.timestamp >= before);
    assert!(health.timestamp <= chrono::Utc::now());
}
