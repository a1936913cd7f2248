use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["service"], "fleet-reservation");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_conflict_error_envelope() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/conflict")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Conflict");
    assert_eq!(body["code"], "CONFLICT");
    assert_eq!(
        body["message"],
        "Vehicle is not available for the selected time period"
    );
}

#[tokio::test]
async fn test_precondition_error_envelope() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/already-decided")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);

    let body = body_json(response).await;
    assert_eq!(body["code"], "PRECONDITION_FAILED");
}

// Función helper para crear la app de test con el mismo shape de
// respuestas que el servidor real
fn create_test_app() -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async {
                Json(json!({
                    "service": "fleet-reservation",
                    "status": "healthy",
                }))
            }),
        )
        .route(
            "/conflict",
            get(|| async {
                (
                    StatusCode::CONFLICT,
                    Json(json!({
                        "error": "Conflict",
                        "message": "Vehicle is not available for the selected time period",
                        "code": "CONFLICT",
                    })),
                )
                    .into_response()
            }),
        )
        .route(
            "/already-decided",
            get(|| async {
                (
                    StatusCode::PRECONDITION_FAILED,
                    Json(json!({
                        "error": "Precondition Failed",
                        "message": "Approval has already been decided",
                        "code": "PRECONDITION_FAILED",
                    })),
                )
                    .into_response()
            }),
        )
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
