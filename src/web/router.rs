//! Router configuration for the Web API.

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_message, create_topic, delete_message, get_topic, list_topics, update_message,
    AppState,
};
use super::middleware::{create_cors_layer, jwt_auth, JwtState};

/// Create the main API router, including the health check.
pub fn create_router(
    app_state: Arc<AppState>,
    jwt_state: Arc<JwtState>,
    cors_origins: &[String],
) -> Router {
    let topic_routes = Router::new()
        .route("/", get(list_topics).post(create_topic))
        .route("/:topic_id", get(get_topic))
        .route("/:topic_id/messages", post(create_message))
        .route(
            "/:topic_id/messages/:message_id",
            put(update_message).delete(delete_message),
        );

    let api_routes = Router::new().nest("/topics", topic_routes);

    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(middleware::from_fn(move |req, next| {
                    jwt_auth(jwt_state.clone(), req, next)
                })),
        )
        .with_state(app_state)
        .merge(create_health_router())
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let response = create_health_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_protected_route_requires_token() {
        let db = crate::Database::open_in_memory().await.unwrap();
        let router = create_router(
            Arc::new(AppState::new(db)),
            Arc::new(JwtState::new("secret")),
            &[],
        );

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/topics")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"title":"General"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
