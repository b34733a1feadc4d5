//! Topic handlers for the Web API.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::web::dto::{
    sanitize_string, ApiResponse, CreateTopicRequest, MessageResponse, TopicDetailResponse,
    TopicResponse, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::web::middleware::AuthUser;

/// GET /api/topics - List topics, newest first.
pub async fn list_topics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<TopicResponse>>>, ApiError> {
    let topics = state.topic_service().list().await?;
    Ok(Json(ApiResponse::new(
        topics.into_iter().map(TopicResponse::from).collect(),
    )))
}

/// POST /api/topics - Create a topic.
pub async fn create_topic(
    State(state): State<Arc<AppState>>,
    AuthUser(identity): AuthUser,
    ValidatedJson(req): ValidatedJson<CreateTopicRequest>,
) -> Result<Json<ApiResponse<TopicResponse>>, ApiError> {
    let topic = state
        .topic_service()
        .create(&identity, sanitize_string(&req.title))
        .await?;
    Ok(Json(ApiResponse::new(topic.into())))
}

/// GET /api/topics/:topic_id - Topic with its messages.
pub async fn get_topic(
    State(state): State<Arc<AppState>>,
    Path(topic_id): Path<String>,
) -> Result<Json<ApiResponse<TopicDetailResponse>>, ApiError> {
    let topic = state.topic_service().get(&topic_id).await?;
    let messages = state
        .message_service()
        .list_for_topic(&topic.topic_uuid)
        .await?;

    Ok(Json(ApiResponse::new(TopicDetailResponse {
        topic: topic.into(),
        messages: messages.into_iter().map(MessageResponse::from).collect(),
    })))
}
