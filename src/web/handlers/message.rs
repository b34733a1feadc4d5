//! Message handlers for the Web API.
//!
//! Update and delete answer 200 even when the caller was not allowed to
//! change the message; see [`MessageService`](crate::message::MessageService).

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::web::dto::{ApiResponse, JsonBody, MessageRequest, MessageResponse, TopicResponse};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::web::middleware::AuthUser;

/// POST /api/topics/:topic_id/messages - Create a message.
pub async fn create_message(
    State(state): State<Arc<AppState>>,
    AuthUser(identity): AuthUser,
    Path(topic_id): Path<String>,
    JsonBody(req): JsonBody<MessageRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let message = state
        .message_service()
        .create(&identity, req.into_draft(), &topic_id)
        .await?;
    Ok(Json(ApiResponse::new(message.into())))
}

/// PUT /api/topics/:topic_id/messages/:message_id - Update a message.
///
/// The message id alone selects the message; the topic segment of the
/// path is not checked. Responds with the message's own topic.
pub async fn update_message(
    State(state): State<Arc<AppState>>,
    AuthUser(identity): AuthUser,
    Path((_topic_id, message_id)): Path<(String, String)>,
    JsonBody(req): JsonBody<MessageRequest>,
) -> Result<Json<ApiResponse<TopicResponse>>, ApiError> {
    let topic = state
        .message_service()
        .update(&identity, &message_id, req.into_draft())
        .await?;
    Ok(Json(ApiResponse::new(topic.into())))
}

/// DELETE /api/topics/:topic_id/messages/:message_id - Delete a message.
///
/// The message id alone selects the message; the topic segment of the
/// path is not checked.
pub async fn delete_message(
    State(state): State<Arc<AppState>>,
    AuthUser(identity): AuthUser,
    Path((_topic_id, message_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state
        .message_service()
        .delete(&identity, &message_id)
        .await?;
    Ok(Json(ApiResponse::new(())))
}
