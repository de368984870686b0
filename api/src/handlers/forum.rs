//! Forum handlers
//!
//! Per-game topics and replies. Authorship comes from the `Identity`
//! resolved by the identity middleware.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Deserialize;

use super::{parse_game, wants_json};
use crate::app::{ReplyOutcome, TopicDetail};
use crate::domain::entities::{ForumReply, ForumTopic, Identity};
use crate::error::AppError;
use crate::render::render_topics;
use crate::AppState;

/// Request body for creating a topic
#[derive(Debug, Deserialize)]
pub struct CreateTopicRequest {
    pub title: String,
}

/// Request body for replying to a topic
#[derive(Debug, Deserialize)]
pub struct AddReplyRequest {
    pub text: String,
}

/// GET /games/:game/forum/topics
///
/// User-created topics (newest first) followed by seeded topics.
pub async fn list_topics(
    State(state): State<AppState>,
    Path(game): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let game = parse_game(&game)?;
    let topics = state.forum_service.list_topics(game).await;

    if wants_json(&headers) {
        Ok(Json(topics).into_response())
    } else {
        Ok((
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_topics(game, &topics),
        )
            .into_response())
    }
}

/// POST /games/:game/forum/topics
pub async fn create_topic(
    State(state): State<AppState>,
    Path(game): Path<String>,
    Extension(identity): Extension<Identity>,
    Json(request): Json<CreateTopicRequest>,
) -> Result<(StatusCode, Json<ForumTopic>), AppError> {
    let game = parse_game(&game)?;
    let topic = state
        .forum_service
        .create_topic(game, &request.title, &identity)
        .await?;

    Ok((StatusCode::CREATED, Json(topic)))
}

/// GET /games/:game/forum/topics/:topic_id
pub async fn get_topic(
    State(state): State<AppState>,
    Path((game, topic_id)): Path<(String, String)>,
) -> Result<Json<TopicDetail>, AppError> {
    let game = parse_game(&game)?;
    let detail = state.forum_service.topic_detail(game, &topic_id).await?;
    Ok(Json(detail))
}

/// GET /games/:game/forum/topics/:topic_id/replies
///
/// Oldest first.
pub async fn list_replies(
    State(state): State<AppState>,
    Path((game, topic_id)): Path<(String, String)>,
) -> Result<Json<Vec<ForumReply>>, AppError> {
    let game = parse_game(&game)?;
    Ok(Json(state.forum_service.list_replies(game, &topic_id).await))
}

/// POST /games/:game/forum/topics/:topic_id/replies
///
/// Replies to unknown topics are stored but bump no counter.
pub async fn add_reply(
    State(state): State<AppState>,
    Path((game, topic_id)): Path<(String, String)>,
    Extension(identity): Extension<Identity>,
    Json(request): Json<AddReplyRequest>,
) -> Result<(StatusCode, Json<ReplyOutcome>), AppError> {
    let game = parse_game(&game)?;
    let outcome = state
        .forum_service
        .add_reply(game, &topic_id, &request.text, &identity)
        .await?;

    Ok((StatusCode::CREATED, Json(outcome)))
}
