use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use service::admin::domain::{Message, MessageInput};

use crate::{errors::JsonApiError, routes::ServerState};

#[utoipa::path(
    get, path = "/admin/messages", tag = "messages",
    responses((status = 200, description = "List OK", body = [crate::openapi::MessageDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Message>>, JsonApiError> {
    Ok(Json(state.admin.list_messages().await?))
}

#[utoipa::path(
    get, path = "/admin/messages/{id}", tag = "messages",
    params(("id" = i64, Path, description = "Message ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<Message>, JsonApiError> {
    state
        .admin
        .get_message(id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("message", id))
}

#[utoipa::path(
    post, path = "/admin/messages", tag = "messages",
    request_body = crate::openapi::MessageInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::MessageDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<MessageInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Message>), JsonApiError> {
    let Json(input) = payload?;
    let message = state.admin.add_message(input).await?;
    Ok((StatusCode::CREATED, Json(message)))
}
