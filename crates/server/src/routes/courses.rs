use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use service::admin::domain::{Course, CourseInput};
use tracing::info;

use crate::{errors::JsonApiError, routes::ServerState};

#[utoipa::path(
    get, path = "/admin/courses", tag = "courses",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::CourseDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Course>>, JsonApiError> {
    let courses = state.admin.list_courses().await?;
    info!(count = courses.len(), "list courses");
    Ok(Json(courses))
}

#[utoipa::path(
    get, path = "/admin/courses/{id}", tag = "courses",
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CourseDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<Course>, JsonApiError> {
    match state.admin.get_course(id).await? {
        Some(c) => Ok(Json(c)),
        None => Err(JsonApiError::not_found("course", id)),
    }
}

#[utoipa::path(
    post, path = "/admin/courses", tag = "courses",
    request_body = crate::openapi::CourseInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CourseDoc),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CourseInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Course>), JsonApiError> {
    let Json(input) = payload?;
    let course = state.admin.add_course(input).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

#[utoipa::path(
    put, path = "/admin/courses/{id}", tag = "courses",
    params(("id" = i64, Path, description = "Course ID")),
    request_body = crate::openapi::CourseInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CourseDoc),
        (status = 400, description = "Malformed Request"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    payload: Result<Json<CourseInput>, JsonRejection>,
) -> Result<Json<Course>, JsonApiError> {
    let Json(patch) = payload?;
    let course = state.admin.update_course(id, patch).await?;
    Ok(Json(course))
}

#[utoipa::path(
    delete, path = "/admin/courses/{id}", tag = "courses",
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    state.admin.delete_course(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
