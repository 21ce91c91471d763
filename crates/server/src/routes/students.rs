use axum::{extract::{Path, State}, Json};
use service::admin::domain::Student;

use crate::{errors::JsonApiError, routes::ServerState};

#[utoipa::path(
    get, path = "/admin/students", tag = "students",
    responses((status = 200, description = "List OK", body = [crate::openapi::StudentDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Student>>, JsonApiError> {
    Ok(Json(state.admin.list_students().await?))
}

#[utoipa::path(
    get, path = "/admin/students/{id}", tag = "students",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::StudentDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<Student>, JsonApiError> {
    state
        .admin
        .get_student(id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("student", id))
}
