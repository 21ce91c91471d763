use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorBodyDoc { pub error: String, pub detail: Option<String> }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDoc {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub level: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub prerequisites: Option<String>,
    pub features: Option<String>,
    pub instructor: Option<String>,
    pub rating: Option<f64>,
    pub students_enrolled: Option<i32>,
}

/// Creation requires `name`; on update every field is optional.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseInputDoc {
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub level: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub prerequisites: Option<String>,
    pub features: Option<String>,
    pub instructor: Option<String>,
    pub rating: Option<f64>,
    pub students_enrolled: Option<i32>,
}

#[derive(ToSchema)]
pub struct StudentDoc { pub id: i64, pub name: String, pub email: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageDoc { pub id: i64, pub sender_name: String, pub email: String, pub content: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageInputDoc { pub sender_name: String, pub email: String, pub content: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::courses::list,
        crate::routes::courses::get,
        crate::routes::courses::create,
        crate::routes::courses::update,
        crate::routes::courses::delete,
        crate::routes::students::list,
        crate::routes::students::get,
        crate::routes::messages::list,
        crate::routes::messages::get,
        crate::routes::messages::create,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBodyDoc,
            CourseDoc,
            CourseInputDoc,
            StudentDoc,
            MessageDoc,
            MessageInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "courses"),
        (name = "students"),
        (name = "messages")
    )
)]
pub struct ApiDoc;
