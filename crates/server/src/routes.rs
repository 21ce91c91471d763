use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::admin::AdminService;

use crate::openapi::ApiDoc;

pub mod courses;
pub mod messages;
pub mod students;

#[derive(Clone)]
pub struct ServerState {
    pub admin: Arc<AdminService>,
}

impl ServerState {
    pub fn new(admin: AdminService) -> Self {
        Self { admin: Arc::new(admin) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// CORS for the single front-end origin. The allow-origin header is only
/// echoed when the request `Origin` matches.
pub fn build_cors(allowed_origin: &str) -> anyhow::Result<CorsLayer> {
    let origin = HeaderValue::from_str(allowed_origin)?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Build the full application router: admin resources under `/admin` plus health and docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let admin_routes = Router::new()
        .route("/courses", get(courses::list).post(courses::create))
        .route("/courses/:id", get(courses::get).put(courses::update).delete(courses::delete))
        .route("/students", get(students::list))
        .route("/students/:id", get(students::get))
        .route("/messages", get(messages::list).post(messages::create))
        .route("/messages/:id", get(messages::get));

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/admin", admin_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径，日志级别为 INFO
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
