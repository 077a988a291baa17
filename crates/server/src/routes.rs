pub mod animals;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::animal::{repo::seaorm::SeaOrmAnimalRepository, AnimalService, Cat, Horse};

pub const CATS_PATH: &str = "/api/1/cats";
pub const HORSES_PATH: &str = "/api/1/horses";

/// One service per resource kind, all sharing the same storage handle.
#[derive(Clone)]
pub struct ServerState {
    pub cats: Arc<AnimalService<Cat, SeaOrmAnimalRepository>>,
    pub horses: Arc<AnimalService<Horse, SeaOrmAnimalRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmAnimalRepository::new(db));
        Self {
            cats: Arc::new(AnimalService::new(Arc::clone(&repo))),
            horses: Arc::new(AnimalService::new(repo)),
        }
    }
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health check plus one nested router per kind
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest(CATS_PATH, animals::router(state.cats))
        .nest(HORSES_PATH, animals::router(state.horses))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
