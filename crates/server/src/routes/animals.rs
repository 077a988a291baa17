//! Handlers shared by every animal resource. Each kind gets its own router
//! instance with its own service as state.
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use service::animal::{repository::AnimalRepository, Animal, AnimalInput, AnimalKind, AnimalService};
use tracing::info;

use crate::errors::ApiError;

type Svc<K, R> = State<Arc<AnimalService<K, R>>>;

/// Routes for one kind, meant to be nested under its base path.
pub fn router<K, R>(svc: Arc<AnimalService<K, R>>) -> Router
where
    K: AnimalKind,
    R: AnimalRepository + 'static,
{
    Router::new()
        .route("/", get(list::<K, R>).post(create::<K, R>).put(update::<K, R>))
        .route("/:id", get(get_one::<K, R>).delete(delete::<K, R>))
        .with_state(svc)
}

/// 列出该类型的全部记录
pub async fn list<K: AnimalKind, R: AnimalRepository + 'static>(
    State(svc): Svc<K, R>,
) -> Result<Json<Vec<Animal>>, ApiError> {
    let list = svc.all().await?;
    info!(group = svc.group(), count = list.len(), "list animals");
    Ok(Json(list))
}

pub async fn create<K: AnimalKind, R: AnimalRepository + 'static>(
    State(svc): Svc<K, R>,
    payload: Result<Json<AnimalInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Animal>), ApiError> {
    let Json(input) = payload?;
    let created = svc.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_one<K: AnimalKind, R: AnimalRepository + 'static>(
    State(svc): Svc<K, R>,
    Path(id): Path<String>,
) -> Result<Json<Animal>, ApiError> {
    Ok(Json(svc.get(&id).await?))
}

/// The record id travels in the body; success carries no body.
pub async fn update<K: AnimalKind, R: AnimalRepository + 'static>(
    State(svc): Svc<K, R>,
    payload: Result<Json<AnimalInput>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(input) = payload?;
    svc.update(input).await?;
    Ok(StatusCode::ACCEPTED)
}

pub async fn delete<K: AnimalKind, R: AnimalRepository + 'static>(
    State(svc): Svc<K, R>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    svc.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
