use std::sync::Arc;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use sf_core::{Ingested, ResourceKind};
use crate::error::ApiError;
use crate::AppState;

const DEFAULT_LIMIT: u32 = 10;

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Pagination {
    fn validate(&self) -> Result<(), ApiError> {
        if self.limit < 1 {
            return Err(ApiError::InvalidQuery("limit must be at least 1".to_string()));
        }
        Ok(())
    }
}

async fn ingest(
    state: &AppState,
    kind: ResourceKind,
    pagination: Pagination,
) -> Result<Json<Ingested>, ApiError> {
    pagination.validate()?;
    let ingested = state
        .pipeline
        .ingest(kind, pagination.limit, pagination.offset)
        .await?;
    Ok(Json(ingested))
}

pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Ingested>, ApiError> {
    ingest(&state, ResourceKind::Articles, pagination).await
}

pub async fn list_blogs(
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Ingested>, ApiError> {
    ingest(&state, ResourceKind::Blogs, pagination).await
}

pub async fn list_reports(
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Ingested>, ApiError> {
    ingest(&state, ResourceKind::Reports, pagination).await
}

pub async fn get_info(State(state): State<Arc<AppState>>) -> Result<Json<Ingested>, ApiError> {
    let ingested = state.pipeline.ingest(ResourceKind::Info, 1, 0).await?;
    Ok(Json(ingested))
}

pub async fn health(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let stored = state.pipeline.store().len().await?;
    Ok(Json(json!({"status": "ok", "stored": stored})))
}
