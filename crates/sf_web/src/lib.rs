use std::net::SocketAddr;
use std::sync::Arc;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/articles", get(handlers::list_articles))
        .route("/blogs", get(handlers::list_blogs))
        .route("/reports", get(handlers::list_reports))
        .route("/info", get(handlers::get_info))
        .route("/health", get(handlers::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> sf_core::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Serving ingestion endpoints");
    axum::serve(listener, create_app(state)).await?;
    Ok(())
}

pub mod prelude {
    pub use sf_core::{Article, Result, Error};
    pub use crate::{create_app, serve, AppState};
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use sf_classifier::KeywordClassifier;
    use sf_core::{Article, ArticleSource, FetchError, Page, RawBatch, ResourceKind};
    use sf_ingest::{IngestionPipeline, RateGate};
    use sf_storage::InMemoryStorage;
    use std::time::Duration;
    use tower::ServiceExt;

    struct StubSource;

    #[async_trait]
    impl ArticleSource for StubSource {
        fn name(&self) -> &str {
            "stub"
        }

        async fn fetch(
            &self,
            kind: ResourceKind,
            limit: u32,
            offset: u32,
        ) -> std::result::Result<RawBatch, FetchError> {
            match kind {
                ResourceKind::Articles => {
                    let results = (offset..offset + limit)
                        .map(|id| Article::new(u64::from(id), format!("Artemis update {}", id), ""))
                        .collect();
                    Ok(RawBatch::Page(Page::from_results(results)))
                }
                ResourceKind::Blogs => Err(FetchError::UpstreamStatus {
                    code: 503,
                    body: "maintenance".to_string(),
                }),
                ResourceKind::Reports => Err(FetchError::Transport {
                    detail: "connection refused".to_string(),
                }),
                ResourceKind::Info => Ok(RawBatch::Info(json!({"version": "4.0.0"}))),
            }
        }
    }

    fn app() -> Router {
        let pipeline = IngestionPipeline::new(
            Arc::new(StubSource),
            Arc::new(InMemoryStorage::new()),
            Arc::new(KeywordClassifier::default()),
            Arc::new(RateGate::new(Duration::ZERO)),
        );
        create_app(AppState { pipeline })
    }

    async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    #[tokio::test]
    async fn test_list_articles_defaults_and_dedup() {
        let app = app();

        let (status, body) = get_json(&app, "/articles").await;
        assert_eq!(status, StatusCode::OK);
        let articles = body.as_array().unwrap();
        assert_eq!(articles.len(), 10);
        assert_eq!(articles[0]["category"], json!("NASA"));

        let (status, body) = get_json(&app, "/articles?limit=12&offset=0").await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<_> = body.as_array().unwrap().iter().map(|a| a["id"].clone()).collect();
        assert_eq!(ids, vec![json!(10), json!(11)]);

        let (_, health) = get_json(&app, "/health").await;
        assert_eq!(health, json!({"status": "ok", "stored": 12}));
    }

    #[tokio::test]
    async fn test_query_validation() {
        let app = app();

        let (status, body) = get_json(&app, "/articles?limit=0").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], json!("limit must be at least 1"));

        let (status, _) = get_json(&app, "/articles?offset=-1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get_json(&app, "/articles?limit=many").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upstream_errors_map_to_bad_gateway() {
        let app = app();

        let (status, body) = get_json(&app, "/blogs").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["kind"], json!("upstream_status"));
        assert_eq!(body["status"], json!(503));

        let (status, body) = get_json(&app, "/reports").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["kind"], json!("transport"));
        assert_eq!(body["status"], Value::Null);
    }

    #[tokio::test]
    async fn test_info_passthrough() {
        let app = app();

        let (status, body) = get_json(&app, "/info").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"version": "4.0.0"}));

        let (_, health) = get_json(&app, "/health").await;
        assert_eq!(health["stored"], json!(0));
    }
}
