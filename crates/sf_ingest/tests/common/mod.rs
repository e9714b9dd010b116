// Shared fixtures for the pipeline integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use async_trait::async_trait;
use sf_classifier::KeywordClassifier;
use sf_core::{Article, ArticleSource, FetchError, Page, RawBatch, ResourceKind};
use sf_ingest::{IngestionPipeline, RateGate};
use sf_storage::InMemoryStorage;
use tokio::time::Instant;

/// Upstream stand-in that replays queued responses and records every call.
#[derive(Default)]
pub struct ScriptedSource {
    responses: Mutex<VecDeque<Result<RawBatch, FetchError>>>,
    calls: Mutex<Vec<(ResourceKind, u32, u32, Instant)>>,
}

impl ScriptedSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_page(&self, articles: Vec<Article>) {
        self.push(Ok(RawBatch::Page(Page::from_results(articles))));
    }

    pub fn push(&self, response: Result<RawBatch, FetchError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> Vec<(ResourceKind, u32, u32, Instant)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch(
        &self,
        kind: ResourceKind,
        limit: u32,
        offset: u32,
    ) -> Result<RawBatch, FetchError> {
        self.calls
            .lock()
            .unwrap()
            .push((kind, limit, offset, Instant::now()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(RawBatch::Page(Page::from_results(vec![]))))
    }
}

pub fn pipeline_with(source: Arc<ScriptedSource>, interval: Duration) -> IngestionPipeline {
    IngestionPipeline::new(
        source,
        Arc::new(InMemoryStorage::new()),
        Arc::new(KeywordClassifier::default()),
        Arc::new(RateGate::new(interval)),
    )
}

pub fn article(id: u64, title: &str) -> Article {
    Article::new(id, title, "")
}

pub fn ids(articles: &[Article]) -> Vec<String> {
    articles.iter().map(|a| a.id.to_string()).collect()
}
