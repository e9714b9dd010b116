use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use sf_core::{Article, ArticleId, ArticleStore, Result};
use tokio::sync::RwLock;
use tracing::debug;
use crate::{KeepForever, RetentionPolicy, StoredArticle};

#[derive(Debug, Default)]
pub struct MemoryStore {
    articles: HashMap<ArticleId, StoredArticle>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &ArticleId) -> bool {
        self.articles.contains_key(id)
    }

    pub fn insert_if_absent(&mut self, article: &Article) -> bool {
        if self.articles.contains_key(&article.id) {
            return false;
        }
        self.articles.insert(
            article.id.clone(),
            StoredArticle {
                article: article.clone(),
                first_seen: Utc::now(),
            },
        );
        true
    }

    pub fn get(&self, id: &ArticleId) -> Option<&StoredArticle> {
        self.articles.get(id)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn sweep(&mut self, policy: &dyn RetentionPolicy) -> usize {
        let now = Utc::now();
        let before = self.articles.len();
        self.articles.retain(|_, entry| policy.retain(entry, now));
        before - self.articles.len()
    }

    pub fn snapshot(&self) -> HashMap<ArticleId, Article> {
        self.articles
            .iter()
            .map(|(id, entry)| (id.clone(), entry.article.clone()))
            .collect()
    }
}

/// Deduplication store shared by every clone of a pipeline.
///
/// One lock covers the whole map; lookups take it shared, inserts and sweeps
/// take it exclusive.
#[derive(Clone)]
pub struct InMemoryStorage {
    store: Arc<RwLock<MemoryStore>>,
    retention: Arc<dyn RetentionPolicy>,
}

impl std::fmt::Debug for InMemoryStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStorage")
            .field("retention", &self.retention)
            .finish()
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::with_retention(Arc::new(KeepForever))
    }

    pub fn with_retention(retention: Arc<dyn RetentionPolicy>) -> Self {
        Self {
            store: Arc::new(RwLock::new(MemoryStore::new())),
            retention,
        }
    }

    /// Apply the retention policy now. Returns how many entries were dropped.
    pub async fn sweep(&self) -> usize {
        if !self.retention.evicts() {
            return 0;
        }
        let mut store = self.store.write().await;
        let evicted = store.sweep(self.retention.as_ref());
        if evicted > 0 {
            debug!(evicted, remaining = store.len(), "Swept dedup store");
        }
        evicted
    }

    /// When an id was first accepted, if it is still stored.
    pub async fn first_seen(&self, id: &ArticleId) -> Option<chrono::DateTime<Utc>> {
        let store = self.store.read().await;
        store.get(id).map(|entry| entry.first_seen)
    }
}

#[async_trait]
impl ArticleStore for InMemoryStorage {
    async fn contains(&self, id: &ArticleId) -> Result<bool> {
        let store = self.store.read().await;
        Ok(store.contains(id))
    }

    async fn insert_if_absent(&self, article: &Article) -> Result<bool> {
        let mut store = self.store.write().await;
        if self.retention.evicts() {
            store.sweep(self.retention.as_ref());
        }
        Ok(store.insert_if_absent(article))
    }

    async fn get(&self, id: &ArticleId) -> Result<Option<Article>> {
        let store = self.store.read().await;
        Ok(store.get(id).map(|entry| entry.article.clone()))
    }

    async fn len(&self) -> Result<usize> {
        let store = self.store.read().await;
        Ok(store.len())
    }

    async fn snapshot(&self) -> Result<HashMap<ArticleId, Article>> {
        let store = self.store.read().await;
        Ok(store.snapshot())
    }
}
