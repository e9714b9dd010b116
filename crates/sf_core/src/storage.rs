use std::collections::HashMap;
use async_trait::async_trait;
use crate::types::{Article, ArticleId};
use crate::Result;

#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Returns true if an article with this id has already been accepted
    async fn contains(&self, id: &ArticleId) -> Result<bool>;

    /// Insert `article` unless its id is already present.
    ///
    /// The check and the insert happen under one lock, so of two concurrent
    /// callers offering the same id exactly one gets `true`.
    async fn insert_if_absent(&self, article: &Article) -> Result<bool>;

    /// Get the canonical stored record for an id
    async fn get(&self, id: &ArticleId) -> Result<Option<Article>>;

    /// Number of stored articles
    async fn len(&self) -> Result<usize>;

    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }

    /// Copy of every stored record keyed by id
    async fn snapshot(&self) -> Result<HashMap<ArticleId, Article>>;
}
