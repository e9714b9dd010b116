use async_trait::async_trait;
use crate::error::FetchError;
use crate::types::{RawBatch, ResourceKind};

/// One call against the upstream news API.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Returns the name of the upstream
    fn name(&self) -> &str;

    /// Fetch one pagination window of `kind`. Implementations issue exactly
    /// one request and never retry.
    async fn fetch(
        &self,
        kind: ResourceKind,
        limit: u32,
        offset: u32,
    ) -> std::result::Result<RawBatch, FetchError>;
}
