use std::fmt;
use chrono::{DateTime, Utc};
use sf_core::Article;

pub mod backends;

pub use backends::*;

/// A stored article plus the moment the pipeline first accepted it.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredArticle {
    pub article: Article,
    pub first_seen: DateTime<Utc>,
}

/// Decides which entries survive a sweep of the store.
///
/// Evicting an id means a later batch carrying it will be processed again,
/// so any policy other than [`KeepForever`] relaxes the dedup guarantee.
pub trait RetentionPolicy: Send + Sync + fmt::Debug {
    fn retain(&self, entry: &StoredArticle, now: DateTime<Utc>) -> bool;

    /// Whether sweeping can ever drop anything. Lets the store skip the scan.
    fn evicts(&self) -> bool {
        true
    }
}

/// Never evict. The store grows for as long as it lives.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepForever;

impl RetentionPolicy for KeepForever {
    fn retain(&self, _entry: &StoredArticle, _now: DateTime<Utc>) -> bool {
        true
    }

    fn evicts(&self) -> bool {
        false
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{KeepForever, RetentionPolicy, StoredArticle};
}
