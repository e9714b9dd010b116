pub mod classifier;
pub mod error;
pub mod source;
pub mod storage;
pub mod types;

pub use classifier::{Classifier, FALLBACK_TOPIC};
pub use error::{Error, FetchError, Result};
pub use source::ArticleSource;
pub use storage::ArticleStore;
pub use types::{Article, ArticleId, Ingested, Page, RawBatch, ResourceKind};
