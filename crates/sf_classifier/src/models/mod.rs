use std::sync::Arc;
use sf_core::{Classifier, Result};
use tracing::info;
use crate::Config;

pub mod keyword;

pub use keyword::KeywordClassifier;

/// Build the classifier described by `config`, falling back to the default
/// topic table with substring matching.
pub fn create_classifier(config: Option<Config>) -> Result<Arc<dyn Classifier>> {
    let config = config.unwrap_or_default();
    let classifier = KeywordClassifier::new(&config.topics, config.match_mode)?;
    info!(
        topics = config.topics.len(),
        mode = ?config.match_mode,
        "Keyword classifier ready"
    );
    Ok(Arc::new(classifier))
}
