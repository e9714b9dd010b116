use std::sync::Arc;
use std::time::Duration;
use sf_core::{ArticleSource, ArticleStore, Result};
use sf_storage::InMemoryStorage;

pub mod cli;
pub mod client;
pub mod gate;
pub mod logging;
pub mod pipeline;

pub use cli::{handle_fetch, FetchArgs};
pub use client::{ClientConfig, SpaceflightClient};
pub use gate::RateGate;
pub use logging::init_logging;
pub use pipeline::IngestionPipeline;

/// Everything needed to assemble a pipeline against the real upstream.
#[derive(Debug, Clone)]
pub struct Config {
    pub client: ClientConfig,
    pub rate_limit: Duration,
    pub classifier: sf_classifier::Config,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            rate_limit: gate::DEFAULT_INTERVAL,
            classifier: sf_classifier::Config::default(),
        }
    }
}

/// Build a pipeline with a fresh in-memory store.
pub fn build_pipeline(config: Config) -> Result<IngestionPipeline> {
    let source: Arc<dyn ArticleSource> = Arc::new(SpaceflightClient::new(config.client)?);
    let store: Arc<dyn ArticleStore> = Arc::new(InMemoryStorage::new());
    let classifier = sf_classifier::create_classifier(Some(config.classifier))?;
    let gate = Arc::new(RateGate::new(config.rate_limit));
    Ok(IngestionPipeline::new(source, store, classifier, gate))
}

pub mod prelude {
    pub use super::{build_pipeline, Config, IngestionPipeline, RateGate, SpaceflightClient};
    pub use sf_core::{Article, ArticleSource, Error, FetchError, Ingested, ResourceKind, Result};
}
