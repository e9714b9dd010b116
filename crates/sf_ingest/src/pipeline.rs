use std::sync::Arc;
use sf_core::{
    Article, ArticleSource, ArticleStore, Classifier, Ingested, RawBatch, ResourceKind, Result,
};
use tracing::{debug, info, instrument, warn};
use crate::gate::RateGate;

/// Fetch → dedup → classify → commit, one upstream call per `ingest`.
///
/// Cloning is cheap and every clone shares the same source, store, classifier
/// and rate gate.
#[derive(Clone)]
pub struct IngestionPipeline {
    source: Arc<dyn ArticleSource>,
    store: Arc<dyn ArticleStore>,
    classifier: Arc<dyn Classifier>,
    gate: Arc<RateGate>,
}

impl std::fmt::Debug for IngestionPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IngestionPipeline")
            .field("source", &self.source.name())
            .field("classifier", &self.classifier)
            .field("gate", &self.gate)
            .finish()
    }
}

impl IngestionPipeline {
    pub fn new(
        source: Arc<dyn ArticleSource>,
        store: Arc<dyn ArticleStore>,
        classifier: Arc<dyn Classifier>,
        gate: Arc<RateGate>,
    ) -> Self {
        Self {
            source,
            store,
            classifier,
            gate,
        }
    }

    pub fn store(&self) -> &Arc<dyn ArticleStore> {
        &self.store
    }

    pub fn classifier(&self) -> &Arc<dyn Classifier> {
        &self.classifier
    }

    pub fn gate(&self) -> &Arc<RateGate> {
        &self.gate
    }

    /// Wait out the rate gate, fetch one window of `kind` and return the
    /// articles that were not seen before, classified, in upstream order.
    ///
    /// A fetch failure is returned as-is and leaves the store untouched.
    /// `info` is returned unmodified.
    #[instrument(level = "debug", skip(self), fields(source = self.source.name()))]
    pub async fn ingest(&self, kind: ResourceKind, limit: u32, offset: u32) -> Result<Ingested> {
        self.gate.wait().await;

        let batch = match self.source.fetch(kind, limit, offset).await {
            Ok(batch) => batch,
            Err(e) => {
                warn!(%kind, limit, offset, failure = e.kind(), "Ingest aborted, store unchanged");
                return Err(e.into());
            }
        };

        match batch {
            RawBatch::Info(info) => Ok(Ingested::Info(info)),
            RawBatch::Page(page) => {
                let fetched = page.results.len();
                let processed = self.process(page.results).await?;
                info!(%kind, limit, offset, fetched, new = processed.len(), "Ingested batch");
                Ok(Ingested::Articles(processed))
            }
        }
    }

    async fn process(&self, raw: Vec<Article>) -> Result<Vec<Article>> {
        let mut processed = Vec::with_capacity(raw.len());

        for mut article in raw {
            if self.store.contains(&article.id).await? {
                debug!(id = %article.id, "Skipping already-seen article");
                continue;
            }

            let category = self.classifier.classify(&article.title, &article.summary);
            article.category = Some(category.to_string());

            // a concurrent ingest may have committed the same id since the check
            if !self.store.insert_if_absent(&article).await? {
                debug!(id = %article.id, "Article committed concurrently, skipping");
                continue;
            }

            processed.push(article);
        }

        Ok(processed)
    }
}
