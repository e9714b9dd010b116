use sf_ingest::IngestionPipeline;

pub struct AppState {
    pub pipeline: IngestionPipeline,
}
