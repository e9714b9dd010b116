use clap::Args;
use sf_core::{ResourceKind, Result};
use crate::pipeline::IngestionPipeline;

#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// Upstream collection to ingest
    #[arg(value_enum)]
    pub kind: ResourceKind,
    /// Page size, at least 1
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: u32,
    /// Items to skip
    #[arg(long, default_value_t = 0)]
    pub offset: u32,
}

/// Run one ingest and print what it produced as JSON.
pub async fn handle_fetch(args: FetchArgs, pipeline: &IngestionPipeline) -> Result<()> {
    let ingested = pipeline.ingest(args.kind, args.limit, args.offset).await?;
    println!("{}", serde_json::to_string_pretty(&ingested)?);
    Ok(())
}
