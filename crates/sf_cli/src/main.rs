use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;
use sf_classifier::matchers::MatchMode;
use sf_classifier::topics::TopicTable;
use sf_ingest::client::{ClientConfig, DEFAULT_BASE_URL};
use sf_ingest::{handle_fetch, FetchArgs};
use sf_web::AppState;
use tracing::info;

/// `humantime` durations (`500ms`, `1m 30s`), plus a bare number as seconds.
fn parse_interval(s: &str) -> std::result::Result<Duration, humantime::DurationError> {
    match s.trim().parse::<u64>() {
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(_) => humantime::parse_duration(s),
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Rate-limited, deduplicating Spaceflight News ingestion", long_about = None)]
struct Cli {
    /// Upstream API base URL
    #[arg(long, env = "SF_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,
    /// Wait before every upstream call (e.g. 5s, 500ms, 1m30s)
    #[arg(long, env = "SF_RATE_LIMIT", default_value = "5s", value_parser = parse_interval, global = true)]
    rate_limit: Duration,
    /// Upstream request timeout
    #[arg(long, env = "SF_TIMEOUT", default_value = "30s", value_parser = parse_interval, global = true)]
    timeout: Duration,
    /// JSON topic table: [{"name": "...", "keywords": ["..."]}]
    #[arg(long, env = "SF_TOPICS", global = true)]
    topics: Option<PathBuf>,
    /// How topic keywords are matched
    #[arg(long, value_enum, default_value_t = MatchMode::Substring, global = true)]
    match_mode: MatchMode,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve /articles, /blogs, /reports, /info and /health
    Serve {
        #[arg(long, env = "SF_BIND", default_value = "127.0.0.1:8000")]
        bind: SocketAddr,
    },
    /// Ingest one page and print the result
    Fetch(FetchArgs),
}

impl Cli {
    fn pipeline_config(&self) -> sf_core::Result<sf_ingest::Config> {
        let topics = match &self.topics {
            Some(path) => TopicTable::from_path(path)?,
            None => TopicTable::default(),
        };

        Ok(sf_ingest::Config {
            client: ClientConfig {
                base_url: self.base_url.clone(),
                timeout: self.timeout,
            },
            rate_limit: self.rate_limit,
            classifier: sf_classifier::Config {
                topics,
                match_mode: self.match_mode,
            },
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    sf_ingest::init_logging("info");
    let cli = Cli::parse();

    let pipeline = sf_ingest::build_pipeline(cli.pipeline_config()?)?;
    info!(
        base_url = %cli.base_url,
        rate_limit = %humantime::format_duration(cli.rate_limit),
        "🛰️ Ingestion pipeline ready"
    );

    match cli.command {
        Commands::Serve { bind } => {
            sf_web::serve(bind, AppState { pipeline }).await?;
        }
        Commands::Fetch(args) => {
            handle_fetch(args, &pipeline).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::ResourceKind;

    #[test]
    fn test_parse_interval() {
        assert_eq!(parse_interval("5s").unwrap(), Duration::from_secs(5));
        assert_eq!(parse_interval("5").unwrap(), Duration::from_secs(5));
        assert_eq!(parse_interval("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_interval("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_interval("1m 30s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_interval("1h 15m").unwrap(), Duration::from_secs(4500));
        assert!(parse_interval("").is_err());
        assert!(parse_interval("5x").is_err());
        assert!(parse_interval("s").is_err());
    }

    #[test]
    fn test_parse_interval_overflow_is_an_error() {
        assert!(parse_interval("9999999999999999h").is_err());
        assert!(parse_interval("99999999999999999999").is_err());

        let err = Cli::try_parse_from(["sf", "--rate-limit", "9999999999999999h", "fetch", "info"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_fetch_with_global_flags() {
        let cli = Cli::try_parse_from([
            "sf",
            "fetch",
            "reports",
            "--limit",
            "3",
            "--rate-limit",
            "1500ms",
            "--match-mode",
            "word",
        ])
        .unwrap();

        assert_eq!(cli.rate_limit, Duration::from_millis(1500));
        assert_eq!(cli.timeout, Duration::from_secs(30));
        assert_eq!(cli.match_mode, MatchMode::Word);
        match cli.command {
            Commands::Fetch(args) => {
                assert_eq!(args.kind, ResourceKind::Reports);
                assert_eq!(args.limit, 3);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_serve_bind_address() {
        let cli = Cli::try_parse_from(["sf", "serve", "--bind", "0.0.0.0:9000"]).unwrap();
        match cli.command {
            Commands::Serve { bind } => assert_eq!(bind.port(), 9000),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_missing_topic_file_is_config_error() {
        let cli = Cli::try_parse_from(["sf", "--topics", "/nonexistent/topics.json", "fetch", "info"])
            .unwrap();
        assert!(matches!(cli.pipeline_config(), Err(sf_core::Error::Config(_))));
    }
}
