use thiserror::Error;

/// Failure of a single upstream call.
///
/// The two variants are kept apart so callers can decide on their own retry
/// policy: a transport failure may be worth retrying, a 4xx usually is not.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("upstream returned HTTP {code}: {body}")]
    UpstreamStatus { code: u16, body: String },

    #[error("transport error: {detail}")]
    Transport { detail: String },
}

impl FetchError {
    /// HTTP status reported by the upstream, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::UpstreamStatus { code, .. } => Some(*code),
            FetchError::Transport { .. } => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::UpstreamStatus { .. } => "upstream_status",
            FetchError::Transport { .. } => "transport",
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
