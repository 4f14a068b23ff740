use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the crawl collaborators (fetching, configuration, output)
#[derive(Debug, Error)]
pub enum CrawlError {
    /// A URL could not be parsed or resolved
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// An HTTP request failed or returned a non-success status
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A WebDriver command failed
    #[error("WebDriver error: {0}")]
    WebDriver(#[from] fantoccini::error::CmdError),

    /// A page did not load within the request timeout
    #[error("timed out after {secs}s fetching {url}")]
    Timeout { url: String, secs: u64 },

    /// No WebDriver session could be opened
    #[error("no WebDriver session available at {0}")]
    NoSession(String),

    /// A configuration file could not be read or parsed
    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CrawlError {
    /// Builds an `InvalidUrl` error for the given input
    pub fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            source,
        }
    }
}
