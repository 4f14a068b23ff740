use crate::error::CrawlError;
use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How pages are fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchBackend {
    /// Plain HTTP requests
    #[default]
    Http,
    /// A browser driven through a WebDriver server
    WebDriver,
}

/// Configuration for a cast crawl
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// Title page to start crawling from
    #[serde(default = "default_start_url")]
    pub start_url: String,

    /// Where records are written
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Output format; inferred from the output extension when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// Maximum number of requests in flight
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// User-Agent header sent by the HTTP backend
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Fetch backend
    #[serde(default)]
    pub backend: FetchBackend,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,
}

/// Default start page
fn default_start_url() -> String {
    "https://www.imdb.com/title/tt0108778/".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("movies.csv")
}

/// Default value for max_concurrency
fn default_max_concurrency() -> usize {
    16
}

fn default_request_timeout_secs() -> u64 {
    180
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self::new(&default_start_url())
    }
}

impl CrawlConfig {
    /// Create a new configuration with default values
    pub fn new(start_url: &str) -> Self {
        Self {
            start_url: start_url.to_string(),
            output: default_output(),
            format: None,
            max_concurrency: default_max_concurrency(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
            backend: FetchBackend::default(),
            webdriver_url: default_webdriver_url(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CrawlError> {
        let path = path.as_ref();
        let config_error = |source: Box<dyn std::error::Error + Send + Sync>| CrawlError::Config {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(|e| config_error(e.into()))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| config_error(e.into()))?;

        serde_json::from_str(&contents).map_err(|e| config_error(e.into()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, CrawlError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Output format, explicit or inferred from the output path
    pub fn output_format(&self) -> OutputFormat {
        self.format
            .unwrap_or_else(|| OutputFormat::from_path(&self.output))
    }
}
