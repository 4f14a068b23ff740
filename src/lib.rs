// Re-export modules
pub mod config;
pub mod crawlers;
pub mod error;
pub mod handlers;
pub mod output;
pub mod parsers;
pub mod results;

// Re-export commonly used types for convenience
pub use config::{CrawlConfig, FetchBackend};
pub use error::CrawlError;
pub use results::CastRecord;

use crawlers::{Fetch, HttpFetcher, WebDriverFetcher};
use std::sync::Arc;
use tokio::sync::mpsc;
use url::Url;

/// Main builder for a cast crawl starting from a single title page
pub struct Crawl {
    config: CrawlConfig,
}

impl Crawl {
    /// Create a new Crawl builder for the given title page
    pub fn new(start_url: &str) -> Self {
        Self {
            config: CrawlConfig::new(start_url),
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: CrawlConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<std::path::Path>) -> Result<Self, CrawlError> {
        let config = CrawlConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Set the maximum number of concurrent requests
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.config.max_concurrency = max_concurrency;
        self
    }

    /// Select the fetch backend
    pub fn with_backend(mut self, backend: FetchBackend) -> Self {
        self.config.backend = backend;
        self
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    /// Start the crawl with the configured backend and get a receiver for records
    pub async fn generate(mut self) -> Result<mpsc::Receiver<CastRecord>, CrawlError> {
        match self.config.backend {
            FetchBackend::Http => {
                let fetcher = HttpFetcher::new(&self.config)?;
                self.generate_with(fetcher)
            }
            FetchBackend::WebDriver => {
                // Override the WebDriver URL with an environment variable if provided
                if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
                    if !webdriver_url.is_empty() {
                        self.config.webdriver_url = webdriver_url;
                    }
                }
                let fetcher = WebDriverFetcher::new(
                    &self.config.webdriver_url,
                    self.config.request_timeout(),
                );
                self.generate_with(fetcher)
            }
        }
    }

    /// Start the crawl with a caller-supplied fetcher
    ///
    /// Must be called from within a tokio runtime.
    pub fn generate_with<F: Fetch>(
        self,
        fetcher: F,
    ) -> Result<mpsc::Receiver<CastRecord>, CrawlError> {
        let start_url = Url::parse(&self.config.start_url)
            .map_err(|e| CrawlError::invalid_url(&self.config.start_url, e))?;

        Ok(crawlers::dispatch::start(
            Arc::new(fetcher),
            start_url,
            self.config.max_concurrency,
        ))
    }
}
