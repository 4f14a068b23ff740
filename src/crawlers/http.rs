use super::fetcher::{Fetch, FetchedPage};
use crate::config::CrawlConfig;
use crate::error::CrawlError;
use reqwest::Client;
use url::Url;

/// Fetches pages with plain HTTP requests
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &CrawlConfig) -> Result<Self, CrawlError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, CrawlError> {
        let worker_start = std::time::Instant::now();
        ::log::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;

        let final_url = response.url().clone();
        if &final_url != url {
            ::log::debug!("Redirected {} -> {}", url, final_url);
        }
        let body = response.text().await?;

        ::log::debug!(
            "Fetched {} ({} bytes) in {:.2} seconds",
            final_url,
            body.len(),
            worker_start.elapsed().as_secs_f64()
        );
        Ok(FetchedPage::new(final_url, body))
    }
}
