use super::fetcher::{Fetch, FetchedPage};
use crate::error::CrawlError;
use fantoccini::{Client, ClientBuilder};
use std::future::Future;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::timeout;
use url::Url;

/// Ports tried when the configured WebDriver server does not answer
const FALLBACK_WEBDRIVER_URLS: [&str; 4] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4723", // Appium default
    "http://localhost:9222", // Chrome debug port default
    "http://127.0.0.1:4444",
];

/// Fetches pages through a browser driven over WebDriver
///
/// Sessions are opened lazily, one per concurrent fetch, and returned to an
/// idle pool after each page. A session whose command failed is closed rather
/// than reused, and so is one that did not load its page in time.
pub struct WebDriverFetcher {
    webdriver_url: String,
    request_timeout: Duration,
    idle: Mutex<Vec<Client>>,
}

impl WebDriverFetcher {
    pub fn new(webdriver_url: &str, request_timeout: Duration) -> Self {
        Self {
            webdriver_url: webdriver_url.to_string(),
            request_timeout,
            idle: Mutex::new(Vec::new()),
        }
    }

    /// Time allowed for loading and reading a single page
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Takes an idle session or opens a new one
    async fn checkout(&self) -> Result<Client, CrawlError> {
        let idle = self.idle.lock().await.pop();
        match idle {
            Some(client) => Ok(client),
            None => connect_to_webdriver(&self.webdriver_url)
                .await
                .ok_or_else(|| CrawlError::NoSession(self.webdriver_url.clone())),
        }
    }

    async fn release(&self, client: Client) {
        self.idle.lock().await.push(client);
    }
}

impl Fetch for WebDriverFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, CrawlError> {
        let client = self.checkout().await?;
        let worker_start = std::time::Instant::now();
        ::log::debug!("SCRAPE: {}", url);

        let result = with_deadline(self.request_timeout, url, async {
            client.goto(url.as_str()).await?;
            let body = client.source().await?;
            let final_url = client.current_url().await?;
            Ok::<_, CrawlError>(FetchedPage::new(final_url, body))
        })
        .await;

        match &result {
            Ok(page) => {
                ::log::debug!(
                    "Processed {} in {:.2} seconds",
                    page.url,
                    worker_start.elapsed().as_secs_f64()
                );
                self.release(client).await;
            }
            Err(e) => {
                if e.to_string().contains("Unable to find session") {
                    ::log::warn!("Lost WebDriver session while accessing {}", url);
                } else {
                    ::log::error!("Failed to access {}: {}", url, e);
                }
                if let Err(e) = client.close().await {
                    ::log::debug!("Failed to close broken session: {}", e);
                }
            }
        }
        result
    }

    async fn finish(&self) {
        let clients: Vec<Client> = self.idle.lock().await.drain(..).collect();
        ::log::debug!("Closing {} WebDriver sessions", clients.len());
        for client in clients {
            if let Err(e) = client.close().await {
                ::log::warn!("Failed to close client: {}", e);
            }
        }
    }
}

/// Runs a page load, failing with `Timeout` once `limit` has elapsed
async fn with_deadline<F>(limit: Duration, url: &Url, load: F) -> Result<FetchedPage, CrawlError>
where
    F: Future<Output = Result<FetchedPage, CrawlError>>,
{
    match timeout(limit, load).await {
        Ok(result) => result,
        Err(_) => Err(CrawlError::Timeout {
            url: url.to_string(),
            secs: limit.as_secs(),
        }),
    }
}

/// Connects to the WebDriver instance, trying common alternatives on failure
async fn connect_to_webdriver(webdriver_url: &str) -> Option<Client> {
    match ClientBuilder::native().connect(webdriver_url).await {
        Ok(client) => {
            ::log::debug!("Connected to WebDriver at {}", webdriver_url);
            return Some(client);
        }
        Err(e) => {
            ::log::error!(
                "Failed to connect to WebDriver at {}: {}",
                webdriver_url,
                e
            );
        }
    }

    for url in FALLBACK_WEBDRIVER_URLS {
        if url == webdriver_url {
            continue;
        }

        ::log::info!("Trying fallback WebDriver URL: {}", url);
        if let Ok(client) = ClientBuilder::native().connect(url).await {
            ::log::debug!("Connected to fallback WebDriver at {}", url);
            return Some(client);
        }
    }

    ::log::error!(
        "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
    );
    None
}
