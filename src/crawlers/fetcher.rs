use crate::error::CrawlError;
use std::future::Future;
use url::Url;

/// Raw response of a successful fetch
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects; base for resolving links in the body
    pub url: Url,

    /// Response body
    pub body: String,
}

impl FetchedPage {
    pub fn new(url: Url, body: String) -> Self {
        Self { url, body }
    }
}

// Define a base trait for page fetchers
pub trait Fetch: Send + Sync + 'static {
    /// Fetch a single URL
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<FetchedPage, CrawlError>> + Send;

    /// Release backend resources once the crawl is over
    fn finish(&self) -> impl Future<Output = ()> + Send {
        async {}
    }
}
