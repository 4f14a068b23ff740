pub mod dispatch;
pub mod fetcher;
pub mod http;
pub mod webdriver;

pub use dispatch::CrawlStats;
pub use fetcher::{Fetch, FetchedPage};
pub use http::HttpFetcher;
pub use webdriver::WebDriverFetcher;
