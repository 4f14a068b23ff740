use cast_crawler::output::OutputFormat;
use cast_crawler::{CrawlConfig, CrawlError, FetchBackend};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cast-crawler")]
#[command(about = "Crawls a title's cast and writes one row per actor and credited work")]
#[command(version)]
pub struct Args {
    /// Title page to start from (defaults to the configured start URL)
    pub start_url: Option<String>,

    /// Output file; format follows the extension (.csv, .json, .jsonl)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format, overriding the file extension
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Maximum number of concurrent requests
    #[arg(short, long)]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// How pages are fetched
    #[arg(short, long, value_enum)]
    pub backend: Option<BackendArg>,

    /// WebDriver server URL (webdriver backend only)
    #[arg(long)]
    pub webdriver_url: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Http,
    Webdriver,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Json,
    Jsonl,
}

impl From<BackendArg> for FetchBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Http => FetchBackend::Http,
            BackendArg::Webdriver => FetchBackend::WebDriver,
        }
    }
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Jsonl => OutputFormat::JsonLines,
        }
    }
}

impl Args {
    /// Builds the crawl configuration: config file (or defaults), then flags
    pub fn into_config(self) -> Result<CrawlConfig, CrawlError> {
        let mut config = match &self.config {
            Some(path) => CrawlConfig::from_file(path)?,
            None => CrawlConfig::default(),
        };

        if let Some(start_url) = self.start_url {
            config.start_url = start_url;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(format) = self.format {
            config.format = Some(format.into());
        }
        if let Some(concurrency) = self.concurrency {
            config.max_concurrency = concurrency;
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = timeout;
        }
        if let Some(backend) = self.backend {
            config.backend = backend.into();
        }
        if let Some(webdriver_url) = self.webdriver_url {
            config.webdriver_url = webdriver_url;
        }
        Ok(config)
    }
}
