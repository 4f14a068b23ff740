use super::fetcher::{Fetch, FetchedPage};
use crate::handlers::{self, Task, Yield};
use crate::parsers::Page;
use crate::results::CastRecord;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use url::Url;

/// Capacity of the record channel handed to the output sink
const RESULT_CHANNEL_CAPACITY: usize = 1024;

/// Counters reported when a crawl finishes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// Pages requested
    pub requests: usize,
    /// Requests whose subtree was abandoned
    pub failures: usize,
    /// Records forwarded to the sink
    pub records: usize,
}

/// Starts a crawl in the background and returns a receiver that yields records
/// as actor pages are processed.
///
/// # Arguments
///
/// * `fetcher` - Backend used to fetch every page
/// * `start_url` - Title page the crawl starts from
/// * `max_concurrency` - Maximum number of fetches in flight
pub fn start<F: Fetch>(
    fetcher: Arc<F>,
    start_url: Url,
    max_concurrency: usize,
) -> mpsc::Receiver<CastRecord> {
    ::log::info!("Starting cast crawl for: {}", start_url);

    let (result_tx, result_rx) = mpsc::channel::<CastRecord>(RESULT_CHANNEL_CAPACITY);

    tokio::spawn(async move {
        let crawl_start = std::time::Instant::now();
        let stats = run(fetcher, start_url, max_concurrency, result_tx).await;
        ::log::info!(
            "Crawl complete - {} requests ({} failed), {} records in {:.2} seconds",
            stats.requests,
            stats.failures,
            stats.records,
            crawl_start.elapsed().as_secs_f64()
        );
    });

    result_rx
}

/// Drives the work queue until every reachable page has been handled
///
/// Tasks are taken breadth-first; at most `max_concurrency` fetches run at
/// once. A failed fetch drops only its own subtree.
pub async fn run<F: Fetch>(
    fetcher: Arc<F>,
    start_url: Url,
    max_concurrency: usize,
    result_tx: mpsc::Sender<CastRecord>,
) -> CrawlStats {
    let limit = max_concurrency.max(1);
    let mut queue = VecDeque::from([Task::RequestEntry]);
    let mut in_flight: JoinSet<Option<Vec<Yield>>> = JoinSet::new();
    let mut stats = CrawlStats::default();

    loop {
        while in_flight.len() < limit {
            let Some(task) = queue.pop_front() else {
                break;
            };
            stats.requests += 1;

            let fetcher = Arc::clone(&fetcher);
            let start_url = start_url.clone();
            in_flight.spawn(async move { process_task(fetcher.as_ref(), &task, &start_url).await });
        }

        let Some(joined) = in_flight.join_next().await else {
            break;
        };

        let outputs = match joined {
            Ok(Some(outputs)) => outputs,
            Ok(None) => {
                stats.failures += 1;
                continue;
            }
            Err(e) => {
                ::log::error!("Fetch task failed: {}", e);
                stats.failures += 1;
                continue;
            }
        };

        for output in outputs {
            match output {
                Yield::Follow(request) => {
                    ::log::debug!("Queuing {:?} page: {}", request.next, request.url);
                    queue.push_back(request.into());
                }
                Yield::Record(record) => {
                    if result_tx.send(record).await.is_err() {
                        ::log::warn!("Record receiver dropped, stopping crawl");
                        in_flight.abort_all();
                        fetcher.finish().await;
                        return stats;
                    }
                    stats.records += 1;
                }
            }
        }
    }

    fetcher.finish().await;
    stats
}

/// Fetches the page for one task and runs its stage
///
/// Returns `None` when the fetch failed.
async fn process_task<F: Fetch>(fetcher: &F, task: &Task, start_url: &Url) -> Option<Vec<Yield>> {
    let url = task.url(start_url);
    match fetcher.fetch(url).await {
        Ok(fetched) => Some(handle_fetched(task, fetched)),
        Err(e) => {
            ::log::warn!("Abandoning {} page {}: {}", task.stage_name(), url, e);
            None
        }
    }
}

fn handle_fetched(task: &Task, fetched: FetchedPage) -> Vec<Yield> {
    let page = Page::parse(fetched.url, &fetched.body);
    handlers::run(task, &page)
}
