//! The three crawl stages: title page, full-credits page, actor profile page.
//!
//! Each stage is a pure function over an already-fetched [`Page`]. Stages never
//! call each other; they hand back [`LinkRequest`]s that the dispatch loop
//! fetches and routes to the next stage.

pub mod actor;
pub mod credits;
pub mod entry;

#[cfg(test)]
mod tests;

use crate::parsers::Page;
use crate::results::CastRecord;
use url::Url;

/// Stage that should handle the response of a followed link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStage {
    Credits,
    Actor,
}

/// A pending fetch: an absolute URL plus the stage that will parse it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRequest {
    pub url: Url,
    pub next: NextStage,
}

impl LinkRequest {
    pub fn new(url: Url, next: NextStage) -> Self {
        Self { url, next }
    }
}

/// Unit of work in the dispatch queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Fetch the configured start page
    RequestEntry,
    /// Fetch a title's full-credits page
    RequestCredits(Url),
    /// Fetch an actor's profile page
    RequestActor(Url),
}

impl Task {
    /// URL to fetch for this task; the entry task uses the configured start URL
    pub fn url<'a>(&'a self, start_url: &'a Url) -> &'a Url {
        match self {
            Task::RequestEntry => start_url,
            Task::RequestCredits(url) | Task::RequestActor(url) => url,
        }
    }

    /// Short label used in log lines
    pub fn stage_name(&self) -> &'static str {
        match self {
            Task::RequestEntry => "entry",
            Task::RequestCredits(_) => "credits",
            Task::RequestActor(_) => "actor",
        }
    }
}

impl From<LinkRequest> for Task {
    fn from(request: LinkRequest) -> Self {
        match request.next {
            NextStage::Credits => Task::RequestCredits(request.url),
            NextStage::Actor => Task::RequestActor(request.url),
        }
    }
}

/// Everything a stage can hand back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Yield {
    Follow(LinkRequest),
    Record(CastRecord),
}

/// Runs the stage matching `task` over a fetched page
pub fn run(task: &Task, page: &Page) -> Vec<Yield> {
    match task {
        Task::RequestEntry => entry::handle(page).map(Yield::Follow).into_iter().collect(),
        Task::RequestCredits(_) => credits::handle(page)
            .into_iter()
            .map(Yield::Follow)
            .collect(),
        Task::RequestActor(_) => actor::handle(page)
            .into_iter()
            .map(Yield::Record)
            .collect(),
    }
}
