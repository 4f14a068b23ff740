use super::{LinkRequest, NextStage};
use crate::parsers::Page;

/// Photo anchor present only on cast rows of the credits table
pub const CAST_PHOTO_SELECTOR: &str = "td.primary_photo a";

/// Extracts one actor-page request per cast row, in page order
///
/// Duplicate actors are not collapsed: each anchor becomes its own request.
pub fn handle(page: &Page) -> Vec<LinkRequest> {
    let requests: Vec<LinkRequest> = page
        .find_all(CAST_PHOTO_SELECTOR)
        .iter()
        .filter_map(|anchor| anchor.attribute("href"))
        .filter_map(|href| page.resolve(href))
        .map(|url| LinkRequest::new(url, NextStage::Actor))
        .collect();

    ::log::info!("Found {} cast members in {}", requests.len(), page.url);
    requests
}
