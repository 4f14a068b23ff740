use super::{LinkRequest, NextStage};
use crate::parsers::Page;

/// Relative path of a title's full cast and crew listing
pub const FULL_CREDITS_PATH: &str = "fullcredits";

/// Derives the full-credits link from the title start page
pub fn handle(page: &Page) -> Option<LinkRequest> {
    let full_credits = page.resolve(FULL_CREDITS_PATH)?;
    ::log::debug!("Full credits for {} at {}", page.url, full_credits);
    Some(LinkRequest::new(full_credits, NextStage::Credits))
}
