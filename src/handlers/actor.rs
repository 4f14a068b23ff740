use crate::parsers::Page;
use crate::results::CastRecord;

/// Display name inside the profile header
pub const NAME_SELECTOR: &str = "h1.header span.itemprop";

/// Emphasized title link of each filmography row
///
/// Rows of every credit category share this markup, so director or writer
/// credits come through alongside acting credits.
pub const FILMOGRAPHY_TITLE_SELECTOR: &str = "div.filmo-row b a";

/// The actor's display name, or an empty string when the header is missing
pub fn actor_name(page: &Page) -> String {
    page.find_all(NAME_SELECTOR)
        .iter()
        .flat_map(|span| span.own_text())
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Every filmography title on the page, in document order
pub fn filmography_titles(page: &Page) -> Vec<String> {
    page.find_all(FILMOGRAPHY_TITLE_SELECTOR)
        .iter()
        .flat_map(|anchor| anchor.own_text())
        .map(str::to_string)
        .collect()
}

/// Emits one record per (actor, title) pair; terminal stage
pub fn handle(page: &Page) -> Vec<CastRecord> {
    let actor = actor_name(page);
    if actor.is_empty() {
        ::log::warn!("No actor name found in {}", page.url);
    }

    let records: Vec<CastRecord> = filmography_titles(page)
        .into_iter()
        .map(|title| CastRecord::new(actor.clone(), title))
        .collect();

    ::log::debug!(
        "Extracted {} filmography entries for '{}' from {}",
        records.len(),
        actor,
        page.url
    );
    records
}
