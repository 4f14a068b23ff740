use scraper::{ElementRef, Html, Selector};
use url::Url;

/// A fetched document together with the URL it was served from
///
/// The URL is the resolved response URL (after redirects) and is the base for
/// every relative link found in the document.
pub struct Page {
    pub url: Url,
    pub doc: Html,
}

impl Page {
    /// Parses an HTML body fetched from `url`
    pub fn parse(url: Url, body: &str) -> Self {
        Self {
            url,
            doc: Html::parse_document(body),
        }
    }

    /// Returns every element matching `selector`, in document order
    ///
    /// Nothing matching (or an unparseable selector) yields an empty list.
    pub fn find_all(&self, selector: &str) -> Vec<Element<'_>> {
        match compile(selector) {
            Some(selector) => self.doc.select(&selector).map(Element).collect(),
            None => Vec::new(),
        }
    }

    /// Resolves a possibly relative href against the page URL
    pub fn resolve(&self, href: &str) -> Option<Url> {
        match self.url.join(href) {
            Ok(url) => Some(url),
            Err(e) => {
                ::log::warn!("Could not resolve '{}' against {}: {}", href, self.url, e);
                None
            }
        }
    }
}

/// A single element of a parsed [`Page`]
#[derive(Debug, Clone, Copy)]
pub struct Element<'a>(ElementRef<'a>);

impl<'a> Element<'a> {
    /// Returns every descendant matching `selector`, in document order
    pub fn find_all(&self, selector: &str) -> Vec<Element<'a>> {
        match compile(selector) {
            Some(selector) => self.0.select(&selector).map(Element).collect(),
            None => Vec::new(),
        }
    }

    /// Value of the named attribute, if present
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }

    /// The element's direct child text nodes, untrimmed
    pub fn own_text(&self) -> Vec<&'a str> {
        self.0
            .children()
            .filter_map(|child| child.value().as_text())
            .map(|text| &**text)
            .collect()
    }
}

fn compile(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(selector) => Some(selector),
        Err(e) => {
            ::log::warn!("Invalid selector '{}': {:?}", selector, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(body: &str) -> Page {
        Page::parse(Url::parse("https://example.com/title/tt1/").unwrap(), body)
    }

    #[test]
    fn test_find_all_preserves_document_order() {
        let page = fixture(r#"<ul><li class="x">one</li><li>skip</li><li class="x">two</li></ul>"#);
        let texts: Vec<_> = page
            .find_all("li.x")
            .iter()
            .flat_map(|e| e.own_text())
            .collect();
        assert_eq!(texts, vec!["one", "two"]);
    }

    #[test]
    fn test_missing_elements_and_attributes_are_empty() {
        let page = fixture("<p>no links here</p>");
        assert!(page.find_all("a").is_empty());

        let page = fixture("<a>bare</a>");
        let anchors = page.find_all("a");
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].attribute("href"), None);
    }

    #[test]
    fn test_element_find_all_searches_descendants_only() {
        let page = fixture(
            r#"<div class="filmo-row"><b><a href="/title/tt1/">T</a></b><a href="/e">Episode</a></div>
            <div class="filmo-row"><b><a href="/title/tt2/">U</a></b></div>"#,
        );
        let rows = page.find_all("div.filmo-row");
        assert_eq!(rows.len(), 2);

        let titles = rows[0].find_all("b a");
        assert_eq!(titles.len(), 1);
        assert_eq!(titles[0].own_text(), vec!["T"]);
        assert_eq!(titles[0].attribute("href"), Some("/title/tt1/"));

        // The row itself is never part of its own results
        assert!(rows[0].find_all("div.filmo-row").is_empty());
        assert!(rows[1].find_all("div").is_empty());
    }

    #[test]
    fn test_invalid_selector_yields_nothing() {
        let page = fixture("<a href='/x'>x</a>");
        assert!(page.find_all("a[").is_empty());
    }

    #[test]
    fn test_own_text_skips_nested_elements() {
        let page = fixture("<h1><span>Jane <em>not this</em>Doe</span></h1>");
        let span = page.find_all("h1 span");
        assert_eq!(span[0].own_text(), vec!["Jane ", "Doe"]);
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let page = fixture("");
        assert_eq!(
            page.resolve("fullcredits").unwrap().as_str(),
            "https://example.com/title/tt1/fullcredits"
        );
        assert_eq!(
            page.resolve("/name/nm0001/").unwrap().as_str(),
            "https://example.com/name/nm0001/"
        );
        assert_eq!(
            page.resolve("https://other.org/a").unwrap().as_str(),
            "https://other.org/a"
        );
    }
}
