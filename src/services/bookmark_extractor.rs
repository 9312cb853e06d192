//! Bookmark Extractor for Bookmark Gallery.
//!
//! Turns a browser bookmarks export (the Netscape `<DL>`/`<DT>`/`<A>` layout every
//! major browser writes) into a flat list of [`ParsedLink`]s, one per anchor element.

use chrono::{DateTime, Utc};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use crate::types::bookmark::ParsedLink;
use crate::types::errors::ExtractError;
use crate::types::settings::ImportSettings;

/// Trait defining bookmark extraction operations.
pub trait BookmarkExtractorTrait {
    fn extract(&self, html: &str) -> Result<Vec<ParsedLink>, ExtractError>;
}

/// Extractor backed by the tolerant html5ever parser in `scraper`.
pub struct BookmarkExtractor {
    untitled_label: String,
    uncategorized_folder: String,
}

impl BookmarkExtractor {
    pub fn new(settings: &ImportSettings) -> Self {
        Self {
            untitled_label: settings.untitled_label.clone(),
            uncategorized_folder: settings.uncategorized_folder.clone(),
        }
    }

    fn parse_anchor(&self, anchor: ElementRef<'_>) -> ParsedLink {
        let text: String = anchor.text().collect();
        let title = match text.trim() {
            "" => self.untitled_label.clone(),
            trimmed => trimmed.to_string(),
        };

        ParsedLink {
            title,
            url: resolve_href(anchor.value().attr("href")),
            date_added: parse_add_date(anchor.value().attr("add_date")),
            folder: folder_heading(anchor).unwrap_or_else(|| self.uncategorized_folder.clone()),
        }
    }
}

impl Default for BookmarkExtractor {
    fn default() -> Self {
        Self::new(&ImportSettings::default())
    }
}

impl BookmarkExtractorTrait for BookmarkExtractor {
    /// Extracts every anchor in the document. Malformed markup never fails;
    /// the parser recovers and whatever anchors survive are returned.
    fn extract(&self, html: &str) -> Result<Vec<ParsedLink>, ExtractError> {
        let document = Html::parse_document(html);
        let anchor_selector = Selector::parse("a")
            .map_err(|e| ExtractError::Selector(format!("{:?}", e)))?;

        let links: Vec<ParsedLink> = document
            .select(&anchor_selector)
            .map(|anchor| self.parse_anchor(anchor))
            .collect();

        debug!("Parsed {} links from bookmarks export", links.len());
        Ok(links)
    }
}

/// Normalizes an absolute `href`. Anything the URL parser rejects is kept
/// verbatim so the categorizer can decide what to do with it.
fn resolve_href(href: Option<&str>) -> String {
    let raw = href.unwrap_or_default().trim();
    match Url::parse(raw) {
        Ok(url) => url.to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Reads `ADD_DATE` as whole seconds since the epoch; missing, garbled or
/// out-of-range values collapse to the epoch itself.
fn parse_add_date(raw: Option<&str>) -> DateTime<Utc> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .unwrap_or_default()
}

/// Text of the heading right before the nearest enclosing `<dl>`.
fn folder_heading(anchor: ElementRef<'_>) -> Option<String> {
    let list = anchor
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "dl")?;
    let heading = list.prev_siblings().filter_map(ElementRef::wrap).next()?;

    if !matches!(heading.value().name(), "h1" | "h2" | "h3" | "h4" | "h5" | "h6") {
        return None;
    }

    let text: String = heading.text().collect();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
