// src/specs/search.rs

use scraper::Html;
use tracing::{debug, info};

use crate::core::fold::{ascii_fold, folded_contains};
use crate::core::html::{child_elements, descendants, element_text, has_class};
use crate::core::net::{absolutize, url_with_query, Fetch};
use crate::error::Result;
use crate::model::AuthorLink;

/// Wrapper class around each author entry in the search listing.
const AUTHOR_CONTAINER_CLASS: &str = "authorName__container";

/// Search URL for a free-text author name: folded to ASCII, trimmed,
/// form-encoded.
pub fn search_url(endpoint: &str, query: &str) -> Result<String> {
    url_with_query(endpoint, "q", ascii_fold(query).trim())
}

/// Map a free-text name to one author, or `None` when nothing matches.
///
/// Matching is a loose substring test on folded, lowercased names and the
/// first candidate in page order wins. Overlapping names ("Bronte") can
/// therefore land on the wrong author.
pub fn resolve(fetch: &dyn Fetch, endpoint: &str, query: &str) -> Result<Option<AuthorLink>> {
    let url = search_url(endpoint, query)?;
    let doc = fetch.get(&url)?;

    let candidates = parse_candidates(&doc, &url);
    debug!(query, candidates = candidates.len(), "search listing parsed");

    let found = pick_match(candidates, query.trim());
    match &found {
        Some(a) => info!(query, name = %a.name, url = %a.url, "author resolved"),
        None => info!(query, "no matching author"),
    }
    Ok(found)
}

/// Every (displayed name, profile url) pair on a search page, in order.
///
/// An entry is an anchor directly inside an `authorName__container` whose
/// first child element carries the name. Entries of any other shape are
/// skipped; a page without containers yields nothing.
pub fn parse_candidates(doc: &str, page_url: &str) -> Vec<AuthorLink> {
    let html = Html::parse_document(doc);
    let mut out = Vec::new();

    for container in descendants(html.root_element()).filter(|e| has_class(*e, AUTHOR_CONTAINER_CLASS)) {
        for link in child_elements(container) {
            let Some(href) = link.value().attr("href") else { continue };
            let Some(label) = child_elements(link).next() else { continue };
            let name = element_text(label);
            if name.is_empty() { continue; }
            out.push(AuthorLink::new(name, absolutize(page_url, href)));
        }
    }
    out
}

/// First candidate whose folded name contains the folded query.
/// The returned name is the folded (ASCII) form.
pub fn pick_match(candidates: Vec<AuthorLink>, query: &str) -> Option<AuthorLink> {
    candidates
        .into_iter()
        .find(|c| folded_contains(&c.name, query))
        .map(|c| AuthorLink { name: ascii_fold(&c.name), url: c.url })
}
