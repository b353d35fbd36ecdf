// src/specs/profile.rs

use std::collections::HashSet;

use scraper::Html;
use tracing::debug;

use crate::core::fold::{ascii_fold, normalize_ws};
use crate::core::html::{
    descendant_anchors, element_text, labeled_section, last_descendant, next_sibling_element,
};
use crate::core::net::{absolutize, Fetch};
use crate::error::Result;
use crate::model::AuthorLink;

const INFLUENCES_LABEL: &str = "Influences";
const WEBSITE_LABEL: &str = "Website";
const GENRE_LABEL: &str = "Genre";

/// Website and genres from an author profile.
///
/// `genres: None` means the page has no Genre section at all;
/// `Some(vec![])` means the section is there but lists nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorDetails {
    pub website: Option<String>,
    pub genres: Option<Vec<String>>,
}

/// Everything read from one fetch of a profile page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub details: AuthorDetails,
    pub influences: Vec<AuthorLink>,
}

/// One GET, both extractions.
pub fn fetch_profile(fetch: &dyn Fetch, url: &str) -> Result<Profile> {
    let doc = fetch.get(url)?;
    Ok(parse_profile(&doc, url))
}

pub fn scrape_influences(fetch: &dyn Fetch, url: &str) -> Result<Vec<AuthorLink>> {
    let doc = fetch.get(url)?;
    Ok(parse_influences(&Html::parse_document(&doc), url))
}

pub fn scrape_details(fetch: &dyn Fetch, url: &str) -> Result<AuthorDetails> {
    let doc = fetch.get(url)?;
    Ok(parse_details(&Html::parse_document(&doc)))
}

pub fn parse_profile(doc: &str, page_url: &str) -> Profile {
    let html = Html::parse_document(doc);
    Profile {
        details: parse_details(&html),
        influences: parse_influences(&html, page_url),
    }
}

/// Influences live in the block after the "Influences" label. That block
/// holds a truncated preview span and then the full list, so only the LAST
/// span is read. No label, no block or no span all mean no influences.
/// Names are ASCII-folded like resolved search names so both land on one key.
/// Anchors without a title or href are skipped; repeated names keep the first.
pub fn parse_influences(html: &Html, page_url: &str) -> Vec<AuthorLink> {
    let Some(label) = labeled_section(html, "div", INFLUENCES_LABEL) else {
        return Vec::new();
    };
    let Some(block) = next_sibling_element(label, "div") else {
        debug!(page_url, "influences label without a content block");
        return Vec::new();
    };
    let Some(group) = last_descendant(block, "span") else {
        debug!(page_url, "influences block without a span");
        return Vec::new();
    };

    let mut seen = HashSet::new();
    descendant_anchors(group)
        .into_iter()
        .filter_map(|a| {
            let name = normalize_ws(&ascii_fold(a.value().attr("title")?));
            let href = a.value().attr("href")?;
            (!name.is_empty()).then(|| AuthorLink::new(name, absolutize(page_url, href)))
        })
        .filter(|link| seen.insert(link.name.clone()))
        .collect()
}

pub fn parse_details(html: &Html) -> AuthorDetails {
    AuthorDetails { website: parse_website(html), genres: parse_genres(html) }
}

/// First link in the block after the "Website" label.
fn parse_website(html: &Html) -> Option<String> {
    let label = labeled_section(html, "div", WEBSITE_LABEL)?;
    let block = next_sibling_element(label, "div")?;
    descendant_anchors(block)
        .into_iter()
        .find_map(|a| a.value().attr("href"))
        .map(|href| s!(href.trim()))
}

/// Text of every link in the block after the "Genre" label, in page order.
/// Links with no text (icons) are not genres and are left out.
fn parse_genres(html: &Html) -> Option<Vec<String>> {
    let label = labeled_section(html, "div", GENRE_LABEL)?;
    let Some(block) = next_sibling_element(label, "div") else {
        return Some(Vec::new());
    };
    Some(
        descendant_anchors(block)
            .into_iter()
            .map(element_text)
            .filter(|g| !g.is_empty())
            .collect(),
    )
}
