// tests/common/mod.rs
//
// Offline stand-in for the catalog site: canned pages keyed by URL.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use author_graph::Universe;
use author_graph::config::options::UniverseOptions;
use author_graph::core::Fetch;
use author_graph::error::{Error, Result};
use author_graph::specs::search::search_url;

pub const BASE: &str = "https://books.test";

/// Cloneable handle; clones share pages and the request log.
#[derive(Clone, Default)]
pub struct PageMap {
    pages: Rc<RefCell<HashMap<String, String>>>,
    hits: Rc<RefCell<Vec<String>>>,
}

impl PageMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, url: &str, body: impl Into<String>) {
        self.pages.borrow_mut().insert(url.to_string(), body.into());
    }

    pub fn remove(&self, url: &str) {
        self.pages.borrow_mut().remove(url);
    }

    /// Register a search listing for `query`.
    pub fn put_search(&self, query: &str, authors: &[(&str, &str)]) {
        let url = search_url(&format!("{BASE}/search"), query).unwrap();
        self.put(&url, search_page(authors));
    }

    pub fn hits(&self) -> Vec<String> {
        self.hits.borrow().clone()
    }

    pub fn clear_hits(&self) {
        self.hits.borrow_mut().clear();
    }
}

impl Fetch for PageMap {
    fn get(&self, url: &str) -> Result<String> {
        self.hits.borrow_mut().push(url.to_string());
        self.pages
            .borrow()
            .get(url)
            .cloned()
            .ok_or_else(|| Error::Status { url: url.to_string(), status: 404 })
    }
}

pub fn profile_url(slug: &str) -> String {
    format!("{BASE}/author/show/{slug}")
}

/// A search listing with one author container per entry.
pub fn search_page(authors: &[(&str, &str)]) -> String {
    let mut rows = String::new();
    for (name, url) in authors {
        rows.push_str(&format!(
            r#"<tr><td><a class="bookTitle" href="/book/show/1"><span>Some Book</span></a>
               <span itemprop="author"><div class="authorName__container">
               <a class="authorName" href="{url}"><span itemprop="name">{name}</span></a>
               </div></span></td></tr>"#
        ));
    }
    format!("<html><body><table class=\"tableList\">{rows}</table></body></html>")
}

/// A profile page. `None` leaves the whole section out.
pub fn profile_page(
    website: Option<&str>,
    genres: Option<&[&str]>,
    influences: Option<&[(&str, &str)]>,
) -> String {
    let mut body = String::from(r#"<div class="dataTitle">Born</div><div class="dataItem">somewhere</div>"#);
    if let Some(site) = website {
        body.push_str(&format!(
            r#"<div class="dataTitle">Website</div><div class="dataItem"><a href="{site}">{site}</a></div>"#
        ));
    }
    if let Some(genres) = genres {
        let links: Vec<String> = genres
            .iter()
            .map(|g| format!(r#"<a href="/genres/{}">{g}</a>"#, g.to_lowercase()))
            .collect();
        body.push_str(&format!(
            r#"<div class="dataTitle">Genre</div><div class="dataItem">{}</div>"#,
            links.join(", ")
        ));
    }
    if let Some(influences) = influences {
        let links: Vec<String> = influences
            .iter()
            .map(|(name, url)| format!(r#"<a title="{name}" href="{url}">{name}</a>"#))
            .collect();
        body.push_str(&format!(
            r##"<div class="dataTitle">Influences</div><div class="dataItem">
               <span id="preview">{}</span><span id="full" style="display:none">{}</span>
               <a href="#">...more</a></div>"##,
            links.first().cloned().unwrap_or_default(),
            links.join(", ")
        ));
    }
    format!(r#"<html><body><div class="rightContainer">{body}</div></body></html>"#)
}

/// Site with the four default authors and a few influences.
pub fn seeded_site() -> PageMap {
    let site = PageMap::new();

    let murakami = profile_url("3354.Haruki_Murakami");
    let bronte = profile_url("1036615.Charlotte_Bront_");
    let christie = profile_url("123715.Agatha_Christie");
    let stoker = profile_url("6988.Bram_Stoker");
    let kafka = profile_url("5223.Franz_Kafka");
    let chandler = profile_url("1377.Raymond_Chandler");
    let doyle = profile_url("2448.Arthur_Conan_Doyle");

    site.put_search("Haruki Murakami", &[("Haruki Murakami", murakami.as_str())]);
    site.put_search("Charlotte Bronte", &[("Charlotte Brontë", bronte.as_str()), ("Emily Brontë", "/x")]);
    site.put_search("Agatha Christie", &[("Agatha Christie", christie.as_str())]);
    site.put_search("Bram Stoker", &[("Bram Stoker", stoker.as_str())]);

    site.put(
        murakami.as_str(),
        profile_page(
            Some("http://www.harukimurakami.com/"),
            Some(&["Fiction", "Magical Realism"][..]),
            Some(&[("Franz Kafka", kafka.as_str()), ("Raymond Chandler", chandler.as_str())][..]),
        ),
    );
    site.put(bronte.as_str(), profile_page(None, Some(&["Classics"][..]), None));
    site.put(
        christie.as_str(),
        profile_page(None, Some(&["Mystery"][..]), Some(&[("Arthur Conan Doyle", doyle.as_str())][..])),
    );
    site.put(stoker.as_str(), profile_page(None, None, None));
    site
}

pub fn options(store: &std::path::Path) -> UniverseOptions {
    UniverseOptions::default()
        .with_base_url(BASE)
        .with_store_path(store)
}

pub fn universe(site: &PageMap, store: &std::path::Path) -> Universe {
    Universe::new(options(store), Box::new(site.clone()))
}
