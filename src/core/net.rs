// src/core/net.rs

// Blocking HTTP GET. One request per call; callers decide what a failure means.

use std::time::Duration;

use reqwest::{Url, blocking::Client};
use tracing::debug;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

/// Source of raw page text. The live implementation is `HttpFetcher`;
/// anything that can hand back a document for a URL will do.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String>;
}

impl<F: Fetch + ?Sized> Fetch for Box<F> {
    fn get(&self, url: &str) -> Result<String> {
        (**self).get(url)
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|source| Error::Fetch { url: s!(), source })?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String> {
        debug!(url, "GET");
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| Error::Fetch { url: s!(url), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { url: s!(url), status: status.as_u16() });
        }
        resp.text().map_err(|source| Error::Fetch { url: s!(url), source })
    }
}

/// `endpoint?key=value` with form encoding (spaces become `+`).
pub fn url_with_query(endpoint: &str, key: &str, value: &str) -> Result<String> {
    Url::parse_with_params(endpoint, &[(key, value)])
        .map(String::from)
        .map_err(|e| Error::Url(format!("{endpoint}: {e}")))
}

/// Resolve `href` against the page it was found on. Hrefs that cannot be
/// resolved are returned untouched.
pub fn absolutize(page_url: &str, href: &str) -> String {
    Url::parse(page_url)
        .and_then(|base| base.join(href))
        .map(String::from)
        .unwrap_or_else(|_| s!(href))
}
