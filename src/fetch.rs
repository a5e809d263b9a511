//! Page retrieval.
//!
//! A blocking HTTP GET with a browser user agent and a timeout. The body is
//! decoded to UTF-8 text before anyone parses it. There is no retry logic.

use rand::Rng;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use crate::dom::HtmlDocument;
use crate::encoding::decode_html;
use crate::extractor::{Extraction, Extractor};
use crate::options::{FetchOptions, Options};

/// Errors from retrieving a page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The address is not an absolute http(s) URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be built.
    #[error("client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, timeout or body read failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status} for {url}")]
    Status { status: StatusCode, url: String },
}

/// Parse and check that `raw` is an http or https URL with a host.
pub fn parse_page_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw.trim()).map_err(|e| FetchError::InvalidUrl(format!("{raw}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(FetchError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}

/// Fetches pages as UTF-8 text.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    options: FetchOptions,
}

impl PageFetcher {
    pub fn new(options: FetchOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client, options })
    }

    /// GET `raw_url` and return the decoded body.
    pub fn fetch(&self, raw_url: &str) -> Result<String, FetchError> {
        let url = parse_page_url(raw_url)?;
        tracing::info!(url = %url, "fetching page");

        let response = self
            .client
            .get(url.clone())
            .header(USER_AGENT, &self.options.user_agent)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "page request rejected");
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        let bytes = response.bytes()?;
        tracing::debug!(url = %url, bytes = bytes.len(), "page downloaded");
        Ok(decode_html(&bytes, self.options.decode))
    }

    /// Fetch a page, parse it and run the extractor over it.
    ///
    /// Fetch failures are returned as errors; an empty or Urdu-free page is
    /// an `Ok` extraction carrying a diagnostic.
    pub fn fetch_and_extract<R>(
        &self,
        raw_url: &str,
        extractor: &Extractor,
        rng: &mut R,
    ) -> Result<Extraction, FetchError>
    where
        R: Rng + ?Sized,
    {
        let html = self.fetch(raw_url)?;
        let doc = HtmlDocument::parse(&html);
        Ok(extractor.extract(&doc, rng))
    }
}

/// One-shot fetch with fresh options and the thread-local random source.
pub fn fetch_and_extract(
    raw_url: &str,
    fetch_options: &FetchOptions,
    options: &Options,
) -> Result<Extraction, FetchError> {
    let fetcher = PageFetcher::new(fetch_options.clone())?;
    let extractor = Extractor::new(options.clone());
    fetcher.fetch_and_extract(raw_url, &extractor, &mut rand::thread_rng())
}
