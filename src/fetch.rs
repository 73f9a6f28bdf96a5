//! HTTP retrieval: the country listing API and the per-page fetch loop.
//!
//! All retrieval is synchronous and sequential, one attempt per URL with a
//! bounded timeout. A listing failure is fatal to the run; a page failure
//! only skips that page.

use std::time::Duration;

use dom_query::Document;
use serde::Deserialize;
use tracing::{info, warn};
use url::Url;

use crate::error::{Error, Result};
use crate::infobox;
use crate::record::CountryRecord;

/// Request timeout for the listing API and for each page fetch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

const USER_AGENT: &str = concat!("countrybox/", env!("CARGO_PKG_VERSION"));

/// One entry of the listing response. Everything but `name` is ignored.
#[derive(Debug, Deserialize)]
struct ListedCountry {
    #[serde(default)]
    name: Option<String>,
}

/// Blocking HTTP fetcher shared across a run.
pub struct Fetcher {
    http: reqwest::blocking::Client,
}

impl Fetcher {
    /// Build a fetcher with the crate's timeout and user agent.
    pub fn new() -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http })
    }

    /// Fetch the candidate country names from the listing API.
    ///
    /// Entries without a `name` are filtered out; upstream order is
    /// preserved. Any failure here - transport, non-success status,
    /// undecodable body - is fatal for the whole run.
    pub fn list_country_names(&self, endpoint: &Url) -> Result<Vec<String>> {
        let response = self
            .http
            .get(endpoint.clone())
            .send()
            .map_err(Error::ListFetch)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::ListFetchStatus(status));
        }
        let body = response.text().map_err(Error::ListFetch)?;
        parse_country_listing(&body)
    }

    /// Fetch one page body, enforcing a success status.
    pub fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self.http.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::PageStatus {
                url: url.to_string(),
                status,
            });
        }
        Ok(response.text()?)
    }

    /// Fetch and parse every URL in order, skipping failures.
    ///
    /// Each URL gets a single attempt. Transport errors, bad statuses and
    /// parse failures are logged and skipped, never fatal; the returned
    /// records keep the relative order of the URLs that succeeded, and no
    /// partially-built record is ever emitted.
    #[must_use]
    pub fn fetch_all(&self, urls: &[String]) -> Vec<CountryRecord> {
        let mut records = Vec::new();
        for url in urls {
            match self.fetch_record(url) {
                Ok(record) => {
                    info!("parsed {}", record.name);
                    records.push(record);
                }
                Err(error) => {
                    warn!("skipping {url}: {error}");
                }
            }
        }
        records
    }

    fn fetch_record(&self, url: &str) -> Result<CountryRecord> {
        let body = self.fetch_page(url)?;
        let doc = Document::from(body.as_str());
        infobox::parse_record(&doc, None)
    }
}

/// Decode the listing body: a JSON array of country objects.
fn parse_country_listing(body: &str) -> Result<Vec<String>> {
    let entries: Vec<ListedCountry> = serde_json::from_str(body)?;
    Ok(entries.into_iter().filter_map(|entry| entry.name).collect())
}
