//! # countrybox
//!
//! Scrapes country data from Wikipedia infoboxes into a structured JSON
//! report.
//!
//! The pipeline fetches candidate country names from a REST listing API,
//! maps each name to its Wikipedia page, extracts a fixed set of infobox
//! fields (capital, area, population, time zone, currency, ISO code),
//! deduplicates the results by name and derives summary statistics.
//!
//! ## Quick Start
//!
//! ```no_run
//! use countrybox::{scrape, Options};
//!
//! let report = scrape(&Options::default())?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Parsing works without any network access:
//!
//! ```rust
//! use countrybox::parse_country_page;
//!
//! let html = r#"<h1 id="firstHeading">Atlantis</h1>
//! <table class="infobox"><tr><th>Capital</th><td>Poseidonia</td></tr></table>"#;
//!
//! let record = parse_country_page(html, None)?;
//! assert_eq!(record.name, "Atlantis");
//! assert_eq!(record.capital.as_deref(), Some("Poseidonia"));
//! # Ok::<(), countrybox::Error>(())
//! ```
//!
//! ## Failure model
//!
//! Only the listing fetch is fatal. A page that cannot be retrieved or
//! parsed is logged and skipped; a field that cannot be located or coerced
//! becomes `None` in its record. No partial record is ever emitted.

mod error;
mod options;
mod record;

/// Infobox field extraction and value coercion.
pub mod infobox;

/// HTTP retrieval of the country listing and individual pages.
pub mod fetch;

/// Deduplication and summary statistics.
pub mod stats;

/// Page address construction.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use fetch::Fetcher;
pub use infobox::{parse_country_page, parse_record};
pub use options::Options;
pub use record::{CountryRecord, Report};
pub use stats::{compute_stats, dedupe, Stats};

use crate::url_utils::to_page_urls;

/// Run the full scraping pipeline.
///
/// Fetches the country listing (fatal on failure), fetches and parses up to
/// `options.limit` pages sequentially - skipping pages that fail - then
/// deduplicates the survivors and aggregates statistics over them.
///
/// # Errors
///
/// Returns an error only when the country listing cannot be fetched or
/// decoded; per-page failures never propagate.
pub fn scrape(options: &Options) -> Result<Report> {
    let fetcher = Fetcher::new()?;
    let mut names = fetcher.list_country_names(&options.api_endpoint)?;
    names.truncate(options.limit);

    let urls = to_page_urls(&names);
    let records = fetcher.fetch_all(&urls);

    let countries = dedupe(records);
    let stats = compute_stats(&countries, options.target_time_zone.as_deref());

    Ok(Report { countries, stats })
}
