//! Record types for scraped country data.
//!
//! A [`CountryRecord`] is built once per successfully parsed page and never
//! mutated afterwards. Absent fields are `None`, never an empty string, so
//! downstream filters can tell "zero" and "unknown" apart.

use serde::{Deserialize, Serialize};

use crate::stats::Stats;

/// Structured fields extracted from one country's infobox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// Display name, as scraped (explicit hint or page heading).
    pub name: String,

    /// Capital city (or largest city, when the infobox only offers that).
    pub capital: Option<String>,

    /// Total area in square kilometers.
    pub area: Option<f64>,

    /// Population, truncated to a whole number.
    pub population: Option<u64>,

    /// Free-form time zone text, e.g. "UTC+3".
    ///
    /// Not normalized into an offset type; compared by string equality only.
    pub time_zone: Option<String>,

    /// Currency name(s) and symbol(s), free text.
    pub currency: Option<String>,

    /// ISO-style country code.
    pub code: Option<String>,
}

impl CountryRecord {
    /// Identity used for deduplication: the lower-cased name.
    ///
    /// No other field participates in record identity.
    #[must_use]
    pub fn dedupe_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Final output of a run: the deduplicated records plus derived statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Surviving records, in first-occurrence order.
    pub countries: Vec<CountryRecord>,

    /// Summary statistics over `countries`.
    pub stats: Stats,
}
