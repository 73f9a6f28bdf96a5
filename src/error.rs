//! Error types for countrybox.
//!
//! Only failures of the country listing request are fatal to a run; every
//! per-page failure is absorbed by the fetch loop and surfaces as a skipped
//! URL in the logs.

use reqwest::StatusCode;

/// Error type for scraping operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Country listing request failed at the transport level.
    #[error("country list request failed: {0}")]
    ListFetch(#[source] reqwest::Error),

    /// Country listing request returned a non-success status.
    #[error("country list request returned status {0}")]
    ListFetchStatus(StatusCode),

    /// Country listing body was not a JSON array of country objects.
    #[error("country list response could not be decoded: {0}")]
    ListFetchDecode(#[from] serde_json::Error),

    /// A single page request failed at the transport level.
    #[error("page request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A single page request returned a non-success status.
    #[error("page request for {url} returned status {status}")]
    PageStatus {
        /// Address of the page that failed.
        url: String,
        /// Status the server answered with.
        status: StatusCode,
    },

    /// The document contains no infobox table.
    #[error("no infobox table found in document")]
    MissingInfobox,

    /// No name hint was given and the document has no usable heading.
    #[error("no usable page heading found")]
    MissingHeading,
}

/// Result type alias for scraping operations.
pub type Result<T> = std::result::Result<T, Error>;
