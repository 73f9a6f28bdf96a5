//! Run configuration for the scraping pipeline.

use url::Url;

use crate::url_utils::DEFAULT_LISTING_API;

/// Configuration for one scraping run.
///
/// All fields are public for easy configuration. `Options::default()` gives
/// the stock run: twenty countries from the public listing API, with the
/// area statistic computed over UTC+3.
///
/// # Example
///
/// ```rust
/// use countrybox::Options;
///
/// let options = Options {
///     limit: 5,
///     ..Options::default()
/// };
/// assert_eq!(options.target_time_zone.as_deref(), Some("UTC+3"));
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum number of listed countries to process.
    pub limit: usize,

    /// Time zone used for the average-area statistic. `None` disables it.
    pub target_time_zone: Option<String>,

    /// Country listing endpoint.
    pub api_endpoint: Url,
}

impl Default for Options {
    fn default() -> Self {
        #[allow(clippy::expect_used)]
        let api_endpoint = Url::parse(DEFAULT_LISTING_API).expect("valid default endpoint");
        Self {
            limit: 20,
            target_time_zone: Some("UTC+3".to_string()),
            api_endpoint,
        }
    }
}
