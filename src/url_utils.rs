//! Page address construction.
//!
//! The name-to-URL mapping is deliberately dumb: spaces become underscores
//! and the result is appended to the fixed page root. Anything smarter
//! (redirect resolution, percent-encoding of exotic names) is the server's
//! job, and the fetch loop treats a miss as an ordinary skip.

/// Root under which country pages live.
pub const WIKI_PAGE_ROOT: &str = "https://en.wikipedia.org/wiki/";

/// Default country listing endpoint.
pub const DEFAULT_LISTING_API: &str = "https://restcountries.com/v2/all";

/// Map country names to page URLs.
///
/// Pure and order-preserving: one URL per input name, duplicates included.
#[must_use]
pub fn to_page_urls<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names
        .iter()
        .map(|name| format!("{WIKI_PAGE_ROOT}{}", name.as_ref().replace(' ', "_")))
        .collect()
}
