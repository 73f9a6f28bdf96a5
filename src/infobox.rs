//! Infobox parsing: field extraction and value coercion.
//!
//! A Wikipedia-style infobox is a semi-structured key/value table: each
//! logical field is a row with a `th` heading (the label) and a `td` value
//! cell. Pages are inconsistent about how those rows are rendered - bulleted
//! sub-rows ("• Capital"), heading-only rows whose value sits in the row
//! below, footnote markers inside value cells, values rendered purely as
//! links - so lookup works over the flattened document-order sequence of
//! heading and data cells rather than assuming any particular row shape.
//!
//! Label matching itself is a small pure function ([`heading_matches`]) so it
//! can be tested without building any DOM.

use std::sync::LazyLock;

use dom_query::{Document, Selection};
use regex::Regex;

use crate::error::{Error, Result};
use crate::record::CountryRecord;

// Candidate label spellings per field, tried in order. The first label that
// matches a row heading wins; candidates are never merged across labels.
const CAPITAL_LABELS: &[&str] = &["Capital", "Largest city"];
const AREA_LABELS: &[&str] = &["Total area", "Area"];
const POPULATION_LABELS: &[&str] = &["Population", "2022 estimate", "2023 estimate"];
const TIME_ZONE_LABELS: &[&str] = &["Time zone", "Timezones", "Time zone(s)"];
const CURRENCY_LABELS: &[&str] = &["Currency", "Currencies"];
const CODE_LABELS: &[&str] = &["ISO code", "ISO 3166 code", "ISO 3166-1 alpha-3"];

/// First contiguous number run: a digit followed by digits, commas, periods.
#[allow(clippy::expect_used)]
static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d,.]*").expect("valid regex"));

/// Parse a full HTML page into a [`CountryRecord`].
///
/// Convenience wrapper around [`parse_record`] for callers holding raw HTML.
pub fn parse_country_page(html: &str, name_hint: Option<&str>) -> Result<CountryRecord> {
    let doc = Document::from(html);
    parse_record(&doc, name_hint)
}

/// Build a [`CountryRecord`] from a parsed document.
///
/// # Arguments
///
/// * `doc` - The parsed page
/// * `name_hint` - Overrides the record name when given; otherwise the page
///   heading is used
///
/// # Errors
///
/// * [`Error::MissingInfobox`] when the document has no `table.infobox`
/// * [`Error::MissingHeading`] when neither a hint nor a usable heading
///   exists (the name is the one field a record cannot do without)
///
/// A field whose row is missing, or whose value cannot be coerced, becomes
/// `None` in the record - never an empty string, never an error.
pub fn parse_record(doc: &Document, name_hint: Option<&str>) -> Result<CountryRecord> {
    let infobox = doc.select("table.infobox");
    if !infobox.exists() {
        return Err(Error::MissingInfobox);
    }

    let name = match name_hint {
        Some(hint) if !hint.trim().is_empty() => hint.trim().to_string(),
        _ => page_heading(doc).ok_or(Error::MissingHeading)?,
    };

    Ok(CountryRecord {
        name,
        capital: present(find_field(&infobox, CAPITAL_LABELS)),
        area: parse_number(&find_field(&infobox, AREA_LABELS)),
        population: parse_count(&find_field(&infobox, POPULATION_LABELS)),
        time_zone: present(find_field(&infobox, TIME_ZONE_LABELS)),
        currency: present(find_field(&infobox, CURRENCY_LABELS)),
        code: present(find_field(&infobox, CODE_LABELS)),
    })
}

/// Find the cleaned value for the first candidate label that matches a row
/// heading.
///
/// Labels are tried in order; earlier labels that match nothing are skipped
/// without affecting the result. Returns an empty string when no label
/// matches any heading, or when the matched row yields no text and no link -
/// both are normal "field absent" outcomes, not errors.
#[must_use]
pub fn find_field(infobox: &Selection, labels: &[&str]) -> String {
    let cells = infobox.select("th, td");
    let nodes = cells.nodes();

    for label in labels {
        for (idx, node) in nodes.iter().enumerate() {
            if node.node_name().as_deref() != Some("th") {
                continue;
            }
            if !heading_matches(&Selection::from(*node).text(), label) {
                continue;
            }
            // The value is the next data cell in document order. This covers
            // the common heading/value same-row layout as well as heading
            // rows whose value sits alone in the following row.
            return nodes[idx + 1..]
                .iter()
                .find(|n| n.node_name().as_deref() == Some("td"))
                .map(|n| cell_value(&Selection::from(*n)))
                .unwrap_or_default();
        }
    }

    String::new()
}

/// Does a row heading match a candidate label?
///
/// The heading is trimmed, one optional leading "•" bullet marker (plus the
/// whitespace after it) is dropped, and the remainder is compared
/// case-insensitively. "Capital" therefore also matches rows rendered as
/// "• Capital".
#[must_use]
pub fn heading_matches(heading: &str, label: &str) -> bool {
    let heading = heading.trim();
    let heading = heading.strip_prefix('•').map_or(heading, str::trim_start);
    heading.eq_ignore_ascii_case(label.trim())
}

/// Extract the first number found in free text.
///
/// Scans for a leading digit followed by digits, commas and periods. Commas
/// are thousands separators and are stripped before conversion; a run that
/// still fails to convert (e.g. "1.2.3") yields `None` rather than an error.
///
/// ```
/// use countrybox::infobox::parse_number;
///
/// assert_eq!(parse_number("1,234.5 km2"), Some(1234.5));
/// assert_eq!(parse_number("no data"), None);
/// ```
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let matched = NUMBER_PATTERN.find(text)?;
    matched.as_str().replace(',', "").parse().ok()
}

/// Like [`parse_number`], truncated to a whole count - never rounded.
#[must_use]
pub fn parse_count(text: &str) -> Option<u64> {
    parse_number(text).map(|value| value as u64)
}

/// The page's primary heading, cleaned with the same footnote-stripping rule
/// as field values.
fn page_heading(doc: &Document) -> Option<String> {
    for selector in ["h1#firstHeading", "h1"] {
        if let Some(node) = doc.select(selector).nodes().first() {
            let text = stripped_text(&Selection::from(*node));
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// Cleaned text of a value cell.
///
/// Footnote markers are stripped first; if the remaining text is empty the
/// first hyperlink's text is used instead (covers values rendered purely as
/// a link).
fn cell_value(cell: &Selection) -> String {
    let text = stripped_text(cell);
    if !text.is_empty() {
        return text;
    }
    cell.select("a")
        .nodes()
        .first()
        .map(|n| Selection::from(*n).text().trim().to_string())
        .unwrap_or_default()
}

/// Text content with footnote/superscript markup removed.
fn stripped_text(sel: &Selection) -> String {
    sel.select("sup").remove();
    sel.text().trim().to_string()
}

/// Map the extractor's empty-string "absent" marker to `None`.
fn present(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
