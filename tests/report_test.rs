//! End-to-end checks over the public API: parse static pages, deduplicate,
//! aggregate, and round-trip the report through its JSON shape.

use countrybox::{compute_stats, dedupe, parse_country_page, CountryRecord, Report};

const MONACO_PAGE: &str = r#"
    <html>
    <body>
    <h1 id="firstHeading">Monaco</h1>
    <table class="infobox">
        <tr><th>Capital</th><td>Monaco<sup>[a]</sup></td></tr>
        <tr><th>• Total area</th><td>2.02 km<sup>2</sup></td></tr>
        <tr><th>2022 estimate</th><td>36,686</td></tr>
        <tr><th>Time zone</th><td>UTC+1</td></tr>
        <tr><th>Currency</th><td>Euro (EUR)</td></tr>
        <tr><th>ISO 3166 code</th><td>MC</td></tr>
    </table>
    </body>
    </html>
"#;

const KENYA_PAGE: &str = r#"
    <html>
    <body>
    <h1 id="firstHeading">Kenya</h1>
    <table class="infobox">
        <tr><th>Capital</th><td>Nairobi</td></tr>
        <tr><th>Area</th><td>580,367 km<sup>2</sup></td></tr>
        <tr><th>Population</th></tr>
        <tr><td>47,564,296<sup>[3]</sup></td></tr>
        <tr><th>Time zone</th><td>UTC+3</td></tr>
        <tr><th>Currency</th><td>Kenyan shilling (KES)</td></tr>
    </table>
    </body>
    </html>
"#;

fn parse(html: &str) -> CountryRecord {
    match parse_country_page(html, None) {
        Ok(record) => record,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn parse_dedupe_and_aggregate_static_pages() {
    let records = vec![parse(MONACO_PAGE), parse(KENYA_PAGE), parse(MONACO_PAGE)];

    let countries = dedupe(records);
    assert_eq!(countries.len(), 2);

    let stats = compute_stats(&countries, Some("UTC+3"));
    assert_eq!(stats.countries, ["Monaco", "Kenya"]);
    assert_eq!(
        stats.capitals.get("Kenya").map(String::as_str),
        Some("Nairobi")
    );
    // Population max is global; the time-zone filter only affects the average.
    assert_eq!(
        stats.top_population.as_ref().map(|r| r.name.as_str()),
        Some("Kenya")
    );
    assert_eq!(stats.average_area_in_timezone, Some(580_367.0));
    assert_eq!(stats.euro_countries, ["Monaco"]);
}

#[test]
fn parsed_fields_match_the_markup() {
    let monaco = parse(MONACO_PAGE);
    assert_eq!(monaco.capital.as_deref(), Some("Monaco"));
    assert_eq!(monaco.area, Some(2.02));
    assert_eq!(monaco.population, Some(36_686));
    assert_eq!(monaco.time_zone.as_deref(), Some("UTC+1"));
    assert_eq!(monaco.code.as_deref(), Some("MC"));

    let kenya = parse(KENYA_PAGE);
    assert_eq!(kenya.area, Some(580_367.0));
    assert_eq!(kenya.population, Some(47_564_296));
    assert_eq!(kenya.code, None);
}

#[test]
fn report_round_trips_through_json() {
    let countries = vec![parse(MONACO_PAGE), parse(KENYA_PAGE)];
    let stats = compute_stats(&countries, Some("UTC+1"));
    let report = Report { countries, stats };

    let json = match serde_json::to_string_pretty(&report) {
        Ok(json) => json,
        Err(err) => panic!("serialization failed: {err}"),
    };
    let back: Report = match serde_json::from_str(&json) {
        Ok(report) => report,
        Err(err) => panic!("deserialization failed: {err}"),
    };
    assert_eq!(back, report);
}

#[test]
fn report_json_has_the_documented_shape() {
    let countries = vec![parse(KENYA_PAGE)];
    let stats = compute_stats(&countries, None);
    let report = Report { countries, stats };

    let value = match serde_json::to_value(&report) {
        Ok(value) => value,
        Err(err) => panic!("serialization failed: {err}"),
    };

    assert!(value["countries"].is_array());
    // Kenya's page has no ISO code row: absent serializes as null, not "".
    assert!(value["countries"][0]["code"].is_null());
    assert_eq!(value["countries"][0]["capital"], "Nairobi");

    let stats = &value["stats"];
    assert!(stats["countries"].is_array());
    assert!(stats["capitals"].is_object());
    assert_eq!(stats["top_population"]["name"], "Kenya");
    // No target zone was set, so the average is null rather than zero.
    assert!(stats["average_area_in_timezone"].is_null());
    assert!(stats["euro_countries"].is_array());
}
