//! Record deduplication and summary statistics.
//!
//! Both operations consume records read-only (dedup takes ownership but never
//! mutates) and are pure: same input, same output, no I/O.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::record::CountryRecord;

/// Summary statistics over a final record set.
///
/// Every field is always present in the serialized output; "nothing
/// qualified" is `null` (for the scalars) or empty (for the collections).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Names of all records, input order preserved.
    pub countries: Vec<String>,

    /// Name to capital, for records with a known capital.
    pub capitals: BTreeMap<String, String>,

    /// The record with the largest population; the first encountered wins
    /// ties. `None` when no record has a population at all.
    pub top_population: Option<CountryRecord>,

    /// Mean area over records in the target time zone with a known area.
    pub average_area_in_timezone: Option<f64>,

    /// Names of records whose currency mentions the euro, input order.
    pub euro_countries: Vec<String>,
}

/// Drop records whose lower-cased name was already seen.
///
/// The first record per name is kept; later duplicates are dropped silently.
/// Output preserves first-occurrence order.
#[must_use]
pub fn dedupe(records: Vec<CountryRecord>) -> Vec<CountryRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.dedupe_key()))
        .collect()
}

/// Compute summary statistics over `records`.
///
/// The time-zone filter applies only to the area average; the top-population
/// pick ranges over every record with a population value. That asymmetry is
/// part of the contract, not an oversight.
#[must_use]
pub fn compute_stats(records: &[CountryRecord], target_time_zone: Option<&str>) -> Stats {
    let countries = records.iter().map(|r| r.name.clone()).collect();

    let capitals = records
        .iter()
        .filter_map(|r| r.capital.as_ref().map(|c| (r.name.clone(), c.clone())))
        .collect();

    // Strict comparison keeps the first of equals (stable max).
    let mut top: Option<&CountryRecord> = None;
    for record in records {
        let Some(population) = record.population else {
            continue;
        };
        let beats = match top.and_then(|t| t.population) {
            Some(best) => population > best,
            None => true,
        };
        if beats {
            top = Some(record);
        }
    }

    let average_area_in_timezone = target_time_zone.and_then(|zone| {
        let areas: Vec<f64> = records
            .iter()
            .filter(|r| r.time_zone.as_deref() == Some(zone))
            .filter_map(|r| r.area)
            .collect();
        if areas.is_empty() {
            None
        } else {
            Some(areas.iter().sum::<f64>() / areas.len() as f64)
        }
    });

    let euro_countries = records
        .iter()
        .filter(|r| {
            r.currency
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains("euro"))
        })
        .map(|r| r.name.clone())
        .collect();

    Stats {
        countries,
        capitals,
        top_population: top.cloned(),
        average_area_in_timezone,
        euro_countries,
    }
}
