//! Population tallies over the demographic pass-through columns.
//!
//! The values are opaque strings from the source table; nothing is
//! normalized or re-labeled here.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::scorer::RespondentRecord;

/// Value -> respondent count for each demographic column.
#[derive(Debug, Default, Serialize)]
pub struct DemographicSummary {
    pub gender: BTreeMap<String, usize>,
    pub age: BTreeMap<String, usize>,
    pub education: BTreeMap<String, usize>,
    pub province: BTreeMap<String, usize>,
}

impl DemographicSummary {
    pub fn from_records(records: &[RespondentRecord]) -> Self {
        DemographicSummary {
            gender: value_counts(records.iter().map(|r| r.gender.as_str())),
            age: value_counts(records.iter().map(|r| r.age.as_str())),
            education: value_counts(records.iter().map(|r| r.education.as_str())),
            province: value_counts(records.iter().map(|r| r.province.as_str())),
        }
    }
}

fn value_counts<'a>(values: impl Iterator<Item = &'a str>) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }
    counts
}
