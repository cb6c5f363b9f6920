//! Output formatting and persistence for scoring results.
//!
//! Supports pretty-printing, JSON serialization, per-row CSV append, and
//! the population report JSON consumed by presentation collaborators.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::analyzers::types::SurveyReport;
use crate::scorer::{RespondentRecord, RespondentResult};
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// One row of the results CSV: identity columns from the raw record joined
/// with the computed indices.
#[derive(Debug, Serialize)]
pub struct ResultRow {
    pub respondent_id: String,
    pub name: String,
    pub institution: String,
    pub sk_total: f64,
    pub ks_total: f64,
    pub iw_total: f64,
    pub kp_total: f64,
    pub at_total: f64,
    pub ht_total: f64,
    pub rs_total: f64,
    pub kn_total: f64,
    pub am_total: f64,
    pub as_total: f64,
    pub hs_total: f64,
    pub nkkst: f64,
    pub nkkss: f64,
    pub nki: f64,
    pub category: &'static str,
    pub unmapped_answers: usize,
}

impl ResultRow {
    pub fn new(record: &RespondentRecord, result: &RespondentResult) -> Self {
        ResultRow {
            respondent_id: result.respondent_id.clone(),
            name: record.name.clone(),
            institution: record.institution.clone(),
            sk_total: result.sk_total,
            ks_total: result.ks_total,
            iw_total: result.iw_total,
            kp_total: result.kp_total,
            at_total: result.at_total,
            ht_total: result.ht_total,
            rs_total: result.rs_total,
            kn_total: result.kn_total,
            am_total: result.am_total,
            as_total: result.as_total,
            hs_total: result.hs_total,
            nkkst: result.nkkst,
            nkkss: result.nkkss,
            nki: result.nki,
            category: result.category().label(),
            unmapped_answers: result.unmapped_answers,
        }
    }
}

/// Logs a result using Rust's debug pretty-print format.
pub fn print_pretty(result: &RespondentResult) {
    debug!("{:#?}", result);
}

/// Logs a result as pretty-printed JSON.
pub fn print_json(result: &RespondentResult) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

/// Appends one [`ResultRow`] to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_result(path: &str, row: &ResultRow) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(row)?;
    writer.flush()?;

    Ok(())
}

/// Writes the complete results table, one row per respondent, replacing
/// any existing file.
pub fn write_results(
    path: &str,
    records: &[RespondentRecord],
    results: &[RespondentResult],
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for (record, result) in records.iter().zip(results.iter()) {
        writer.serialize(ResultRow::new(record, result))?;
    }
    writer.flush()?;

    info!(path, rows = results.len(), "Results CSV written");
    Ok(())
}

/// Serializes the population report to a pretty JSON file.
pub fn write_report(path: &str, report: &SurveyReport) -> Result<()> {
    let body = serde_json::to_string_pretty(report)?;
    std::fs::write(path, body)?;

    info!(path, respondents = report.respondents, "Report JSON written");
    Ok(())
}
