use anyhow::Result;
use chrono::Utc;
use rayon::prelude::*;
use std::path::Path;
use tracing::info;

use crate::analyzers::aggregate::aggregate_population;
use crate::analyzers::types::SurveyReport;
use crate::demographics::DemographicSummary;
use crate::ingest::{self, ColumnSchema};
use crate::output;
use crate::scorer::{RespondentRecord, RespondentResult, score_respondent};

pub const SCHEMA_VERSION: u8 = 1;
pub const ALGORITHM_VERSION: u8 = 1;

/// Scores every respondent across the rayon pool.
///
/// Rows have no data dependency on each other, and `collect` preserves
/// input order, so result-to-identifier association stays positional.
pub fn score_all(records: &[RespondentRecord]) -> Vec<RespondentResult> {
    records.par_iter().map(score_respondent).collect()
}

/// Runs the full scoring pipeline: ingest the respondent table, score
/// every row, aggregate the population, then write the results CSV and
/// the report JSON.
pub fn analyze(
    input: &Path,
    results_path: &str,
    report_path: &str,
    schema: &ColumnSchema,
) -> Result<SurveyReport> {
    let records = ingest::read_respondents(input, schema)?;
    info!(respondents = records.len(), "Respondent table loaded");

    let results = score_all(&records);
    for result in &results {
        output::print_pretty(result);
    }

    let population = aggregate_population(&results)?;
    let demographics = DemographicSummary::from_records(&records);

    let report = SurveyReport {
        schema_version: SCHEMA_VERSION,
        algorithm_version: ALGORITHM_VERSION,
        generated_at: Utc::now(),
        respondents: results.len(),
        population,
        demographics,
    };

    output::write_results(results_path, &records, &results)?;
    output::write_report(report_path, &report)?;

    info!(
        respondents = report.respondents,
        nki = report.population.overall.mean,
        category = %report.population.overall.category,
        "Population scored"
    );

    Ok(report)
}

/// Validates an input file's shape without scoring it. Returns the row
/// count on success.
pub fn check(input: &Path, schema: &ColumnSchema) -> Result<usize> {
    let records = ingest::read_respondents(input, schema)?;
    info!(respondents = records.len(), "Input shape OK");
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::ALL_GROUPS;

    fn record(id: &str, score: u8) -> RespondentRecord {
        let answers = ALL_GROUPS
            .iter()
            .flat_map(|g| g.items.iter())
            .map(|item| {
                item.options
                    .iter()
                    .find(|(_, s)| *s == score)
                    .unwrap()
                    .0
                    .to_string()
            })
            .collect();
        RespondentRecord {
            id: id.to_string(),
            name: String::new(),
            institution: String::new(),
            gender: String::new(),
            age: String::new(),
            education: String::new(),
            province: String::new(),
            answers,
        }
    }

    #[test]
    fn test_score_all_preserves_order() {
        let records = vec![record("first", 4), record("second", 1), record("third", 2)];

        let results = score_all(&records);

        let ids: Vec<&str> = results.iter().map(|r| r.respondent_id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
        assert_eq!(results[0].nki, 100.00);
        assert_eq!(results[1].nki, 25.00);
    }

    #[test]
    fn test_score_all_empty_input() {
        assert!(score_all(&[]).is_empty());
    }
}
