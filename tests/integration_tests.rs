use csa_rater::analyzers::analyzer::analyze;
use csa_rater::encoding::ALL_GROUPS;
use csa_rater::ingest::ColumnSchema;
use std::fs;
use std::path::Path;

/// Builds a full 43-answer row picking the option with the given ordinal
/// score for every item, straight from the encoding registry.
fn answers_scoring(score: u8) -> Vec<String> {
    ALL_GROUPS
        .iter()
        .flat_map(|g| g.items.iter())
        .map(|item| {
            item.options
                .iter()
                .find(|(_, s)| *s == score)
                .expect("every item encodes scores 1-4")
                .0
                .to_string()
        })
        .collect()
}

fn write_input(path: &Path, rows: &[(&str, u8)]) {
    let schema = ColumnSchema::default();
    let mut header = vec![
        schema.id.clone(),
        schema.name.clone(),
        schema.institution.clone(),
        schema.gender.clone(),
        schema.age.clone(),
        schema.education.clone(),
        schema.province.clone(),
    ];
    header.extend(schema.answers.iter().cloned());

    let mut wtr = csv::Writer::from_path(path).expect("create input CSV");
    wtr.write_record(&header).unwrap();
    for (id, score) in rows {
        let mut row = vec![
            id.to_string(),
            format!("Responden {id}"),
            "Kominfo".to_string(),
            "Perempuan".to_string(),
            "26-35".to_string(),
            "S1".to_string(),
            "DKI Jakarta".to_string(),
        ];
        row.extend(answers_scoring(*score));
        wtr.write_record(&row).unwrap();
    }
    wtr.flush().unwrap();
}

#[test]
fn test_full_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("respondents.csv");
    let results_path = dir.path().join("results.csv");
    let report_path = dir.path().join("report.json");

    write_input(&input, &[("R-1", 4), ("R-2", 1), ("R-3", 3)]);

    let report = analyze(
        &input,
        results_path.to_str().unwrap(),
        report_path.to_str().unwrap(),
        &ColumnSchema::default(),
    )
    .expect("pipeline succeeds");

    assert_eq!(report.respondents, 3);

    // NKI per row: 100.00, 25.00, 75.00
    let expected_mean = (100.0 + 25.0 + 75.0) / 3.0;
    assert_eq!(report.population.overall.mean, expected_mean);
    assert_eq!(report.population.overall.category.label(), "Baik");

    assert_eq!(report.population.distribution.sangat_baik, 1);
    assert_eq!(report.population.distribution.baik, 1);
    assert_eq!(report.population.distribution.buruk, 1);
    assert_eq!(report.population.distribution.total(), 3);

    assert_eq!(report.demographics.gender["Perempuan"], 3);

    // Results CSV: 1 header + 3 data rows.
    let results = fs::read_to_string(&results_path).unwrap();
    assert_eq!(results.lines().count(), 4);
    assert!(results.lines().next().unwrap().contains("respondent_id"));
    assert!(results.contains("Sangat Baik"));

    // Report JSON parses and carries the population block.
    let report_json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report_json["respondents"], 3);
    assert_eq!(report_json["population"]["groups"].as_array().unwrap().len(), 11);
    assert_eq!(
        report_json["population"]["overall"]["category"],
        "Baik"
    );
}

#[test]
fn test_malformed_input_fails_before_scoring() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.csv");
    fs::write(&input, "ID,NAMA\nR-1,Budi\n").unwrap();

    let err = analyze(
        &input,
        dir.path().join("results.csv").to_str().unwrap(),
        dir.path().join("report.json").to_str().unwrap(),
        &ColumnSchema::default(),
    )
    .unwrap_err();

    assert!(err.to_string().contains("missing required columns"));
    assert!(!dir.path().join("results.csv").exists());
}

#[test]
fn test_empty_population_is_surfaced() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.csv");
    write_input(&input, &[]);

    let err = analyze(
        &input,
        dir.path().join("results.csv").to_str().unwrap(),
        dir.path().join("report.json").to_str().unwrap(),
        &ColumnSchema::default(),
    )
    .unwrap_err();

    assert!(err.to_string().contains("no respondents"));
}
