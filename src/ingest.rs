//! CSV ingestion for the respondent table.
//!
//! Columns are resolved by name through a [`ColumnSchema`], validated once
//! per file, so the scorer never depends on physical column order. Shape
//! problems are fatal here, at the collaborator boundary; the scorer only
//! ever sees well-formed records.

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use crate::encoding::{self, ITEM_COUNT};
use crate::scorer::RespondentRecord;

/// Ingestion failures. All of them abort the scoring run.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("input is not a readable CSV table: {0}")]
    Csv(#[from] csv::Error),

    #[error("schema file is not valid JSON: {0}")]
    SchemaJson(#[from] serde_json::Error),

    #[error("schema maps {got} answer columns, expected {expected}")]
    SchemaShape { expected: usize, got: usize },

    #[error("missing required columns: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },
}

/// Maps the identifier, demographic and answer columns to CSV header
/// names. Defaults match the survey workbook's Indonesian headers; answer
/// columns are named by item code and must appear in canonical item order.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColumnSchema {
    pub id: String,
    pub name: String,
    pub institution: String,
    pub gender: String,
    pub age: String,
    pub education: String,
    pub province: String,
    pub answers: Vec<String>,
}

impl Default for ColumnSchema {
    fn default() -> Self {
        ColumnSchema {
            id: "ID".to_string(),
            name: "NAMA".to_string(),
            institution: "INSTANSI".to_string(),
            gender: "JENIS KELAMIN".to_string(),
            age: "UMUR".to_string(),
            education: "TINGKAT PENDIDIKAN".to_string(),
            province: "PROVINSI".to_string(),
            answers: encoding::ALL_GROUPS
                .iter()
                .flat_map(|g| g.items.iter())
                .map(|item| item.code.to_string())
                .collect(),
        }
    }
}

impl ColumnSchema {
    /// Loads a schema override from a JSON file. Unspecified fields keep
    /// their defaults.
    pub fn from_file(path: &Path) -> Result<Self, IngestError> {
        let file = File::open(path)?;
        let schema: ColumnSchema = serde_json::from_reader(file)?;
        schema.validate()?;
        Ok(schema)
    }

    /// A schema must map exactly one column per elementary item.
    pub fn validate(&self) -> Result<(), IngestError> {
        if self.answers.len() != ITEM_COUNT {
            return Err(IngestError::SchemaShape {
                expected: ITEM_COUNT,
                got: self.answers.len(),
            });
        }
        Ok(())
    }
}

/// Resolved positions of every schema column in one file's header row.
struct ColumnIndex {
    id: usize,
    name: usize,
    institution: usize,
    gender: usize,
    age: usize,
    education: usize,
    province: usize,
    answers: Vec<usize>,
}

/// Reads all respondent records from a CSV file.
pub fn read_respondents(
    path: &Path,
    schema: &ColumnSchema,
) -> Result<Vec<RespondentRecord>, IngestError> {
    let file = File::open(path)?;
    read_from(file, schema)
}

/// Reads all respondent records from any CSV source.
pub fn read_from<R: Read>(
    reader: R,
    schema: &ColumnSchema,
) -> Result<Vec<RespondentRecord>, IngestError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();
    let index = resolve_columns(&headers, schema)?;

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        records.push(RespondentRecord {
            id: field(&row, index.id),
            name: field(&row, index.name),
            institution: field(&row, index.institution),
            gender: field(&row, index.gender),
            age: field(&row, index.age),
            education: field(&row, index.education),
            province: field(&row, index.province),
            answers: index.answers.iter().map(|&pos| field(&row, pos)).collect(),
        });
    }

    Ok(records)
}

/// Validates the header row against the schema in one pass, reporting
/// every absent column by name.
fn resolve_columns(
    headers: &csv::StringRecord,
    schema: &ColumnSchema,
) -> Result<ColumnIndex, IngestError> {
    let position = |wanted: &str| headers.iter().position(|h| h == wanted);

    let mut missing = Vec::new();
    let mut require = |wanted: &str| match position(wanted) {
        Some(pos) => pos,
        None => {
            missing.push(wanted.to_string());
            0
        }
    };

    let index = ColumnIndex {
        id: require(&schema.id),
        name: require(&schema.name),
        institution: require(&schema.institution),
        gender: require(&schema.gender),
        age: require(&schema.age),
        education: require(&schema.education),
        province: require(&schema.province),
        answers: schema.answers.iter().map(|code| require(code)).collect(),
    };

    if !missing.is_empty() {
        return Err(IngestError::MissingColumns { missing });
    }

    Ok(index)
}

fn field(row: &csv::StringRecord, pos: usize) -> String {
    row.get(pos).unwrap_or("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_row(schema: &ColumnSchema) -> Vec<String> {
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
        header
    }

    fn sample_csv(drop_column: Option<&str>) -> Vec<u8> {
        let schema = ColumnSchema::default();
        let mut columns: Vec<(String, String)> = vec![
            (schema.id.clone(), "R-1".to_string()),
            (schema.name.clone(), "Budi".to_string()),
            (schema.institution.clone(), "Kominfo".to_string()),
            (schema.gender.clone(), "Laki-Laki".to_string()),
            (schema.age.clone(), "26-35".to_string()),
            (schema.education.clone(), "S1".to_string()),
            (schema.province.clone(), "DKI Jakarta".to_string()),
        ];
        columns.extend(
            schema
                .answers
                .iter()
                .map(|code| (code.clone(), format!("jawaban {code}"))),
        );
        columns.retain(|(header, _)| Some(header.as_str()) != drop_column);

        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.write_record(columns.iter().map(|(h, _)| h.as_str()))
            .unwrap();
        wtr.write_record(columns.iter().map(|(_, v)| v.as_str()))
            .unwrap();
        wtr.into_inner().unwrap()
    }

    #[test]
    fn test_read_happy_path() {
        let schema = ColumnSchema::default();
        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.write_record(header_row(&schema)).unwrap();

        let mut row = vec![
            "R-7".to_string(),
            "Siti".to_string(),
            "BSSN".to_string(),
            "Perempuan".to_string(),
            "36-45".to_string(),
            "S2".to_string(),
            "Jawa Barat".to_string(),
        ];
        row.extend(schema.answers.iter().map(|c| format!("jawaban {c}")));
        wtr.write_record(&row).unwrap();

        let records = read_from(wtr.into_inner().unwrap().as_slice(), &schema).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "R-7");
        assert_eq!(records[0].province, "Jawa Barat");
        assert_eq!(records[0].answers.len(), ITEM_COUNT);
        assert_eq!(records[0].answers[0], "jawaban SK1");
        assert_eq!(records[0].answers[42], "jawaban HS2");
    }

    #[test]
    fn test_missing_column_is_reported_by_name() {
        let schema = ColumnSchema::default();
        let bytes = sample_csv(Some("PROVINSI"));

        let err = read_from(bytes.as_slice(), &schema).unwrap_err();

        match err {
            IngestError::MissingColumns { missing } => {
                assert_eq!(missing, vec!["PROVINSI".to_string()]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_answer_column_is_reported_by_name() {
        let schema = ColumnSchema::default();
        let bytes = sample_csv(Some("KS3"));

        let err = read_from(bytes.as_slice(), &schema).unwrap_err();

        match err {
            IngestError::MissingColumns { missing } => {
                assert_eq!(missing, vec!["KS3".to_string()]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let schema = ColumnSchema::default();
        let mut header = header_row(&schema);
        header.reverse();

        let mut row: Vec<String> = vec![
            "R-2".to_string(),
            "Ayu".to_string(),
            "Universitas".to_string(),
            "Perempuan".to_string(),
            "17-25".to_string(),
            "S1".to_string(),
            "Bali".to_string(),
        ];
        row.extend(schema.answers.iter().map(|c| format!("jawaban {c}")));
        row.reverse();

        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.write_record(&header).unwrap();
        wtr.write_record(&row).unwrap();

        let records = read_from(wtr.into_inner().unwrap().as_slice(), &schema).unwrap();

        assert_eq!(records[0].id, "R-2");
        assert_eq!(records[0].answers[0], "jawaban SK1");
    }

    #[test]
    fn test_default_schema_is_valid() {
        assert!(ColumnSchema::default().validate().is_ok());
    }

    #[test]
    fn test_schema_with_wrong_answer_count_is_rejected() {
        let schema = ColumnSchema {
            answers: vec!["SK1".to_string(), "SK2".to_string()],
            ..ColumnSchema::default()
        };

        match schema.validate().unwrap_err() {
            IngestError::SchemaShape { expected, got } => {
                assert_eq!(expected, ITEM_COUNT);
                assert_eq!(got, 2);
            }
            other => panic!("expected SchemaShape, got {other:?}"),
        }
    }
}
