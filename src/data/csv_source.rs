//! CSV ingestion for custom datasets.
//!
//! Subdivision rows: `country name, full code, subdivision name, type, alpha2`.
//! Country rows: `alpha2, alpha3, numeric, name`. A header row is optional and
//! recognized by its alpha-2 column title. Fields are trimmed; extra columns
//! are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::country::{CountryRecord, CountryTable};
use crate::error::DataError;
use crate::normalize::pad_numeric;
use crate::subdivision::{SubdivisionData, SubdivisionInfo};

const ALPHA2_HEADERS: &[&str] = &["alpha2", "alpha-2", "alpha_2", "country_code", "country code"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubdivisionRow {
    /// 1-based line in the source file.
    pub line: u64,
    pub country_name: String,
    pub code: String,
    pub name: String,
    pub subdivision_type: String,
    pub alpha2: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryRow {
    pub line: u64,
    pub alpha2: String,
    pub alpha3: String,
    pub numeric: String,
    pub name: String,
}

/// One country's rows, ready for [SubdivisionRegistry::register](crate::SubdivisionRegistry::register).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdivisionSet {
    pub country_code: String,
    pub country_name: String,
    pub subdivisions: SubdivisionData,
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn is_header(record: &csv::StringRecord, alpha2_column: usize) -> bool {
    record.get(alpha2_column).is_some_and(|title| {
        ALPHA2_HEADERS
            .iter()
            .any(|header| title.eq_ignore_ascii_case(header))
    })
}

fn line_of(record: &csv::StringRecord, index: usize) -> u64 {
    record
        .position()
        .map_or(index as u64 + 1, csv::Position::line)
}

fn field(record: &csv::StringRecord, column: usize) -> String {
    record.get(column).unwrap_or_default().to_string()
}

impl SubdivisionRow {
    fn from_record(record: &csv::StringRecord, line: u64) -> Result<Self, DataError> {
        if record.len() < 5 {
            return Err(DataError::MalformedRow {
                line,
                message: format!(
                    "expected 5 columns (country name, code, name, type, alpha2), found {}",
                    record.len()
                ),
            });
        }
        Ok(SubdivisionRow {
            line,
            country_name: field(record, 0),
            code: field(record, 1),
            name: field(record, 2),
            subdivision_type: field(record, 3),
            alpha2: field(record, 4),
        })
    }
}

impl CountryRow {
    fn from_record(record: &csv::StringRecord, line: u64) -> Result<Self, DataError> {
        if record.len() < 4 {
            return Err(DataError::MalformedRow {
                line,
                message: format!(
                    "expected 4 columns (alpha2, alpha3, numeric, name), found {}",
                    record.len()
                ),
            });
        }
        Ok(CountryRow {
            line,
            alpha2: field(record, 0),
            alpha3: field(record, 1),
            numeric: field(record, 2),
            name: field(record, 3),
        })
    }
}

pub fn subdivision_rows_from_reader<R: Read>(reader: R) -> Result<Vec<SubdivisionRow>, DataError> {
    let mut reader = csv_reader(reader);
    let mut rows = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let record = result?;
        if index == 0 && is_header(&record, 4) {
            continue;
        }
        rows.push(SubdivisionRow::from_record(&record, line_of(&record, index))?);
    }
    Ok(rows)
}

pub fn read_subdivision_rows(path: impl AsRef<Path>) -> Result<Vec<SubdivisionRow>, DataError> {
    subdivision_rows_from_reader(File::open(path)?)
}

pub fn country_rows_from_reader<R: Read>(reader: R) -> Result<Vec<CountryRow>, DataError> {
    let mut reader = csv_reader(reader);
    let mut rows = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let record = result?;
        if index == 0 && is_header(&record, 0) {
            continue;
        }
        rows.push(CountryRow::from_record(&record, line_of(&record, index))?);
    }
    Ok(rows)
}

pub fn read_country_rows(path: impl AsRef<Path>) -> Result<Vec<CountryRow>, DataError> {
    country_rows_from_reader(File::open(path)?)
}

/// Group rows into one set per alpha-2, in first-seen order. Rows without an
/// alpha-2 or a code are dropped; a repeated code keeps its first row.
pub fn group_subdivision_rows(rows: impl IntoIterator<Item = SubdivisionRow>) -> Vec<SubdivisionSet> {
    let mut sets: IndexMap<String, SubdivisionSet> = IndexMap::new();

    for row in rows {
        if row.alpha2.is_empty() || row.code.is_empty() {
            tracing::debug!(line = row.line, "subdivision row without alpha2 or code skipped");
            continue;
        }
        let alpha2 = row.alpha2.to_ascii_uppercase();
        let set = sets
            .entry(alpha2.clone())
            .or_insert_with(|| SubdivisionSet {
                country_code: alpha2,
                country_name: row.country_name.clone(),
                subdivisions: SubdivisionData::new(),
            });

        if set.subdivisions.contains_key(&row.code) {
            tracing::warn!(line = row.line, code = %row.code, "duplicate subdivision code, first row kept");
            continue;
        }
        set.subdivisions.insert(
            row.code,
            SubdivisionInfo {
                name: row.name,
                subdivision_type: row.subdivision_type,
            },
        );
    }

    sets.into_values().collect()
}

pub fn read_subdivision_sets(path: impl AsRef<Path>) -> Result<Vec<SubdivisionSet>, DataError> {
    Ok(group_subdivision_rows(read_subdivision_rows(path)?))
}

/// Strict table build: shared alpha-2, alpha-3 or numeric codes are errors.
/// Non-empty numeric codes are stored zero-padded to three digits.
pub fn country_table_from_rows(rows: impl IntoIterator<Item = CountryRow>) -> Result<CountryTable, DataError> {
    CountryTable::from_records(rows.into_iter().map(|row| {
        (
            row.alpha2.to_ascii_uppercase(),
            CountryRecord {
                name: row.name,
                alpha3: row.alpha3.to_ascii_uppercase(),
                numeric: if row.numeric.is_empty() {
                    row.numeric
                } else {
                    pad_numeric(&row.numeric).into_owned()
                },
            },
        )
    }))
}

pub fn read_country_table(path: impl AsRef<Path>) -> Result<CountryTable, DataError> {
    country_table_from_rows(read_country_rows(path)?)
}
