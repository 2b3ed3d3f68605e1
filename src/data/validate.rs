//! Dataset checks for country and subdivision CSV sources.
//!
//! Errors make a dataset unusable as-is. Warnings flag data the resolvers
//! accept but handle by a first-match rule (duplicate names) or that only
//! works as a custom dataset (alpha-2 codes the country table does not know).

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

use crate::country::CountryTable;
use crate::data::csv_source::{read_subdivision_rows, CountryRow, SubdivisionRow};
use crate::error::DataError;
use crate::normalize::CodeShape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One finding, tied to a CSV line and column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowIssue {
    pub severity: Severity,
    pub line: u64,
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for RowIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{level} line {} {}: {}", self.line, self.field, self.message)
    }
}

/// Issues in input order.
#[derive(Debug, Clone, Default)]
pub struct DatasetReport {
    pub issues: Vec<RowIssue>,
}

impl DatasetReport {
    /// No errors; warnings alone keep a dataset loadable.
    pub fn is_usable(&self) -> bool {
        self.errors() == 0
    }

    pub fn errors(&self) -> usize {
        self.issues.iter().filter(|issue| issue.severity == Severity::Error).count()
    }

    pub fn warnings(&self) -> usize {
        self.issues.len() - self.errors()
    }

    fn error(&mut self, line: u64, field: &'static str, message: impl Into<String>) {
        self.add(Severity::Error, line, field, message.into());
    }

    fn warning(&mut self, line: u64, field: &'static str, message: impl Into<String>) {
        self.add(Severity::Warning, line, field, message.into());
    }

    fn add(&mut self, severity: Severity, line: u64, field: &'static str, message: String) {
        self.issues.push(RowIssue {
            severity,
            line,
            field,
            message,
        });
    }
}

pub fn validate_subdivision_rows(rows: &[SubdivisionRow], countries: &CountryTable) -> DatasetReport {
    let mut report = DatasetReport::default();
    let mut seen_codes: HashMap<&str, u64> = HashMap::new();
    let mut seen_names: HashMap<(String, String), u64> = HashMap::new();
    let mut country_names: HashMap<String, &str> = HashMap::new();
    let mut unknown_countries: HashSet<String> = HashSet::new();

    for row in rows {
        let line = row.line;
        let alpha2 = row.alpha2.to_ascii_uppercase();

        if alpha2.is_empty() {
            report.error(line, "alpha2", "missing alpha2");
        } else if CodeShape::of(&alpha2) != CodeShape::Alpha2 {
            report.error(line, "alpha2", format!("'{}' is not a two-letter code", row.alpha2));
        } else if !countries.contains_alpha2(&alpha2) && unknown_countries.insert(alpha2.clone()) {
            report.warning(
                line,
                "alpha2",
                format!("'{alpha2}' is not in the country table; only usable as a custom dataset"),
            );
        }

        match row.code.split_once('-') {
            None => report.error(line, "code", format!("'{}' has no region part", row.code)),
            Some((_, "")) => {
                report.error(line, "code", format!("'{}' has an empty region part", row.code))
            }
            Some((prefix, _)) if !alpha2.is_empty() && prefix != alpha2 => report.error(
                line,
                "code",
                format!("'{}' does not start with '{alpha2}-'", row.code),
            ),
            Some(_) => {}
        }

        if !row.code.is_empty() {
            if let Some(first) = seen_codes.get(row.code.as_str()) {
                report.error(
                    line,
                    "code",
                    format!("duplicate code '{}' (first on line {first})", row.code),
                );
            } else {
                seen_codes.insert(row.code.as_str(), line);
            }
        }

        if row.name.is_empty() {
            report.error(line, "name", "missing name");
        } else {
            let key = (alpha2.clone(), row.name.to_uppercase());
            if let Some(first) = seen_names.get(&key) {
                report.warning(
                    line,
                    "name",
                    format!("name '{}' repeats line {first}; name lookups return the first", row.name),
                );
            } else {
                seen_names.insert(key, line);
            }
        }

        if row.subdivision_type.is_empty() {
            report.warning(line, "type", "missing type");
        }

        if !alpha2.is_empty() {
            let first_name = *country_names.entry(alpha2.clone()).or_insert(&row.country_name);
            if first_name != row.country_name {
                report.warning(
                    line,
                    "country_name",
                    format!("'{}' differs from '{first_name}' used earlier for {alpha2}", row.country_name),
                );
            }
        }
    }

    report
}

pub fn validate_country_rows(rows: &[CountryRow]) -> DatasetReport {
    let mut report = DatasetReport::default();
    let mut alpha2_seen: HashMap<String, u64> = HashMap::new();
    let mut alpha3_seen: HashMap<String, u64> = HashMap::new();
    let mut numeric_seen: HashMap<&str, u64> = HashMap::new();
    let mut name_seen: HashMap<String, u64> = HashMap::new();

    for row in rows {
        let line = row.line;
        let alpha2 = row.alpha2.to_ascii_uppercase();
        let alpha3 = row.alpha3.to_ascii_uppercase();

        if CodeShape::of(&alpha2) != CodeShape::Alpha2 {
            report.error(line, "alpha2", format!("'{}' is not a two-letter code", row.alpha2));
        } else if let Some(first) = alpha2_seen.get(&alpha2) {
            report.error(line, "alpha2", format!("duplicate alpha2 '{alpha2}' (first on line {first})"));
        } else {
            alpha2_seen.insert(alpha2, line);
        }

        if CodeShape::of(&alpha3) != CodeShape::Alpha3 {
            report.error(line, "alpha3", format!("'{}' is not a three-letter code", row.alpha3));
        } else if let Some(first) = alpha3_seen.get(&alpha3) {
            report.error(line, "alpha3", format!("duplicate alpha3 '{alpha3}' (first on line {first})"));
        } else {
            alpha3_seen.insert(alpha3, line);
        }

        if row.numeric.len() != 3 || CodeShape::of(&row.numeric) != CodeShape::Numeric {
            report.error(line, "numeric", format!("'{}' is not a three-digit code", row.numeric));
        } else if let Some(first) = numeric_seen.get(row.numeric.as_str()) {
            report.error(
                line,
                "numeric",
                format!("duplicate numeric '{}' (first on line {first})", row.numeric),
            );
        } else {
            numeric_seen.insert(row.numeric.as_str(), line);
        }

        if row.name.is_empty() {
            report.error(line, "name", "missing name");
        } else {
            let upper = row.name.to_uppercase();
            if let Some(first) = name_seen.get(&upper) {
                report.warning(
                    line,
                    "name",
                    format!("name '{}' repeats line {first}; name lookups return the first", row.name),
                );
            } else {
                name_seen.insert(upper, line);
            }
        }
    }

    report
}

/// Read and check a subdivision CSV against `countries`.
pub fn validate_subdivision_csv(
    path: impl AsRef<Path>,
    countries: &CountryTable,
) -> Result<DatasetReport, DataError> {
    let rows = read_subdivision_rows(path.as_ref())?;
    let report = validate_subdivision_rows(&rows, countries);
    tracing::info!(
        path = %path.as_ref().display(),
        rows = rows.len(),
        errors = report.errors(),
        warnings = report.warnings(),
        "validated subdivision dataset"
    );
    Ok(report)
}
