//! ISO 3166-1 country table and its reverse indexes.
//! Built once; never mutated afterwards, so it can be shared by reference.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use crate::data::countries::COUNTRIES;
use crate::error::DataError;
use crate::normalize::pad_numeric;

/// Country record as stored, keyed by alpha-2 in [CountryTable].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    pub alpha3: String,
    pub numeric: String,
}

/// Country with every code form, as returned by lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub alpha2: String,
    pub alpha3: String,
    pub numeric: String,
}

#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    records: BTreeMap<String, CountryRecord>,
    alpha3_index: HashMap<String, String>,
    numeric_index: HashMap<String, String>,
    /// Uppercased name -> alpha-2. First occurrence (in alpha-2 order) wins.
    name_index: HashMap<String, String>,
}

static BUILTIN: OnceLock<Arc<CountryTable>> = OnceLock::new();

impl CountryTable {
    /// The compiled-in ISO 3166-1 table, materialized on first use.
    pub fn builtin() -> &'static CountryTable {
        Self::builtin_shared_ref()
    }

    /// Shared handle to the compiled-in table.
    pub fn builtin_shared() -> Arc<CountryTable> {
        Arc::clone(Self::builtin_shared_ref())
    }

    fn builtin_shared_ref() -> &'static Arc<CountryTable> {
        BUILTIN.get_or_init(|| {
            let records = COUNTRIES.iter().map(|(alpha2, alpha3, numeric, name)| {
                (
                    (*alpha2).to_string(),
                    CountryRecord {
                        name: (*name).to_string(),
                        alpha3: (*alpha3).to_string(),
                        numeric: (*numeric).to_string(),
                    },
                )
            });
            let table = Self::index(records.collect());
            tracing::debug!(
                countries = table.len(),
                names = table.name_index.len(),
                "built-in country table ready"
            );
            Arc::new(table)
        })
    }

    /// Build a table from `(alpha2, record)` pairs, rejecting duplicate
    /// alpha-2, alpha-3 or numeric codes. Duplicate names are allowed; the
    /// name index keeps the first one in alpha-2 order.
    pub fn from_records<I>(records: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = (String, CountryRecord)>,
    {
        let mut primary = BTreeMap::new();
        let mut alpha3_seen: HashMap<String, String> = HashMap::new();
        let mut numeric_seen: HashMap<String, String> = HashMap::new();

        for (alpha2, record) in records {
            if primary.contains_key(&alpha2) {
                return Err(DataError::DuplicateKey {
                    field: "alpha2",
                    value: alpha2.clone(),
                    existing: alpha2,
                });
            }
            if !record.alpha3.is_empty() {
                if let Some(existing) = alpha3_seen.insert(record.alpha3.clone(), alpha2.clone()) {
                    return Err(DataError::DuplicateKey {
                        field: "alpha3",
                        value: record.alpha3,
                        existing,
                    });
                }
            }
            if !record.numeric.is_empty() {
                let padded = pad_numeric(&record.numeric).into_owned();
                if let Some(existing) = numeric_seen.insert(padded, alpha2.clone()) {
                    return Err(DataError::DuplicateKey {
                        field: "numeric",
                        value: record.numeric,
                        existing,
                    });
                }
            }
            primary.insert(alpha2, record);
        }

        Ok(Self::index(primary))
    }

    /// Single pass over the primary map. A value that is already indexed is
    /// skipped, so every index entry always points back at a matching record.
    fn index(records: BTreeMap<String, CountryRecord>) -> Self {
        let mut alpha3_index = HashMap::with_capacity(records.len());
        let mut numeric_index = HashMap::with_capacity(records.len());
        let mut name_index = HashMap::with_capacity(records.len());

        for (alpha2, record) in &records {
            if !record.alpha3.is_empty() && alpha3_index.contains_key(&record.alpha3) {
                tracing::warn!(alpha2 = %alpha2, alpha3 = %record.alpha3, "duplicate alpha-3 skipped");
            } else if !record.alpha3.is_empty() {
                alpha3_index.insert(record.alpha3.clone(), alpha2.clone());
            }

            if !record.numeric.is_empty() {
                let padded = pad_numeric(&record.numeric).into_owned();
                if numeric_index.contains_key(&padded) {
                    tracing::warn!(alpha2 = %alpha2, numeric = %record.numeric, "duplicate numeric code skipped");
                } else {
                    numeric_index.insert(padded, alpha2.clone());
                }
            }

            let upper_name = record.name.to_uppercase();
            if name_index.contains_key(&upper_name) {
                tracing::debug!(alpha2 = %alpha2, name = %record.name, "duplicate country name, first occurrence kept");
            } else {
                name_index.insert(upper_name, alpha2.clone());
            }
        }

        CountryTable {
            records,
            alpha3_index,
            numeric_index,
            name_index,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, alpha2: &str) -> Option<&CountryRecord> {
        self.records.get(alpha2)
    }

    pub fn contains_alpha2(&self, alpha2: &str) -> bool {
        self.records.contains_key(alpha2)
    }

    /// Primary entries in ascending alpha-2 order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CountryRecord)> {
        self.records
            .iter()
            .map(|(alpha2, record)| (alpha2.as_str(), record))
    }

    pub fn alpha3_index(&self) -> &HashMap<String, String> {
        &self.alpha3_index
    }

    /// Keyed by three-digit (zero-padded) numeric code.
    pub fn numeric_index(&self) -> &HashMap<String, String> {
        &self.numeric_index
    }

    pub fn name_index(&self) -> &HashMap<String, String> {
        &self.name_index
    }

    /// Canonical alpha-2 key for an exact, normalized alpha-2 value.
    pub(crate) fn alpha2_key(&self, normalized: &str) -> Option<&str> {
        self.records
            .get_key_value(normalized)
            .map(|(alpha2, _)| alpha2.as_str())
    }

    pub(crate) fn alpha2_for_alpha3(&self, normalized: &str) -> Option<&str> {
        self.alpha3_index.get(normalized).map(String::as_str)
    }

    /// Pads before probing, so "4" and "004" hit the same entry.
    pub(crate) fn alpha2_for_numeric(&self, normalized: &str) -> Option<&str> {
        self.numeric_index
            .get(pad_numeric(normalized).as_ref())
            .map(String::as_str)
    }

    pub(crate) fn alpha2_for_name(&self, normalized: &str) -> Option<&str> {
        self.name_index.get(normalized).map(String::as_str)
    }

    pub(crate) fn country(&self, alpha2: &str) -> Option<Country> {
        let (alpha2, record) = self.records.get_key_value(alpha2)?;
        Some(Country {
            name: record.name.clone(),
            alpha2: alpha2.clone(),
            alpha3: record.alpha3.clone(),
            numeric: record.numeric.clone(),
        })
    }
}
