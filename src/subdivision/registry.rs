//! Which countries' subdivision tables have been loaded.
//!
//! The registry is an ordinary value owned by the host (usually through
//! [Atlas](crate::Atlas)). Registration needs `&mut self`, so it has to finish
//! before any resolver borrows the registry; a fully built registry is
//! `Send + Sync` and can be shared behind an `Arc`.

use indexmap::IndexMap;
use serde::Serialize;

use crate::data::units::SubdivisionUnit;
use crate::subdivision::SubdivisionData;

/// A registered country: the name recorded at registration and its table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredCountry {
    pub country_name: String,
    pub subdivisions: SubdivisionData,
}

#[derive(Debug, Clone, Default)]
pub struct SubdivisionRegistry {
    entries: IndexMap<String, RegisteredCountry>,
}

impl SubdivisionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `data` as the subdivision table for `country_code`, replacing any
    /// earlier table for that code wholesale. The code is used as given and is
    /// not checked against the country table, so custom or partial datasets
    /// can be registered; lookups only reach upper-case alpha-2 keys.
    pub fn register(
        &mut self,
        country_code: impl Into<String>,
        country_name: impl Into<String>,
        data: SubdivisionData,
    ) {
        let country_code = country_code.into();
        let entries = data.len();
        let previous = self.entries.insert(
            country_code.clone(),
            RegisteredCountry {
                country_name: country_name.into(),
                subdivisions: data,
            },
        );
        tracing::debug!(
            country = %country_code,
            entries,
            replaced = previous.is_some(),
            "registered subdivisions"
        );
    }

    pub fn register_unit(&mut self, unit: &SubdivisionUnit) {
        self.register(unit.country_code, unit.country_name, unit.to_data());
    }

    pub fn get_subdivisions(&self, country_code: &str) -> Option<&SubdivisionData> {
        self.entries
            .get(country_code)
            .map(|entry| &entry.subdivisions)
    }

    /// Country name recorded at registration.
    pub fn country_name(&self, country_code: &str) -> Option<&str> {
        self.entries
            .get(country_code)
            .map(|entry| entry.country_name.as_str())
    }

    /// True once `country_code` has been registered, even with an empty table.
    pub fn has_subdivisions(&self, country_code: &str) -> bool {
        self.entries.contains_key(country_code)
    }

    /// Live view of every registered country, in registration order.
    /// The borrow keeps the registry frozen while it is held.
    pub fn get_all_subdivisions(&self) -> &IndexMap<String, RegisteredCountry> {
        &self.entries
    }

    pub fn registered_countries(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subdivision::SubdivisionInfo;

    fn data(rows: &[(&str, &str)]) -> SubdivisionData {
        rows.iter()
            .map(|(code, name)| {
                (
                    code.to_string(),
                    SubdivisionInfo {
                        name: name.to_string(),
                        subdivision_type: "State".to_string(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn registration_is_independent_of_country_validity() {
        let mut registry = SubdivisionRegistry::new();
        assert!(!registry.has_subdivisions("XX"));

        registry.register("XX", "Nowhere", SubdivisionData::new());

        assert!(registry.has_subdivisions("XX"));
        assert_eq!(registry.get_subdivisions("XX").map(IndexMap::len), Some(0));
        assert_eq!(registry.country_name("XX"), Some("Nowhere"));
    }

    #[test]
    fn re_registration_replaces_without_merging() {
        let mut registry = SubdivisionRegistry::new();
        registry.register("US", "United States", data(&[("US-CA", "California")]));
        registry.register("SE", "Sweden", data(&[("SE-O", "Västra Götalands län")]));
        registry.register("US", "United States", data(&[("US-NY", "New York")]));

        let us = registry.get_subdivisions("US").unwrap();
        assert_eq!(us, &data(&[("US-NY", "New York")]));
        assert_eq!(registry.registered_countries(), vec!["US", "SE"]);
    }
}
