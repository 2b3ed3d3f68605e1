//! Host context: the country table plus the subdivision registry.

use std::sync::Arc;

use serde::Serialize;

use crate::config::{LoadConfig, SubdivisionSelection};
use crate::country::{Country, CountryTable};
use crate::data::csv_source::{read_subdivision_sets, SubdivisionSet};
use crate::data::units::{self, SubdivisionUnit};
use crate::error::DataError;
use crate::normalize::normalize;
use crate::subdivision::{SubdivisionData, SubdivisionRegistry, Subdivisions};

/// Country record with its registered subdivision table (empty if none).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryWithSubdivisions {
    #[serde(flatten)]
    pub country: Country,
    pub subdivisions: SubdivisionData,
}

/// Everything a lookup needs. Build it once at startup, register the
/// subdivision data the process wants, then share it (`Arc<Atlas>`) with
/// readers. Registration takes `&mut self`, so it cannot overlap a borrowed
/// [Subdivisions] view.
#[derive(Debug, Clone)]
pub struct Atlas {
    countries: Arc<CountryTable>,
    registry: SubdivisionRegistry,
}

impl Default for Atlas {
    fn default() -> Self {
        Self::new()
    }
}

impl Atlas {
    /// Built-in country table, no subdivisions registered.
    pub fn new() -> Self {
        Self::with_countries(CountryTable::builtin_shared())
    }

    pub fn with_countries(countries: Arc<CountryTable>) -> Self {
        Atlas {
            countries,
            registry: SubdivisionRegistry::new(),
        }
    }

    pub fn with_units<'u>(selected: impl IntoIterator<Item = &'u SubdivisionUnit>) -> Self {
        let mut atlas = Self::new();
        for unit in selected {
            atlas.register_unit(unit);
        }
        atlas
    }

    /// Every compiled-in subdivision unit registered.
    pub fn full() -> Self {
        Self::with_units(units::ALL.iter().copied())
    }

    /// Apply a [LoadConfig]: register the selected compiled-in units, then the
    /// extra CSV dataset (which replaces same-country tables wholesale).
    pub fn from_config(config: &LoadConfig) -> Result<Self, DataError> {
        let mut atlas = match &config.subdivisions {
            SubdivisionSelection::All => Self::full(),
            SubdivisionSelection::Off => Self::new(),
            SubdivisionSelection::Only(codes) => {
                let mut atlas = Self::new();
                for code in codes {
                    match units::find(code) {
                        Some(unit) => atlas.register_unit(unit),
                        None => tracing::warn!(country = %code, "no compiled-in subdivisions, skipped"),
                    }
                }
                atlas
            }
        };

        if let Some(path) = &config.extra_subdivisions {
            let sets = read_subdivision_sets(path)?;
            tracing::info!(path = %path.display(), countries = sets.len(), "loaded extra subdivisions");
            for set in sets {
                atlas.register_set(set);
            }
        }

        Ok(atlas)
    }

    pub fn register(
        &mut self,
        country_code: impl Into<String>,
        country_name: impl Into<String>,
        data: SubdivisionData,
    ) {
        self.registry.register(country_code, country_name, data);
    }

    pub fn register_unit(&mut self, unit: &SubdivisionUnit) {
        self.registry.register_unit(unit);
    }

    pub fn register_set(&mut self, set: SubdivisionSet) {
        self.registry
            .register(set.country_code, set.country_name, set.subdivisions);
    }

    pub fn countries(&self) -> &CountryTable {
        &self.countries
    }

    pub fn shared_countries(&self) -> Arc<CountryTable> {
        Arc::clone(&self.countries)
    }

    pub fn registry(&self) -> &SubdivisionRegistry {
        &self.registry
    }

    pub fn subdivisions(&self) -> Subdivisions<'_> {
        Subdivisions::new(&self.countries, &self.registry)
    }

    /// Country by alpha-2 or alpha-3 (not numeric, not name) with its
    /// subdivision table attached.
    pub fn with_subdivisions(&self, code: &str) -> Option<CountryWithSubdivisions> {
        let normalized = normalize(code);
        let alpha2 = self
            .countries
            .alpha2_key(&normalized)
            .or_else(|| self.countries.alpha2_for_alpha3(&normalized))?;
        let country = self.countries.where_alpha2(alpha2)?;
        let subdivisions = self
            .registry
            .get_subdivisions(alpha2)
            .cloned()
            .unwrap_or_default();

        Some(CountryWithSubdivisions {
            country,
            subdivisions,
        })
    }
}
