//! Subdivision resolver over a country table and a registry.

use crate::country::CountryTable;
use crate::normalize::{normalize, normalize_name, region_suffix, CodeInput, SubdivisionCode};
use crate::subdivision::{
    Subdivision, SubdivisionData, SubdivisionInfo, SubdivisionRegistry,
};

/// Read-only view that answers subdivision queries.
///
/// Countries are resolved through the country table first, so "USA-CA",
/// `("USA", "CA")` and `("840", "CA")` all reach the US table. A country that
/// exists but has no registered table behaves exactly like an unknown one.
#[derive(Debug, Clone, Copy)]
pub struct Subdivisions<'a> {
    countries: &'a CountryTable,
    registry: &'a SubdivisionRegistry,
}

impl<'a> Subdivisions<'a> {
    pub fn new(countries: &'a CountryTable, registry: &'a SubdivisionRegistry) -> Self {
        Subdivisions {
            countries,
            registry,
        }
    }

    pub fn countries(&self) -> &'a CountryTable {
        self.countries
    }

    pub fn registry(&self) -> &'a SubdivisionRegistry {
        self.registry
    }

    /// Look up a full code such as "US-CA".
    ///
    /// Tiers, first hit wins and table order decides ties:
    /// 1. exact key `<alpha2>-<REGION>`;
    /// 2. stored region suffix compared ASCII case-insensitively;
    /// 3. subdivision name compared case-insensitively ("US-California").
    pub fn where_code(&self, code: &str) -> Option<Subdivision> {
        let parsed = SubdivisionCode::parse(code)?;
        let (alpha2, data) = self.registered(parsed.country())?;
        let region = parsed.region();

        if let Some((full_code, info)) = exact_entry(data, alpha2, region) {
            return Some(self.project(alpha2, full_code, info));
        }

        data.iter()
            .find(|(full_code, _)| region_suffix(full_code).to_ascii_uppercase() == region)
            .or_else(|| name_entry(data, parsed.region_name()))
            .map(|(full_code, info)| self.project(alpha2, full_code, info))
    }

    /// Exact lookup from separate country and region parts. Unlike
    /// [Subdivisions::where_code] there are no fallback tiers: a name passed
    /// as `region` does not match.
    pub fn where_region<'c>(
        &self,
        country: impl Into<CodeInput<'c>>,
        region: &str,
    ) -> Option<Subdivision> {
        let (alpha2, data) = self.registered(country)?;
        let (full_code, info) = exact_entry(data, alpha2, &normalize(region))?;
        Some(self.project(alpha2, full_code, info))
    }

    /// Case-insensitive name match within one country, first in table order.
    pub fn where_name<'c>(
        &self,
        country: impl Into<CodeInput<'c>>,
        name: &str,
    ) -> Option<Subdivision> {
        let (alpha2, data) = self.registered(country)?;
        let (full_code, info) = name_entry(data, &normalize_name(name))?;
        Some(self.project(alpha2, full_code, info))
    }

    /// Every subdivision of one country, sorted by full code. Empty when the
    /// country is unknown or unregistered.
    pub fn for_country<'c>(&self, country: impl Into<CodeInput<'c>>) -> Vec<Subdivision> {
        let Some((alpha2, data)) = self.registered(country) else {
            return Vec::new();
        };

        let mut subdivisions: Vec<Subdivision> = data
            .iter()
            .map(|(full_code, info)| self.project(alpha2, full_code, info))
            .collect();
        subdivisions.sort_by(|a, b| a.code.cmp(&b.code));
        subdivisions
    }

    /// Every registered subdivision, sorted by full code.
    pub fn all(&self) -> Vec<Subdivision> {
        let mut subdivisions: Vec<Subdivision> = self
            .registry
            .get_all_subdivisions()
            .iter()
            .flat_map(|(alpha2, entry)| {
                entry
                    .subdivisions
                    .iter()
                    .map(move |(full_code, info)| self.project(alpha2, full_code, info))
            })
            .collect();
        subdivisions.sort_by(|a, b| a.code.cmp(&b.code));
        subdivisions
    }

    /// Registry check after resolving the country, so alpha-3 and numeric
    /// codes work too.
    pub fn has_subdivisions<'c>(&self, country: impl Into<CodeInput<'c>>) -> bool {
        self.countries
            .resolve_alpha2(country)
            .is_some_and(|alpha2| self.registry.has_subdivisions(alpha2))
    }

    /// Resolved alpha-2 and its registered table.
    pub(super) fn registered<'c>(
        &self,
        country: impl Into<CodeInput<'c>>,
    ) -> Option<(&'a str, &'a SubdivisionData)> {
        let alpha2 = self.countries.resolve_alpha2(country)?;
        let data = self.registry.get_subdivisions(alpha2)?;
        Some((alpha2, data))
    }

    fn project(&self, alpha2: &str, full_code: &str, info: &SubdivisionInfo) -> Subdivision {
        let country_name = self
            .registry
            .country_name(alpha2)
            .filter(|name| !name.is_empty())
            .or_else(|| self.countries.get(alpha2).map(|record| record.name.as_str()))
            .unwrap_or("");

        Subdivision {
            code: full_code.to_string(),
            name: info.name.clone(),
            subdivision_type: info.subdivision_type.clone(),
            country_code: alpha2.to_string(),
            country_name: country_name.to_string(),
            region_code: region_suffix(full_code).to_string(),
        }
    }
}

/// Entry stored under exactly `<alpha2>-<region>`.
pub(super) fn exact_entry<'d>(
    data: &'d SubdivisionData,
    alpha2: &str,
    region: &str,
) -> Option<(&'d String, &'d SubdivisionInfo)> {
    data.get_key_value(format!("{alpha2}-{region}").as_str())
}

/// First entry whose uppercased name equals `name_key` (see [normalize_name]).
pub(super) fn name_entry<'d>(
    data: &'d SubdivisionData,
    name_key: &str,
) -> Option<(&'d String, &'d SubdivisionInfo)> {
    data.iter()
        .find(|(_, info)| info.name.to_uppercase() == name_key)
}
