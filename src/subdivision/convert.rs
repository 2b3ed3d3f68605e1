use crate::normalize::{normalize, CodeInput, SubdivisionCode};
use crate::subdivision::lookup::exact_entry;
use crate::subdivision::{SubdivisionInfo, Subdivisions};

/// Region part of a full code, normalized: "gb-eaw" -> "EAW".
/// Needs no data, so "XX-YY" still yields "YY".
pub fn to_region_code(code: &str) -> Option<String> {
    SubdivisionCode::parse(code).map(|parsed| parsed.region().to_string())
}

impl<'a> Subdivisions<'a> {
    /// Canonical full code, only when that subdivision is registered.
    pub fn to_full_code<'c>(
        &self,
        country: impl Into<CodeInput<'c>>,
        region: &str,
    ) -> Option<String> {
        let (alpha2, data) = self.registered(country)?;
        exact_entry(data, alpha2, &normalize(region)).map(|(full_code, _)| full_code.clone())
    }

    /// Name for an exact full code; the fallback tiers of `where_code` do not apply.
    pub fn to_name(&self, code: &str) -> Option<&'a str> {
        let parsed = SubdivisionCode::parse(code)?;
        let (alpha2, data) = self.registered(parsed.country())?;
        exact_name(exact_entry(data, alpha2, parsed.region()))
    }

    pub fn to_name_from<'c>(
        &self,
        country: impl Into<CodeInput<'c>>,
        region: &str,
    ) -> Option<&'a str> {
        let (alpha2, data) = self.registered(country)?;
        exact_name(exact_entry(data, alpha2, &normalize(region)))
    }

    /// Alpha-2 of the country part, so "USA-CA" gives "US". Does not consult
    /// the registry.
    pub fn to_country_code(&self, code: &str) -> Option<&'a str> {
        let parsed = SubdivisionCode::parse(code)?;
        self.countries().resolve_alpha2(parsed.country())
    }
}

fn exact_name<'d>(
    entry: Option<(&'d String, &'d SubdivisionInfo)>,
) -> Option<&'d str> {
    entry
        .map(|(_, info)| info.name.as_str())
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::to_region_code;

    #[test]
    fn region_code_splits_on_first_hyphen() {
        assert_eq!(to_region_code("GB-EAW").as_deref(), Some("EAW"));
        assert_eq!(to_region_code(" se-o ").as_deref(), Some("O"));
        assert_eq!(to_region_code("XX-AB-CD").as_deref(), Some("AB-CD"));
        assert_eq!(to_region_code("GBEAW"), None);
    }
}
