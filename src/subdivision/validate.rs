use crate::normalize::{normalize, normalize_name, CodeInput, SubdivisionCode};
use crate::subdivision::lookup::{exact_entry, name_entry};
use crate::subdivision::Subdivisions;

impl Subdivisions<'_> {
    /// Exact full-code membership. "us-ca" passes (input is normalized),
    /// "US-California" does not.
    pub fn is_valid_code(&self, code: &str) -> bool {
        SubdivisionCode::parse(code).is_some_and(|parsed| {
            self.registered(parsed.country())
                .and_then(|(alpha2, data)| exact_entry(data, alpha2, parsed.region()))
                .is_some()
        })
    }

    pub fn is_valid_region<'c>(&self, country: impl Into<CodeInput<'c>>, region: &str) -> bool {
        self.registered(country)
            .and_then(|(alpha2, data)| exact_entry(data, alpha2, &normalize(region)))
            .is_some()
    }

    pub fn is_valid_name<'c>(&self, country: impl Into<CodeInput<'c>>, name: &str) -> bool {
        self.registered(country)
            .and_then(|(_, data)| name_entry(data, &normalize_name(name)))
            .is_some()
    }
}
