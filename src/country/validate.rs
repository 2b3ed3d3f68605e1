use crate::country::format::DetectedFormat;
use crate::country::table::CountryTable;
use crate::normalize::{normalize, normalize_name, CodeInput, CodeShape, NormalizedCode};

impl CountryTable {
    /// Exactly two characters as given (no trimming) and present in the table.
    pub fn is_alpha2(&self, code: &str) -> bool {
        code.chars().count() == 2 && self.contains_alpha2(&normalize(code))
    }

    /// Exactly three characters as given and present in the alpha-3 index.
    pub fn is_alpha3(&self, code: &str) -> bool {
        code.chars().count() == 3 && self.alpha2_for_alpha3(&normalize(code)).is_some()
    }

    /// Digits only, present in the numeric index after padding.
    pub fn is_numeric<'a>(&self, code: impl Into<CodeInput<'a>>) -> bool {
        let code = NormalizedCode::new(code);
        code.shape() == CodeShape::Numeric && self.alpha2_for_numeric(code.as_str()).is_some()
    }

    pub fn is_country_name(&self, name: &str) -> bool {
        self.alpha2_for_name(&normalize_name(name)).is_some()
    }

    /// Any accepted identifier: alpha-2, alpha-3, numeric or name.
    pub fn is_valid<'a>(&self, value: impl Into<CodeInput<'a>>) -> bool {
        let value = value.into();
        let name = normalize_name(value.clone());
        let code = NormalizedCode::new(value);
        if code.is_empty() {
            return false;
        }
        let value = code.as_str();

        self.contains_alpha2(value)
            || self.alpha2_for_alpha3(value).is_some()
            || (code.shape() == CodeShape::Numeric && self.alpha2_for_numeric(value).is_some())
            || self.alpha2_for_name(&name).is_some()
    }

    /// Report which form `code` matched: two letters in the table, three
    /// letters in the alpha-3 index, digits in the numeric index, then names.
    pub fn detect_format<'a>(&self, code: impl Into<CodeInput<'a>>) -> Option<DetectedFormat> {
        let code = code.into();
        let name = normalize_name(code.clone());
        let code = NormalizedCode::new(code);
        if code.is_empty() {
            return None;
        }
        let value = code.as_str();

        let structured = match code.shape() {
            CodeShape::Alpha2 => self
                .contains_alpha2(value)
                .then_some(DetectedFormat::Alpha2),
            CodeShape::Alpha3 => self
                .alpha2_for_alpha3(value)
                .map(|_| DetectedFormat::Alpha3),
            CodeShape::Numeric => self
                .alpha2_for_numeric(value)
                .map(|_| DetectedFormat::Numeric),
            CodeShape::FreeText => None,
        };

        structured.or_else(|| self.alpha2_for_name(&name).map(|_| DetectedFormat::Name))
    }
}

#[cfg(test)]
mod tests {
    use crate::country::{CountryTable, DetectedFormat};

    #[test]
    fn length_checks_use_raw_input() {
        let table = CountryTable::builtin();
        assert!(table.is_alpha2("us"));
        assert!(!table.is_alpha2(" US"));
        assert!(!table.is_alpha3("US"));
        assert!(!table.is_alpha3(""));
    }

    #[test]
    fn detect_format_falls_through_to_names() {
        let table = CountryTable::builtin();
        assert_eq!(table.detect_format("Oman"), Some(DetectedFormat::Name));
        assert_eq!(table.detect_format("PERU"), Some(DetectedFormat::Name));
        assert_eq!(table.detect_format("PER"), Some(DetectedFormat::Alpha3));
        assert_eq!(table.detect_format(4), Some(DetectedFormat::Numeric));
        assert_eq!(table.detect_format(""), None);
    }
}
