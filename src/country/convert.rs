use crate::country::format::CountryCodeFormat;
use crate::country::table::CountryTable;
use crate::normalize::{normalize, CodeInput};

impl CountryTable {
    pub fn alpha2_to_alpha3(&self, code: &str) -> Option<&str> {
        self.get(&normalize(code))
            .map(|record| record.alpha3.as_str())
            .filter(|alpha3| !alpha3.is_empty())
    }

    pub fn alpha3_to_alpha2(&self, code: &str) -> Option<&str> {
        self.alpha2_for_alpha3(&normalize(code))
    }

    pub fn alpha2_to_numeric(&self, code: &str) -> Option<&str> {
        self.get(&normalize(code))
            .map(|record| record.numeric.as_str())
            .filter(|numeric| !numeric.is_empty())
    }

    pub fn alpha3_to_numeric(&self, code: &str) -> Option<&str> {
        let alpha2 = self.alpha3_to_alpha2(code)?;
        self.alpha2_to_numeric(alpha2)
    }

    pub fn numeric_to_alpha2<'a>(&self, code: impl Into<CodeInput<'a>>) -> Option<&str> {
        self.alpha2_for_numeric(&normalize(code))
    }

    pub fn numeric_to_alpha3<'a>(&self, code: impl Into<CodeInput<'a>>) -> Option<&str> {
        let alpha2 = self.numeric_to_alpha2(code)?;
        self.alpha2_to_alpha3(alpha2)
    }

    /// Country name from any structured code form.
    pub fn to_name<'a>(&self, code: impl Into<CodeInput<'a>>) -> Option<&str> {
        let alpha2 = self.resolve_alpha2(code)?;
        self.get(alpha2).map(|record| record.name.as_str())
    }

    /// Convert `code` from one structured form to another.
    ///
    /// The source form is enforced, not inferred: `convert("USA", Alpha2, _)`
    /// is `None` even though "USA" is a valid alpha-3 code.
    pub fn convert<'a>(
        &self,
        code: impl Into<CodeInput<'a>>,
        from: CountryCodeFormat,
        to: CountryCodeFormat,
    ) -> Option<&str> {
        let normalized = normalize(code);
        let alpha2 = match from {
            CountryCodeFormat::Alpha2 => self.alpha2_key(&normalized),
            CountryCodeFormat::Alpha3 => self.alpha2_for_alpha3(&normalized),
            CountryCodeFormat::Numeric => self.alpha2_for_numeric(&normalized),
        }?;
        let record = self.get(alpha2)?;
        Some(to.project(alpha2, record)).filter(|code| !code.is_empty())
    }
}
