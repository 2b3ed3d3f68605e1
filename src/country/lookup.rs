//! Country lookups and the alpha-2 resolver every other module relies on.

use crate::country::table::{Country, CountryTable};
use crate::normalize::{normalize, normalize_name, CodeInput};

impl CountryTable {
    /// Resolve alpha-2, alpha-3 or numeric input to the canonical alpha-2 key.
    ///
    /// Order is fixed: alpha-2 table key, then the alpha-3 index, then the
    /// numeric index after zero-padding to three characters. Names are not
    /// considered here; use [CountryTable::where_name] for free text.
    pub fn resolve_alpha2<'a>(&self, code: impl Into<CodeInput<'a>>) -> Option<&str> {
        let normalized = normalize(code);
        if normalized.is_empty() {
            return None;
        }

        self.alpha2_key(&normalized)
            .or_else(|| self.alpha2_for_alpha3(&normalized))
            .or_else(|| self.alpha2_for_numeric(&normalized))
    }

    pub fn where_alpha2(&self, code: &str) -> Option<Country> {
        self.country(&normalize(code))
    }

    pub fn where_alpha3(&self, code: &str) -> Option<Country> {
        let alpha2 = self.alpha2_for_alpha3(&normalize(code))?;
        self.country(alpha2)
    }

    /// Accepts "840", 840, "4" or "004".
    pub fn where_numeric<'a>(&self, code: impl Into<CodeInput<'a>>) -> Option<Country> {
        let normalized = normalize(code);
        if normalized.is_empty() {
            return None;
        }
        let alpha2 = self.alpha2_for_numeric(&normalized)?;
        self.country(alpha2)
    }

    /// Case-insensitive exact name match.
    pub fn where_name(&self, name: &str) -> Option<Country> {
        let alpha2 = self.alpha2_for_name(&normalize_name(name))?;
        self.country(alpha2)
    }

    /// Every country, sorted by alpha-2.
    pub fn all(&self) -> Vec<Country> {
        self.iter()
            .filter_map(|(alpha2, _)| self.country(alpha2))
            .collect()
    }
}
