use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::country::table::CountryRecord;

/// Structured ISO 3166-1 code forms accepted by [convert](crate::country::CountryTable::convert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountryCodeFormat {
    Alpha2,
    Alpha3,
    Numeric,
}

/// What [detect_format](crate::country::CountryTable::detect_format) found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectedFormat {
    Alpha2,
    Alpha3,
    Numeric,
    Name,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown country code format '{0}' (expected alpha2, alpha3 or numeric)")]
pub struct UnknownFormat(pub String);

impl CountryCodeFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alpha2 => "alpha2",
            Self::Alpha3 => "alpha3",
            Self::Numeric => "numeric",
        }
    }

    /// The code of this form for a stored record.
    pub(crate) fn project<'a>(&self, alpha2: &'a str, record: &'a CountryRecord) -> &'a str {
        match self {
            Self::Alpha2 => alpha2,
            Self::Alpha3 => &record.alpha3,
            Self::Numeric => &record.numeric,
        }
    }
}

impl DetectedFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alpha2 => "alpha2",
            Self::Alpha3 => "alpha3",
            Self::Numeric => "numeric",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for CountryCodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DetectedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryCodeFormat {
    type Err = UnknownFormat;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "alpha2" | "alpha-2" => Ok(Self::Alpha2),
            "alpha3" | "alpha-3" => Ok(Self::Alpha3),
            "numeric" => Ok(Self::Numeric),
            _ => Err(UnknownFormat(raw.to_string())),
        }
    }
}

impl From<CountryCodeFormat> for DetectedFormat {
    fn from(format: CountryCodeFormat) -> Self {
        match format {
            CountryCodeFormat::Alpha2 => Self::Alpha2,
            CountryCodeFormat::Alpha3 => Self::Alpha3,
            CountryCodeFormat::Numeric => Self::Numeric,
        }
    }
}
