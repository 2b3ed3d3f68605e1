//! Load-time configuration: which subdivision units an [Atlas](crate::Atlas)
//! registers, and an optional extra CSV dataset.

use std::env;
use std::path::PathBuf;

pub const SUBDIVISIONS_VAR: &str = "ISO3166_SUBDIVISIONS";
pub const EXTRA_SUBDIVISIONS_VAR: &str = "ISO3166_EXTRA_SUBDIVISIONS";

/// Compiled-in units to register.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubdivisionSelection {
    #[default]
    All,
    Off,
    /// Alpha-2 codes, normalized to upper case.
    Only(Vec<String>),
}

impl SubdivisionSelection {
    /// `all`, `none` (or empty), or a comma separated alpha-2 list such as `us, se`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("none") {
            SubdivisionSelection::Off
        } else if raw.eq_ignore_ascii_case("all") {
            SubdivisionSelection::All
        } else {
            SubdivisionSelection::Only(
                raw.split(',')
                    .map(|code| code.trim().to_ascii_uppercase())
                    .filter(|code| !code.is_empty())
                    .collect(),
            )
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadConfig {
    pub subdivisions: SubdivisionSelection,
    /// Subdivision CSV registered after the compiled-in units.
    pub extra_subdivisions: Option<PathBuf>,
}

impl LoadConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var(SUBDIVISIONS_VAR).ok().as_deref(),
            env::var(EXTRA_SUBDIVISIONS_VAR).ok().as_deref(),
        )
    }

    /// Same as [LoadConfig::from_env] with the variable values passed in.
    pub fn from_vars(subdivisions: Option<&str>, extra_subdivisions: Option<&str>) -> Self {
        LoadConfig {
            subdivisions: subdivisions
                .map(SubdivisionSelection::parse)
                .unwrap_or_default(),
            extra_subdivisions: extra_subdivisions
                .map(str::trim)
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        }
    }
}
