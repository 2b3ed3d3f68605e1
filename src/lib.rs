//! ISO 3166 country and subdivision codes.
//!
//! [CountryTable] resolves ISO 3166-1 codes (alpha-2, alpha-3, numeric, names).
//! ISO 3166-2 subdivisions live in a [SubdivisionRegistry] that the host fills
//! from compiled-in [units](data::units) or CSV; [Atlas] bundles the two and
//! hands out a [Subdivisions] view for lookups.

pub mod atlas;
pub mod cli;
pub mod config;
pub mod country;
pub mod data;
pub mod error;
pub mod normalize;
pub mod subdivision;

pub use atlas::{Atlas, CountryWithSubdivisions};
pub use config::{LoadConfig, SubdivisionSelection};
pub use country::{Country, CountryCodeFormat, CountryRecord, CountryTable, DetectedFormat};
pub use error::DataError;
pub use normalize::{normalize, normalize_name, CodeInput, CodeShape};
pub use subdivision::{
    to_region_code, RegisteredCountry, Subdivision, SubdivisionData, SubdivisionInfo,
    SubdivisionRegistry, Subdivisions,
};
