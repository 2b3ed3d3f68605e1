//! ISO 3166-1: the country table, its resolver, conversions and validation.

mod convert;
mod format;
mod lookup;
mod table;
mod validate;

pub use format::{CountryCodeFormat, DetectedFormat, UnknownFormat};
pub use table::{Country, CountryRecord, CountryTable};
