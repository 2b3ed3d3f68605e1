pub mod countries;
pub mod csv_source;
pub mod units;
pub mod validate;
