//! ISO 3166-2: the subdivision registry and the resolvers layered on it.

mod convert;
mod lookup;
mod registry;
mod validate;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use convert::to_region_code;
pub use lookup::Subdivisions;
pub use registry::{RegisteredCountry, SubdivisionRegistry};

/// Stored per full code ("US-CA").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubdivisionInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub subdivision_type: String,
}

/// One country's subdivisions keyed by full code, in table order.
pub type SubdivisionData = IndexMap<String, SubdivisionInfo>;

/// A resolved subdivision with its country context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subdivision {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub subdivision_type: String,
    pub country_code: String,
    pub country_name: String,
    pub region_code: String,
}
