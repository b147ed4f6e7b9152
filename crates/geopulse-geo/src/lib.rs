//! Country resolution for geopulse.
//!
//! Loads a set of country boundary polygons from a GeoJSON source once at
//! startup and answers point-to-country-name lookups with a linear scan.
//! Lookups are read-only after load; the set is passed by reference wherever
//! resolution is needed.

pub mod boundaries;
pub mod error;
pub mod fetch;

mod geojson;

pub use boundaries::{BoundarySet, CountryBoundary, UNKNOWN_COUNTRY};
pub use error::GeoError;
pub use fetch::fetch_boundary_set;
