//! The loaded boundary set and point-in-polygon country resolution.

use geo::{Contains, MultiPolygon, Point};

use crate::error::GeoError;
use crate::geojson::FeatureCollection;

/// Sentinel returned when no boundary contains a point or the coordinates
/// are invalid.
pub const UNKNOWN_COUNTRY: &str = "unknown";

/// One country's name and geometry.
#[derive(Debug, Clone)]
pub struct CountryBoundary {
    pub name: String,
    pub geometry: MultiPolygon<f64>,
}

/// An ordered collection of country boundaries.
///
/// Iteration order is the feature order of the loaded GeoJSON file. When a
/// point lies in more than one boundary (shared borders, overlapping data
/// errors), the first boundary in that order wins — an accepted tie-break,
/// not a cross-dataset guarantee.
#[derive(Debug, Clone)]
pub struct BoundarySet {
    entries: Vec<CountryBoundary>,
}

impl BoundarySet {
    /// Parse a GeoJSON `FeatureCollection` body into a boundary set.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Parse`] for malformed GeoJSON or unsupported
    /// geometry types, [`GeoError::EmptyBoundarySet`] when the file has no
    /// features, and [`GeoError::ShortPosition`] for truncated coordinates.
    pub fn from_geojson_str(body: &str) -> Result<Self, GeoError> {
        let collection: FeatureCollection = serde_json::from_str(body)?;
        if collection.features.is_empty() {
            return Err(GeoError::EmptyBoundarySet);
        }
        let entries = collection
            .features
            .into_iter()
            .map(|feature| {
                let name = feature.properties.admin;
                let geometry = feature.geometry.into_multi_polygon(&name)?;
                Ok(CountryBoundary { name, geometry })
            })
            .collect::<Result<Vec<_>, GeoError>>()?;
        Ok(Self { entries })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Country names in scan order.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Resolve a (longitude, latitude) pair to a country name.
    ///
    /// Linear scan over every boundary in load order; O(countries) per call.
    /// Returns [`UNKNOWN_COUNTRY`] when no boundary contains the point or a
    /// coordinate is not finite. Containment is interior-only: a point
    /// exactly on a border matches no boundary.
    #[must_use]
    pub fn resolve(&self, longitude: f64, latitude: f64) -> &str {
        if !longitude.is_finite() || !latitude.is_finite() {
            return UNKNOWN_COUNTRY;
        }
        let point = Point::new(longitude, latitude);
        for entry in &self.entries {
            if entry.geometry.contains(&point) {
                return &entry.name;
            }
        }
        UNKNOWN_COUNTRY
    }
}
