//! Minimal serde types for the country-boundary GeoJSON file.
//!
//! Only the shapes the geo-countries dataset uses are supported: a
//! `FeatureCollection` of `Polygon`/`MultiPolygon` features keyed by the
//! `ADMIN` property. Anything else surfaces as a parse error at load time.

use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde::Deserialize;

use crate::error::GeoError;

/// A GeoJSON position. The dataset is 2D, but positions may legally carry
/// extra members; only the first two (lon, lat) are read.
type Position = Vec<f64>;

#[derive(Debug, Deserialize)]
pub(crate) struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Feature {
    pub properties: FeatureProperties,
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FeatureProperties {
    #[serde(rename = "ADMIN", alias = "name")]
    pub admin: String,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub(crate) enum Geometry {
    Polygon(Vec<Vec<Position>>),
    MultiPolygon(Vec<Vec<Vec<Position>>>),
}

impl Geometry {
    /// Convert into a `geo` multipolygon, normalizing plain polygons to a
    /// one-element multipolygon so the containment scan has a single shape.
    pub(crate) fn into_multi_polygon(self, country: &str) -> Result<MultiPolygon<f64>, GeoError> {
        match self {
            Geometry::Polygon(rings) => {
                Ok(MultiPolygon::new(vec![polygon_from_rings(country, rings)?]))
            }
            Geometry::MultiPolygon(polygons) => {
                let polygons = polygons
                    .into_iter()
                    .map(|rings| polygon_from_rings(country, rings))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(MultiPolygon::new(polygons))
            }
        }
    }
}

/// GeoJSON ring order: first ring is the exterior, the rest are holes.
fn polygon_from_rings(country: &str, rings: Vec<Vec<Position>>) -> Result<Polygon<f64>, GeoError> {
    let mut rings = rings.into_iter();
    let exterior = match rings.next() {
        Some(ring) => ring_to_line_string(country, ring)?,
        None => LineString::new(Vec::new()),
    };
    let interiors = rings
        .map(|ring| ring_to_line_string(country, ring))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Polygon::new(exterior, interiors))
}

fn ring_to_line_string(country: &str, ring: Vec<Position>) -> Result<LineString<f64>, GeoError> {
    let coords = ring
        .into_iter()
        .map(|position| {
            if position.len() < 2 {
                return Err(GeoError::ShortPosition {
                    country: country.to_string(),
                });
            }
            Ok(Coord {
                x: position[0],
                y: position[1],
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(LineString::new(coords))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_converts_to_single_element_multipolygon() {
        let geometry = Geometry::Polygon(vec![vec![
            vec![0.0, 0.0],
            vec![4.0, 0.0],
            vec![4.0, 4.0],
            vec![0.0, 4.0],
            vec![0.0, 0.0],
        ]]);
        let mp = geometry.into_multi_polygon("Testland").unwrap();
        assert_eq!(mp.0.len(), 1);
        assert_eq!(mp.0[0].exterior().0.len(), 5);
    }

    #[test]
    fn holes_become_interior_rings() {
        let geometry = Geometry::Polygon(vec![
            vec![
                vec![0.0, 0.0],
                vec![10.0, 0.0],
                vec![10.0, 10.0],
                vec![0.0, 10.0],
                vec![0.0, 0.0],
            ],
            vec![
                vec![4.0, 4.0],
                vec![6.0, 4.0],
                vec![6.0, 6.0],
                vec![4.0, 6.0],
                vec![4.0, 4.0],
            ],
        ]);
        let mp = geometry.into_multi_polygon("Testland").unwrap();
        assert_eq!(mp.0[0].interiors().len(), 1);
    }

    #[test]
    fn short_position_is_rejected() {
        let geometry = Geometry::Polygon(vec![vec![vec![0.0], vec![1.0, 1.0]]]);
        let err = geometry.into_multi_polygon("Testland").unwrap_err();
        assert!(matches!(err, GeoError::ShortPosition { ref country } if country == "Testland"));
    }

    #[test]
    fn three_element_positions_are_accepted() {
        let geometry = Geometry::Polygon(vec![vec![
            vec![0.0, 0.0, 7.5],
            vec![2.0, 0.0, 7.5],
            vec![1.0, 2.0, 7.5],
            vec![0.0, 0.0, 7.5],
        ]]);
        assert!(geometry.into_multi_polygon("Testland").is_ok());
    }
}
