use std::collections::HashMap;

use geo::MultiPolygon;
use geojson::{FeatureCollection, GeoJson};

#[derive(Debug, thiserror::Error)]
pub enum BoundaryError {
    #[error("invalid GeoJSON: {0}")]
    Geojson(#[from] geojson::Error),
    #[error("boundary dataset contains no polygon features")]
    NoPolygons,
}

/// One country's polygon geometry plus identifying metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    /// ISO 3166-1 alpha-3 code, the join key against country records.
    pub code: String,
    pub name: String,
    pub geometry: MultiPolygon<f64>,
}

/// The boundary dataset for a session: loaded once, immutable afterwards.
///
/// Iteration order is the document order of the source collection; code
/// lookups resolve to the first feature carrying that code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundarySet {
    features: Vec<BoundaryFeature>,
    by_code: HashMap<String, usize>,
}

impl BoundarySet {
    pub fn new(features: Vec<BoundaryFeature>) -> Self {
        let mut by_code = HashMap::with_capacity(features.len());
        for (idx, feature) in features.iter().enumerate() {
            by_code.entry(feature.code.clone()).or_insert(idx);
        }
        Self { features, by_code }
    }

    /// Parses a GeoJSON feature collection.
    ///
    /// Features without a string id or without polygon geometry are skipped;
    /// a collection that yields no usable feature at all is an error.
    pub fn from_geojson(text: &str) -> Result<Self, BoundaryError> {
        let geojson: GeoJson = text.parse()?;
        let collection = FeatureCollection::try_from(geojson)?;

        let mut features = Vec::with_capacity(collection.features.len());
        for feature in collection.features {
            let Some(geojson::feature::Id::String(code)) = feature.id else {
                continue;
            };
            let name = feature
                .properties
                .as_ref()
                .and_then(|props| props.get("name"))
                .and_then(|value| value.as_str())
                .unwrap_or(&code)
                .to_string();
            let Some(geometry) = feature.geometry else {
                continue;
            };
            let Ok(geometry) = geo::Geometry::<f64>::try_from(geometry.value) else {
                continue;
            };
            let geometry = match geometry {
                geo::Geometry::Polygon(polygon) => MultiPolygon(vec![polygon]),
                geo::Geometry::MultiPolygon(multi) => multi,
                _ => continue,
            };

            features.push(BoundaryFeature {
                code,
                name,
                geometry,
            });
        }

        if features.is_empty() {
            return Err(BoundaryError::NoPolygons);
        }
        Ok(Self::new(features))
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Features in document order.
    pub fn iter(&self) -> impl Iterator<Item = &BoundaryFeature> {
        self.features.iter()
    }

    pub fn by_code(&self, code: &str) -> Option<&BoundaryFeature> {
        self.by_code.get(code).map(|&idx| &self.features[idx])
    }
}

/// Hand-built features for downstream tests.
#[doc(hidden)]
pub mod test_fixtures {
    use super::BoundaryFeature;
    use geo::{Coord, LineString, MultiPolygon, Polygon};

    pub fn square_feature(code: &str, name: &str, lon0: f64, lat0: f64, size: f64) -> BoundaryFeature {
        let ring = LineString(vec![
            Coord { x: lon0, y: lat0 },
            Coord { x: lon0 + size, y: lat0 },
            Coord { x: lon0 + size, y: lat0 + size },
            Coord { x: lon0, y: lat0 + size },
            Coord { x: lon0, y: lat0 },
        ]);
        BoundaryFeature {
            code: code.to_string(),
            name: name.to_string(),
            geometry: MultiPolygon(vec![Polygon::new(ring, vec![])]),
        }
    }
}
