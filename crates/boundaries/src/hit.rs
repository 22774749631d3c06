//! Point-in-polygon hit-testing.
//!
//! Pure functions of (point, geometry): no projection, no pointer plumbing.
//!
//! Containment is an even-odd ray cast in lon/lat space. Every edge endpoint
//! is expressed as a longitude delta from the query point, normalized into
//! [-180, 180), so rings that cross the antimeridian test correctly as long
//! as no single edge spans more than half the globe.

use foundation::math::normalize_lon_deg;
use geo::{LineString, MultiPolygon};

use crate::feature::{BoundaryFeature, BoundarySet};

/// Finds the first feature, in document order, containing the point.
///
/// Deterministic: the same (lon, lat) against the same set always returns the
/// same feature or none.
pub fn locate<'a>(set: &'a BoundarySet, lon_deg: f64, lat_deg: f64) -> Option<&'a BoundaryFeature> {
    set.iter()
        .find(|feature| contains(&feature.geometry, lon_deg, lat_deg))
}

/// Even-odd containment against a multipolygon.
pub fn contains(geometry: &MultiPolygon<f64>, lon_deg: f64, lat_deg: f64) -> bool {
    geometry.0.iter().any(|polygon| {
        let mut crossings = ring_crossings(polygon.exterior(), lon_deg, lat_deg);
        for interior in polygon.interiors() {
            crossings += ring_crossings(interior, lon_deg, lat_deg);
        }
        crossings % 2 == 1
    })
}

fn ring_crossings(ring: &LineString<f64>, lon_deg: f64, lat_deg: f64) -> u32 {
    let coords = &ring.0;
    if coords.len() < 2 {
        return 0;
    }

    let mut crossings = 0;
    for edge in coords.windows(2) {
        let (ax, ay) = (normalize_lon_deg(edge[0].x - lon_deg), edge[0].y);
        let (bx, by) = (normalize_lon_deg(edge[1].x - lon_deg), edge[1].y);

        if (ay > lat_deg) == (by > lat_deg) {
            continue;
        }
        // Eastward ray: count edges whose crossing lies at positive delta.
        let cross_x = ax + (lat_deg - ay) * (bx - ax) / (by - ay);
        if cross_x > 0.0 {
            crossings += 1;
        }
    }
    crossings
}
