use geo::{Coord, Rect};
use serde::{Serialize, Serializer};

use crate::{error::{Result, RiskMapError}, feature::Feature, geom::{line_positions, LineKind}};

/// A geographic point in map order (latitude first), serialized as `[lat, lon]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    #[inline] pub fn new(lat: f64, lon: f64) -> Self { Self { lat, lon } }
}

impl Serialize for LatLon {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq([self.lat, self.lon])
    }
}

/// Initial map framing: the center point and the `[south-west, north-east]` corners.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Viewport {
    pub center: LatLon,
    pub bounds: [LatLon; 2],
}

impl Viewport {
    /// Build a viewport from a lon/lat rectangle.
    pub fn from_rect(rect: Rect<f64>) -> Self {
        let (min, max) = (rect.min(), rect.max());
        Self {
            center: LatLon::new((min.y + max.y) / 2.0, (min.x + max.x) / 2.0),
            bounds: [LatLon::new(min.y, min.x), LatLon::new(max.y, max.x)],
        }
    }

    #[inline] pub fn south_west(&self) -> LatLon { self.bounds[0] }

    #[inline] pub fn north_east(&self) -> LatLon { self.bounds[1] }

    /// Smallest viewport covering both.
    pub fn union(&self, other: &Viewport) -> Self {
        let (sw, other_sw) = (self.south_west(), other.south_west());
        let (ne, other_ne) = (self.north_east(), other.north_east());
        Self::from_rect(Rect::new(
            Coord { x: sw.lon.min(other_sw.lon), y: sw.lat.min(other_sw.lat) },
            Coord { x: ne.lon.max(other_ne.lon), y: ne.lat.max(other_ne.lat) },
        ))
    }
}

/// Compute the lon/lat rectangle covering every LineString and MultiLineString
/// position in `features`. Other geometry types contribute nothing.
///
/// Returns `None` when no position was found.
pub fn bounding_rect<'a>(features: impl IntoIterator<Item = &'a Feature>) -> Option<Rect<f64>> {
    features.into_iter()
        .filter_map(|feature| feature.geometry.as_ref())
        .filter_map(line_positions)
        .flatten()
        .map(|coord| Rect::new(coord, coord))
        .reduce(|a, b| Rect::new(
            Coord {
                x: a.min().x.min(b.min().x),
                y: a.min().y.min(b.min().y),
            },
            Coord {
                x: a.max().x.max(b.max().x),
                y: a.max().y.max(b.max().y),
            },
        ))
}

/// Compute the center and bounds used to frame the map.
///
/// Fails with [`RiskMapError::EmptyGeometry`] when no feature contributes a
/// coordinate (empty input, or only unsupported geometries).
pub fn compute_bounds<'a>(features: impl IntoIterator<Item = &'a Feature>) -> Result<Viewport> {
    let features: Vec<&Feature> = features.into_iter().collect();

    let skipped = features.iter()
        .filter(|feature| feature.geometry.as_ref().and_then(LineKind::of).is_none())
        .count();
    if skipped > 0 {
        tracing::warn!(skipped, total = features.len(), "[bounds] ignoring features without line geometry");
    }

    match bounding_rect(features.iter().copied()) {
        Some(rect) => {
            let viewport = Viewport::from_rect(rect);
            tracing::debug!(features = features.len(), ?viewport, "[bounds] computed viewport");
            Ok(viewport)
        }
        None => Err(RiskMapError::EmptyGeometry { features: features.len() }),
    }
}
