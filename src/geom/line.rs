use geo::Coord;
use serde_json::Value;

/// Linear geometry kinds that contribute to map bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LineKind { LineString, MultiLineString }

impl LineKind {
    /// Classify a GeoJSON geometry object by its `type` member.
    pub fn of(geometry: &Value) -> Option<Self> {
        match geometry.get("type")?.as_str()? {
            "LineString" => Some(Self::LineString),
            "MultiLineString" => Some(Self::MultiLineString),
            _ => None,
        }
    }
}

/// Positions of a LineString or MultiLineString geometry, in input order, as (x = lon, y = lat).
/// Returns `None` for any other geometry type.
///
/// A missing or non-array `coordinates` member yields no positions. Positions with
/// fewer than two numbers are dropped; extra ordinates (altitude) are ignored.
pub fn line_positions(geometry: &Value) -> Option<Vec<Coord<f64>>> {
    let kind = LineKind::of(geometry)?;
    let Some(coords) = geometry.get("coordinates").and_then(Value::as_array) else {
        return Some(Vec::new());
    };

    let positions = match kind {
        LineKind::LineString => coords.iter().filter_map(position).collect(),
        LineKind::MultiLineString => coords.iter()
            .filter_map(Value::as_array)
            .flat_map(|line| line.iter().filter_map(position))
            .collect(),
    };
    Some(positions)
}

/// Parse a `[lon, lat, ...]` position.
fn position(value: &Value) -> Option<Coord<f64>> {
    match value.as_array()?.as_slice() {
        [lon, lat, ..] => Some(Coord { x: lon.as_f64()?, y: lat.as_f64()? }),
        _ => None,
    }
}
