mod bounds;
mod line;

pub use bounds::{compute_bounds, LatLon, Viewport};
pub use line::{line_positions, LineKind};
