#![doc = "Pipe failure risk maps: bounds, styling, tooltips and Leaflet export"]
pub mod cli;
pub mod commands;
pub mod config;
mod error;
mod feature;
mod geom;
pub mod io;
mod map;
mod risk;

#[doc(inline)]
pub use error::{Result, RiskMapError};

#[doc(inline)]
pub use feature::{Feature, FeatureCollection, PropertyValue};

#[doc(inline)]
pub use geom::{compute_bounds, line_positions, LatLon, Viewport};

#[doc(inline)]
pub use map::{
    attach_tooltip, build_comparison_map, build_layer, build_map, highlight, style, tooltip_lines,
    tooltip_text, with_tooltips, GeoJsonLayer, Highlight, Legend, MapArtifact, MapOptions, Style,
    StyledFeature, TileProvider, BASE_ATTRIBUTES, TOOLTIP_KEY,
};

#[doc(inline)]
pub use risk::{palette_color, Mode, ModeFields, RiskCategory, DEFAULT_CATEGORY, FALLBACK_COLOR};
