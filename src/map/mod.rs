mod artifact;
mod builder;
mod style;
mod tooltip;

pub use artifact::{
    GeoJsonLayer, Highlight, Legend, MapArtifact, MapOptions, Style, StyledFeature, TileProvider,
    TooltipBinding,
};
pub use builder::{build_comparison_map, build_layer, build_map};
pub use style::{highlight, style};
pub use tooltip::{
    attach_tooltip, escape_html, tooltip_lines, tooltip_text, with_tooltips, BASE_ATTRIBUTES,
    TOOLTIP_KEY,
};
