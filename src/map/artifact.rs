use serde::{Deserialize, Serialize};

use crate::{feature::Feature, geom::Viewport, map::TOOLTIP_KEY, risk::RiskCategory};

/// Per-feature stroke style.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Style {
    pub color: &'static str,
    pub weight: u32,
    pub opacity: f64,
}

/// Stroke override applied while the pointer is over a feature.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Highlight {
    pub weight: u32,
    pub opacity: f64,
}

/// A feature paired with its computed style. Serializes as a GeoJSON feature
/// with an extra `style` member.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StyledFeature {
    #[serde(flatten)]
    pub feature: Feature,
    pub style: Style,
}

/// Hover text binding: which property holds the text, and whether it follows the pointer.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct TooltipBinding {
    pub field: &'static str,
    pub sticky: bool,
}

impl TooltipBinding {
    pub fn new(sticky: bool) -> Self { Self { field: TOOLTIP_KEY, sticky } }
}

/// One toggleable layer of styled line features.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeoJsonLayer {
    pub name: String,
    pub features: Vec<StyledFeature>,
    pub highlight: Highlight,
    pub tooltip: TooltipBinding,
}

impl GeoJsonLayer {
    /// Layer data as a GeoJSON FeatureCollection, each feature carrying its `style`.
    pub fn to_geojson(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "FeatureCollection",
            "features": self.features,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
}

/// Static legend overlay listing every risk category.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Legend {
    pub title: &'static str,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    /// The risk legend. Content depends only on the palette.
    pub fn risk() -> Self {
        Self {
            title: "Risk Legend",
            entries: RiskCategory::ALL.iter()
                .map(|category| LegendEntry { label: category.label(), color: category.color() })
                .collect(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct LayerControl {
    pub collapsed: bool,
}

/// Base map tiles.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileProvider {
    #[default]
    CartoDbPositron,
    OpenStreetMap,
}

impl TileProvider {
    pub fn url(self) -> &'static str {
        match self {
            Self::CartoDbPositron => "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
            Self::OpenStreetMap => "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
        }
    }

    pub fn attribution(self) -> &'static str {
        match self {
            Self::CartoDbPositron => "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>",
            Self::OpenStreetMap => "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
        }
    }

    pub fn max_zoom(self) -> u8 {
        match self {
            Self::CartoDbPositron => 20,
            Self::OpenStreetMap => 19,
        }
    }
}

/// Presentation settings that do not depend on the data.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapOptions {
    pub title: String,
    pub tiles: TileProvider,
    pub zoom_start: u8,
    /// Padding in pixels, (x, y), applied when fitting the viewport bounds.
    pub fit_padding: [u32; 2],
    /// Map height in pixels.
    pub height: u32,
    pub tooltip_sticky: bool,
    pub layer_control_collapsed: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            title: "Pipe Failure Risk – Poisson vs GBT".to_string(),
            tiles: TileProvider::default(),
            zoom_start: 13,
            fit_padding: [10, 10],
            height: 700,
            tooltip_sticky: true,
            layer_control_collapsed: true,
        }
    }
}

/// Everything the renderer needs to draw the interactive map.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapArtifact {
    pub title: String,
    pub tiles: TileProvider,
    pub zoom_start: u8,
    pub height: u32,
    pub viewport: Viewport,
    pub fit_padding: [u32; 2],
    pub layers: Vec<GeoJsonLayer>,
    pub legend: Legend,
    pub layer_control: LayerControl,
}

impl MapArtifact {
    pub fn new(options: &MapOptions, viewport: Viewport, layers: Vec<GeoJsonLayer>) -> Self {
        Self {
            title: options.title.clone(),
            tiles: options.tiles,
            zoom_start: options.zoom_start,
            height: options.height,
            viewport,
            fit_padding: options.fit_padding,
            layers,
            legend: Legend::risk(),
            layer_control: LayerControl { collapsed: options.layer_control_collapsed },
        }
    }

    /// Find a layer by name.
    pub fn layer(&self, name: &str) -> Option<&GeoJsonLayer> {
        self.layers.iter().find(|layer| layer.name == name)
    }
}
