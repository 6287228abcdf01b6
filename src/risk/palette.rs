//! Risk category palette used for stroke colors and the legend.

use std::fmt;

use serde::Serialize;

/// The six ordered risk buckets produced by both models.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum RiskCategory {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Moderate,
    #[serde(rename = "Moderately High")]
    ModeratelyHigh,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

/// Category assumed when a feature has no bucket property.
pub const DEFAULT_CATEGORY: RiskCategory = RiskCategory::Moderate;

/// Stroke color for a bucket label the palette does not know.
pub const FALLBACK_COLOR: &str = "#3186cc";

/// (category, label, color), lowest risk first.
const PALETTE: [(RiskCategory, &str, &str); 6] = [
    (RiskCategory::VeryLow,        "Very Low",        "#7fc97f"),
    (RiskCategory::Low,            "Low",             "#beed90"),
    (RiskCategory::Moderate,       "Moderate",        "#ffff99"),
    (RiskCategory::ModeratelyHigh, "Moderately High", "#fdc86e"),
    (RiskCategory::High,           "High",            "#fdae61"),
    (RiskCategory::VeryHigh,       "Very High",       "#d7191c"),
];

impl RiskCategory {
    pub const ALL: [RiskCategory; 6] = [
        Self::VeryLow, Self::Low, Self::Moderate, Self::ModeratelyHigh, Self::High, Self::VeryHigh,
    ];

    #[inline] fn entry(self) -> &'static (RiskCategory, &'static str, &'static str) { &PALETTE[self as usize] }

    /// Label as written in the prediction files, e.g. "Moderately High".
    #[inline] pub fn label(self) -> &'static str { self.entry().1 }

    /// Hex stroke color.
    #[inline] pub fn color(self) -> &'static str { self.entry().2 }

    /// Exact (case-sensitive) label lookup.
    pub fn from_label(label: &str) -> Option<Self> {
        PALETTE.iter().find(|(_, name, _)| *name == label).map(|&(category, _, _)| category)
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}

/// Color for a bucket label, or `None` if the label is not one of the six categories.
#[inline]
pub fn palette_color(label: &str) -> Option<&'static str> {
    RiskCategory::from_label(label).map(RiskCategory::color)
}
