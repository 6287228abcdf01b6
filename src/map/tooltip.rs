use std::borrow::Cow;

use serde_json::Value;

use crate::{
    feature::{display_json, Feature, FeatureCollection},
    risk::ModeFields,
};

/// Property that receives the rendered hover text.
pub const TOOLTIP_KEY: &str = "_tooltip";

/// Separator between tooltip lines.
pub const LINE_BREAK: &str = "<br>";

/// Segment attributes shown first, in this order, when present.
pub const BASE_ATTRIBUTES: [&str; 5] = ["id_segmen", "Jenis_pipa", "Diameter", "Length", "DMA_norm"];

pub const RATE_LABEL: &str = "λ̂";
pub const PROBABILITY_LABEL: &str = "P(≥1)";
pub const RISK_LABEL: &str = "Risk";

/// Placeholder for a feature without a bucket property.
const NO_BUCKET: &str = "-";

/// Escape text for inclusion in HTML content.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) { return Cow::Borrowed(text) }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// The tooltip lines for a feature, unescaped, in display order.
pub fn tooltip_lines(feature: &Feature, fields: &ModeFields) -> Vec<String> {
    let mut lines: Vec<String> = BASE_ATTRIBUTES.iter()
        .filter_map(|&name| feature.property(name).map(|value| format!("{name}: {}", display_json(value))))
        .collect();

    lines.push(format!("{RATE_LABEL}: {}", feature.value(fields.rate)));
    lines.push(format!("{PROBABILITY_LABEL}: {}", feature.value(fields.probability)));

    let risk = feature.property(fields.bucket).map_or(Cow::Borrowed(NO_BUCKET), display_json);
    lines.push(format!("{RISK_LABEL}: {risk}"));

    lines
}

/// Hover text for a feature: escaped lines joined with `<br>`.
pub fn tooltip_text(feature: &Feature, fields: &ModeFields) -> String {
    tooltip_lines(feature, fields).iter()
        .map(|line| escape_html(line))
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

/// Write (or overwrite) the tooltip property of a feature.
pub fn attach_tooltip(feature: &mut Feature, fields: &ModeFields) {
    let text = tooltip_text(feature, fields);
    feature.properties_mut().insert(TOOLTIP_KEY.to_string(), Value::String(text));
}

/// Copy of `features` with a tooltip attached to every feature. The input is not modified.
pub fn with_tooltips(features: &FeatureCollection, fields: &ModeFields) -> FeatureCollection {
    let mut augmented = features.clone();
    for feature in &mut augmented.features {
        attach_tooltip(feature, fields);
    }
    augmented
}
