use serde_json::Value;

use crate::{
    feature::Feature,
    map::{Highlight, Style},
    risk::{palette_color, ModeFields, DEFAULT_CATEGORY, FALLBACK_COLOR},
};

pub const STROKE_WEIGHT: u32 = 3;
pub const STROKE_OPACITY: f64 = 0.9;
pub const HIGHLIGHT_WEIGHT: u32 = 5;
pub const HIGHLIGHT_OPACITY: f64 = 1.0;

/// Stroke color for a bucket property.
///
/// An absent property is treated as the default category. Anything that is not
/// a known label (unknown strings, `null`, numbers) gets the fallback color.
pub fn bucket_color(bucket: Option<&Value>) -> &'static str {
    let label = match bucket {
        None => DEFAULT_CATEGORY.label(),
        Some(Value::String(label)) => label.as_str(),
        Some(_) => return FALLBACK_COLOR,
    };
    palette_color(label).unwrap_or(FALLBACK_COLOR)
}

/// Stroke style for a feature under the given model's field set.
pub fn style(feature: &Feature, fields: &ModeFields) -> Style {
    Style {
        color: bucket_color(feature.property(fields.bucket)),
        weight: STROKE_WEIGHT,
        opacity: STROKE_OPACITY,
    }
}

/// Hover emphasis. Independent of the feature.
#[inline]
pub fn highlight() -> Highlight {
    Highlight { weight: HIGHLIGHT_WEIGHT, opacity: HIGHLIGHT_OPACITY }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map};

    use super::*;
    use crate::risk::{Mode, RiskCategory};

    fn with_bucket(field: &str, bucket: Value) -> Feature {
        let mut props = Map::new();
        props.insert(field.to_string(), bucket);
        Feature::new(json!({ "type": "LineString", "coordinates": [] }), props)
    }

    #[test]
    fn each_category_gets_its_color() {
        let fields = Mode::Poisson.fields();
        for category in RiskCategory::ALL {
            let feature = with_bucket(fields.bucket, json!(category.label()));
            assert_eq!(style(&feature, fields).color, category.color());
        }
    }

    #[test]
    fn missing_bucket_is_moderate() {
        let feature = Feature::new(json!(null), Map::new());
        assert_eq!(style(&feature, Mode::Gbt.fields()).color, "#ffff99");
    }

    #[test]
    fn unknown_bucket_is_fallback() {
        let fields = Mode::Gbt.fields();
        assert_eq!(style(&with_bucket(fields.bucket, json!("Catastrophic")), fields).color, "#3186cc");
        assert_eq!(style(&with_bucket(fields.bucket, Value::Null), fields).color, "#3186cc");
        assert_eq!(style(&with_bucket(fields.bucket, json!(3)), fields).color, "#3186cc");
    }

    #[test]
    fn reads_bucket_of_selected_mode_only() {
        let feature = with_bucket("risk_bucket", json!("Very High"));
        assert_eq!(style(&feature, Mode::Poisson.fields()).color, "#d7191c");
        assert_eq!(style(&feature, Mode::Gbt.fields()).color, "#ffff99");
    }

    #[test]
    fn fixed_stroke_and_highlight() {
        let s = style(&Feature::new(json!(null), Map::new()), Mode::Gbt.fields());
        assert_eq!((s.weight, s.opacity), (3, 0.9));
        assert_eq!(highlight(), Highlight { weight: 5, opacity: 1.0 });
    }
}
