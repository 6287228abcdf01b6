use std::{borrow::Cow, fmt};

use serde_json::Value;

/// Decimal places used when displaying numeric estimates.
pub const DISPLAY_DECIMALS: usize = 4;

/// Marker shown for a missing (absent or `null`) value.
pub const MISSING_MARKER: &str = "None";

/// Typed view of a property that is displayed as a number when it can be one.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue<'a> {
    /// A JSON number or boolean, or a string that parses as a number.
    Parsed(f64),
    /// Anything that does not parse as a number, kept verbatim.
    Raw(Cow<'a, str>),
    /// Absent key or JSON `null`.
    Missing,
}

impl<'a> PropertyValue<'a> {
    pub fn from_json(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Missing,
            Some(Value::Number(n)) => match n.as_f64() {
                Some(x) => Self::Parsed(x),
                None => Self::Raw(Cow::Owned(n.to_string())),
            },
            Some(Value::Bool(b)) => Self::Parsed(if *b { 1.0 } else { 0.0 }),
            Some(Value::String(s)) => match s.trim().parse::<f64>() {
                Ok(x) => Self::Parsed(x),
                Err(_) => Self::Raw(Cow::Borrowed(s.as_str())),
            },
            Some(other) => Self::Raw(Cow::Owned(other.to_string())),
        }
    }

    #[inline] pub fn is_missing(&self) -> bool { matches!(self, Self::Missing) }
}

impl fmt::Display for PropertyValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parsed(x) => f.write_str(&format_decimal(round_to(*x, DISPLAY_DECIMALS))),
            Self::Raw(s) => f.write_str(s),
            Self::Missing => f.write_str(MISSING_MARKER),
        }
    }
}

/// Round to `places` decimals. Rounding is done on the exact binary value with
/// ties to even, so `0.03125` becomes `0.0312`.
pub fn round_to(x: f64, places: usize) -> f64 {
    if !x.is_finite() { return x }
    format!("{x:.places$}").parse().unwrap_or(x)
}

/// Shortest decimal representation, keeping a trailing `.0` on integral values.
/// Magnitudes below `1e-4` or from `1e16` up use exponent form (`1e+16`, `1.5e-05`).
pub fn format_decimal(x: f64) -> String {
    if x.is_nan() { return "nan".to_string() }
    if x.is_infinite() { return if x > 0.0 { "inf" } else { "-inf" }.to_string() }

    let magnitude = x.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return format_exponent(x);
    }
    let s = x.to_string();
    if s.contains('.') { s } else { format!("{s}.0") }
}

fn format_exponent(x: f64) -> String {
    let s = format!("{x:e}");
    let (mantissa, exponent) = s.split_once('e').unwrap_or((s.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

/// Display text for an arbitrary property value: strings unquoted, `null` as the
/// missing marker, booleans as `True`/`False`, floats via [`format_decimal`].
pub fn display_json(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed(MISSING_MARKER),
        Value::Bool(true) => Cow::Borrowed("True"),
        Value::Bool(false) => Cow::Borrowed("False"),
        Value::Number(n) if n.is_f64() => Cow::Owned(format_decimal(n.as_f64().unwrap_or(f64::NAN))),
        other => Cow::Owned(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn numbers_and_numeric_strings_parse() {
        assert_eq!(PropertyValue::from_json(Some(&json!(0.5))), PropertyValue::Parsed(0.5));
        assert_eq!(PropertyValue::from_json(Some(&json!(" 2.25 "))), PropertyValue::Parsed(2.25));
        assert_eq!(PropertyValue::from_json(Some(&json!(3))), PropertyValue::Parsed(3.0));
    }

    #[test]
    fn non_numeric_values_stay_raw() {
        let na = json!("N/A");
        assert_eq!(PropertyValue::from_json(Some(&na)), PropertyValue::Raw(Cow::Borrowed("N/A")));
    }

    #[test]
    fn absent_and_null_are_missing() {
        assert!(PropertyValue::from_json(None).is_missing());
        assert!(PropertyValue::from_json(Some(&Value::Null)).is_missing());
        assert_eq!(PropertyValue::Missing.to_string(), "None");
    }

    #[test]
    fn display_rounds_to_four_places() {
        assert_eq!(PropertyValue::Parsed(0.123456789).to_string(), "0.1235");
        assert_eq!(PropertyValue::Parsed(-0.00004).to_string(), "-0.0");
        assert_eq!(PropertyValue::Parsed(2.0).to_string(), "2.0");
        assert_eq!(PropertyValue::Parsed(12.5).to_string(), "12.5");
    }

    #[test]
    fn ties_round_to_even_on_the_exact_value() {
        assert_eq!(PropertyValue::Parsed(0.03125).to_string(), "0.0312");
        assert_eq!(PropertyValue::Parsed(0.40625).to_string(), "0.4062");
        assert_eq!(round_to(2.5, 0), 2.0);
    }

    #[test]
    fn booleans_display_as_numbers() {
        assert_eq!(PropertyValue::from_json(Some(&json!(true))), PropertyValue::Parsed(1.0));
        assert_eq!(PropertyValue::from_json(Some(&json!(false))).to_string(), "0.0");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(format_decimal(1e16), "1e+16");
        assert_eq!(format_decimal(-2.5e20), "-2.5e+20");
        assert_eq!(format_decimal(1.5e-5), "1.5e-05");
        assert_eq!(format_decimal(9999999999999998.0), "9999999999999998.0");
        assert_eq!(format_decimal(0.0001), "0.0001");
        assert_eq!(PropertyValue::Parsed(1e16).to_string(), "1e+16");
    }

    #[test]
    fn non_finite_values_format() {
        assert_eq!(format_decimal(f64::NAN), "nan");
        assert_eq!(format_decimal(f64::INFINITY), "inf");
        assert_eq!(round_to(f64::NEG_INFINITY, 4), f64::NEG_INFINITY);
    }

    #[test]
    fn display_json_unquotes_strings() {
        assert_eq!(display_json(&json!("PVC")), "PVC");
        assert_eq!(display_json(&json!(150)), "150");
        assert_eq!(display_json(&json!(150.0)), "150.0");
        assert_eq!(display_json(&Value::Null), "None");
    }

    #[test]
    fn display_json_booleans_and_large_floats() {
        assert_eq!(display_json(&json!(true)), "True");
        assert_eq!(display_json(&json!(false)), "False");
        assert_eq!(display_json(&json!(1e16)), "1e+16");
    }
}
