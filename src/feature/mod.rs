mod feature;
mod property;

pub use feature::{Feature, FeatureCollection};
pub use property::{display_json, PropertyValue};
