use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::feature::PropertyValue;

fn feature_type() -> String { "Feature".to_string() }

fn collection_type() -> String { "FeatureCollection".to_string() }

/// A single GeoJSON feature (one pipe segment).
///
/// Geometry is kept as raw JSON so that non-linear geometries survive a
/// load/render round trip untouched; only the bounds pass interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_type")]
    kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(default)]
    pub geometry: Option<Value>,

    #[serde(default)]
    pub properties: Option<Map<String, Value>>,

    /// Any other members present on the input feature.
    #[serde(flatten)]
    pub foreign_members: Map<String, Value>,
}

impl Feature {
    /// Construct a feature from a geometry and its properties.
    pub fn new(geometry: Value, properties: Map<String, Value>) -> Self {
        Self {
            kind: feature_type(),
            id: None,
            geometry: Some(geometry),
            properties: Some(properties),
            foreign_members: Map::new(),
        }
    }

    /// Look up a raw property value. A key holding JSON `null` is present.
    #[inline]
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref()?.get(key)
    }

    /// Check whether a property key is present (even if its value is `null`).
    #[inline]
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.as_ref().is_some_and(|props| props.contains_key(key))
    }

    /// Typed view of a property for numeric display.
    #[inline]
    pub fn value(&self, key: &str) -> PropertyValue<'_> {
        PropertyValue::from_json(self.property(key))
    }

    /// Mutable properties, creating an empty map if the feature has none.
    pub fn properties_mut(&mut self) -> &mut Map<String, Value> {
        self.properties.get_or_insert_with(Map::new)
    }
}

/// An ordered collection of features, as loaded from a GeoJSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "collection_type")]
    kind: String,

    pub features: Vec<Feature>,

    #[serde(flatten)]
    pub foreign_members: Map<String, Value>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { kind: collection_type(), features, foreign_members: Map::new() }
    }

    #[inline] pub fn len(&self) -> usize { self.features.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.features.is_empty() }

    #[inline] pub fn iter(&self) -> std::slice::Iter<'_, Feature> { self.features.iter() }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter { self.features.iter() }
}
