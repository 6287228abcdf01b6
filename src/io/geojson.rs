use std::{fs::File, io::{BufReader, Read, Write}, path::Path};

use serde_json::Value;
use tracing::debug;

use crate::{error::{Result, RiskMapError}, feature::FeatureCollection};

/// Interpret a parsed JSON document as a FeatureCollection.
/// Fails unless the top-level object has `"type": "FeatureCollection"` and a `features` array.
pub fn from_value(value: Value) -> Result<FeatureCollection> {
    match value.get("type").and_then(Value::as_str) {
        Some("FeatureCollection") => {}
        Some(other) => return Err(RiskMapError::NotFeatureCollection(format!("type is {other:?}"))),
        None => return Err(RiskMapError::NotFeatureCollection("missing \"type\"".to_string())),
    }
    if !value.get("features").is_some_and(Value::is_array) {
        return Err(RiskMapError::NotFeatureCollection("\"features\" is not an array".to_string()));
    }
    Ok(serde_json::from_value(value)?)
}

/// Read a FeatureCollection from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<FeatureCollection> {
    let value: Value = serde_json::from_reader(reader)?;
    from_value(value)
}

/// Read a FeatureCollection from a GeoJSON file.
pub fn read_feature_collection(path: &Path) -> Result<FeatureCollection> {
    let file = File::open(path).map_err(|e| RiskMapError::io(path, e))?;
    let collection = from_reader(BufReader::new(file))?;
    debug!(path = %path.display(), features = collection.len(), "[io::geojson] loaded");
    Ok(collection)
}

/// Write a FeatureCollection as compact GeoJSON.
pub fn write_feature_collection<W: Write>(writer: &mut W, collection: &FeatureCollection) -> std::io::Result<()> {
    serde_json::to_writer(&mut *writer, collection)?;
    writeln!(writer)
}
