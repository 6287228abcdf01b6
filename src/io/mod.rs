//! IO module for reading prediction files and writing rendered maps.
//!
//! # Modules
//!
//! - `geojson` - FeatureCollection loading and GeoJSON output
//! - `cache` - read-through cache of loaded collections
//! - `html` - standalone Leaflet page export
//! - `write` - atomic (write-then-rename) file output

mod cache;
mod geojson;
mod write;

pub mod html;

pub use cache::CollectionCache;
pub use geojson::{from_reader, from_value, read_feature_collection, write_feature_collection};
pub use write::{assert_not_stdout, is_stdout, open_for_write, PendingWrite};
