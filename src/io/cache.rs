use std::{collections::HashMap, path::{Path, PathBuf}, sync::Arc};

use tracing::trace;

use crate::{error::Result, feature::FeatureCollection, io::read_feature_collection};

/// Read-through cache of loaded collections, keyed by canonical path.
#[derive(Debug, Default)]
pub struct CollectionCache {
    entries: HashMap<PathBuf, Arc<FeatureCollection>>,
}

impl CollectionCache {
    pub fn new() -> Self { Self::default() }

    /// Load `path`, or return the collection already loaded from it.
    pub fn load(&mut self, path: &Path) -> Result<Arc<FeatureCollection>> {
        let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if let Some(hit) = self.entries.get(&key) {
            trace!(path = %key.display(), "[io::cache] hit");
            return Ok(Arc::clone(hit));
        }

        let collection = Arc::new(read_feature_collection(path)?);
        self.entries.insert(key, Arc::clone(&collection));
        Ok(collection)
    }

    #[inline] pub fn len(&self) -> usize { self.entries.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
