use std::path::PathBuf;

/// Errors raised by the library surface. Commands wrap these in `anyhow`.
#[derive(Debug, thiserror::Error)]
pub enum RiskMapError {
    #[error("[io] {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[io::geojson] invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("[io::geojson] top-level object is not a FeatureCollection ({0})")]
    NotFeatureCollection(String),

    #[error("[bounds] no LineString or MultiLineString coordinates found in {features} feature(s)")]
    EmptyGeometry { features: usize },

    #[error("Refusing to overwrite existing file: {0} (use --force)")]
    OutputExists(PathBuf),

    #[error("stdout is not supported for {0} output; provide a real file path.")]
    StdoutUnsupported(&'static str),
}

pub type Result<T> = std::result::Result<T, RiskMapError>;

impl RiskMapError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
