//! Runtime configuration.
//!
//! Uses `figment` for layered configuration: defaults -> config file -> environment -> CLI args.
//! The config file is `pipe-risk.toml` in the working directory unless `--config` names another.
//! The mode table and risk palette are fixed and cannot be configured.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::{map::{MapOptions, TileProvider}, risk::Mode};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "pipe-risk.toml";

/// Prefix for environment overrides, e.g. `PIPE_RISK_ZOOM_START=12`.
pub const ENV_PREFIX: &str = "PIPE_RISK_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the bundled prediction files.
    pub data_dir: PathBuf,
    /// Poisson predictions, relative to `data_dir`.
    pub poisson_file: PathBuf,
    /// GBT predictions, relative to `data_dir`.
    pub gbt_file: PathBuf,
    /// Model shown when `--mode` is not given.
    pub default_mode: Mode,
    pub title: String,
    pub tiles: TileProvider,
    pub zoom_start: u8,
    pub fit_padding: [u32; 2],
    pub height: u32,
    pub tooltip_sticky: bool,
    pub layer_control_collapsed: bool,
}

impl Default for Config {
    fn default() -> Self {
        let map = MapOptions::default();
        Self {
            data_dir: PathBuf::from("data"),
            poisson_file: PathBuf::from("poisson_pred_pipa.geojson"),
            gbt_file: PathBuf::from("gbt_pred_pipa.geojson"),
            default_mode: Mode::default(),
            title: map.title,
            tiles: map.tiles,
            zoom_start: map.zoom_start,
            fit_padding: map.fit_padding,
            height: map.height,
            tooltip_sticky: map.tooltip_sticky,
            layer_control_collapsed: map.layer_control_collapsed,
        }
    }
}

impl Config {
    /// Bundled prediction file for a model.
    pub fn input_for(&self, mode: Mode) -> PathBuf {
        match mode {
            Mode::Poisson => self.data_dir.join(&self.poisson_file),
            Mode::Gbt => self.data_dir.join(&self.gbt_file),
        }
    }

    pub fn map_options(&self) -> MapOptions {
        MapOptions {
            title: self.title.clone(),
            tiles: self.tiles,
            zoom_start: self.zoom_start,
            fit_padding: self.fit_padding,
            height: self.height,
            tooltip_sticky: self.tooltip_sticky,
            layer_control_collapsed: self.layer_control_collapsed,
        }
    }
}

/// Values given on the command line. Unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiles: Option<TileProvider>,
}

/// Build the layered figment without extracting it.
///
/// Priority (highest to lowest):
/// 1. Explicit overrides
/// 2. Environment variables (prefixed with `PIPE_RISK_`)
/// 3. Config file (`config_file`, or `pipe-risk.toml` in the working directory)
/// 4. Built-in defaults
pub fn figment(config_file: Option<&Path>, overrides: &ConfigOverrides) -> Figment {
    let file = config_file.unwrap_or(Path::new(CONFIG_FILE));

    Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(file))
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(overrides))
}

/// Load configuration from every layer.
pub fn load_config(config_file: Option<&Path>, overrides: &ConfigOverrides) -> Result<Config, Box<figment::Error>> {
    figment(config_file, overrides).extract().map_err(Box::new)
}
