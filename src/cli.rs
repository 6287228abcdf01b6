use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

use crate::{config::ConfigOverrides, map::TileProvider, risk::Mode};

/// Pipe failure risk map renderer
#[derive(Parser, Debug)]
#[command(name = "pipe-risk-map", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file (default: ./pipe-risk.toml)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Directory holding the bundled prediction files
    #[arg(long, global = true, value_hint = ValueHint::DirPath)]
    pub data_dir: Option<PathBuf>,

    /// Page title
    #[arg(long, global = true)]
    pub title: Option<String>,

    /// Base map tiles
    #[arg(long, global = true, value_enum)]
    pub tiles: Option<TileArg>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Config values given on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            data_dir: self.data_dir.clone(),
            title: self.title.clone(),
            tiles: self.tiles.map(TileProvider::from),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one model's predictions as an interactive map
    Render(RenderArgs),

    /// Render both models into one map with a model toggle
    Compare(CompareArgs),

    /// Print the center and bounds of a prediction file as JSON
    Bounds(BoundsArgs),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Standalone Leaflet page
    Html,
    /// Map artifact as JSON
    Json,
    /// Input features with tooltips attached
    Geojson,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum TileArg { Cartodbpositron, Openstreetmap }

impl From<TileArg> for TileProvider {
    fn from(arg: TileArg) -> Self {
        match arg {
            TileArg::Cartodbpositron => TileProvider::CartoDbPositron,
            TileArg::Openstreetmap => TileProvider::OpenStreetMap,
        }
    }
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Model to display (default from config: gbt)
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Prediction file to use instead of the bundled one for this model
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Output file ("-" for stdout, json/geojson only)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Poisson prediction file (default: bundled)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub poisson: Option<PathBuf>,

    /// GBT prediction file (default: bundled)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub gbt: Option<PathBuf>,

    /// Output file ("-" for stdout, json/geojson only)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct BoundsArgs {
    /// Model whose bundled file is read (default from config: gbt)
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Prediction file to use instead of the bundled one
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,
}
