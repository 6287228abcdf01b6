use std::fmt;

use serde::{Deserialize, Serialize};

/// Property names read for one model, plus the name of its map layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ModeFields {
    /// Risk bucket label, e.g. "High".
    pub bucket: &'static str,
    /// Probability of at least one failure, P(≥1).
    pub probability: &'static str,
    /// Expected failure rate, λ̂.
    pub rate: &'static str,
    pub layer_name: &'static str,
}

/// Which model's predictions to display.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[serde(alias = "Poisson Regression")]
    Poisson,
    #[default]
    #[serde(alias = "Gradient Boosted Trees (GBT)")]
    Gbt,
}

static MODE_TABLE: [(Mode, &str, ModeFields); 2] = [
    (Mode::Poisson, "Poisson Regression", ModeFields {
        bucket: "risk_bucket",
        probability: "p_ge1",
        rate: "lambda_hat",
        layer_name: "Risk (Poisson)",
    }),
    (Mode::Gbt, "Gradient Boosted Trees (GBT)", ModeFields {
        bucket: "risk_bucket_gbt",
        probability: "p_ge1_gbt",
        rate: "lambda_hat_gbt",
        layer_name: "Risk (GBT)",
    }),
];

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Poisson, Mode::Gbt];

    #[inline] fn row(self) -> &'static (Mode, &'static str, ModeFields) { &MODE_TABLE[self as usize] }

    /// Display label, e.g. "Poisson Regression".
    #[inline] pub fn label(self) -> &'static str { self.row().1 }

    /// Property names and layer name for this model.
    #[inline] pub fn fields(self) -> &'static ModeFields { &self.row().2 }

    /// Resolve a display label. Anything other than the Poisson label selects GBT.
    pub fn from_label(label: &str) -> Self {
        MODE_TABLE.iter()
            .find(|(_, name, _)| *name == label)
            .map_or(Mode::Gbt, |&(mode, _, _)| mode)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}
