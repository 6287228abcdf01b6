mod mode;
mod palette;

pub use mode::{Mode, ModeFields};
pub use palette::{palette_color, RiskCategory, DEFAULT_CATEGORY, FALLBACK_COLOR};
