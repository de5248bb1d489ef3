mod carousel;
mod tooltip;

pub use carousel::CarouselConfig;
pub use tooltip::TooltipConfig;

use serde::{Deserialize, Serialize};

use crate::validation::ConfigGuardRailError;

/// Top-level configuration document. Every section is optional; missing
/// sections and fields fall back to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FolioConfig {
    pub carousel: CarouselConfig,
    pub tooltip: TooltipConfig,
}

impl FolioConfig {
    /// Run every section's guard rails.
    pub fn validate(&self) -> Result<(), ConfigGuardRailError> {
        self.carousel.validate()?;
        self.tooltip.validate()
    }
}
