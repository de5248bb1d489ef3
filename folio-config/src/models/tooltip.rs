use serde::{Deserialize, Serialize};

use crate::constants::tooltip as defaults;
use crate::validation::ConfigGuardRailError;

/// Spacing used when placing a tooltip next to its trigger.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Distance between the trigger edge and the tooltip.
    pub gap: f32,
    /// Minimum distance kept between the tooltip and the viewport edges.
    pub viewport_margin: f32,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            gap: defaults::GAP,
            viewport_margin: defaults::VIEWPORT_MARGIN,
        }
    }
}

impl TooltipConfig {
    pub fn validate(&self) -> Result<(), ConfigGuardRailError> {
        for (field, value) in [
            ("tooltip.gap", self.gap),
            ("tooltip.viewport_margin", self.viewport_margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigGuardRailError::InvalidSpacing {
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}
