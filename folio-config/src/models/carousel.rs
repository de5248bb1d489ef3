use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::carousel as defaults;
use crate::validation::ConfigGuardRailError;

/// Timing and gesture tuning for the carousel navigator.
///
/// Durations are stored in milliseconds so the TOML/JSON documents stay
/// readable; use the accessor methods to get [`Duration`]s.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Period of the auto-advance timer. Every tick moves one item forward
    /// while the carousel is neither paused nor in reduced-motion mode.
    pub auto_scroll_interval_ms: u64,
    /// How long auto-advance stays suppressed after a manual navigation, a
    /// drag start, or the pointer leaving the carousel. Each interaction
    /// restarts the countdown from scratch.
    pub interaction_pause_ms: u64,
    /// Absolute drag displacement that must be exceeded for a drag to count
    /// as a navigation. Smaller drags are treated as cancelled.
    pub drag_threshold: f32,
    /// Absolute wheel delta that must be exceeded before the carousel
    /// consumes a wheel event.
    pub wheel_threshold: f32,
    /// Same-direction wheel events arriving within this window of the last
    /// processed one are swallowed. Direction reversals bypass it.
    pub wheel_debounce_ms: u64,
    /// Slide transition length exposed to the rendering layer. Collapses to
    /// zero when the user prefers reduced motion.
    pub transition_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_scroll_interval_ms: defaults::AUTO_SCROLL_INTERVAL_MS,
            interaction_pause_ms: defaults::INTERACTION_PAUSE_MS,
            drag_threshold: defaults::DRAG_THRESHOLD,
            wheel_threshold: defaults::WHEEL_THRESHOLD,
            wheel_debounce_ms: defaults::WHEEL_DEBOUNCE_MS,
            transition_ms: defaults::TRANSITION_MS,
        }
    }
}

impl CarouselConfig {
    pub fn auto_scroll_interval(&self) -> Duration {
        Duration::from_millis(self.auto_scroll_interval_ms)
    }

    pub fn interaction_pause(&self) -> Duration {
        Duration::from_millis(self.interaction_pause_ms)
    }

    pub fn wheel_debounce(&self) -> Duration {
        Duration::from_millis(self.wheel_debounce_ms)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Reject values that would make the scheduler spin (zero periods) or
    /// make gesture thresholds meaningless.
    pub fn validate(&self) -> Result<(), ConfigGuardRailError> {
        if self.auto_scroll_interval_ms == 0 {
            return Err(ConfigGuardRailError::ZeroDuration {
                field: "carousel.auto_scroll_interval_ms",
            });
        }
        if self.interaction_pause_ms == 0 {
            return Err(ConfigGuardRailError::ZeroDuration {
                field: "carousel.interaction_pause_ms",
            });
        }
        check_threshold("carousel.drag_threshold", self.drag_threshold)?;
        check_threshold("carousel.wheel_threshold", self.wheel_threshold)?;

        if self.interaction_pause_ms < self.auto_scroll_interval_ms {
            log::warn!(
                "carousel interaction pause ({}ms) is shorter than the auto-scroll interval ({}ms)",
                self.interaction_pause_ms,
                self.auto_scroll_interval_ms
            );
        }
        Ok(())
    }
}

fn check_threshold(
    field: &'static str,
    value: f32,
) -> Result<(), ConfigGuardRailError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigGuardRailError::InvalidThreshold { field, value })
    }
}
