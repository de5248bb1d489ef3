//! Built-in defaults.

/// Carousel timing and gesture defaults.
pub mod carousel {
    /// Period of the auto-advance timer (ms).
    pub const AUTO_SCROLL_INTERVAL_MS: u64 = 4_000;
    /// How long auto-advance stays suppressed after an interaction (ms).
    pub const INTERACTION_PAUSE_MS: u64 = 5_000;
    /// Minimum horizontal drag displacement that counts as a navigation.
    pub const DRAG_THRESHOLD: f32 = 50.0;
    /// Minimum wheel delta that the carousel consumes.
    pub const WHEEL_THRESHOLD: f32 = 20.0;
    /// Same-direction wheel events inside this window are ignored (ms).
    pub const WHEEL_DEBOUNCE_MS: u64 = 400;
    /// Slide transition length handed to the rendering layer (ms).
    pub const TRANSITION_MS: u64 = 500;
}

/// Overlay placement defaults (logical pixels).
pub mod tooltip {
    pub const GAP: f32 = 8.0;
    pub const VIEWPORT_MARGIN: f32 = 8.0;
}

/// Environment variables consulted by [`crate::ConfigLoader`].
pub mod env {
    pub const CONFIG_PATH: &str = "FOLIO_CONFIG_PATH";
    pub const CONFIG_JSON: &str = "FOLIO_CONFIG_JSON";
}

/// Files probed (relative to the working directory) when no env override is set.
pub const DEFAULT_FILE_CANDIDATES: &[&str] = &[
    "folio.toml",
    "folio.json",
    "config/folio.toml",
    "config/folio.json",
];
