//! Shared configuration library for folio.
//!
//! This crate centralizes the tunables of the portfolio UI behaviour crates:
//! carousel timing and gesture thresholds, and overlay placement spacing.
//! Defaults live in [`constants`], the serde models in [`models`], and the
//! env/file loader in [`loader`]. Guard rails reject values that would make
//! the carousel scheduler spin or never fire.

pub mod constants;
pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, ConfigSource, error::ConfigLoadError};
pub use models::{CarouselConfig, FolioConfig, TooltipConfig};
pub use validation::ConfigGuardRailError;
