//! Behaviour controllers for the folio portfolio site.
//!
//! Nothing here renders. The [`carousel`] navigator decides which project
//! card is centered and when it advances; [`tooltip`] decides where an
//! overlay opens. [`runtime`] hosts a navigator on tokio so its timers run
//! against a real clock, and [`sim`] parses the line protocol of the
//! `folio-sim` harness.

pub mod carousel;
pub mod runtime;
pub mod sim;
pub mod tooltip;
