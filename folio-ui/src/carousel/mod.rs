//! Carousel navigation
//!
//! Owns the centered index of a fixed ring of items and arbitrates between
//! the auto-advance timer, drag, keyboard, wheel and direct selection. The
//! rendering layer reads a [`CarouselSnapshot`]; it never mutates state.
//!
//! - `navigator`: the state machine and its timers
//! - `gesture`: drag threshold and wheel debouncing
//! - `window`: wrap-around math and the five-slot visible window
//! - `autoplay`: `Running`/`Suspended` auto-advance and the interaction pause

pub mod autoplay;
pub mod gesture;
pub mod messages;
pub mod navigator;
pub mod types;
pub mod window;

pub use autoplay::{Autoplay, PauseState, SuspendReason};
pub use messages::{CarouselInput, CarouselSnapshot, InputOutcome, WheelOutcome};
pub use navigator::CarouselNavigator;
pub use types::*;
pub use window::{VisibleWindow, shortest_delta, wrap_index};
