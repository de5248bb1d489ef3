//! Host events fed into the carousel, and what came of them.

use std::time::Duration;

use super::types::{Direction, Key, Navigation, Slot, WheelInput};
use super::window::VisibleWindow;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselInput {
    /// Arrow/chevron buttons and other direct step requests.
    Navigate(isize),
    DragStart,
    /// Horizontal displacement at drag end.
    DragEnd(f32),
    Key(Key),
    Wheel(WheelInput),
    /// Pagination dot for an absolute item index.
    Select(usize),
    /// Click on one of the visible preview positions.
    SelectSlot(Slot),
    HoverEnter,
    HoverLeave,
    /// The host's reduced-motion preference changed.
    ReducedMotion(bool),
}

/// Result of handling one [`CarouselInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputOutcome {
    pub navigation: Option<Navigation>,
    /// The carousel consumed the event; the host should cancel its default
    /// action (page scroll for wheel events).
    pub suppress_default: bool,
}

impl InputOutcome {
    pub fn navigated(navigation: Option<Navigation>) -> Self {
        Self {
            navigation,
            suppress_default: navigation.is_some(),
        }
    }

    pub fn passthrough() -> Self {
        Self::default()
    }
}

/// What the rendering layer needs to draw the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselSnapshot {
    pub len: usize,
    pub current_index: usize,
    pub direction: Direction,
    pub is_paused: bool,
    pub is_dragging: bool,
    pub reduced_motion: bool,
    pub visible: Option<VisibleWindow>,
    /// Zero under reduced motion.
    pub transition: Duration,
}

/// Result of a wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Below threshold or mostly vertical; let the page scroll.
    Ignored,
    /// Swallowed by the debounce window.
    Debounced,
    Navigated(Navigation),
}

impl WheelOutcome {
    pub fn suppresses_default(&self) -> bool {
        !matches!(self, WheelOutcome::Ignored)
    }

    pub fn navigation(&self) -> Option<Navigation> {
        match self {
            WheelOutcome::Navigated(nav) => Some(*nav),
            WheelOutcome::Ignored | WheelOutcome::Debounced => None,
        }
    }
}
