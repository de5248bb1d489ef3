//! Drag and wheel gesture interpretation.
//!
//! Both trackers only decide *whether* a gesture is a navigation and in which
//! direction. The navigator applies the result and handles pausing.

use std::time::{Duration, Instant};

use super::types::{Direction, WheelInput};

/// Tracks a pointer drag between start and end.
#[derive(Debug, Clone, Copy)]
pub struct DragTracker {
    threshold: f32,
    active: bool,
}

impl DragTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn begin(&mut self) {
        self.active = true;
    }

    /// Finish the drag and map its horizontal displacement to a step.
    ///
    /// Dragging the strip left (negative displacement) pulls the next item
    /// into the center. Displacements that do not exceed the threshold are a
    /// cancelled drag.
    pub fn finish(&mut self, displacement: f32) -> Option<isize> {
        self.active = false;
        if !displacement.is_finite() || displacement.abs() <= self.threshold {
            return None;
        }
        Some(if displacement < 0.0 { 1 } else { -1 })
    }
}

/// Verdict for a single wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDecision {
    /// Not a carousel gesture; the page should scroll normally.
    BelowThreshold,
    /// Part of a gesture that already navigated. Swallow it.
    Debounced(Direction),
    /// Navigate one step in this direction.
    Accepted(Direction),
}

/// Collapses a continuous wheel gesture into discrete steps.
///
/// Same-direction events within `window` of the last accepted one are
/// debounced; a reversal is accepted immediately so users can correct an
/// overshoot.
#[derive(Debug, Clone, Copy)]
pub struct WheelDebouncer {
    threshold: f32,
    window: Duration,
    last_accepted: Option<(Instant, Direction)>,
}

impl WheelDebouncer {
    pub fn new(threshold: f32, window: Duration) -> Self {
        Self {
            threshold,
            window,
            last_accepted: None,
        }
    }

    pub fn accept(&mut self, input: WheelInput, now: Instant) -> WheelDecision {
        let delta = input.effective_delta();
        if !delta.is_finite() || delta.abs() <= self.threshold {
            return WheelDecision::BelowThreshold;
        }
        let direction = if delta > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        };

        if let Some((at, last_direction)) = self.last_accepted
            && last_direction == direction
            && now.saturating_duration_since(at) < self.window
        {
            log::trace!("wheel {:?} debounced", direction);
            return WheelDecision::Debounced(direction);
        }

        self.last_accepted = Some((now, direction));
        WheelDecision::Accepted(direction)
    }

    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}
