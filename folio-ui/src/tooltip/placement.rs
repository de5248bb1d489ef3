//! Viewport-aware tooltip placement.
//!
//! Picks the side of the trigger with the most room, then centers the
//! tooltip on the trigger along the other axis and clamps it inside the
//! viewport margin.

use folio_config::TooltipConfig;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in viewport coordinates (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Right,
    Left,
}

impl Side {
    /// Tie-break order.
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Right, Side::Left];

    fn is_vertical(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub side: Side,
    /// Top-left corner of the tooltip.
    pub origin: Point,
    /// Whether the tooltip fit on `side` without overlapping the trigger.
    pub fits: bool,
}

/// Room between the trigger and the viewport edge on `side`, after the gap
/// and margin. Negative when the trigger is already too close.
pub fn available_space(
    trigger: Rect,
    viewport: Size,
    side: Side,
    config: &TooltipConfig,
) -> f32 {
    let reserved = config.gap + config.viewport_margin;
    match side {
        Side::Top => trigger.y - reserved,
        Side::Bottom => viewport.height - trigger.bottom() - reserved,
        Side::Left => trigger.x - reserved,
        Side::Right => viewport.width - trigger.right() - reserved,
    }
}

pub fn place_tooltip(
    trigger: Rect,
    tooltip: Size,
    viewport: Size,
    config: &TooltipConfig,
) -> Placement {
    let needed = |side: Side| {
        if side.is_vertical() {
            tooltip.height
        } else {
            tooltip.width
        }
    };

    let mut best_fitting: Option<(Side, f32)> = None;
    let mut roomiest = (Side::Top, f32::NEG_INFINITY);
    for side in Side::ALL {
        let space = available_space(trigger, viewport, side, config);
        if space > roomiest.1 {
            roomiest = (side, space);
        }
        let fits = space >= needed(side);
        if fits && best_fitting.is_none_or(|(_, best)| space > best) {
            best_fitting = Some((side, space));
        }
    }

    let (side, fits) = match best_fitting {
        Some((side, _)) => (side, true),
        None => (roomiest.0, false),
    };

    let center = trigger.center();
    let raw = match side {
        Side::Top => Point {
            x: center.x - tooltip.width / 2.0,
            y: trigger.y - config.gap - tooltip.height,
        },
        Side::Bottom => Point {
            x: center.x - tooltip.width / 2.0,
            y: trigger.bottom() + config.gap,
        },
        Side::Left => Point {
            x: trigger.x - config.gap - tooltip.width,
            y: center.y - tooltip.height / 2.0,
        },
        Side::Right => Point {
            x: trigger.right() + config.gap,
            y: center.y - tooltip.height / 2.0,
        },
    };

    let margin = config.viewport_margin;
    let origin = Point {
        x: clamp_into(raw.x, margin, viewport.width - margin - tooltip.width),
        y: clamp_into(raw.y, margin, viewport.height - margin - tooltip.height),
    };

    log::trace!(
        "tooltip placed {:?} at ({:.1}, {:.1}) fits={}",
        side,
        origin.x,
        origin.y,
        fits
    );
    Placement { side, origin, fits }
}

/// Like `f32::clamp`, but pins to `min` instead of panicking when the
/// tooltip is wider than the viewport.
fn clamp_into(value: f32, min: f32, max: f32) -> f32 {
    if max < min { min } else { value.clamp(min, max) }
}
