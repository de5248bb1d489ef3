//! Shared types for the carousel module

/// Most recent navigation direction. Only the rendering layer reads it, to
/// pick entry/exit animation variants; index math never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

impl Direction {
    pub fn from_delta(delta: isize) -> Self {
        match delta.signum() {
            -1 => Direction::Backward,
            1 => Direction::Forward,
            _ => Direction::Still,
        }
    }

    /// -1, 0 or +1.
    pub fn signum(self) -> isize {
        match self {
            Direction::Backward => -1,
            Direction::Still => 0,
            Direction::Forward => 1,
        }
    }
}

/// Who asked for a navigation. Only user navigations restart the
/// interaction pause; the auto-advance timer must never pause itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavOrigin {
    Auto,
    User,
}

/// A committed index change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Navigation {
    pub from: usize,
    pub to: usize,
    pub delta: isize,
    pub direction: Direction,
    pub origin: NavOrigin,
}

/// Keys the carousel listens for. Hosts map their native key events onto
/// this before dispatching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    pub fn delta(self) -> Option<isize> {
        match self {
            Key::ArrowLeft => Some(-1),
            Key::ArrowRight => Some(1),
            Key::Other => None,
        }
    }
}

/// One of the five addressable positions around the centered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    FarLeft,
    Left,
    Center,
    Right,
    FarRight,
}

impl Slot {
    /// Left to right.
    pub const ALL: [Slot; 5] = [
        Slot::FarLeft,
        Slot::Left,
        Slot::Center,
        Slot::Right,
        Slot::FarRight,
    ];

    /// Literal offset from the centered item. Clicking a preview slot jumps
    /// by exactly this much.
    pub const fn offset(self) -> isize {
        match self {
            Slot::FarLeft => -2,
            Slot::Left => -1,
            Slot::Center => 0,
            Slot::Right => 1,
            Slot::FarRight => 2,
        }
    }
}

/// Raw wheel/trackpad deltas as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelInput {
    pub delta_x: f32,
    pub delta_y: f32,
    /// Shift (or the platform's horizontal-scroll modifier) is held, so the
    /// vertical delta should be read as horizontal.
    pub modifier: bool,
}

impl WheelInput {
    pub fn horizontal(delta_x: f32) -> Self {
        Self {
            delta_x,
            ..Default::default()
        }
    }

    /// The delta that drives the carousel, or zero when the gesture is
    /// mostly vertical and no modifier is held.
    pub fn effective_delta(&self) -> f32 {
        let x_dominates = self.delta_x.abs() > self.delta_y.abs();
        if x_dominates {
            self.delta_x
        } else if self.modifier {
            self.delta_y
        } else {
            0.0
        }
    }
}
