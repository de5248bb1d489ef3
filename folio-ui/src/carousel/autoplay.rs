//! Auto-advance scheduling state.
//!
//! The navigator owns two timers: the repeating auto-advance tick and the
//! one-shot interaction resume. Both are plain deadlines here so the host loop
//! can sleep until [`Autoplay::next_advance`] or [`PauseState::deadline`].
//! They are never armed at the same time: any pause suspends auto-advance.

use std::time::Instant;

/// Why auto-advance is not running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuspendReason {
    /// Recent interaction or hover.
    Paused,
    /// The host reports a reduced-motion preference.
    ReducedMotion,
    /// Zero or one item; advancing would be a no-op.
    TooFewItems,
    /// Torn down; nothing may fire again.
    Unmounted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Autoplay {
    /// Advance by one at `next_advance`, then every interval after that.
    Running { next_advance: Instant },
    Suspended(SuspendReason),
}

impl Autoplay {
    pub fn is_running(&self) -> bool {
        matches!(self, Autoplay::Running { .. })
    }

    pub fn next_advance(&self) -> Option<Instant> {
        match self {
            Autoplay::Running { next_advance } => Some(*next_advance),
            Autoplay::Suspended(_) => None,
        }
    }

    pub fn suspend_reason(&self) -> Option<SuspendReason> {
        match self {
            Autoplay::Running { .. } => None,
            Autoplay::Suspended(reason) => Some(*reason),
        }
    }
}

/// Interaction pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PauseState {
    #[default]
    Idle,
    /// Open-ended while the pointer is over the carousel.
    Held,
    /// Resume once this deadline passes.
    Until(Instant),
}

impl PauseState {
    pub fn is_paused(&self) -> bool {
        !matches!(self, PauseState::Idle)
    }

    pub fn deadline(&self) -> Option<Instant> {
        match self {
            PauseState::Until(deadline) => Some(*deadline),
            PauseState::Idle | PauseState::Held => None,
        }
    }
}
