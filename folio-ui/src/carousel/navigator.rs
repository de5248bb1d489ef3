//! CarouselNavigator: index ownership, input arbitration and auto-advance.
//!
//! The navigator is driven entirely by the caller's clock: every operation
//! takes `now`, [`CarouselNavigator::next_deadline`] reports when the next
//! timer is due, and [`CarouselNavigator::poll_timers`] fires whatever has
//! come due. `runtime::driver` wraps this in a tokio task; tests drive it with
//! synthetic instants.

use std::time::{Duration, Instant};

use folio_config::{CarouselConfig, ConfigGuardRailError};

use super::autoplay::{Autoplay, PauseState, SuspendReason};
use super::gesture::{DragTracker, WheelDebouncer, WheelDecision};
use super::messages::{
    CarouselInput, CarouselSnapshot, InputOutcome, WheelOutcome,
};
use super::types::{Direction, Key, NavOrigin, Navigation, Slot, WheelInput};
use super::window::{VisibleWindow, shortest_delta, wrap_index};

#[derive(Debug, Clone)]
pub struct CarouselNavigator<T> {
    items: Vec<T>,
    current_index: usize,
    direction: Direction,
    config: CarouselConfig,
    reduced_motion: bool,
    hovered: bool,
    mounted: bool,
    pause: PauseState,
    autoplay: Autoplay,
    drag: DragTracker,
    wheel: WheelDebouncer,
}

impl<T> CarouselNavigator<T> {
    /// Mount a carousel over `items`, centered on the first one.
    ///
    /// Auto-advance starts immediately unless `reduced_motion` is set or
    /// there is nothing to advance through.
    pub fn mount(
        items: Vec<T>,
        config: CarouselConfig,
        reduced_motion: bool,
        now: Instant,
    ) -> Result<Self, ConfigGuardRailError> {
        config.validate()?;

        let mut navigator = Self {
            items,
            current_index: 0,
            direction: Direction::Still,
            drag: DragTracker::new(config.drag_threshold),
            wheel: WheelDebouncer::new(
                config.wheel_threshold,
                config.wheel_debounce(),
            ),
            config,
            reduced_motion,
            hovered: false,
            mounted: true,
            pause: PauseState::Idle,
            autoplay: Autoplay::Suspended(SuspendReason::Paused),
        };
        navigator.reconcile(now);

        log::debug!(
            "Carousel mounted: {} items, reduced_motion={}, autoplay={:?}",
            navigator.items.len(),
            reduced_motion,
            navigator.autoplay
        );
        Ok(navigator)
    }

    /// Disarm both timers. Nothing fires and no input is accepted afterwards.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.pause = PauseState::Idle;
        self.hovered = false;
        self.wheel.reset();
        self.autoplay = Autoplay::Suspended(SuspendReason::Unmounted);
        log::debug!("Carousel unmounted at index {}", self.current_index);
    }

    // -- read side ---------------------------------------------------------

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_item(&self) -> Option<&T> {
        self.items.get(self.current_index)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn autoplay(&self) -> Autoplay {
        self.autoplay
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// When the interaction pause ends, if a countdown is running.
    pub fn pause_until(&self) -> Option<Instant> {
        self.pause.deadline()
    }

    /// The single pending timer deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pause.deadline().or(self.autoplay.next_advance())
    }

    pub fn visible_window(&self) -> Option<VisibleWindow> {
        VisibleWindow::around(self.current_index, self.items.len())
    }

    /// Items at the five visible positions, left to right.
    pub fn visible_items(&self) -> Option<[&T; 5]> {
        let w = self.visible_window()?;
        Some([
            &self.items[w.far_left],
            &self.items[w.left],
            &self.items[w.center],
            &self.items[w.right],
            &self.items[w.far_right],
        ])
    }

    /// Transition length for the rendering layer. Reduced motion swaps
    /// slides without animating.
    pub fn transition(&self) -> Duration {
        if self.reduced_motion {
            Duration::ZERO
        } else {
            self.config.transition()
        }
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            len: self.items.len(),
            current_index: self.current_index,
            direction: self.direction,
            is_paused: self.is_paused(),
            is_dragging: self.drag.is_active(),
            reduced_motion: self.reduced_motion,
            visible: self.visible_window(),
            transition: self.transition(),
        }
    }

    // -- navigation --------------------------------------------------------

    /// Move by `delta` positions with wrap-around.
    ///
    /// User navigations restart the interaction pause; auto navigations
    /// leave it alone. With fewer than two items this is a no-op.
    pub fn navigate(
        &mut self,
        delta: isize,
        origin: NavOrigin,
        now: Instant,
    ) -> Option<Navigation> {
        let navigation = self.step(delta, origin)?;
        if origin == NavOrigin::User {
            self.pause_auto_scroll(now);
        }
        Some(navigation)
    }

    /// Suppress auto-advance for the configured pause, restarting the
    /// countdown if one is already running. While hovered the pause is held
    /// until the pointer leaves. Carousels with fewer than two items never
    /// pause since there is nothing to hold still.
    pub fn pause_auto_scroll(&mut self, now: Instant) {
        if !self.mounted || self.items.len() < 2 {
            return;
        }
        self.pause = if self.hovered {
            PauseState::Held
        } else {
            PauseState::Until(now + self.config.interaction_pause())
        };
        self.reconcile(now);
    }

    /// Jump to an absolute index along the shortest wrap-around path.
    /// Out-of-range targets are reduced modulo the item count.
    pub fn select(&mut self, target: usize, now: Instant) -> Option<Navigation> {
        let len = self.items.len();
        if len < 2 {
            return None;
        }
        let delta = shortest_delta(self.current_index, target % len, len);
        self.navigate(delta, NavOrigin::User, now)
    }

    /// Jump to a visible preview position by its literal offset.
    pub fn select_slot(&mut self, slot: Slot, now: Instant) -> Option<Navigation> {
        self.navigate(slot.offset(), NavOrigin::User, now)
    }

    pub fn key_press(&mut self, key: Key, now: Instant) -> Option<Navigation> {
        let delta = key.delta()?;
        self.navigate(delta, NavOrigin::User, now)
    }

    /// Any drag start pauses, even if the drag ends up below threshold.
    pub fn drag_start(&mut self, now: Instant) {
        if !self.mounted {
            return;
        }
        self.drag.begin();
        self.pause_auto_scroll(now);
    }

    pub fn drag_end(&mut self, displacement: f32, now: Instant) -> Option<Navigation> {
        let delta = self.drag.finish(displacement)?;
        self.navigate(delta, NavOrigin::User, now)
    }

    pub fn wheel(&mut self, input: WheelInput, now: Instant) -> WheelOutcome {
        if !self.mounted || self.items.len() < 2 {
            return WheelOutcome::Ignored;
        }
        match self.wheel.accept(input, now) {
            WheelDecision::BelowThreshold => WheelOutcome::Ignored,
            WheelDecision::Debounced(_) => WheelOutcome::Debounced,
            WheelDecision::Accepted(direction) => {
                match self.navigate(direction.signum(), NavOrigin::User, now) {
                    Some(nav) => WheelOutcome::Navigated(nav),
                    None => WheelOutcome::Ignored,
                }
            }
        }
    }

    pub fn hover_enter(&mut self, now: Instant) {
        if !self.mounted {
            return;
        }
        self.hovered = true;
        if self.items.len() < 2 {
            return;
        }
        self.pause = PauseState::Held;
        self.reconcile(now);
    }

    /// Start the normal resume countdown once the pointer leaves.
    pub fn hover_leave(&mut self, now: Instant) {
        if !self.mounted || !self.hovered {
            return;
        }
        self.hovered = false;
        self.pause_auto_scroll(now);
    }

    pub fn set_reduced_motion(&mut self, reduced: bool, now: Instant) {
        if self.reduced_motion == reduced {
            return;
        }
        self.reduced_motion = reduced;
        log::debug!("Carousel reduced motion -> {}", reduced);
        self.reconcile(now);
    }

    /// Route a host event to the matching operation.
    pub fn handle(&mut self, input: CarouselInput, now: Instant) -> InputOutcome {
        match input {
            CarouselInput::Navigate(delta) => InputOutcome::navigated(
                self.navigate(delta, NavOrigin::User, now),
            ),
            CarouselInput::DragStart => {
                self.drag_start(now);
                InputOutcome::passthrough()
            }
            CarouselInput::DragEnd(displacement) => {
                InputOutcome::navigated(self.drag_end(displacement, now))
            }
            CarouselInput::Key(key) => {
                InputOutcome::navigated(self.key_press(key, now))
            }
            CarouselInput::Wheel(wheel) => {
                let outcome = self.wheel(wheel, now);
                InputOutcome {
                    navigation: outcome.navigation(),
                    suppress_default: outcome.suppresses_default(),
                }
            }
            CarouselInput::Select(target) => {
                InputOutcome::navigated(self.select(target, now))
            }
            CarouselInput::SelectSlot(slot) => {
                InputOutcome::navigated(self.select_slot(slot, now))
            }
            CarouselInput::HoverEnter => {
                self.hover_enter(now);
                InputOutcome::passthrough()
            }
            CarouselInput::HoverLeave => {
                self.hover_leave(now);
                InputOutcome::passthrough()
            }
            CarouselInput::ReducedMotion(reduced) => {
                self.set_reduced_motion(reduced, now);
                InputOutcome::passthrough()
            }
        }
    }

    // -- timers ------------------------------------------------------------

    /// Fire every timer due at or before `now`, in deadline order, and
    /// return the auto navigations that happened.
    ///
    /// At most one advance fires per poll. A late poll skips the missed
    /// ticks and re-arms a full interval from `now`, like
    /// `MissedTickBehavior::Delay`. Resuming from a pause arms a fresh
    /// interval counted from the moment the pause ended.
    pub fn poll_timers(&mut self, now: Instant) -> Vec<Navigation> {
        let mut fired = Vec::new();
        if let PauseState::Until(deadline) = self.pause
            && deadline <= now
        {
            self.pause = PauseState::Idle;
            log::debug!("Carousel interaction pause elapsed");
            self.reconcile(deadline);
        }

        if let Autoplay::Running { next_advance } = self.autoplay
            && next_advance <= now
        {
            if let Some(nav) = self.step(1, NavOrigin::Auto) {
                fired.push(nav);
            }
            let interval = self.config.auto_scroll_interval();
            let rearm = (next_advance + interval).max(now + interval);
            if rearm > next_advance + interval {
                log::debug!(
                    "Carousel skipped missed auto-advance ticks ({:?} late)",
                    now - next_advance
                );
            }
            self.autoplay = Autoplay::Running {
                next_advance: rearm,
            };
        }
        fired
    }

    // -- internals ---------------------------------------------------------

    fn step(&mut self, delta: isize, origin: NavOrigin) -> Option<Navigation> {
        let len = self.items.len();
        if !self.mounted || len < 2 {
            return None;
        }
        let from = self.current_index;
        let to = wrap_index(from, delta, len);
        let direction = Direction::from_delta(delta);
        self.current_index = to;
        self.direction = direction;

        log::debug!(
            "Carousel {:?} navigation {} -> {} (delta={}, len={})",
            origin,
            from,
            to,
            delta,
            len
        );
        Some(Navigation {
            from,
            to,
            delta,
            direction,
            origin,
        })
    }

    /// Bring the auto-advance state machine in line with the current flags.
    /// Entering `Running` always arms a fresh interval from `now`.
    fn reconcile(&mut self, now: Instant) {
        let blocked = if !self.mounted {
            Some(SuspendReason::Unmounted)
        } else if self.items.len() < 2 {
            Some(SuspendReason::TooFewItems)
        } else if self.reduced_motion {
            Some(SuspendReason::ReducedMotion)
        } else if self.pause.is_paused() {
            Some(SuspendReason::Paused)
        } else {
            None
        };

        let next = match (blocked, self.autoplay) {
            (Some(reason), _) => Autoplay::Suspended(reason),
            (None, running @ Autoplay::Running { .. }) => running,
            (None, Autoplay::Suspended(_)) => Autoplay::Running {
                next_advance: now + self.config.auto_scroll_interval(),
            },
        };
        if next != self.autoplay {
            log::debug!("Carousel autoplay {:?} -> {:?}", self.autoplay, next);
            self.autoplay = next;
        }

        debug_assert!(
            !(self.autoplay.is_running() && self.pause.deadline().is_some()),
            "auto-advance and resume timers armed together"
        );
    }
}
