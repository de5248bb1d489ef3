//! Carousel navigator state machine tests
//!
//! Drive the navigator with synthetic instants and check index wrap-around,
//! pause/resume timing, reduced motion, and per-source gesture policies.

use std::time::{Duration, Instant};

use folio_config::CarouselConfig;
use folio_ui::carousel::{
    Autoplay, CarouselInput, CarouselNavigator, Direction, Key, NavOrigin,
    Slot, SuspendReason, WheelInput, WheelOutcome,
};

struct Clock {
    base: Instant,
}

impl Clock {
    fn new() -> Self {
        Self {
            base: Instant::now(),
        }
    }

    fn at(&self, ms: u64) -> Instant {
        self.base + Duration::from_millis(ms)
    }
}

fn mount(len: usize, clock: &Clock) -> CarouselNavigator<usize> {
    CarouselNavigator::mount(
        (0..len).collect(),
        CarouselConfig::default(),
        false,
        clock.at(0),
    )
    .expect("default config is valid")
}

#[test]
fn navigating_back_from_first_item_wraps_to_last() {
    let clock = Clock::new();
    let mut nav = mount(13, &clock);

    let step = nav.navigate(-1, NavOrigin::User, clock.at(10)).unwrap();

    assert_eq!(nav.current_index(), 12);
    assert_eq!(step.from, 0);
    assert_eq!(step.to, 12);
    assert_eq!(nav.direction(), Direction::Backward);
}

#[test]
fn index_stays_in_range_for_arbitrary_deltas() {
    let clock = Clock::new();
    let mut nav = mount(13, &clock);
    let deltas = [1, -1, 2, -2, 7, -30, 13, -13, 1000, -999, isize::MAX, isize::MIN];

    for (i, delta) in deltas.into_iter().enumerate() {
        nav.navigate(delta, NavOrigin::User, clock.at(i as u64));
        assert!(nav.current_index() < 13, "delta {delta} escaped the ring");
    }
}

#[test]
fn empty_and_single_item_carousels_never_move() {
    let clock = Clock::new();

    let mut empty = mount(0, &clock);
    assert_eq!(empty.navigate(1, NavOrigin::User, clock.at(1)), None);
    assert_eq!(empty.select(3, clock.at(2)), None);
    assert_eq!(empty.key_press(Key::ArrowLeft, clock.at(3)), None);
    assert_eq!(empty.wheel(WheelInput::horizontal(80.0), clock.at(4)), WheelOutcome::Ignored);
    assert!(empty.poll_timers(clock.at(60_000)).is_empty());
    assert_eq!(empty.current_index(), 0);
    assert!(empty.current_item().is_none());
    assert!(empty.snapshot().visible.is_none());
    assert_eq!(empty.autoplay(), Autoplay::Suspended(SuspendReason::TooFewItems));

    let mut single = mount(1, &clock);
    assert_eq!(single.navigate(-1, NavOrigin::User, clock.at(1)), None);
    assert!(!single.is_paused());
    assert_eq!(single.next_deadline(), None);
    assert_eq!(single.current_item(), Some(&0));

    // No input pauses a carousel that cannot move.
    single.drag_start(clock.at(2));
    assert!(!single.is_paused());
    assert_eq!(single.drag_end(-120.0, clock.at(3)), None);
    single.hover_enter(clock.at(4));
    assert!(single.is_hovered());
    assert!(!single.is_paused());
    single.hover_leave(clock.at(5));
    assert!(!single.is_paused());
    single.pause_auto_scroll(clock.at(6));
    assert_eq!(single.pause_until(), None);
    assert_eq!(single.next_deadline(), None);

    empty.drag_start(clock.at(7));
    empty.hover_enter(clock.at(8));
    assert!(!empty.is_paused());
    assert_eq!(empty.autoplay(), Autoplay::Suspended(SuspendReason::TooFewItems));
}

#[test]
fn auto_advance_fires_every_interval() {
    let clock = Clock::new();
    let mut nav = mount(5, &clock);

    assert_eq!(nav.next_deadline(), Some(clock.at(4_000)));
    assert!(nav.poll_timers(clock.at(3_999)).is_empty());

    let fired = nav.poll_timers(clock.at(4_000));
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].origin, NavOrigin::Auto);
    assert_eq!(nav.current_index(), 1);
    assert!(!nav.is_paused(), "auto-advance must not pause itself");

    assert_eq!(nav.next_deadline(), Some(clock.at(8_000)));
    assert_eq!(nav.poll_timers(clock.at(8_000)).len(), 1);
    assert_eq!(nav.current_index(), 2);
    assert_eq!(nav.next_deadline(), Some(clock.at(12_000)));
}

#[test]
fn late_poll_advances_once_and_rearms_a_full_interval() {
    let clock = Clock::new();
    let mut nav = mount(13, &clock);

    // Host asleep for an hour: one step, no burst of missed ticks.
    let fired = nav.poll_timers(clock.at(3_600_000));
    assert_eq!(fired.len(), 1);
    assert_eq!(nav.current_index(), 1);
    assert_eq!(nav.next_deadline(), Some(clock.at(3_604_000)));

    assert!(nav.poll_timers(clock.at(3_603_999)).is_empty());
    assert_eq!(nav.poll_timers(clock.at(3_604_000)).len(), 1);
    assert_eq!(nav.current_index(), 2);
}

#[test]
fn late_poll_after_pause_expiry_steps_at_most_once() {
    let clock = Clock::new();
    let mut nav = mount(5, &clock);

    nav.navigate(1, NavOrigin::User, clock.at(0));
    // Pause ends at 5s, fresh tick due at 9s; polled far later.
    let fired = nav.poll_timers(clock.at(60_000));
    assert_eq!(fired.len(), 1);
    assert!(!nav.is_paused());
    assert_eq!(nav.current_index(), 2);
    assert_eq!(nav.next_deadline(), Some(clock.at(64_000)));
}

#[test]
fn manual_navigation_holds_off_auto_advance_for_the_pause_window() {
    let clock = Clock::new();
    let mut nav = mount(5, &clock);

    nav.navigate(1, NavOrigin::User, clock.at(1_000));
    assert!(nav.is_paused());
    assert_eq!(nav.pause_until(), Some(clock.at(6_000)));
    assert_eq!(nav.autoplay(), Autoplay::Suspended(SuspendReason::Paused));

    // The original 4s tick is gone.
    assert!(nav.poll_timers(clock.at(5_999)).is_empty());
    assert_eq!(nav.current_index(), 1);

    // Resume at 6s, then a fresh full interval before the next advance.
    assert!(nav.poll_timers(clock.at(6_000)).is_empty());
    assert!(!nav.is_paused());
    assert_eq!(nav.next_deadline(), Some(clock.at(10_000)));
    assert!(nav.poll_timers(clock.at(9_999)).is_empty());
    assert_eq!(nav.poll_timers(clock.at(10_000)).len(), 1);
    assert_eq!(nav.current_index(), 2);
}

#[test]
fn repeated_pauses_resume_after_the_last_one() {
    let clock = Clock::new();
    let mut nav = mount(5, &clock);

    for ms in [0, 20, 40, 60, 80] {
        nav.pause_auto_scroll(clock.at(ms));
    }

    assert_eq!(nav.pause_until(), Some(clock.at(5_080)));
    assert_eq!(nav.next_deadline(), Some(clock.at(5_080)));

    nav.poll_timers(clock.at(5_079));
    assert!(nav.is_paused());
    nav.poll_timers(clock.at(5_080));
    assert!(!nav.is_paused());
    assert_eq!(nav.next_deadline(), Some(clock.at(9_080)));
}

#[test]
fn auto_navigation_does_not_extend_a_pause() {
    let clock = Clock::new();
    let mut nav = mount(5, &clock);

    nav.pause_auto_scroll(clock.at(0));
    nav.navigate(1, NavOrigin::Auto, clock.at(1_000));

    assert_eq!(nav.current_index(), 1);
    assert_eq!(nav.pause_until(), Some(clock.at(5_000)));
}

#[test]
fn reduced_motion_never_auto_advances() {
    let clock = Clock::new();
    let mut nav = CarouselNavigator::mount(
        (0..5).collect::<Vec<_>>(),
        CarouselConfig::default(),
        true,
        clock.at(0),
    )
    .unwrap();

    assert_eq!(nav.next_deadline(), None);
    assert!(nav.poll_timers(clock.at(30_000)).is_empty());
    assert_eq!(nav.current_index(), 0);
    assert_eq!(nav.transition(), Duration::ZERO);

    // Manual navigation still works, and the pause expiring does not
    // restart autoplay.
    nav.key_press(Key::ArrowRight, clock.at(30_000));
    assert_eq!(nav.current_index(), 1);
    nav.poll_timers(clock.at(35_000));
    assert_eq!(
        nav.autoplay(),
        Autoplay::Suspended(SuspendReason::ReducedMotion)
    );
    assert!(nav.poll_timers(clock.at(90_000)).is_empty());
    assert_eq!(nav.current_index(), 1);
}

#[test]
fn reduced_motion_toggle_discards_elapsed_interval() {
    let clock = Clock::new();
    let mut nav = mount(5, &clock);

    nav.set_reduced_motion(true, clock.at(3_000));
    assert_eq!(nav.next_deadline(), None);

    nav.set_reduced_motion(false, clock.at(3_500));
    assert_eq!(nav.next_deadline(), Some(clock.at(7_500)));
    assert!(nav.poll_timers(clock.at(7_499)).is_empty());
    assert_eq!(nav.poll_timers(clock.at(7_500)).len(), 1);
    assert_eq!(nav.transition(), CarouselConfig::default().transition());
}

#[test]
fn drag_threshold_separates_cancel_from_navigation() {
    let clock = Clock::new();
    let mut nav = mount(13, &clock);

    nav.drag_start(clock.at(0));
    assert!(nav.snapshot().is_dragging);
    assert_eq!(nav.drag_end(-49.0, clock.at(100)), None);
    assert_eq!(nav.current_index(), 0);
    assert!(nav.is_paused(), "drag start pauses even without navigation");

    nav.drag_start(clock.at(200));
    let step = nav.drag_end(-51.0, clock.at(300)).unwrap();
    assert_eq!(step.delta, 1);
    assert_eq!(nav.current_index(), 1);

    nav.drag_start(clock.at(400));
    nav.drag_end(51.0, clock.at(500));
    assert_eq!(nav.current_index(), 0);
    assert_eq!(nav.direction(), Direction::Backward);
}

#[test]
fn drag_start_cancels_a_pending_tick() {
    let clock = Clock::new();
    let mut nav = mount(5, &clock);

    nav.drag_start(clock.at(3_900));
    assert!(nav.poll_timers(clock.at(4_000)).is_empty());
    assert_eq!(nav.current_index(), 0);

    nav.drag_end(10.0, clock.at(4_200));
    assert_eq!(nav.current_index(), 0);
}

#[test]
fn wheel_gesture_is_debounced_but_reversals_pass() {
    let clock = Clock::new();
    let mut nav = mount(13, &clock);
    let forward = WheelInput::horizontal(30.0);

    let first = nav.wheel(forward, clock.at(0));
    assert!(matches!(first, WheelOutcome::Navigated(_)));
    for ms in [100, 200, 300] {
        let outcome = nav.wheel(forward, clock.at(ms));
        assert_eq!(outcome, WheelOutcome::Debounced);
        assert!(outcome.suppresses_default());
    }
    assert_eq!(nav.current_index(), 1);

    let back = nav.wheel(WheelInput::horizontal(-30.0), clock.at(310));
    assert_eq!(back.navigation().map(|n| n.to), Some(0));
}

#[test]
fn small_or_vertical_wheel_events_reach_the_page() {
    let clock = Clock::new();
    let mut nav = mount(13, &clock);

    let small = nav.wheel(WheelInput::horizontal(20.0), clock.at(0));
    assert_eq!(small, WheelOutcome::Ignored);
    assert!(!small.suppresses_default());

    let vertical = nav.wheel(
        WheelInput {
            delta_x: 0.0,
            delta_y: 120.0,
            modifier: false,
        },
        clock.at(10),
    );
    assert_eq!(vertical, WheelOutcome::Ignored);
    assert!(!nav.is_paused());
}

#[test]
fn direct_selection_takes_the_shortest_path() {
    let clock = Clock::new();
    let mut nav = mount(13, &clock);

    nav.select(2, clock.at(0));
    assert_eq!(nav.current_index(), 2);

    let step = nav.select(7, clock.at(10)).unwrap();
    assert_eq!(step.delta, 5);
    assert_eq!(nav.current_index(), 7);

    // 7 -> 1 is six steps back versus seven forward.
    let step = nav.select(1, clock.at(20)).unwrap();
    assert_eq!(step.delta, -6);
    assert_eq!(nav.current_index(), 1);
    assert_eq!(nav.direction(), Direction::Backward);
}

#[test]
fn preview_slots_jump_by_literal_offsets() {
    let clock = Clock::new();
    let mut nav = mount(13, &clock);

    let step = nav.select_slot(Slot::FarLeft, clock.at(0)).unwrap();
    assert_eq!(step.delta, -2);
    assert_eq!(nav.current_index(), 11);

    nav.select_slot(Slot::FarRight, clock.at(10));
    nav.select_slot(Slot::Right, clock.at(20));
    assert_eq!(nav.current_index(), 1);

    let window = nav.visible_window().unwrap();
    assert_eq!(window.index(Slot::FarLeft), 12);
    assert_eq!(window.index(Slot::FarRight), 3);
    assert_eq!(nav.visible_items(), Some([&12, &0, &1, &2, &3]));
}

#[test]
fn hover_holds_the_pause_until_the_pointer_leaves() {
    let clock = Clock::new();
    let mut nav = mount(5, &clock);

    nav.hover_enter(clock.at(1_000));
    assert!(nav.is_paused());
    assert_eq!(nav.next_deadline(), None);

    // Keyboard input while hovered keeps the pause open-ended.
    nav.key_press(Key::ArrowRight, clock.at(2_000));
    assert_eq!(nav.next_deadline(), None);
    assert!(nav.poll_timers(clock.at(60_000)).is_empty());
    assert_eq!(nav.current_index(), 1);

    nav.hover_leave(clock.at(60_000));
    assert_eq!(nav.pause_until(), Some(clock.at(65_000)));
    nav.poll_timers(clock.at(65_000));
    assert!(!nav.is_paused());
    assert_eq!(nav.poll_timers(clock.at(69_000)).len(), 1);
    assert_eq!(nav.current_index(), 2);
}

#[test]
fn handle_routes_inputs_and_reports_suppression() {
    let clock = Clock::new();
    let mut nav = mount(13, &clock);

    let outcome = nav.handle(CarouselInput::Key(Key::Other), clock.at(0));
    assert!(outcome.navigation.is_none());
    assert!(!outcome.suppress_default);
    assert!(!nav.is_paused());

    let outcome = nav.handle(CarouselInput::Key(Key::ArrowLeft), clock.at(10));
    assert_eq!(outcome.navigation.map(|n| n.to), Some(12));
    assert!(outcome.suppress_default);

    let outcome =
        nav.handle(CarouselInput::Wheel(WheelInput::horizontal(45.0)), clock.at(20));
    assert!(outcome.suppress_default);
    assert_eq!(nav.current_index(), 0);

    nav.handle(CarouselInput::ReducedMotion(true), clock.at(30));
    assert!(nav.snapshot().reduced_motion);
    assert_eq!(nav.snapshot().transition, Duration::ZERO);
}

#[test]
fn unmount_disarms_every_timer() {
    let clock = Clock::new();
    let mut nav = mount(5, &clock);
    nav.pause_auto_scroll(clock.at(100));

    nav.unmount();

    assert!(!nav.is_mounted());
    assert_eq!(nav.next_deadline(), None);
    assert!(!nav.is_paused());
    assert_eq!(nav.autoplay(), Autoplay::Suspended(SuspendReason::Unmounted));
    assert!(nav.poll_timers(clock.at(60_000)).is_empty());
    assert_eq!(nav.navigate(1, NavOrigin::User, clock.at(60_000)), None);
    nav.hover_enter(clock.at(60_001));
    assert!(!nav.is_paused());
}

#[test]
fn invalid_config_is_rejected_at_mount() {
    let config = CarouselConfig {
        auto_scroll_interval_ms: 0,
        ..Default::default()
    };
    assert!(CarouselNavigator::mount(vec![1, 2, 3], config, false, Instant::now()).is_err());
}
