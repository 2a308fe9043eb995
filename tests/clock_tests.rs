// Host-side tests for frame clocks.

use heart_core::constants::{MAX_FRAME_DELTA_SEC, REFERENCE_FRAME_SEC};
use heart_core::{Clock, FrameClock, SteppedClock};

#[test]
fn stepped_clock_advances_by_fixed_step() {
    let mut clock = SteppedClock::new(0.1);
    let a = clock.tick();
    let b = clock.tick();
    assert_eq!(a.delta, 0.1);
    assert_eq!(b.delta, 0.1);
    assert!((b.elapsed - 0.2).abs() < 1e-12);
    assert!((clock.elapsed() - 0.2).abs() < 1e-12);
}

#[test]
fn stepped_clock_from_fps() {
    assert!((SteppedClock::from_fps(30.0).step() - 1.0 / 30.0).abs() < 1e-12);
    assert_eq!(SteppedClock::from_fps(0.0).step(), REFERENCE_FRAME_SEC);
    assert_eq!(SteppedClock::from_fps(-5.0).step(), REFERENCE_FRAME_SEC);
}

#[test]
fn stepped_clock_rejects_negative_step() {
    let mut clock = SteppedClock::new(-1.0);
    assert_eq!(clock.tick().delta, 0.0);
}

#[test]
fn wall_clock_is_monotonic_and_capped() {
    let mut clock = Clock::new();
    let a = clock.tick();
    let b = clock.tick();
    assert!(a.delta >= 0.0 && a.delta <= MAX_FRAME_DELTA_SEC);
    assert!(b.delta >= 0.0 && b.delta <= MAX_FRAME_DELTA_SEC);
    assert!(b.elapsed >= a.elapsed);
}
