use super::*;
use crate::foundation::core::{Color, Vec3};

fn armed(start_time: f32, duration: f32, from: f32, to: f32) -> Interpolate<f32> {
    let mut p = Interpolate::new();
    p.init(start_time, duration, from, to);
    p
}

#[test]
fn halfway_and_clamped_endpoints() {
    let p = armed(0.0, 1000.0, 0.0, 100.0);
    assert_eq!(p.current_value(500.0), 50.0);
    assert_eq!(p.current_value(-10.0), 0.0);
    assert_eq!(p.current_value(1500.0), 100.0);
    assert_eq!(p.current_value(1000.0), 100.0);
}

#[test]
fn before_start_is_start_value() {
    let p = armed(200.0, 400.0, -3.0, 9.0);
    for t in [-1000.0, 0.0, 199.0, 200.0] {
        assert_eq!(p.current_value(t), -3.0);
    }
}

#[test]
fn repeated_query_hits_the_cache() {
    let p = armed(0.0, 300.0, 0.0, 1.0);
    let a = p.current_value(100.0);
    assert_eq!(p.last.get(), Some((100.0, a)));
    let b = p.current_value(100.0);
    assert_eq!(a.to_bits(), b.to_bits());
    assert_eq!(p.last.get(), Some((100.0, a)));

    let c = p.current_value(200.0);
    assert!(c > a);
    assert_eq!(p.last.get(), Some((200.0, c)));
}

#[test]
fn mutators_drop_the_cache() {
    let mut p = armed(0.0, 1000.0, 0.0, 100.0);
    assert_eq!(p.current_value(500.0), 50.0);

    p.set_end_value(200.0);
    assert_eq!(p.last.get(), None);
    assert_eq!(p.current_value(500.0), 100.0);

    p.set_start_value(100.0);
    assert_eq!(p.current_value(500.0), 150.0);

    p.set_start_time(500.0);
    assert_eq!(p.current_value(500.0), 100.0);

    p.set_duration(500.0);
    assert_eq!(p.current_value(1000.0), 200.0);
    assert_eq!(p.end_time(), 1000.0);
}

#[test]
fn zero_duration_snaps_after_start() {
    let p = armed(100.0, 0.0, 1.0, 5.0);
    assert_eq!(p.current_value(99.0), 1.0);
    assert_eq!(p.current_value(100.0), 1.0);
    assert_eq!(p.current_value(100.5), 5.0);
    assert!(p.is_done(100.0));
    assert_eq!(p.current_speed(100.5), 0.0);
}

#[test]
fn is_done_at_end_time() {
    let p = armed(50.0, 100.0, 0.0, 1.0);
    assert!(!p.is_done(149.9));
    assert!(p.is_done(150.0));
    assert_eq!(p.start_time(), 50.0);
    assert_eq!(p.end_time(), 150.0);
    assert_eq!(p.duration(), 100.0);
    assert_eq!(p.start_value(), 0.0);
    assert_eq!(p.end_value(), 1.0);
}

#[test]
fn scalar_increase_is_monotonic() {
    let p = armed(0.0, 1000.0, 2.0, 7.0);
    let mut prev = p.current_value(-50.0);
    let mut t = -50.0;
    while t <= 1050.0 {
        let v = p.current_value(t);
        assert!(v >= prev, "value dropped at {t}: {v} < {prev}");
        prev = v;
        t += 12.5;
    }
}

#[test]
fn speed_is_units_per_second() {
    let p = armed(0.0, 2000.0, 0.0, 100.0);
    assert_eq!(p.current_speed(1000.0), 50.0);
    assert_eq!(p.current_speed(-10.0), 0.0);
    assert_eq!(p.current_speed(2000.0), 0.0);
}

#[test]
fn enabled_flag_follows_init() {
    let mut p: Interpolate<f32> = Interpolate::new();
    assert!(p.is_enabled());
    p.set_enabled(false);
    assert!(!p.is_enabled());
    p.init(0.0, 10.0, 0.0, 1.0);
    assert!(p.is_enabled());
}

#[test]
fn unarmed_profile_is_zero() {
    let p: Interpolate<Vec3> = Interpolate::new();
    assert_eq!(p.current_value(0.0), Vec3::ZERO);
    assert_eq!(p.current_value(1.0e6), Vec3::ZERO);
    assert!(p.is_done(0.0));
}

#[test]
fn interpolates_vectors_and_colors() {
    let mut p = Interpolate::new();
    p.init(0.0, 100.0, Vec3::ZERO, Vec3::new(10.0, -20.0, 4.0));
    assert_eq!(p.current_value(25.0), Vec3::new(2.5, -5.0, 1.0));

    let mut c = Interpolate::new();
    c.init(
        0.0,
        100.0,
        Color::new(0.0, 0.0, 0.0, 0.0),
        Color::new(1.0, 1.0, 1.0, 1.0),
    );
    assert_eq!(c.current_value(50.0), Color::new(0.5, 0.5, 0.5, 0.5));
}
