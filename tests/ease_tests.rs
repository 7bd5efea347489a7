mod common;

use common::approx;
use common::scene_core::ease::*;
use glam::Vec3;

#[test]
fn damp_factor_stays_in_unit_range() {
    for dt in [0.0, 0.001, 0.016, 0.1, 1.0, 100.0] {
        let f = damp_factor(0.25, dt);
        assert!((0.0..=1.0).contains(&f), "dt {dt} -> {f}");
    }
    assert_eq!(damp_factor(0.25, -1.0), 0.0);
    assert_eq!(damp_factor(0.0, 0.016), 1.0);
}

#[test]
fn damping_is_frame_rate_independent() {
    let one = damp(0.0, 1.0, 0.2, 0.1);
    let two = damp(damp(0.0, 1.0, 0.2, 0.05), 1.0, 0.2, 0.05);
    assert!(approx(one, two, 1e-6));
}

#[test]
fn damp3_moves_toward_target() {
    let from = Vec3::new(0.0, 0.0, 100.0);
    let to = Vec3::new(1.0, 1.5, 10.0);
    let next = damp3(from, to, 0.3, 0.016);
    assert!(next.distance(to) < from.distance(to));
    assert_eq!(damp3(from, to, 0.3, 0.0), from);
}
