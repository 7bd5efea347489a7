mod common;

use common::scene_core::scroll::*;
use common::{approx, FRAME_DT};

const VH: f32 = 800.0;

fn settle(mut s: ScrollControls, frames: usize) -> ScrollControls {
    for _ in 0..frames {
        s = s.update(FRAME_DT);
        let offset = s.offset();
        assert!((0.0..1.0).contains(&offset), "offset {offset} escaped [0, 1)");
    }
    s
}

fn circular_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(1.0);
    d.min(1.0 - d)
}

#[test]
fn range_excludes_the_visible_viewport() {
    let s = ScrollControls::new(ScrollConfig::default());
    assert_eq!(s.range_pixels(VH), 3.0 * VH);

    let single = ScrollControls::new(ScrollConfig {
        pages: 1.0,
        ..ScrollConfig::default()
    });
    assert_eq!(single.range_pixels(VH), VH);
}

#[test]
fn one_page_is_a_third_of_a_turn() {
    let mut s = ScrollControls::new(ScrollConfig::default());
    s.scroll_by_pixels(VH, VH);
    let s = settle(s, 600);
    assert!(approx(s.offset(), 1.0 / 3.0, 1e-4));
}

#[test]
fn scrolling_backwards_wraps_to_the_end() {
    let mut s = ScrollControls::new(ScrollConfig::default());
    s.scroll_by_pixels(-VH, VH);
    let first = s.update(FRAME_DT);
    assert!(first.state().delta < 0.0);
    assert!(first.offset() > 0.5);
    let s = settle(first, 600);
    assert!(approx(s.offset(), 2.0 / 3.0, 1e-4));
}

#[test]
fn full_range_returns_to_start() {
    let mut s = ScrollControls::new(ScrollConfig::default());
    s.scroll_by_pixels(3.0 * VH, VH);
    let s = settle(s, 600);
    assert!(circular_distance(s.offset(), 0.0) < 1e-3);
}

#[test]
fn delta_follows_direction_of_motion() {
    let mut s = ScrollControls::new(ScrollConfig::default());
    s.scroll_by_pixels(100.0, VH);
    let s = s.update(FRAME_DT);
    assert!(s.state().delta > 0.0);

    let idle = settle(s, 600).update(FRAME_DT);
    assert!(idle.state().delta.abs() < 1e-5);
}

#[test]
fn zero_dt_holds_position() {
    let mut s = ScrollControls::new(ScrollConfig::default());
    s.scroll_by_pixels(VH, VH);
    let next = s.update(0.0);
    assert_eq!(next.offset(), 0.0);
    assert_eq!(next.state().delta, 0.0);
}

#[test]
fn finite_range_clamps() {
    let config = ScrollConfig {
        infinite: false,
        ..ScrollConfig::default()
    };
    let mut s = ScrollControls::new(config);
    s.scroll_by_pixels(100.0 * VH, VH);
    let mut s = s;
    for _ in 0..600 {
        s = s.update(FRAME_DT);
    }
    assert!(approx(s.offset(), 1.0, 1e-4));

    s.scroll_by_pixels(-1000.0 * VH, VH);
    for _ in 0..600 {
        s = s.update(FRAME_DT);
    }
    assert!(approx(s.offset(), 0.0, 1e-4));
}
