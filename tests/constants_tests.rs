mod common;

use common::scene_core::constants::*;

#[test]
fn hover_targets_differ_from_idle() {
    assert!(HOVER_SCALE > IDLE_SCALE);
    assert!(HOVER_CORNER_RADIUS > IDLE_CORNER_RADIUS);
    assert!(HOVER_ZOOM < IDLE_ZOOM);
    assert!(SCALE_TAU_SEC > 0.0 && CORNER_RADIUS_TAU_SEC > 0.0 && ZOOM_TAU_SEC > 0.0);
}

#[test]
fn camera_frustum_is_sane() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_FAR > CAMERA_NEAR);
    assert!(DESKTOP_FOV_DEG > 0.0 && DESKTOP_FOV_DEG < 180.0);
    assert!(MOBILE_FOV_DEG > DESKTOP_FOV_DEG);
    assert!(DESKTOP_CAMERA_POSITION[2] > MOBILE_CAMERA_POSITION[2]);
}

#[test]
fn fog_range_is_ordered() {
    assert!(FOG_NEAR < FOG_FAR);
    assert!(FOG_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
}

#[test]
fn banner_wraps_outside_the_cards() {
    assert!(BANNER_RADIUS > CAROUSEL_RADIUS);
    assert!(BANNER_RADIAL_SEGMENTS >= 3);
}

#[test]
fn survey_link_is_https() {
    assert!(SURVEY_URL.starts_with("https://"));
    assert_eq!(IMAGE_CYCLE, 10);
}
