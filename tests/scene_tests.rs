mod common;

use common::scene_core::constants::*;
use common::scene_core::profile::{DeviceClass, ViewportProfile};
use common::scene_core::scene::*;
use common::{approx, RecordingNavigator, FRAME_DT};
use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

fn desktop() -> Scene {
    Scene::new(
        ViewportProfile::for_device(DeviceClass::Desktop),
        SceneConfig::default(),
    )
}

fn input(pointer: Vec2) -> FrameInput {
    FrameInput {
        pointer: Some(pointer),
        scroll_pixels: 0.0,
        viewport_height: 800.0,
        aspect: 1.0,
    }
}

const AWAY: Vec2 = Vec2::new(0.99, 0.99);

#[test]
fn builds_the_default_scene() {
    let s = desktop();
    assert_eq!(s.cards.len(), CARD_COUNT);
    assert_eq!(s.hovered, None);
    assert_eq!(s.rig.camera_position, Vec3::from_array(DESKTOP_CAMERA_POSITION));
    assert_eq!(s.scroll_state().offset, 0.0);
    assert_eq!(s.card_mesh().triangle_count(), 800);
    assert_eq!(s.banner_mesh().vertex_count(), 129 * 17);
    assert!(s.cards.iter().all(|c| c.scale() == Vec3::ONE));
}

#[test]
fn mobile_scene_shrinks_cards_and_ring() {
    let s = Scene::new(
        ViewportProfile::for_device(DeviceClass::Mobile),
        SceneConfig::default(),
    );
    assert!(s.cards.iter().all(|c| c.scale() == Vec3::splat(MOBILE_CARD_SCALE)));
    let r = s.cards[0].descriptor.position.length();
    assert!(approx(r, CAROUSEL_RADIUS * MOBILE_RADIUS_FACTOR, 1e-5));
}

#[test]
fn pointer_at_centre_hovers_only_the_front_card() {
    let s = desktop();
    let (s, events) = s.update(FRAME_DT, &input(Vec2::ZERO));
    assert_eq!(events.as_slice(), &[HoverEvent::Enter(0)]);
    assert_eq!(s.hovered, Some(0));
    assert_eq!(s.cards.iter().filter(|c| c.hovered).count(), 1);
    assert!(s.cards[0].hovered);

    // Holding still emits nothing new.
    let (s, events) = s.update(FRAME_DT, &input(Vec2::ZERO));
    assert!(events.is_empty());
    assert_eq!(s.hovered, Some(0));
}

#[test]
fn moving_away_leaves_the_card() {
    let (s, _) = desktop().update(FRAME_DT, &input(Vec2::ZERO));
    let (s, events) = s.update(FRAME_DT, &input(AWAY));
    assert_eq!(events.as_slice(), &[HoverEvent::Leave(0)]);
    assert_eq!(s.hovered, None);
    assert!(s.cards.iter().all(|c| !c.hovered));
}

#[test]
fn click_on_a_card_navigates_once() {
    let (s, _) = desktop().update(FRAME_DT, &input(Vec2::ZERO));
    let mut nav = RecordingNavigator::default();
    assert!(s.click(Vec2::ZERO, &mut nav));
    assert_eq!(nav.urls, vec![SURVEY_URL.to_string()]);
}

#[test]
fn click_on_empty_space_does_nothing() {
    let (s, _) = desktop().update(FRAME_DT, &input(AWAY));
    let mut nav = RecordingNavigator::default();
    assert!(!s.click(AWAY, &mut nav));
    assert!(nav.urls.is_empty());
}

#[test]
fn click_uses_its_own_position_not_the_hover() {
    // Hovering the front card, then clicking the background.
    let (s, _) = desktop().update(FRAME_DT, &input(Vec2::ZERO));
    assert_eq!(s.hovered, Some(0));
    let mut nav = RecordingNavigator::default();
    assert!(!s.click(AWAY, &mut nav));
    assert!(nav.urls.is_empty());
}

#[test]
fn tap_without_prior_pointer_move_hits_the_card_under_it() {
    let s = Scene::new(
        ViewportProfile::for_device(DeviceClass::Mobile),
        SceneConfig::default(),
    );
    let (s, _) = s.update(FRAME_DT, &FrameInput::default());
    assert_eq!(s.hovered, None);
    let mut nav = RecordingNavigator::default();
    assert!(!s.click(AWAY, &mut nav));
    assert!(nav.urls.is_empty());
    assert!(s.click(Vec2::ZERO, &mut nav));
    assert_eq!(nav.urls.len(), 1);
}

#[test]
fn nothing_is_hovered_before_any_pointer_event() {
    let mut s = Scene::new(
        ViewportProfile::for_device(DeviceClass::Mobile),
        SceneConfig::default(),
    );
    let idle = FrameInput {
        viewport_height: 800.0,
        ..FrameInput::default()
    };
    for _ in 0..60 {
        let (next, events) = s.update(FRAME_DT, &idle);
        assert!(events.is_empty());
        s = next;
    }
    assert_eq!(s.hovered, None);
    assert!(s.cards.iter().all(|c| !c.hovered));
    assert!(approx(s.cards[0].hover_scale, IDLE_SCALE, 1e-6));
}

#[test]
fn pointer_leaving_the_canvas_drops_the_hover() {
    let (s, _) = desktop().update(FRAME_DT, &input(Vec2::ZERO));
    assert_eq!(s.hovered, Some(0));
    let gone = FrameInput {
        pointer: None,
        ..input(Vec2::ZERO)
    };
    let (s, events) = s.update(FRAME_DT, &gone);
    assert_eq!(events.as_slice(), &[HoverEvent::Leave(0)]);
    assert_eq!(s.hovered, None);
    assert!(!s.cards[0].hovered);
}

#[test]
fn update_leaves_the_previous_scene_untouched() {
    let s = desktop();
    let (next, _) = s.update(FRAME_DT, &input(Vec2::ZERO));
    assert_eq!(s.hovered, None);
    assert_eq!(s.rig.camera_position, Vec3::from_array(DESKTOP_CAMERA_POSITION));
    assert_ne!(next.rig.camera_position, Vec3::from_array(DESKTOP_CAMERA_POSITION));
}

#[test]
fn full_scroll_cycle_returns_rotation_to_start() {
    let mut s = desktop();
    let first = FrameInput {
        scroll_pixels: (SCROLL_PAGES - 1.0) * 800.0,
        ..input(AWAY)
    };
    let (next, _) = s.update(FRAME_DT, &first);
    s = next;
    assert!(s.rig.rotation_y < 0.0);
    for _ in 0..600 {
        let (next, _) = s.update(FRAME_DT, &input(AWAY));
        s = next;
    }
    let r = s.rig.rotation_y.rem_euclid(TAU);
    assert!(r.min(TAU - r) < 1e-3, "rotation {r}");
    assert!(s.banner.time > 0.0);
}

#[test]
fn banner_drifts_without_scroll() {
    let s = desktop();
    let (s, _) = s.update(FRAME_DT, &input(AWAY));
    assert_eq!(s.banner.time, 0.0);
    assert!(s.banner.texture_offset_x > 0.0);
}

#[test]
fn back_to_front_puts_the_front_card_last() {
    let s = desktop();
    let order = s.cards_back_to_front();
    assert_eq!(order.len(), CARD_COUNT);
    assert_eq!(order.first(), Some(&4));
    assert_eq!(order.last(), Some(&0));
}

#[test]
fn hover_transitions() {
    assert!(hover_transition(None, None).is_empty());
    assert!(hover_transition(Some(2), Some(2)).is_empty());
    assert_eq!(
        hover_transition(Some(1), Some(2)).as_slice(),
        &[HoverEvent::Leave(1), HoverEvent::Enter(2)]
    );
    assert_eq!(hover_transition(None, Some(3)).as_slice(), &[HoverEvent::Enter(3)]);
}

#[test]
fn fog_fades_between_near_and_far() {
    let fog = SceneConfig::default().fog;
    assert_eq!(fog.factor(0.0), 0.0);
    assert_eq!(fog.factor(FOG_NEAR), 0.0);
    assert_eq!(fog.factor(FOG_FAR), 1.0);
    assert_eq!(fog.factor(100.0), 1.0);
    assert!(approx(fog.factor((FOG_NEAR + FOG_FAR) * 0.5), 0.5, 1e-6));
}

#[test]
fn card_transforms_follow_the_rig() {
    let s = desktop();
    let m = s.card_world_transform(2).unwrap();
    let p = m.transform_point3(Vec3::ZERO);
    // Card 2 sits on +X; the rig tilt lifts it toward +Y.
    assert!(approx(p.x, CAROUSEL_RADIUS * RIG_TILT_Z.cos(), 1e-4));
    assert!(approx(p.y, CAROUSEL_RADIUS * RIG_TILT_Z.sin(), 1e-4));
    assert!(s.card_world_transform(CARD_COUNT).is_none());
}
