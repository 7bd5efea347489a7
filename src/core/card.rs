use super::carousel::CardDescriptor;
use super::constants::*;
use super::ease::damp;
use glam::{Mat4, Quat, Vec3};

/// Capability to leave the page. Injected so clicks stay testable.
pub trait Navigator {
    fn navigate(&mut self, url: &str);
}

/// Pointer transitions delivered to a single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardEvent {
    Enter,
    Leave,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardState {
    pub descriptor: CardDescriptor,
    /// Device-dependent size applied before the hover multiplier.
    pub base_scale: Vec3,
    pub hovered: bool,
    pub hover_scale: f32,
    pub corner_radius: f32,
    pub zoom: f32,
}

#[inline]
pub fn scale_target(hovered: bool) -> f32 {
    if hovered {
        HOVER_SCALE
    } else {
        IDLE_SCALE
    }
}

#[inline]
pub fn corner_radius_target(hovered: bool) -> f32 {
    if hovered {
        HOVER_CORNER_RADIUS
    } else {
        IDLE_CORNER_RADIUS
    }
}

#[inline]
pub fn zoom_target(hovered: bool) -> f32 {
    if hovered {
        HOVER_ZOOM
    } else {
        IDLE_ZOOM
    }
}

impl CardState {
    pub fn new(descriptor: CardDescriptor, base_scale: Vec3) -> Self {
        Self {
            descriptor,
            base_scale,
            hovered: false,
            hover_scale: IDLE_SCALE,
            corner_radius: INITIAL_CORNER_RADIUS,
            zoom: INITIAL_ZOOM,
        }
    }

    pub fn handle(&mut self, event: CardEvent) {
        self.hovered = matches!(event, CardEvent::Enter);
    }

    /// Every card leads to the same survey, whichever one was clicked.
    pub fn click(&self, navigator: &mut dyn Navigator) {
        navigator.navigate(SURVEY_URL);
    }

    /// Ease the animated parameters one frame toward their hover targets.
    pub fn update(&self, dt: f32) -> Self {
        Self {
            hover_scale: damp(self.hover_scale, scale_target(self.hovered), SCALE_TAU_SEC, dt),
            corner_radius: damp(
                self.corner_radius,
                corner_radius_target(self.hovered),
                CORNER_RADIUS_TAU_SEC,
                dt,
            ),
            zoom: damp(self.zoom, zoom_target(self.hovered), ZOOM_TAU_SEC, dt),
            ..self.clone()
        }
    }

    #[inline]
    pub fn scale(&self) -> Vec3 {
        self.base_scale * self.hover_scale
    }

    /// Transform relative to the rig group.
    pub fn local_transform(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale(),
            Quat::from_rotation_y(self.descriptor.rotation_y),
            self.descriptor.position,
        )
    }
}
