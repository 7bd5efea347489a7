use super::constants::{BANNER_DRIFT_PER_SEC, BANNER_SCROLL_GAIN, BANNER_Y};
use glam::{Mat4, Vec3};
use std::f32::consts::TAU;

/// Animated material state of the scrolling banner.
///
/// `time` drives the sine distortion and only moves while the user scrolls
/// (in either direction). `texture_offset_x` drifts at a constant rate so
/// the logo strip keeps moving when idle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BannerState {
    pub time: f32,
    pub texture_offset_x: f32,
}

impl BannerState {
    pub fn update(&self, scroll_delta: f32, dt: f32) -> Self {
        Self {
            time: self.time + scroll_delta.abs() * BANNER_SCROLL_GAIN,
            texture_offset_x: self.texture_offset_x + dt.max(0.0) * BANNER_DRIFT_PER_SEC,
        }
    }

    /// Sine phase for the shader. The wobble has period 2π, so wrapping
    /// keeps precision in long sessions without changing the shape.
    #[inline]
    pub fn wrapped_time(&self) -> f32 {
        self.time.rem_euclid(TAU)
    }

    /// Texture offset in `[0, 1)`; the logo repeats every unit.
    #[inline]
    pub fn wrapped_offset(&self) -> f32 {
        self.texture_offset_x.rem_euclid(1.0)
    }
}

#[inline]
pub fn banner_transform() -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, BANNER_Y, 0.0))
}
