use super::camera::Camera;
use super::constants::*;
use super::ease::damp3;
use glam::{Mat4, Vec2, Vec3};
use std::f32::consts::TAU;

/// Rotation of the carousel group for a scroll offset. Tracks the offset
/// exactly; only the camera is eased.
#[inline]
pub fn rotation_for_offset(offset: f32) -> f32 {
    -offset * TAU
}

/// Where the camera wants to be for a pointer position in NDC.
#[inline]
pub fn camera_goal(pointer: Vec2) -> Vec3 {
    Vec3::new(
        -pointer.x * CAMERA_POINTER_GAIN_X,
        pointer.y + CAMERA_HEIGHT_BIAS,
        CAMERA_REST_Z,
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigState {
    pub rotation_y: f32,
    pub camera_position: Vec3,
}

impl RigState {
    pub fn new(camera_position: Vec3) -> Self {
        Self {
            rotation_y: 0.0,
            camera_position,
        }
    }

    pub fn update(&self, scroll_offset: f32, pointer: Vec2, dt: f32) -> Self {
        Self {
            rotation_y: rotation_for_offset(scroll_offset),
            camera_position: damp3(self.camera_position, camera_goal(pointer), CAMERA_TAU_SEC, dt),
        }
    }

    /// Group transform: scroll rotation about Y over the fixed tilt about Z.
    pub fn group_transform(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_y) * Mat4::from_rotation_z(RIG_TILT_Z)
    }

    /// Camera at the rig position, re-aimed at the origin.
    pub fn camera(&self, fov_degrees: f32, aspect: f32) -> Camera {
        Camera::looking_at_origin(self.camera_position, fov_degrees, aspect)
    }
}
