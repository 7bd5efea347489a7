use super::constants::*;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    /// Case-insensitive match of the user agent against the mobile tokens.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        if MOBILE_UA_TOKENS.iter().any(|token| ua.contains(token)) {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    #[inline]
    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }
}

/// Camera and sizing choices made once at startup from the device class.
///
/// The profile is a plain value handed to the scene; nothing re-evaluates
/// the device class afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportProfile {
    pub device: DeviceClass,
    pub camera_position: Vec3,
    pub fov_degrees: f32,
    pub radius_factor: f32,
    pub card_scale: Vec3,
}

impl ViewportProfile {
    pub fn for_device(device: DeviceClass) -> Self {
        match device {
            DeviceClass::Mobile => Self {
                device,
                camera_position: Vec3::from_array(MOBILE_CAMERA_POSITION),
                fov_degrees: MOBILE_FOV_DEG,
                radius_factor: MOBILE_RADIUS_FACTOR,
                card_scale: Vec3::splat(MOBILE_CARD_SCALE),
            },
            DeviceClass::Desktop => Self {
                device,
                camera_position: Vec3::from_array(DESKTOP_CAMERA_POSITION),
                fov_degrees: DESKTOP_FOV_DEG,
                radius_factor: 1.0,
                card_scale: Vec3::ONE,
            },
        }
    }

    pub fn from_user_agent(user_agent: &str) -> Self {
        Self::for_device(DeviceClass::from_user_agent(user_agent))
    }
}
