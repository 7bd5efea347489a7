use super::constants::{IMAGE_CYCLE, MOBILE_RADIUS_FACTOR};
use super::profile::DeviceClass;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Placement of one card on the ring.
#[derive(Clone, Debug, PartialEq)]
pub struct CardDescriptor {
    pub index: usize,
    pub image_url: String,
    pub position: Vec3,
    pub rotation_y: f32,
}

/// Image for card `index`. Cycles through the ten served images even when
/// the ring holds more than ten cards.
pub fn image_url(index: usize) -> String {
    format!("/img{}_.png", index % IMAGE_CYCLE + 1)
}

#[inline]
pub fn card_angle(index: usize, count: usize) -> f32 {
    index as f32 / count as f32 * TAU
}

#[inline]
pub fn effective_radius(radius: f32, device: DeviceClass) -> f32 {
    if device.is_mobile() {
        radius * MOBILE_RADIUS_FACTOR
    } else {
        radius
    }
}

/// Lay `count` cards evenly on a circle in the XZ plane, each facing the
/// centre.
pub fn layout(count: usize, radius: f32, device: DeviceClass) -> Vec<CardDescriptor> {
    let r = effective_radius(radius, device);
    (0..count)
        .map(|i| {
            let angle = card_angle(i, count);
            CardDescriptor {
                index: i,
                image_url: image_url(i),
                position: Vec3::new(angle.sin() * r, 0.0, angle.cos() * r),
                rotation_y: PI + angle,
            }
        })
        .collect()
}
