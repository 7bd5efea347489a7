use glam::Vec3;

/// Fraction of the remaining distance covered in `dt` seconds when easing
/// with time constant `tau`.
///
/// Always within `[0, 1]`, so a damped value never overshoots its target.
#[inline]
pub fn damp_factor(tau: f32, dt: f32) -> f32 {
    if tau <= 0.0 {
        return 1.0;
    }
    1.0 - (-dt.max(0.0) / tau).exp()
}

/// Exponentially damp `current` toward `target`.
#[inline]
pub fn damp(current: f32, target: f32, tau: f32, dt: f32) -> f32 {
    current + (target - current) * damp_factor(tau, dt)
}

/// Component-wise [`damp`] for vectors.
#[inline]
pub fn damp3(current: Vec3, target: Vec3, tau: f32, dt: f32) -> Vec3 {
    current.lerp(target, damp_factor(tau, dt))
}
