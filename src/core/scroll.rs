use super::constants::{SCROLL_DAMPING_TAU_SEC, SCROLL_PAGES};
use super::ease::damp;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Content height in viewport heights.
    pub pages: f32,
    /// Wrap around at either end instead of clamping.
    pub infinite: bool,
    pub damping_tau: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            pages: SCROLL_PAGES,
            infinite: true,
            damping_tau: SCROLL_DAMPING_TAU_SEC,
        }
    }
}

/// What consumers see of the scroll range each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Progress in `[0, 1)`.
    pub offset: f32,
    /// Signed change of the progress during the last frame.
    pub delta: f32,
}

/// Scroll-range controller.
///
/// Gestures move `target`; `current` eases toward it. Both live on an
/// unwrapped number line so easing across the seam of an infinite range
/// takes the short way round. Only [`ScrollControls::state`] wraps.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollControls {
    config: ScrollConfig,
    target: f32,
    current: f32,
    delta: f32,
}

impl ScrollControls {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            target: 0.0,
            current: 0.0,
            delta: 0.0,
        }
    }

    #[inline]
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Scrollable distance in pixels: the content height minus the one
    /// viewport that is always on screen.
    #[inline]
    pub fn range_pixels(&self, viewport_height: f32) -> f32 {
        (self.config.pages - 1.0).max(1.0) * viewport_height.max(1.0)
    }

    /// Apply a gesture of `pixels` against a viewport `viewport_height`
    /// pixels tall. Positive scrolls forward.
    pub fn scroll_by_pixels(&mut self, pixels: f32, viewport_height: f32) {
        let range = self.range_pixels(viewport_height);
        self.target += pixels / range;
        if !self.config.infinite {
            self.target = self.target.clamp(0.0, 1.0);
        }
    }

    pub fn update(&self, dt: f32) -> Self {
        let mut next = self.clone();
        next.current = damp(self.current, self.target, self.config.damping_tau, dt);
        next.delta = next.current - self.current;
        if next.config.infinite {
            // Rebase whole turns away so the unwrapped values stay small.
            let turns = next.current.floor();
            if turns != 0.0 {
                next.current -= turns;
                next.target -= turns;
            }
        }
        next
    }

    pub fn offset(&self) -> f32 {
        if self.config.infinite {
            let wrapped = self.current.rem_euclid(1.0);
            if wrapped >= 1.0 {
                0.0
            } else {
                wrapped
            }
        } else {
            self.current.clamp(0.0, 1.0)
        }
    }

    pub fn state(&self) -> ScrollState {
        ScrollState {
            offset: self.offset(),
            delta: self.delta,
        }
    }
}
