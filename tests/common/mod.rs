// Host-side access to the pure scene modules.
// The main crate is wasm-only, so we include the pure-Rust modules directly.
#![allow(dead_code)]

pub mod scene_core {
    pub mod banner {
        include!("../../src/core/banner.rs");
    }
    pub mod camera {
        include!("../../src/core/camera.rs");
    }
    pub mod card {
        include!("../../src/core/card.rs");
    }
    pub mod carousel {
        include!("../../src/core/carousel.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod ease {
        include!("../../src/core/ease.rs");
    }
    pub mod geometry {
        include!("../../src/core/geometry.rs");
    }
    pub mod pick {
        include!("../../src/core/pick.rs");
    }
    pub mod profile {
        include!("../../src/core/profile.rs");
    }
    pub mod rig {
        include!("../../src/core/rig.rs");
    }
    pub mod scene {
        include!("../../src/core/scene.rs");
    }
    pub mod scroll {
        include!("../../src/core/scroll.rs");
    }
}

use scene_core::card::Navigator;

/// Records every navigation instead of leaving the page.
#[derive(Default)]
pub struct RecordingNavigator {
    pub urls: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, url: &str) {
        self.urls.push(url.to_string());
    }
}

pub const FRAME_DT: f32 = 1.0 / 60.0;

#[inline]
pub fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
