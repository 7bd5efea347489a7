/// Web shell and renderer constants.
///
/// Scene tuning lives in `core::constants`; these only concern the page,
/// input mapping and GPU resources.
// DOM
pub const CANVAS_ID: &str = "app-canvas";

// Static assets
pub const LOGO_URL: &str = "/logo1.png";

// Input mapping
pub const WHEEL_LINE_PX: f32 = 16.0; // DOM_DELTA_LINE → pixels
pub const KEY_SCROLL_PX: f32 = 40.0; // arrow keys
pub const KEY_PAGE_FRACTION: f32 = 0.9; // PageUp/PageDown/Space as a share of the viewport

// Renderer
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
pub const MAX_ANISOTROPY: u16 = 16;
pub const PLACEHOLDER_RGBA: [u8; 4] = [200, 200, 200, 255];

// Frame pacing: clamp long gaps (tab switches) so easing does not jump.
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
