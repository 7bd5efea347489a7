/// Scene layout, easing and device tuning constants.
///
/// Every number the scene composes with lives here so the per-frame code
/// reads as intent rather than magic values.
// Carousel layout
pub const CARD_COUNT: usize = 8;
pub const CAROUSEL_RADIUS: f32 = 1.4;
pub const MOBILE_RADIUS_FACTOR: f32 = 0.6;
pub const IMAGE_CYCLE: usize = 10; // distinct numbered images on the server

// Device profiles
pub const MOBILE_UA_TOKENS: [&str; 4] = ["iphone", "ipad", "ipod", "android"];
pub const DESKTOP_CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 100.0];
pub const DESKTOP_FOV_DEG: f32 = 15.0;
pub const MOBILE_CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 50.0];
pub const MOBILE_FOV_DEG: f32 = 25.0;
pub const MOBILE_CARD_SCALE: f32 = 0.8;

// Card hover targets and smoothing time constants (seconds)
pub const HOVER_SCALE: f32 = 1.15;
pub const IDLE_SCALE: f32 = 1.0;
pub const SCALE_TAU_SEC: f32 = 0.1;
pub const HOVER_CORNER_RADIUS: f32 = 0.25;
pub const IDLE_CORNER_RADIUS: f32 = 0.1;
pub const CORNER_RADIUS_TAU_SEC: f32 = 0.2;
pub const HOVER_ZOOM: f32 = 1.0;
pub const IDLE_ZOOM: f32 = 1.5;
pub const ZOOM_TAU_SEC: f32 = 0.1;

// Image material defaults before the first eased frame
pub const INITIAL_CORNER_RADIUS: f32 = 0.0;
pub const INITIAL_ZOOM: f32 = 1.0;

// Card geometry: bend depth, plane size, tessellation
pub const CARD_BEND: f32 = 0.1;
pub const CARD_WIDTH: f32 = 1.0;
pub const CARD_HEIGHT: f32 = 1.0;
pub const CARD_SEGMENTS: u32 = 20;

// Rig
pub const RIG_TILT_Z: f32 = 0.15;
pub const CAMERA_POINTER_GAIN_X: f32 = 2.0;
pub const CAMERA_HEIGHT_BIAS: f32 = 1.5;
pub const CAMERA_REST_Z: f32 = 10.0;
pub const CAMERA_TAU_SEC: f32 = 0.3;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Banner
pub const BANNER_RADIUS: f32 = 1.6;
pub const BANNER_HEIGHT: f32 = 0.14;
pub const BANNER_RADIAL_SEGMENTS: u32 = 128;
pub const BANNER_HEIGHT_SEGMENTS: u32 = 16;
pub const BANNER_Y: f32 = -0.15;
pub const BANNER_TEXTURE_REPEAT: [f32; 2] = [30.0, 1.0];
pub const BANNER_SCROLL_GAIN: f32 = 4.0; // sine time per unit of scroll delta
pub const BANNER_DRIFT_PER_SEC: f32 = 0.5; // texture offset per second

// Scroll range
pub const SCROLL_PAGES: f32 = 4.0;
pub const SCROLL_DAMPING_TAU_SEC: f32 = 0.25;

// Fog (#aa7799)
pub const FOG_COLOR: [f32; 3] = [0xaa as f32 / 255.0, 0x77 as f32 / 255.0, 0x99 as f32 / 255.0];
pub const FOG_NEAR: f32 = 8.5;
pub const FOG_FAR: f32 = 12.0;

// Environment
pub const ENVIRONMENT_PRESET: &str = "dawn";
pub const ENVIRONMENT_BLUR: f32 = 0.5;

// Every card links to the same survey.
pub const SURVEY_URL: &str = "https://forms.gle/jAG7WGrGiWFQLVSz9";
