pub mod banner;
pub mod camera;
pub mod card;
pub mod carousel;
pub mod constants;
pub mod ease;
pub mod geometry;
pub mod pick;
pub mod profile;
pub mod rig;
pub mod scene;
pub mod scroll;

pub use card::Navigator;
pub use profile::ViewportProfile;
pub use scene::{FrameInput, HoverEvent, Scene, SceneConfig};

// Shaders bundled as string constants
pub static SKY_WGSL: &str = include_str!("../../shaders/sky.wgsl");
pub static CARDS_WGSL: &str = include_str!("../../shaders/cards.wgsl");
pub static BANNER_WGSL: &str = include_str!("../../shaders/banner.wgsl");
