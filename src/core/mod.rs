pub mod animate;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod gesture;
pub mod layout;

pub use animate::*;
pub use carousel::*;
pub use config::*;
pub use constants::*;
pub use gesture::*;
pub use layout::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static STARS_WGSL: &str = include_str!("../../shaders/stars.wgsl");
