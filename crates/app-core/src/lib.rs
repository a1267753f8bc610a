pub mod anim;
pub mod constants;
pub mod mesh;
pub mod state;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use anim::*;
pub use constants::*;
pub use mesh::*;
pub use state::*;
