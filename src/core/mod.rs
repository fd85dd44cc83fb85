pub mod bass;
pub mod camera;
pub mod constants;
pub mod glyph;
pub mod lifecycle;
pub mod particles;
pub mod phase;
pub mod scene;
pub mod sigil;
pub mod sparks;
pub mod sprites;
pub mod terminal;
pub mod textures;
pub mod timeline;
pub mod uniforms;

pub use bass::bass_energy;
pub use camera::Viewport;
pub use phase::Phase;
pub use scene::{FrameInput, SceneParams, SceneState};

// Shaders bundled as string constants
pub static SIGIL_WGSL: &str = include_str!("../../shaders/sigil.wgsl");
pub static BILLBOARD_WGSL: &str = include_str!("../../shaders/billboard.wgsl");
