//! Public API: host seams and the JS facade.

pub mod buffer_scene;
pub mod console_log;
pub mod host;

pub mod wasm {
    pub use crate::simulation::DiceTray;
}
