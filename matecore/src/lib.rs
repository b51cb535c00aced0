//! matecore — shared library for the mates application

pub mod assets;
pub mod repaint;
pub mod scene;

pub use repaint::RepaintController;
pub use scene::{Navigator, Scene, SceneId};
