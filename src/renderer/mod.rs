//! Rendering module
//!
//! The simulation never draws. Each frame the app builds a `Frame` view and
//! hands it to a `Renderer` backend:
//! - `LogRenderer`: headless, logs what would be drawn
//! - `CanvasRenderer`: browser Canvas 2D (wasm32 only)

pub mod log_renderer;
#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use log_renderer::LogRenderer;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use glam::Vec2;

use crate::color::LabelColor;
use crate::sim::{CanvasBounds, SimPhase};
use crate::sprite::Sprite;

/// Everything needed to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub canvas: CanvasBounds,
    pub sprite: &'a Sprite,
    /// Sprite center; the label is centred here too
    pub pos: Vec2,
    pub label: &'a str,
    pub label_color: LabelColor,
    pub phase: SimPhase,
}

/// A drawing backend
pub trait Renderer {
    fn draw(&mut self, frame: &Frame<'_>);
}

/// Fixed scene colors (CSS)
pub mod colors {
    pub const BACKGROUND: &str = "#ffffff";
    pub const GLYPH: &str = "#000000";
}
