//! Bouncing Sprite - a sprite bouncing around a canvas under a name label
//!
//! Core modules:
//! - `sim`: Deterministic simulation (step function, wall collisions, pause state)
//! - `sprite`: Image sprite with glyph fallback
//! - `color`: Label recoloring
//! - `scheduler`: Fixed-period tick scheduling
//! - `renderer`: Renderer seam (headless log backend, browser Canvas 2D backend)
//! - `app`: Wires everything together for the host loop

pub mod app;
pub mod color;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod sim;
pub mod sprite;

pub use app::App;
pub use color::LabelColor;
pub use settings::{Settings, SettingsError};
pub use sprite::{GlyphSprite, ImageSprite, Sprite, SpriteError};

/// Startup configuration defaults
pub mod consts {
    /// Name shown on top of the sprite
    pub const DISPLAY_NAME: &str = "Kenn Martin C. De La Cierra";
    /// Sprite image, relative to the working directory (or page)
    pub const SPRITE_IMAGE_PATH: &str = "burger.png";

    /// Canvas dimensions (px)
    pub const CANVAS_WIDTH: u32 = 800;
    pub const CANVAS_HEIGHT: u32 = 600;

    /// Target frame rate; one simulation tick per frame
    pub const FPS: u32 = 60;
    /// Catch-up cap so a stalled host doesn't fast-forward the sprite
    pub const MAX_CATCH_UP_TICKS: u32 = 8;
    /// Longest frame gap the scheduler will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Initial velocity (px per tick)
    pub const INITIAL_DX: f32 = 4.0;
    pub const INITIAL_DY: f32 = 3.0;

    /// Images taller than this fraction of the canvas are scaled down
    pub const MAX_SPRITE_HEIGHT_FRACTION: f32 = 0.2;

    /// Glyph fallback
    pub const GLYPH: &str = "\u{1F354}";
    pub const GLYPH_SIZE: f32 = 64.0;
    /// Glyph box height relative to font size (line height)
    pub const GLYPH_LINE_HEIGHT: f32 = 1.25;

    /// Label font
    pub const LABEL_FONT: &str = "bold 20px Helvetica";

    /// Random label channels are drawn from this range (keeps text readable on white)
    pub const COLOR_CHANNEL_MIN: u8 = 64;
    pub const COLOR_CHANNEL_MAX: u8 = 255;
}

/// Seed derived from the wall clock, used when settings don't pin one
#[cfg(not(target_arch = "wasm32"))]
pub fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
pub fn clock_seed() -> u64 {
    js_sys::Date::now() as u64
}
