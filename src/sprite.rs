//! Sprite selection: image with a glyph fallback
//!
//! The sprite kind is chosen once at startup. Both kinds expose the same
//! half-extent accessor, which is all the simulation needs.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{GLYPH_LINE_HEIGHT, MAX_SPRITE_HEIGHT_FRACTION};

/// Why an image sprite couldn't be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpriteError {
    /// No file at the configured path
    NotFound(String),
    /// File exists but couldn't be decoded
    Unreadable { path: String, reason: String },
}

impl SpriteError {
    /// Decode failure, keeping the backend's error text
    pub fn unreadable(path: &str, reason: impl fmt::Debug) -> Self {
        SpriteError::Unreadable {
            path: path.to_string(),
            reason: format!("{reason:?}"),
        }
    }
}

impl fmt::Display for SpriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpriteError::NotFound(path) => write!(f, "sprite image not found: {path}"),
            SpriteError::Unreadable { path, reason } => {
                write!(f, "sprite image {path} unreadable: {reason}")
            }
        }
    }
}

impl std::error::Error for SpriteError {}

/// Reports the pixel size of an image without keeping it around
pub trait ImageDimensions {
    fn dimensions(&self, path: &str) -> Result<(u32, u32), SpriteError>;
}

impl<F> ImageDimensions for F
where
    F: Fn(&str) -> Result<(u32, u32), SpriteError>,
{
    fn dimensions(&self, path: &str) -> Result<(u32, u32), SpriteError> {
        self(path)
    }
}

/// Reads image headers from the filesystem
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDimensions;

#[cfg(not(target_arch = "wasm32"))]
impl ImageDimensions for FileDimensions {
    fn dimensions(&self, path: &str) -> Result<(u32, u32), SpriteError> {
        if !std::path::Path::new(path).exists() {
            return Err(SpriteError::NotFound(path.to_string()));
        }
        image::image_dimensions(path).map_err(|e| SpriteError::Unreadable {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }
}

/// A bitmap sprite, already scaled to its on-canvas size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSprite {
    pub path: String,
    pub width: u32,
    pub height: u32,
}

impl ImageSprite {
    /// Scale an image down so it is at most 20% of the canvas height.
    ///
    /// Aspect ratio is preserved; smaller images are left alone.
    pub fn fit_to_canvas(path: impl Into<String>, width: u32, height: u32, canvas_height: u32) -> Self {
        let max_h = (canvas_height as f32 * MAX_SPRITE_HEIGHT_FRACTION) as u32;
        let (width, height) = if height > max_h {
            let scale = max_h as f32 / height as f32;
            ((width as f32 * scale) as u32, max_h)
        } else {
            (width, height)
        };
        Self {
            path: path.into(),
            width,
            height,
        }
    }
}

/// A text glyph drawn in place of a missing image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphSprite {
    pub glyph: String,
    pub font_px: f32,
    pub width: f32,
    pub height: f32,
}

impl GlyphSprite {
    /// Fixed-size glyph box: one em wide, one line tall
    pub fn new(glyph: impl Into<String>, font_px: f32) -> Self {
        Self {
            glyph: glyph.into(),
            font_px,
            width: font_px,
            height: font_px * GLYPH_LINE_HEIGHT,
        }
    }
}

/// The sprite drawn under the label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Sprite {
    Image(ImageSprite),
    Glyph(GlyphSprite),
}

impl Sprite {
    /// Pick the image sprite if its size can be read, else fall back to the glyph.
    ///
    /// Never fails: a missing or broken image is logged and replaced.
    pub fn select<P: ImageDimensions + ?Sized>(
        image_path: Option<&str>,
        source: &P,
        canvas_height: u32,
        fallback: GlyphSprite,
    ) -> Self {
        let Some(path) = image_path else {
            log::info!("No sprite image configured, using glyph {}", fallback.glyph);
            return Sprite::Glyph(fallback);
        };

        match source.dimensions(path) {
            Ok((w, h)) => {
                let image = ImageSprite::fit_to_canvas(path, w, h, canvas_height);
                log::info!(
                    "Loaded sprite image {} ({}x{} -> {}x{})",
                    path,
                    w,
                    h,
                    image.width,
                    image.height
                );
                Sprite::Image(image)
            }
            Err(e) => {
                log::warn!("{e}; falling back to glyph {}", fallback.glyph);
                Sprite::Glyph(fallback)
            }
        }
    }

    /// Half-width and half-height, integer-halved
    pub fn half_extents(&self) -> Vec2 {
        let (w, h) = match self {
            Sprite::Image(img) => (img.width as f32, img.height as f32),
            Sprite::Glyph(glyph) => (glyph.width, glyph.height),
        };
        Vec2::new((w / 2.0).floor(), (h / 2.0).floor())
    }

    pub fn is_glyph(&self) -> bool {
        matches!(self, Sprite::Glyph(_))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Sprite::Image(_) => "image",
            Sprite::Glyph(_) => "glyph",
        }
    }
}
