//! Startup settings
//!
//! Defaults come from `consts`. The browser build persists settings in
//! LocalStorage; the native build reads an optional JSON file.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::CanvasBounds;
use crate::sprite::GlyphSprite;

/// Settings that can't be used as-is
#[derive(Debug)]
pub enum SettingsError {
    /// Canvas width or height is zero
    EmptyCanvas { width: u32, height: u32 },
    /// Frame rate of zero
    ZeroFps,
    /// Display name is blank
    EmptyName,
    /// Glyph size not positive
    BadGlyphSize(f32),
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::EmptyCanvas { width, height } => {
                write!(f, "canvas must be non-empty, got {width}x{height}")
            }
            SettingsError::ZeroFps => write!(f, "fps must be at least 1"),
            SettingsError::EmptyName => write!(f, "display name is empty"),
            SettingsError::BadGlyphSize(size) => write!(f, "glyph size must be positive, got {size}"),
            SettingsError::Io(e) => write!(f, "settings file: {e}"),
            SettingsError::Parse(e) => write!(f, "settings JSON: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Startup configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Label drawn over the sprite (also the window/page title)
    pub display_name: String,

    // === Canvas ===
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Ticks (and redraws) per second
    pub fps: u32,

    // === Motion ===
    /// Starting velocity in pixels per tick
    pub initial_velocity: Vec2,

    // === Sprite ===
    /// Image to bounce; `None` goes straight to the glyph
    pub sprite_image_path: Option<String>,
    pub glyph: String,
    pub glyph_size: f32,

    /// RNG seed for label colors; `None` seeds from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_name: DISPLAY_NAME.to_string(),

            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            fps: FPS,

            initial_velocity: Vec2::new(INITIAL_DX, INITIAL_DY),

            sprite_image_path: Some(SPRITE_IMAGE_PATH.to_string()),
            glyph: GLYPH.to_string(),
            glyph_size: GLYPH_SIZE,

            seed: None,
        }
    }
}

impl Settings {
    /// Check the settings can drive a session
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(SettingsError::EmptyCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if self.fps == 0 {
            return Err(SettingsError::ZeroFps);
        }
        if self.display_name.trim().is_empty() {
            return Err(SettingsError::EmptyName);
        }
        if self.glyph_size.is_nan() || self.glyph_size <= 0.0 {
            return Err(SettingsError::BadGlyphSize(self.glyph_size));
        }
        Ok(())
    }

    pub fn bounds(&self) -> CanvasBounds {
        CanvasBounds::new(self.canvas_width as f32, self.canvas_height as f32)
    }

    /// Whole milliseconds between frames
    pub fn frame_delay_ms(&self) -> u32 {
        1000 / self.fps.max(1)
    }

    /// Ticks in ten seconds at the target rate
    pub fn ten_seconds_of_ticks(&self) -> u32 {
        self.fps.saturating_mul(10)
    }

    pub fn glyph_sprite(&self) -> GlyphSprite {
        GlyphSprite::new(self.glyph.clone(), self.glyph_size)
    }

    pub fn seed_or_clock(&self) -> u64 {
        self.seed.unwrap_or_else(crate::clock_seed)
    }

    /// Parse and validate settings JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Compact JSON, the form kept in LocalStorage
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Use `result` if it's usable, otherwise log why and use defaults
    fn or_default(result: Result<Self, SettingsError>) -> Self {
        match result {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring settings ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "bouncing_sprite_settings";

    /// Environment variable naming a native settings file
    pub const SETTINGS_ENV: &'static str = "BOUNCE_SETTINGS";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::or_default(Self::from_json(&json));
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => {
                    let _ = storage.set_item(Self::STORAGE_KEY, &json);
                    log::info!("Settings saved");
                }
                Err(e) => log::warn!("Settings not saved: {e}"),
            }
        }
    }

    /// Read settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the file named by `BOUNCE_SETTINGS`, or defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var(Self::SETTINGS_ENV) {
            Ok(path) => Self::load_or_init(&path),
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load `path`; if there is no file yet, write the defaults there to edit later
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_init(path: impl AsRef<std::path::Path>) -> Self {
        let path = path.as_ref();
        if path.exists() {
            log::info!("Loading settings from {}", path.display());
            return Self::or_default(Self::load_from_file(path));
        }

        let settings = Self::default();
        match settings.save_to_file(path) {
            Ok(()) => log::info!("Wrote default settings to {}", path.display()),
            Err(e) => log::warn!("Couldn't write default settings to {}: {e}", path.display()),
        }
        settings
    }

    /// Write settings as pretty JSON
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(&self, path: impl AsRef<std::path::Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.frame_delay_ms(), 16);
        assert_eq!(settings.bounds(), CanvasBounds::new(800.0, 600.0));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "display_name": "Ada", "fps": 30 }"#)
            .expect("valid settings");
        assert_eq!(settings.display_name, "Ada");
        assert_eq!(settings.fps, 30);
        assert_eq!(settings.canvas_width, CANVAS_WIDTH);
        assert_eq!(settings.frame_delay_ms(), 33);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let err = Settings::from_json(r#"{ "canvas_width": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::EmptyCanvas { width: 0, .. }));

        let err = Settings::from_json(r#"{ "fps": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::ZeroFps));

        let err = Settings::from_json(r#"{ "display_name": "  " }"#).unwrap_err();
        assert!(matches!(err, SettingsError::EmptyName));

        let err = Settings::from_json("not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_or_default_recovers() {
        let settings = Settings::or_default(Err(SettingsError::ZeroFps));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            display_name: "Stored".to_string(),
            seed: Some(3),
            ..Default::default()
        };
        let json = settings.to_json().expect("serialize");
        assert_eq!(Settings::from_json(&json).expect("parse"), settings);
    }

    #[test]
    fn test_ten_seconds_of_ticks_saturates() {
        assert_eq!(Settings::default().ten_seconds_of_ticks(), 600);

        let settings = Settings {
            fps: u32::MAX,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
        assert_eq!(settings.ten_seconds_of_ticks(), u32::MAX);
    }

    #[test]
    fn test_pinned_seed() {
        let settings = Settings {
            seed: Some(9),
            ..Default::default()
        };
        assert_eq!(settings.seed_or_clock(), 9);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("bouncing_sprite_{}.json", std::process::id()));
        let settings = Settings {
            display_name: "Round Trip".to_string(),
            sprite_image_path: None,
            ..Default::default()
        };
        settings.save_to_file(&path).expect("save");
        let loaded = Settings::load_from_file(&path).expect("load");
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_or_init_writes_defaults() {
        let path = std::env::temp_dir().join(format!("bouncing_sprite_init_{}.json", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let settings = Settings::load_or_init(&path);
        assert_eq!(settings, Settings::default());
        assert!(path.exists());

        // Edits to the written file are picked up next time
        let edited = Settings {
            display_name: "Edited".to_string(),
            ..Default::default()
        };
        edited.save_to_file(&path).expect("save");
        let reloaded = Settings::load_or_init(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(reloaded.display_name, "Edited");
    }
}
