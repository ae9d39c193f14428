//! Label color

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{COLOR_CHANNEL_MAX, COLOR_CHANNEL_MIN};

/// An sRGB label color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl LabelColor {
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Random color with every channel in `COLOR_CHANNEL_MIN..=COLOR_CHANNEL_MAX`
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut channel = || rng.random_range(COLOR_CHANNEL_MIN..=COLOR_CHANNEL_MAX);
        Self::new(channel(), channel(), channel())
    }

    /// `#rrggbb`, usable directly as a CSS color
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for LabelColor {
    fn default() -> Self {
        Self::BLACK
    }
}
