//! Simulation state and core types
//!
//! Everything the step function reads or writes lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::color::LabelColor;
use crate::consts::*;

/// Current phase of the animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SimPhase {
    /// Sprite moves every tick
    #[default]
    Running,
    /// Sprite is frozen
    Paused,
}

impl SimPhase {
    /// The other phase
    pub fn toggled(self) -> Self {
        match self {
            SimPhase::Running => SimPhase::Paused,
            SimPhase::Paused => SimPhase::Running,
        }
    }
}

/// Canvas size, fixed for the process lifetime
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub width: f32,
    pub height: f32,
}

impl CanvasBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Canvas center, integer-halved so the sprite starts on a pixel
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.width / 2.0).floor(), (self.height / 2.0).floor())
    }
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32)
    }
}

/// The bouncing sprite's kinematic state
///
/// `pos` is the sprite center. The bounding box may poke past a canvas edge by
/// at most one tick of velocity before the next reflection brings it back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteState {
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    /// Half-width and half-height of the sprite's bounding box
    pub half: Vec2,
}

impl SpriteState {
    pub fn new(pos: Vec2, vel: Vec2, half: Vec2) -> Self {
        Self { pos, vel, half }
    }

    /// Sprite centred on the canvas moving at the default velocity
    pub fn centered(bounds: &CanvasBounds, half: Vec2) -> Self {
        Self::new(bounds.center(), Vec2::new(INITIAL_DX, INITIAL_DY), half)
    }

    /// Bounding box (min corner, max corner)
    pub fn aabb(&self) -> (Vec2, Vec2) {
        (self.pos - self.half, self.pos + self.half)
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct SimState {
    pub sprite: SpriteState,
    pub bounds: CanvasBounds,
    pub phase: SimPhase,
    /// Current label color (changes only on bounce ticks)
    pub label_color: LabelColor,
    /// Seed the RNG was created from
    pub seed: u64,
    /// Running ticks so far (paused ticks don't count)
    pub time_ticks: u64,
    /// Ticks on which at least one wall was hit
    pub bounce_count: u64,
    rng: Pcg32,
}

impl SimState {
    pub fn new(sprite: SpriteState, bounds: CanvasBounds, seed: u64) -> Self {
        Self {
            sprite,
            bounds,
            phase: SimPhase::Running,
            label_color: LabelColor::BLACK,
            seed,
            time_ticks: 0,
            bounce_count: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.phase == SimPhase::Paused
    }

    /// Flip Running/Paused, returning the new phase
    pub fn toggle_pause(&mut self) -> SimPhase {
        self.phase = self.phase.toggled();
        self.phase
    }

    /// RNG used for recoloring
    pub fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_integer_halved() {
        let bounds = CanvasBounds::new(801.0, 601.0);
        assert_eq!(bounds.center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_toggle_pause_round_trip() {
        let bounds = CanvasBounds::default();
        let mut state = SimState::new(SpriteState::centered(&bounds, Vec2::splat(32.0)), bounds, 1);
        assert_eq!(state.toggle_pause(), SimPhase::Paused);
        assert!(state.is_paused());
        assert_eq!(state.toggle_pause(), SimPhase::Running);
        assert!(!state.is_paused());
    }

    #[test]
    fn test_aabb() {
        let sprite = SpriteState::new(Vec2::new(100.0, 50.0), Vec2::ZERO, Vec2::new(40.0, 30.0));
        let (min, max) = sprite.aabb();
        assert_eq!(min, Vec2::new(60.0, 20.0));
        assert_eq!(max, Vec2::new(140.0, 80.0));
    }
}
