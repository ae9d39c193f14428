//! Wall collision detection and response
//!
//! Axis-aligned bounding box against the four canvas edges. Each axis is
//! handled independently: contact with either edge reflects that axis'
//! velocity. Position is never pushed back inside, so the sprite may overshoot
//! an edge by one tick before the reflected velocity carries it back.

use glam::Vec2;

use super::state::{CanvasBounds, SpriteState};

/// Which axes bounced during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BounceFlags {
    /// Left or right wall hit (dx flipped)
    pub horizontal: bool,
    /// Top or bottom wall hit (dy flipped)
    pub vertical: bool,
}

impl BounceFlags {
    /// Any wall hit this step. A corner hit still counts once.
    pub fn any(&self) -> bool {
        self.horizontal || self.vertical
    }
}

/// Resolve one axis against `[0, extent]`.
///
/// `pos` is the already-advanced center. Returns the (possibly reflected)
/// velocity and whether contact happened. Touching an edge exactly counts as
/// contact.
#[inline]
pub fn bounce_axis(pos: f32, vel: f32, half: f32, extent: f32) -> (f32, bool) {
    if pos + half >= extent || pos - half <= 0.0 {
        (-vel, true)
    } else {
        (vel, false)
    }
}

/// Advance the sprite by one tick and reflect off the canvas edges
pub fn step(sprite: &SpriteState, bounds: &CanvasBounds) -> (SpriteState, BounceFlags) {
    let pos = sprite.pos + sprite.vel;

    let (dx, horizontal) = bounce_axis(pos.x, sprite.vel.x, sprite.half.x, bounds.width);
    let (dy, vertical) = bounce_axis(pos.y, sprite.vel.y, sprite.half.y, bounds.height);

    let next = SpriteState {
        pos,
        vel: Vec2::new(dx, dy),
        half: sprite.half,
    };
    (next, BounceFlags { horizontal, vertical })
}
