//! Deterministic simulation module
//!
//! All animation logic lives here. This module must be pure and deterministic:
//! - One step per tick, velocity in pixels per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{BounceFlags, bounce_axis, step};
pub use state::{CanvasBounds, SimPhase, SimState, SpriteState};
pub use tick::{TickInput, TickOutcome, tick};
