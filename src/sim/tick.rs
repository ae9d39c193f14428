//! Fixed timestep simulation tick
//!
//! Advances the sprite by one tick and decides whether the label is recolored.

use super::collision::{BounceFlags, step};
use super::state::{SimPhase, SimState};
use crate::color::LabelColor;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pause toggle (space)
    pub toggle_pause: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickOutcome {
    /// Whether the sprite actually moved this tick
    pub advanced: bool,
    pub bounces: BounceFlags,
    /// New label color, set only on bounce ticks
    pub recolor: Option<LabelColor>,
    /// Phase after the tick if the input changed it
    pub phase_changed: Option<SimPhase>,
}

/// Advance the simulation by one tick
pub fn tick(state: &mut SimState, input: &TickInput) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    if input.toggle_pause {
        let phase = state.toggle_pause();
        log::info!("{}", if phase == SimPhase::Paused { "Paused" } else { "Resumed" });
        outcome.phase_changed = Some(phase);
    }

    if state.is_paused() {
        return outcome;
    }

    let (sprite, bounces) = step(&state.sprite, &state.bounds);
    state.sprite = sprite;
    state.time_ticks += 1;
    outcome.advanced = true;
    outcome.bounces = bounces;

    // One recolor per tick, even for a corner hit
    if bounces.any() {
        let color = LabelColor::random(state.rng_mut());
        state.label_color = color;
        state.bounce_count += 1;
        outcome.recolor = Some(color);
        log::debug!(
            "Bounce at tick {} ({:?}), label -> {}",
            state.time_ticks,
            bounces,
            color.to_hex()
        );
    }

    outcome
}
