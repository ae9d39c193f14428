//! Application wiring
//!
//! Owns the settings, the chosen sprite, the simulation state and the frame
//! clock. Hosts (the browser loop, the native headless loop) only call
//! `frame`/`run_ticks`, `toggle_pause` and `render`.

use crate::renderer::{Frame, Renderer};
use crate::scheduler::FrameClock;
use crate::settings::Settings;
use crate::sim::{SimPhase, SimState, SpriteState, TickInput, tick};
use crate::sprite::Sprite;

/// Summary of the ticks run for one host frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    pub ticks: u32,
    /// Ticks that moved the sprite
    pub advanced: u32,
    pub recolors: u32,
}

impl FrameReport {
    fn absorb(&mut self, other: FrameReport) {
        self.ticks += other.ticks;
        self.advanced += other.advanced;
        self.recolors += other.recolors;
    }
}

pub struct App {
    pub settings: Settings,
    pub sprite: Sprite,
    pub state: SimState,
    clock: FrameClock,
    /// Input applied on the next tick
    input: TickInput,
}

impl App {
    pub fn new(settings: Settings, sprite: Sprite, seed: u64) -> Self {
        let bounds = settings.bounds();
        let sprite_state = SpriteState::new(
            bounds.center(),
            settings.initial_velocity,
            sprite.half_extents(),
        );
        log::info!(
            "Canvas {}x{} at {} fps, {} sprite with half-extents {:?}, seed {}",
            settings.canvas_width,
            settings.canvas_height,
            settings.fps,
            sprite.kind_name(),
            sprite_state.half,
            seed
        );

        Self {
            clock: FrameClock::new(settings.frame_delay_ms()),
            state: SimState::new(sprite_state, bounds, seed),
            input: TickInput::default(),
            settings,
            sprite,
        }
    }

    /// Queue a pause toggle for the next tick. Two toggles before a tick cancel out.
    pub fn toggle_pause(&mut self) {
        self.input.toggle_pause = !self.input.toggle_pause;
    }

    pub fn phase(&self) -> SimPhase {
        self.state.phase
    }

    /// Run however many ticks `dt` seconds of host time is worth
    pub fn frame(&mut self, dt: f32) -> FrameReport {
        let due = self.clock.advance(dt);
        self.run_ticks(due)
    }

    /// Run exactly `count` ticks
    pub fn run_ticks(&mut self, count: u32) -> FrameReport {
        let mut report = FrameReport::default();
        for _ in 0..count {
            report.absorb(self.tick_once());
        }
        report
    }

    fn tick_once(&mut self) -> FrameReport {
        let input = std::mem::take(&mut self.input);
        let outcome = tick(&mut self.state, &input);
        FrameReport {
            ticks: 1,
            advanced: outcome.advanced as u32,
            recolors: outcome.recolor.is_some() as u32,
        }
    }

    /// Drop partially accumulated frame time (host was hidden/suspended)
    pub fn resync_clock(&mut self) {
        self.clock.reset();
    }

    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let frame = Frame {
            canvas: self.state.bounds,
            sprite: &self.sprite,
            pos: self.state.sprite.pos,
            label: &self.settings.display_name,
            label_color: self.state.label_color,
            phase: self.state.phase,
        };
        renderer.draw(&frame);
    }
}
