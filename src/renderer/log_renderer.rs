//! Headless renderer
//!
//! Used by the native binary and by tests. Instead of pixels it keeps a
//! little bookkeeping and logs label color and phase changes.

use glam::Vec2;

use super::{Frame, Renderer};
use crate::color::LabelColor;
use crate::sim::SimPhase;

#[derive(Debug, Clone, Default)]
pub struct LogRenderer {
    pub frames_drawn: u64,
    pub last_pos: Option<Vec2>,
    pub last_color: Option<LabelColor>,
    pub last_phase: Option<SimPhase>,
    /// Number of times the drawn label color differed from the previous frame
    pub color_changes: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, frame: &Frame<'_>) {
        if let Some(prev) = self.last_color {
            if prev != frame.label_color {
                self.color_changes += 1;
                log::debug!(
                    "frame {}: '{}' now {} at ({:.0}, {:.0})",
                    self.frames_drawn,
                    frame.label,
                    frame.label_color.to_hex(),
                    frame.pos.x,
                    frame.pos.y
                );
            }
        }
        if self.last_phase != Some(frame.phase) {
            log::info!("frame {}: {:?} ({} sprite)", self.frames_drawn, frame.phase, frame.sprite.kind_name());
        }

        self.last_pos = Some(frame.pos);
        self.last_color = Some(frame.label_color);
        self.last_phase = Some(frame.phase);
        self.frames_drawn += 1;
    }
}
