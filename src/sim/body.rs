//! Steppable rectangular bodies

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A rectangle with a velocity, advanced one step at a time.
///
/// `pos` is the top-left corner. `color` is an opaque display token for the
/// host renderer; the simulation never interprets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub pos: DVec2,
    pub size: DVec2,
    pub color: u32,
    pub vel: DVec2,
}

impl Body {
    pub fn new(x: f64, y: f64, width: f64, height: f64, color: u32) -> Self {
        Self {
            pos: DVec2::new(x, y),
            size: DVec2::new(width, height),
            color,
            vel: DVec2::ZERO,
        }
    }

    /// Advance the position by one velocity step.
    ///
    /// No bounds checking; callers constrain the body through their own
    /// bounce logic.
    pub fn step(&mut self) {
        self.pos += self.vel;
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.pos.y + self.size.y
    }
}
