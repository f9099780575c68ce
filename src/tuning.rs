//! Data-driven balance knobs
//!
//! Everything the driver scales or counts lives here, so a host can adjust
//! play feel without touching the simulation core.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance parameters for one match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Distance the ball travels per tick
    pub ball_speed: f64,
    /// Distance a paddle travels per tick while tracking
    pub paddle_speed: f64,
    /// Horizontal distance within which paddles react to the ball
    pub react_distance: f64,
    /// Maximum deflection from horizontal after a paddle bounce (degrees)
    pub max_bounce_angle_deg: f64,
    /// Ticks the ball holds at center before each serve
    pub serve_delay_ticks: u32,
    /// Points needed to win a match
    pub win_score: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ball_speed: BALL_SPEED,
            paddle_speed: PADDLE_SPEED,
            react_distance: PADDLE_REACT_DISTANCE,
            max_bounce_angle_deg: MAX_BOUNCE_ANGLE_DEG,
            serve_delay_ticks: SERVE_DELAY_TICKS,
            win_score: WIN_SCORE,
        }
    }
}
