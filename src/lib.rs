//! Pong Core - a deterministic rectangular-field Pong simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, collisions, round state)
//! - `tuning`: Data-driven balance knobs
//!
//! The simulation is single-threaded, discrete-time, and renderer-free: all
//! state is plain floating-point geometry, and the only randomness is a seeded
//! PCG passed in by the driver.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Simulation configuration constants
pub mod consts {
    /// Play field dimensions
    pub const FIELD_WIDTH: f64 = 100.0;
    pub const FIELD_HEIGHT: f64 = 50.0;

    /// Ball defaults - square, size is both width and height
    pub const BALL_SIZE: f64 = 2.0;
    /// Maximum deflection from horizontal after a paddle bounce (degrees)
    pub const MAX_BOUNCE_ANGLE_DEG: f64 = 60.0;
    /// Distance the ball travels per tick (unit velocity scaled by this)
    pub const BALL_SPEED: f64 = 1.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f64 = 2.0;
    pub const PADDLE_HEIGHT: f64 = 10.0;
    /// Horizontal distance within which a paddle starts tracking the ball
    pub const PADDLE_REACT_DISTANCE: f64 = 60.0;
    /// Distance a paddle travels per tick while tracking
    pub const PADDLE_SPEED: f64 = 0.75;

    /// Ticks the ball holds at center before each serve
    pub const SERVE_DELAY_TICKS: u32 = 30;
    /// Points needed to win a match
    pub const WIN_SCORE: u32 = 5;

    /// Display color tokens (opaque to the simulation)
    pub const BALL_COLOR: u32 = 0;
    pub const PADDLE_COLOR: u32 = 1;
}
