//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete fixed-order ticks only
//! - Seeded RNG only, passed in by the driver
//! - No rendering or platform dependencies

pub mod ball;
pub mod body;
pub mod paddle;
pub mod state;
pub mod tick;
pub mod vector;

pub use ball::Ball;
pub use body::Body;
pub use paddle::Paddle;
pub use state::{GameState, PlayField, RoundPhase, Scoreboard, Side};
pub use tick::tick;
pub use vector::{normalise, random_direction};
