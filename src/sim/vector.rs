//! Direction helpers for unit-velocity vectors
//!
//! Velocities in the simulation are unit direction vectors; the tick driver
//! scales them by the configured speeds when moving bodies.

use glam::DVec2;
use rand::Rng;

/// Normalise a vector to magnitude 1.
///
/// A zero vector is returned unchanged rather than dividing by zero.
pub fn normalise(v: DVec2) -> DVec2 {
    let mag = v.length();
    if mag == 0.0 { v } else { v / mag }
}

/// Draw a direction by sampling x and y independently and uniformly from
/// [-1, 1], then normalising.
///
/// Sampling the square first biases the result slightly toward the diagonals;
/// callers that care about the spread reject and redraw.
pub fn random_direction<R: Rng>(rng: &mut R) -> DVec2 {
    normalise(DVec2::new(
        rng.random_range(-1.0..=1.0),
        rng.random_range(-1.0..=1.0),
    ))
}
