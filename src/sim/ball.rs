//! Ball motion, serving, and collision response
//!
//! The ball carries a unit velocity at all times once served. Collisions with
//! the field edges flip the vertical component; collisions with a paddle flip
//! the horizontal component and deflect the vertical one by where on the
//! paddle the ball struck, then the travel angle is clamped back within the
//! configured maximum deflection from horizontal.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::paddle::Paddle;
use super::state::PlayField;
use super::vector::random_direction;

/// The ball. Square, side length `size`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub body: Body,
    /// Sine of the configured maximum deflection angle, used directly as the
    /// clamp bound for the y component of a unit velocity.
    pub max_angle: f64,
    /// Cosine of the same angle, the matching x component when the velocity
    /// gets pinned.
    pub max_angle_x: f64,
}

impl Ball {
    pub fn new(x: f64, y: f64, size: f64, color: u32, max_angle_deg: f64) -> Self {
        let rad = max_angle_deg.to_radians();
        Self {
            body: Body::new(x, y, size, size, color),
            max_angle: rad.sin(),
            max_angle_x: rad.cos(),
        }
    }

    /// Serve: redraw random unit directions until one is shallow enough.
    ///
    /// The acceptance bound takes sin() of a value that is already a sine, so
    /// serves come out shallower than the configured maximum deflection.
    /// Kept as-is; the observable contract is the shallower bound.
    pub fn random_start<R: Rng>(&mut self, rng: &mut R) {
        loop {
            self.body.vel = random_direction(rng);
            if self.body.vel.y.abs() <= self.max_angle.sin() {
                break;
            }
        }
    }

    /// Resolve collisions against the field edges and the paddles, updating
    /// the velocity in place. Call before stepping the ball.
    ///
    /// Paddles are tested in list order and independently; overlapping hits
    /// in the same tick compound.
    pub fn bounce(&mut self, paddles: &[Paddle], field: &PlayField) {
        // Top and bottom edges: sign flip only, no clamping
        if self.body.top() <= 0.0 || self.body.bottom() >= field.height {
            self.body.vel.y = -self.body.vel.y;
        }

        for paddle in paddles {
            // The edge that can strike this paddle faces it
            let edge_x = if paddle.left {
                self.body.left()
            } else {
                self.body.right()
            };
            let in_x = edge_x >= paddle.body.left() && edge_x <= paddle.body.right();
            let in_y =
                self.body.pos.y >= paddle.body.top() && self.body.pos.y <= paddle.body.bottom();

            if in_x && in_y {
                self.body.vel.x = -self.body.vel.x;
                // 0 at the paddle top, 1 at the bottom
                let rel = (self.body.pos.y - paddle.body.pos.y) / paddle.body.size.y;
                // -1 at the top, +1 at the bottom, 0 at center
                let strike = (rel - 0.5) * 2.0;
                self.body.vel.y *= strike * 3.0;
                self.clamp();
            }
        }
    }

    /// Re-normalise the velocity and pin it within the maximum deflection.
    ///
    /// When the vertical component exceeds the bound, the velocity snaps to
    /// the fixed point (±max_angle_x, ±max_angle) on the unit circle with
    /// both signs preserved, rather than rescaling proportionally.
    pub fn clamp(&mut self) {
        self.body.vel = super::vector::normalise(self.body.vel);
        if self.body.vel.y.abs() > self.max_angle {
            self.body.vel.y = self.max_angle.copysign(self.body.vel.y);
            self.body.vel.x = self.max_angle_x.copysign(self.body.vel.x);
        }
    }

    /// True once the ball has left the field past either goal line. Pure
    /// predicate; the driver ends the round and replaces the ball.
    pub fn is_score(&self, field: &PlayField) -> bool {
        self.body.pos.x < 0.0 || self.body.right() > field.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn field() -> PlayField {
        PlayField::new(100.0, 100.0)
    }

    #[test]
    fn top_edge_flips_vertical_velocity() {
        let mut ball = Ball::new(50.0, 0.0, 2.0, 0, 60.0);
        ball.body.vel = DVec2::new(0.3, -1.0);
        ball.bounce(&[], &field());
        assert_eq!(ball.body.vel, DVec2::new(0.3, 1.0));
    }

    #[test]
    fn bottom_edge_flips_vertical_velocity() {
        let mut ball = Ball::new(50.0, 98.0, 2.0, 0, 60.0);
        ball.body.vel = DVec2::new(-0.3, 1.0);
        ball.bounce(&[], &field());
        assert_eq!(ball.body.vel, DVec2::new(-0.3, -1.0));
    }

    #[test]
    fn paddle_hit_flips_horizontal_velocity() {
        let mut ball = Ball::new(10.0, 10.0, 2.0, 0, 60.0);
        ball.body.vel = DVec2::new(-1.0, 0.0);
        let paddle = Paddle::new(9.0, 8.0, 2.0, 5.0, 1, true, 100.0);
        ball.bounce(&[paddle], &field());
        assert_eq!(ball.body.vel.x, 1.0);
        assert_eq!(ball.body.vel.y, 0.0);
    }

    #[test]
    fn off_center_hit_deflects_vertically() {
        // Strike near the paddle bottom with some vertical motion already
        let mut ball = Ball::new(10.0, 12.0, 2.0, 0, 60.0);
        ball.body.vel = DVec2::new(-0.8, 0.6);
        let paddle = Paddle::new(9.0, 8.0, 2.0, 5.0, 1, true, 100.0);
        ball.bounce(&[paddle], &field());
        // rel = 0.8, strike = 0.6: vel.y scaled by 1.8, then re-normalised
        assert!(ball.body.vel.x > 0.0);
        assert!(ball.body.vel.y > 0.6);
        assert!((ball.body.vel.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ball_misses_paddle_outside_vertical_span() {
        let mut ball = Ball::new(10.0, 20.0, 2.0, 0, 60.0);
        ball.body.vel = DVec2::new(-1.0, 0.0);
        let paddle = Paddle::new(9.0, 8.0, 2.0, 5.0, 1, true, 100.0);
        ball.bounce(&[paddle], &field());
        assert_eq!(ball.body.vel, DVec2::new(-1.0, 0.0));
    }

    #[test]
    fn clamp_pins_to_max_deflection() {
        let mut ball = Ball::new(0.0, 0.0, 2.0, 0, 60.0);
        let rad = 60.0f64.to_radians();

        ball.body.vel = DVec2::new(0.1, 2.0);
        ball.clamp();
        assert!((ball.body.vel.y - rad.sin()).abs() < 1e-12);
        assert!((ball.body.vel.x - rad.cos()).abs() < 1e-12);

        // Signs are preserved independently
        ball.body.vel = DVec2::new(-0.1, -2.0);
        ball.clamp();
        assert!((ball.body.vel.y + rad.sin()).abs() < 1e-12);
        assert!((ball.body.vel.x + rad.cos()).abs() < 1e-12);
    }

    #[test]
    fn clamp_leaves_shallow_velocity_direction_alone() {
        let mut ball = Ball::new(0.0, 0.0, 2.0, 0, 60.0);
        ball.body.vel = DVec2::new(3.0, 1.0);
        ball.clamp();
        assert!((ball.body.vel.length() - 1.0).abs() < 1e-9);
        assert!((ball.body.vel.y / ball.body.vel.x - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn random_start_respects_serve_bound() {
        let mut ball = Ball::new(0.0, 0.0, 2.0, 0, 60.0);
        let mut rng = Pcg32::seed_from_u64(42);
        // Observed bound is sin(sin(60 deg)) ~ 0.7617, shallower than
        // sin(60 deg) ~ 0.8660
        let bound = ball.max_angle.sin();
        for _ in 0..200 {
            ball.random_start(&mut rng);
            assert!(ball.body.vel.y.abs() <= bound);
            assert!((ball.body.vel.length() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn is_score_past_either_goal_line() {
        let f = field();
        let mut ball = Ball::new(-1.0, 50.0, 2.0, 0, 60.0);
        assert!(ball.is_score(&f));

        ball.body.pos.x = 99.0; // right edge at 101
        assert!(ball.is_score(&f));

        ball.body.pos.x = 50.0;
        assert!(!ball.is_score(&f));
    }
}
