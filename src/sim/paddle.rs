//! Reactive paddle controller
//!
//! A paddle guards one side of the field and tracks the ball vertically once
//! it comes within the reaction distance. The controller only ever outputs a
//! vertical velocity of -1, 0, or 1; the driver scales it by the paddle
//! speed.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::body::Body;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub body: Body,
    /// Which side of the field this paddle guards
    pub left: bool,
    /// Horizontal distance within which the controller reacts to the ball
    pub react_distance: f64,
}

impl Paddle {
    pub fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: u32,
        left: bool,
        react_distance: f64,
    ) -> Self {
        let mut body = Body::new(x, y, width, height, color);
        body.vel = DVec2::new(0.0, 1.0);
        Self {
            body,
            left,
            react_distance,
        }
    }

    /// Recompute the vertical velocity from the ball's latest position.
    /// Call once per tick, before stepping the paddle.
    ///
    /// When the ball sits level with the paddle the output is 1, not 0, so a
    /// paddle in range drifts downward instead of idling. Inherited quirk of
    /// the controller; callers rely on the drift being slow enough to not
    /// matter.
    pub fn track(&mut self, ball: &Ball) {
        let ball_pos = ball.body.pos;
        if (ball_pos.x - self.body.pos.x).abs() > self.react_distance {
            // Ball too far out horizontally
            self.body.vel.y = 0.0;
        } else if self.behind(ball_pos.x) {
            self.body.vel.y = 0.0;
        } else if ball_pos.y < self.body.top() {
            self.body.vel.y = -1.0;
        } else if ball_pos.y > self.body.bottom() {
            self.body.vel.y = 1.0;
        } else {
            self.body.vel.y = 1.0;
        }
    }

    /// True when the ball is on the wrong side of this paddle's face
    fn behind(&self, ball_x: f64) -> bool {
        if self.left {
            ball_x < self.body.left()
        } else {
            ball_x > self.body.right()
        }
    }
}
