//! Match state: field, sides, scoreboard, and round lifecycle

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::paddle::Paddle;
use crate::consts::*;
use crate::tuning::Tuning;

/// The bounding rectangle the ball plays in.
///
/// Owned by the driver and passed by reference; the simulation only reads it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayField {
    pub width: f64,
    pub height: f64,
}

impl PlayField {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Which side of the field a paddle guards, or a point goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Points per side for one match
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    pub left: u32,
    pub right: u32,
}

impl Scoreboard {
    pub fn credit(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Ball held at center, serve countdown running
    Serve,
    /// Ball in play
    Playing,
}

/// Complete match state, advanced by [`super::tick::tick`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub field: PlayField,
    pub phase: RoundPhase,
    /// Ticks remaining before the next serve
    pub serve_ticks: u32,
    pub ball: Ball,
    pub paddles: Vec<Paddle>,
    pub score: Scoreboard,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Completed rounds (serve through score)
    pub rounds_played: u32,
}

impl GameState {
    /// A fresh match: two paddles guarding the goal lines, ball centered,
    /// serve countdown started.
    pub fn new(tuning: Tuning) -> Self {
        let field = PlayField::new(FIELD_WIDTH, FIELD_HEIGHT);
        let paddle_y = (field.height - PADDLE_HEIGHT) / 2.0;
        let paddles = vec![
            Paddle::new(
                0.0,
                paddle_y,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
                PADDLE_COLOR,
                true,
                tuning.react_distance,
            ),
            Paddle::new(
                field.width - PADDLE_WIDTH,
                paddle_y,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
                PADDLE_COLOR,
                false,
                tuning.react_distance,
            ),
        ];
        let ball = Self::fresh_ball(&field, &tuning);
        let serve_ticks = tuning.serve_delay_ticks;
        Self {
            tuning,
            field,
            phase: RoundPhase::Serve,
            serve_ticks,
            ball,
            paddles,
            score: Scoreboard::default(),
            time_ticks: 0,
            rounds_played: 0,
        }
    }

    /// A new ball centered in the field. Rounds restart by replacement, not
    /// by repositioning the old ball.
    pub(crate) fn fresh_ball(field: &PlayField, tuning: &Tuning) -> Ball {
        let center = field.center();
        Ball::new(
            center.x - BALL_SIZE / 2.0,
            center.y - BALL_SIZE / 2.0,
            BALL_SIZE,
            BALL_COLOR,
            tuning.max_bounce_angle_deg,
        )
    }

    /// End the round: replace the ball, recentre the paddles vertically, and
    /// restart the serve countdown.
    pub(crate) fn reset_round(&mut self) {
        self.ball = Self::fresh_ball(&self.field, &self.tuning);
        let paddle_y = (self.field.height - PADDLE_HEIGHT) / 2.0;
        for paddle in &mut self.paddles {
            paddle.body.pos.y = paddle_y;
        }
        self.phase = RoundPhase::Serve;
        self.serve_ticks = self.tuning.serve_delay_ticks;
        self.rounds_played += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_match_geometry() {
        let state = GameState::new(Tuning::default());
        assert_eq!(state.phase, RoundPhase::Serve);
        assert_eq!(state.paddles.len(), 2);
        assert!(state.paddles[0].left);
        assert!(!state.paddles[1].left);
        assert_eq!(state.paddles[0].body.left(), 0.0);
        assert_eq!(state.paddles[1].body.right(), state.field.width);

        let center = state.field.center();
        assert_eq!(state.ball.body.pos.x + state.ball.body.size.x / 2.0, center.x);
        assert_eq!(state.ball.body.pos.y + state.ball.body.size.y / 2.0, center.y);
    }

    #[test]
    fn scoreboard_credit() {
        let mut score = Scoreboard::default();
        score.credit(Side::Right);
        score.credit(Side::Right);
        score.credit(Side::Left);
        assert_eq!(score.get(Side::Right), 2);
        assert_eq!(score.get(Side::Left), 1);
    }

    #[test]
    fn reset_round_replaces_ball_and_recentres_paddles() {
        let mut state = GameState::new(Tuning::default());
        state.ball.body.pos = glam::DVec2::new(-5.0, 3.0);
        state.paddles[0].body.pos.y = 0.0;
        state.phase = RoundPhase::Playing;

        state.reset_round();

        assert_eq!(state.phase, RoundPhase::Serve);
        assert_eq!(state.rounds_played, 1);
        assert_eq!(state.serve_ticks, state.tuning.serve_delay_ticks);
        let center = state.field.center();
        assert_eq!(state.ball.body.pos.x + state.ball.body.size.x / 2.0, center.x);
        assert_eq!(
            state.paddles[0].body.pos.y,
            (state.field.height - crate::consts::PADDLE_HEIGHT) / 2.0
        );
    }

    #[test]
    fn side_opposite() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }
}
