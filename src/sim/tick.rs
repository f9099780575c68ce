//! Fixed-order discrete tick driver
//!
//! Reference ordering within a tick: every paddle recomputes its controller
//! and moves first, then the ball resolves collisions and moves. Scoring is
//! checked after the ball has moved; a scoring tick ends the round and
//! re-enters the serve countdown.

use rand::Rng;

use super::state::{GameState, RoundPhase, Side};

/// Advance the match by one tick.
///
/// Returns the side that scored this tick, if any.
pub fn tick<R: Rng>(state: &mut GameState, rng: &mut R) -> Option<Side> {
    state.time_ticks += 1;

    match state.phase {
        RoundPhase::Serve => {
            if state.serve_ticks > 0 {
                state.serve_ticks -= 1;
                return None;
            }
            state.ball.random_start(rng);
            state.phase = RoundPhase::Playing;
            log::debug!(
                "serve: vel=({:.3}, {:.3})",
                state.ball.body.vel.x,
                state.ball.body.vel.y
            );
            None
        }
        RoundPhase::Playing => {
            // Paddles move before the ball so the ball bounces off their
            // latest position. The controller outputs a unit velocity; the
            // speed multiplier is applied here.
            for paddle in &mut state.paddles {
                paddle.track(&state.ball);
                paddle.body.pos += paddle.body.vel * state.tuning.paddle_speed;
            }

            state.ball.bounce(&state.paddles, &state.field);
            state.ball.body.pos += state.ball.body.vel * state.tuning.ball_speed;

            if state.ball.is_score(&state.field) {
                let winner = if state.ball.body.pos.x < 0.0 {
                    Side::Right
                } else {
                    Side::Left
                };
                state.score.credit(winner);
                log::info!(
                    "point to {:?} ({} - {})",
                    winner,
                    state.score.left,
                    state.score.right
                );
                state.reset_round();
                return Some(winner);
            }
            None
        }
    }
}
