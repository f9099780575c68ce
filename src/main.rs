//! Headless match runner
//!
//! Plays a full match between the two reactive paddles and prints a JSON
//! summary. Optional first argument is the RNG seed; omitted, the wall clock
//! seeds the match.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use pong_core::Tuning;
use pong_core::sim::{GameState, Side, tick};

/// Safety stop in case a rally never resolves
const MAX_TICKS: u64 = 1_000_000;

#[derive(Serialize)]
struct MatchSummary {
    seed: u64,
    ticks: u64,
    rounds: u32,
    left: u32,
    right: u32,
    winner: &'static str,
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    log::info!("starting match with seed {seed}");

    let mut state = GameState::new(Tuning::default());
    let mut rng = Pcg32::seed_from_u64(seed);
    let win_score = state.tuning.win_score;

    while state.score.left < win_score
        && state.score.right < win_score
        && state.time_ticks < MAX_TICKS
    {
        tick(&mut state, &mut rng);
    }

    let winner = if state.score.left > state.score.right {
        Side::Left
    } else {
        Side::Right
    };

    let summary = MatchSummary {
        seed,
        ticks: state.time_ticks,
        rounds: state.rounds_played,
        left: state.score.left,
        right: state.score.right,
        winner: match winner {
            Side::Left => "left",
            Side::Right => "right",
        },
    };

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("failed to serialize match summary: {e}"),
    }
}
