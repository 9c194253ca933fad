//! Headless demo driver
//!
//! Runs a scripted session against the built-in stage: hold right, swing on
//! the way, jump and dash periodically. Prints the final snapshot as JSON.
//! Useful for smoke-testing the simulation and eyeballing the log output.

use std::sync::Arc;

use shadow_brawl::sim::{AdaptiveDirector, Stage};
use shadow_brawl::{GameState, HighScore, InputSlot, MemoryStore, tick};

/// Cap the demo at 30 seconds of simulated time
const MAX_TICKS: u64 = 30 * shadow_brawl::consts::TICK_RATE as u64;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("shadow-brawl demo starting");

    let director = Arc::new(AdaptiveDirector::new());
    let mut store = MemoryStore::new();
    let mut high_score = HighScore::load(&store);
    let input = Arc::new(InputSlot::new());
    let mut state = GameState::new(0xC0FFEE, Stage::one(), Arc::clone(&director));

    input.set_movement_vector(1.0, 0.0);
    for i in 0..MAX_TICKS {
        if i % 30 == 0 {
            input.queue_attack();
        }
        if i % 90 == 0 {
            input.queue_jump();
        }
        if i % 130 == 0 {
            input.queue_dash();
        }
        if i % 45 == 0 {
            input.queue_throw();
        }
        tick(&mut state, &input.drain());
        if state.game_over || state.stage_cleared {
            break;
        }
    }

    let snapshot = state.snapshot();
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }

    if high_score.submit(state.score, &mut store) {
        log::info!("run set a new record");
    }
    log::info!(
        "demo finished: tick {}, score {}, best {}",
        state.tick,
        state.score,
        high_score.best
    );
}
