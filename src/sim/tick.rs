//! The fixed-step simulation driver
//!
//! `tick` is the only way the game advances. Order within a tick is fixed:
//! player input and step, enemy AI steps, combat resolution, dead-entity
//! compaction, then scoring and camera bookkeeping.

use super::combat;
use super::enemy::EnemyState;
use super::player::PlayerState;
use super::projectile::Projectile;
use super::state::GameState;
use crate::consts::*;

/// Everything the outside world may ask of one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Movement stick, components clamped to [-1, 1] on application
    pub move_x: f32,
    pub move_y: f32,
    pub jump: bool,
    pub dash: bool,
    pub attack: bool,
    pub throw: bool,
}

/// Advance the simulation by exactly one tick.
///
/// A finished run (game over or stage cleared) halts: the call returns
/// without mutating anything until `GameState::restart`.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.game_over || state.stage_cleared {
        return;
    }
    state.tick += 1;

    // Player
    state.player.set_movement_vector(input.move_x, input.move_y);
    if input.jump {
        state.player.jump();
    }
    if input.dash {
        state.player.dash();
    }
    if input.attack {
        state.player.attack();
    }
    state.player.step(&state.stage.platforms);

    if input.throw && state.player.try_throw() {
        state.projectiles.push(Projectile::thrown_from(
            state.player.body_box().center(),
            state.player.facing,
        ));
    }
    for projectile in &mut state.projectiles {
        projectile.step(&state.stage.platforms);
    }

    // Falling out of the stage is lethal regardless of health
    if state.player.pos.y >= STAGE_KILL_Y && state.player.state != PlayerState::Dead {
        state.player.health = 0;
        state.player.state = PlayerState::Dead;
        log::info!("player fell out of the stage");
    }

    // Enemies. Distant ones idle to keep far-off fights from playing out
    // unseen; the boss always thinks.
    let bias = state.director.biases();
    let player_center = state.player.body_box().center();
    for enemy in &mut state.enemies {
        if !enemy.is_boss()
            && enemy.body_box().center().distance(player_center) > ENEMY_AI_CULL_DISTANCE
        {
            continue;
        }
        enemy.step(&state.player, &state.stage.platforms, bias, &mut state.rng);
    }

    // Combat
    let report = combat::resolve(
        &mut state.player,
        &mut state.enemies,
        &mut state.projectiles,
        &state.director,
    );
    state.score += report.score_delta;
    if report.boss_killed {
        state.stage_cleared = true;
        log::info!("stage cleared at tick {}", state.tick);
    }

    // Compact the dead and anything that fell out of the stage
    state
        .enemies
        .retain(|e| e.state != EnemyState::Dead && e.pos.y < STAGE_KILL_Y);
    state.projectiles.retain(|p| p.alive);

    // Distance score only counts fresh forward progress
    let new_best = state.best_x.max(state.player.pos.x);
    state.score +=
        (new_best / DISTANCE_PER_POINT) as u64 - (state.best_x / DISTANCE_PER_POINT) as u64;
    state.best_x = new_best;

    state.camera_x = state.player.pos.x - CAMERA_LEAD;

    if state.player.state == PlayerState::Dead && !state.game_over {
        state.game_over = true;
        log::info!("game over at tick {}: score {}", state.tick, state.score);
    }
}
