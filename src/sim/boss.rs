//! Boss behavior
//!
//! The boss runs a two-phase script on top of the shared [`Enemy`] shell.
//! Phase 1 is a slow walker with a telegraphed melee swing. At half health it
//! permanently shifts to phase 2, relocating beside the player and attacking
//! only through periodic teleport strikes.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::aabb::Aabb;
use super::collision::resolve_against_geometry;
use super::enemy::{Enemy, EnemyKind, EnemyState};
use super::player::{Player, PlayerState};
use super::state::Facing;
use crate::consts::*;

/// Boss-only bookkeeping carried inside `EnemyKind::Boss`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossData {
    /// 1 or 2; the transition is one-way
    pub phase: u8,
    /// Phase-1 telegraph progress
    pub windup: u32,
    /// Phase-2 countdown to the next teleport strike
    pub teleport_timer: u32,
    /// Post-hit i-frames so one swing lands at most one hit
    pub hit_cooldown: u32,
}

impl BossData {
    pub fn new() -> Self {
        Self {
            phase: 1,
            windup: 0,
            teleport_timer: 0,
            hit_cooldown: 0,
        }
    }
}

impl Default for BossData {
    fn default() -> Self {
        Self::new()
    }
}

fn random_side(rng: &mut Pcg32) -> f32 {
    if rng.random::<bool>() { 1.0 } else { -1.0 }
}

/// Place the boss so its center sits `offset` from the player's center on the
/// given side, feet aligned with the player's feet.
fn land_beside(boss: &mut Enemy, player: &Player, side: f32, offset: f32) {
    let player_center_x = player.body_box().center().x;
    boss.pos.x = player_center_x + side * offset - BOSS_WIDTH / 2.0;
    boss.pos.y = player.pos.y + PLAYER_HEIGHT - BOSS_HEIGHT;
    boss.vel = Vec2::ZERO;
    boss.facing = Facing::from_sign(-side);
}

/// One tick of boss AI and physics. Called from `Enemy::step`.
pub(crate) fn step(boss: &mut Enemy, player: &Player, platforms: &[Aabb], rng: &mut Pcg32) {
    let mut data = match boss.kind {
        EnemyKind::Boss(data) => data,
        EnemyKind::Soldier => return,
    };

    if data.hit_cooldown > 0 {
        data.hit_cooldown -= 1;
    }

    // One-way phase shift the moment health reaches half, boundary included.
    // The relocation is a fixed offset behind the player's back; only the
    // phase-2 teleports pick random sides.
    if data.phase == 1 && boss.health <= boss.max_health / 2 {
        data.phase = 2;
        data.windup = 0;
        data.teleport_timer = BOSS_TELEPORT_INTERVAL_TICKS;
        land_beside(boss, player, -player.facing.sign(), BOSS_PHASE2_RELOCATE_OFFSET);
        boss.state = EnemyState::Idle;
        log::info!("boss entered phase 2 at {} health", boss.health);
    }

    if data.phase == 1 {
        phase_one(boss, &mut data, player, platforms);
    } else {
        phase_two(boss, &mut data, player, platforms, rng);
    }

    boss.kind = EnemyKind::Boss(data);
}

/// Walk toward the player, telegraph, swing, recover
fn phase_one(boss: &mut Enemy, data: &mut BossData, player: &Player, platforms: &[Aabb]) {
    if boss.attack_cooldown > 0 {
        boss.attack_cooldown -= 1;
    }

    if boss.state == EnemyState::Attack {
        boss.state_ticks = boss.state_ticks.saturating_sub(1);
        if boss.state_ticks == 0 {
            boss.state = EnemyState::Idle;
            boss.attack_cooldown = BOSS_ATTACK_COOLDOWN_TICKS;
            boss.vel.x = 0.0;
        }
    } else if player.state == PlayerState::Dead {
        boss.state = EnemyState::Idle;
        boss.vel.x = 0.0;
    } else {
        let dx = player.body_box().center().x - boss.body_box().center().x;
        boss.facing = Facing::from_sign(dx);

        if dx.abs() <= BOSS_MELEE_RANGE && boss.attack_cooldown == 0 {
            // Telegraph in place, then swing
            boss.vel.x = 0.0;
            data.windup += 1;
            if data.windup >= BOSS_WINDUP_TICKS {
                data.windup = 0;
                boss.state = EnemyState::Attack;
                boss.state_ticks = BOSS_ATTACK_TICKS;
            }
        } else {
            data.windup = 0;
            boss.state = EnemyState::Chase;
            boss.vel.x = boss.facing.sign() * BOSS_WALK_SPEED;
        }
    }

    boss.vel.y += GRAVITY;
    boss.pos += boss.vel;
    let size = boss.size();
    let contact = resolve_against_geometry(&mut boss.pos, &mut boss.vel, size, platforms);
    boss.grounded = contact.grounded;
}

/// Hold position, then teleport beside the player and strike on a timer.
/// Gravity does not apply while the boss holds between strikes.
fn phase_two(
    boss: &mut Enemy,
    data: &mut BossData,
    player: &Player,
    platforms: &[Aabb],
    rng: &mut Pcg32,
) {
    if boss.state == EnemyState::Attack {
        boss.state_ticks = boss.state_ticks.saturating_sub(1);
        if boss.state_ticks == 0 {
            boss.state = EnemyState::Idle;
        }
    } else if player.state != PlayerState::Dead {
        if data.teleport_timer > 0 {
            data.teleport_timer -= 1;
        }
        if data.teleport_timer == 0 {
            land_beside(boss, player, random_side(rng), BOSS_TELEPORT_OFFSET_X);
            boss.state = EnemyState::Attack;
            boss.state_ticks = BOSS_ATTACK_TICKS;
            data.teleport_timer = BOSS_TELEPORT_INTERVAL_TICKS;
            log::debug!("boss teleport strike");
        }
    }

    boss.vel = Vec2::ZERO;
    let size = boss.size();
    let mut vel = Vec2::ZERO;
    resolve_against_geometry(&mut boss.pos, &mut vel, size, platforms);
}
