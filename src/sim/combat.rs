//! Hit resolution between the player, projectiles and enemies
//!
//! Runs once per tick after all entities have stepped. Shuriken hits land
//! first, then player melee (sword swings, dash contact), then enemy offense
//! against the player. An enemy killed this tick deals no damage on the same
//! tick.

use super::director::{AdaptiveDirector, KillCause};
use super::enemy::{Enemy, EnemyState};
use super::player::{Player, PlayerState};
use super::projectile::Projectile;
use crate::consts::*;

/// What one resolution pass produced, for the outer tick to apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombatReport {
    pub score_delta: u64,
    pub boss_killed: bool,
}

/// Classify a kill from how the player was moving when it landed
fn kill_cause(player: &Player) -> KillCause {
    if player.state == PlayerState::Dashing {
        KillCause::DashAttack
    } else if !player.grounded {
        KillCause::JumpAttack
    } else {
        KillCause::Slash
    }
}

pub fn resolve(
    player: &mut Player,
    enemies: &mut [Enemy],
    projectiles: &mut [Projectile],
    director: &AdaptiveDirector,
) -> CombatReport {
    let mut report = CombatReport::default();

    // Shuriken hits. Ranged kills score but stay out of the director's
    // ledger, which only adapts to melee patterns.
    for projectile in projectiles.iter_mut() {
        if !projectile.alive {
            continue;
        }
        for enemy in enemies.iter_mut() {
            if enemy.state == EnemyState::Dead
                || !projectile.body_box().intersects(&enemy.body_box())
                || !enemy.can_take_hit()
            {
                continue;
            }
            let knockback = projectile.vel.x.signum() * ENEMY_KNOCKBACK_X;
            if enemy.on_hit(PROJECTILE_DAMAGE, knockback) {
                projectile.alive = false;
                if enemy.state == EnemyState::Dead {
                    report.score_delta += if enemy.is_boss() {
                        report.boss_killed = true;
                        BOSS_KILL_SCORE_BONUS
                    } else {
                        PROJECTILE_KILL_SCORE_BONUS
                    };
                    player.on_kill();
                    log::info!("enemy killed by shuriken");
                }
                break;
            }
        }
    }

    for enemy in enemies.iter_mut() {
        if enemy.state == EnemyState::Dead {
            continue;
        }

        // Player offense: sword swing, or dash-through contact
        let mut connected = false;
        if let Some(sword) = player.sword_hitbox() {
            if sword.intersects(&enemy.body_box()) && enemy.can_take_hit() {
                let (damage, knockback) = if enemy.is_boss() {
                    // The boss takes a fixed chip per hit, never combo-scaled
                    (PLAYER_HIT_VS_BOSS, 0.0)
                } else {
                    let damage = BASE_SLASH_DAMAGE + player.combo as i32 * COMBO_DAMAGE_STEP;
                    (damage, player.facing.sign() * ENEMY_KNOCKBACK_X)
                };
                connected = enemy.on_hit(damage, knockback);
            }
        }
        if !connected
            && player.state == PlayerState::Dashing
            && !enemy.is_boss()
            && player.body_box().intersects(&enemy.body_box())
            && enemy.can_take_hit()
        {
            let knockback = player.facing.sign() * ENEMY_KNOCKBACK_X;
            connected = enemy.on_hit(BASE_SLASH_DAMAGE, knockback);
        }

        if connected && enemy.state == EnemyState::Dead {
            let cause = kill_cause(player);
            report.score_delta += if enemy.is_boss() {
                report.boss_killed = true;
                BOSS_KILL_SCORE_BONUS
            } else {
                KILL_SCORE_BONUS
            };
            player.on_kill();
            director.record_death(cause);
            log::info!("enemy killed by {}", cause.as_str());
            continue;
        }

        // Enemy offense: the strike hitbox when swinging, body contact
        // otherwise. The boss hits harder on touch than a soldier does.
        if let Some(strike) = enemy.attack_box() {
            if strike.intersects(&player.body_box()) {
                player.on_hit(BOSS_STRIKE_DAMAGE);
            }
        } else if enemy.body_box().intersects(&player.body_box()) {
            let damage = if enemy.is_boss() {
                BOSS_TOUCH_DAMAGE
            } else {
                SOLDIER_TOUCH_DAMAGE
            };
            player.on_hit(damage);
        }
    }

    report
}
