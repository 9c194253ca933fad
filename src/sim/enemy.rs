//! Enemies: soldier grunts and the boss shell
//!
//! `Enemy` is one concrete type with a closed kind tag. Soldiers carry no
//! extra data; the boss carries per-phase bookkeeping in [`BossData`] and its
//! behavior lives in the `boss` module.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::aabb::Aabb;
use super::boss::{self, BossData};
use super::collision::resolve_against_geometry;
use super::director::BehaviorBias;
use super::player::{Player, PlayerState};
use super::state::Facing;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EnemyState {
    Idle,
    Patrol,
    Chase,
    Attack,
    /// Hit-stun; doubles as the enemy i-frame window
    Hurt,
    Dead,
}

/// Closed set of enemy archetypes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyKind {
    Soldier,
    Boss(BossData),
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// Top-left corner, y-down
    pub pos: Vec2,
    pub vel: Vec2,
    pub health: i32,
    pub max_health: i32,
    pub state: EnemyState,
    pub facing: Facing,
    pub attack_cooldown: u32,
    /// Ticks remaining in the current Attack or Hurt state
    pub state_ticks: u32,
    hurt_ticks: u32,
    /// Out-of-range idle time; rolls over into a patrol
    idle_ticks: u32,
    pub grounded: bool,
}

impl Enemy {
    pub fn soldier(x: f32, y: f32) -> Self {
        Self {
            kind: EnemyKind::Soldier,
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            health: SOLDIER_MAX_HEALTH,
            max_health: SOLDIER_MAX_HEALTH,
            state: EnemyState::Idle,
            facing: Facing::Left,
            attack_cooldown: 0,
            state_ticks: 0,
            hurt_ticks: 0,
            idle_ticks: 0,
            grounded: false,
        }
    }

    pub fn boss(x: f32, y: f32) -> Self {
        Self {
            kind: EnemyKind::Boss(BossData::new()),
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            health: BOSS_MAX_HEALTH,
            max_health: BOSS_MAX_HEALTH,
            state: EnemyState::Idle,
            facing: Facing::Left,
            attack_cooldown: 0,
            state_ticks: 0,
            hurt_ticks: 0,
            idle_ticks: 0,
            grounded: false,
        }
    }

    pub fn is_boss(&self) -> bool {
        matches!(self.kind, EnemyKind::Boss(_))
    }

    pub fn size(&self) -> Vec2 {
        match self.kind {
            EnemyKind::Soldier => Vec2::new(SOLDIER_WIDTH, SOLDIER_HEIGHT),
            EnemyKind::Boss(_) => Vec2::new(BOSS_WIDTH, BOSS_HEIGHT),
        }
    }

    pub fn body_box(&self) -> Aabb {
        Aabb::from_pos(self.pos, self.size())
    }

    /// Active strike hitbox. Only the boss has a swing hitbox; soldiers deal
    /// touch damage through body overlap instead.
    pub fn attack_box(&self) -> Option<Aabb> {
        if !self.is_boss() || self.state != EnemyState::Attack {
            return None;
        }
        let body = self.body_box();
        Some(match self.facing {
            Facing::Right => Aabb::new(body.right(), body.y, BOSS_REACH, body.h),
            Facing::Left => Aabb::new(body.x - BOSS_REACH, body.y, BOSS_REACH, body.h),
        })
    }

    /// Whether a hit would connect right now. Soldiers are immune while in
    /// hit-stun; the boss is immune during its post-hit cooldown.
    pub fn can_take_hit(&self) -> bool {
        match &self.kind {
            EnemyKind::Soldier => !matches!(self.state, EnemyState::Hurt | EnemyState::Dead),
            EnemyKind::Boss(data) => self.state != EnemyState::Dead && data.hit_cooldown == 0,
        }
    }

    /// Apply damage with a horizontal knockback. Returns whether the hit
    /// connected; callers detect a kill by checking `state` afterwards.
    pub fn on_hit(&mut self, damage: i32, knockback_x: f32) -> bool {
        if !self.can_take_hit() {
            return false;
        }
        self.health -= damage;
        match &mut self.kind {
            EnemyKind::Soldier => {
                if self.health <= 0 {
                    self.health = 0;
                    self.state = EnemyState::Dead;
                    self.vel = Vec2::ZERO;
                } else {
                    self.state = EnemyState::Hurt;
                    self.hurt_ticks = SOLDIER_HURT_TICKS;
                    self.vel = Vec2::new(knockback_x, ENEMY_KNOCKBACK_Y);
                    self.grounded = false;
                }
            }
            EnemyKind::Boss(data) => {
                data.hit_cooldown = BOSS_HIT_COOLDOWN_TICKS;
                if self.health <= 0 {
                    self.health = 0;
                    self.state = EnemyState::Dead;
                    self.vel = Vec2::ZERO;
                }
                // The boss shrugs off knockback
            }
        }
        true
    }

    /// Advance one tick of AI and physics
    pub fn step(
        &mut self,
        player: &Player,
        platforms: &[Aabb],
        bias: BehaviorBias,
        rng: &mut Pcg32,
    ) {
        if self.state == EnemyState::Dead {
            return;
        }
        if self.is_boss() {
            boss::step(self, player, platforms, rng);
            return;
        }

        if self.attack_cooldown > 0 {
            self.attack_cooldown -= 1;
        }

        match self.state {
            EnemyState::Hurt => {
                self.hurt_ticks = self.hurt_ticks.saturating_sub(1);
                if self.hurt_ticks == 0 {
                    self.state = EnemyState::Chase;
                }
            }
            EnemyState::Attack => {
                self.state_ticks = self.state_ticks.saturating_sub(1);
                if self.state_ticks == 0 {
                    self.state = EnemyState::Chase;
                    self.vel.x = 0.0;
                }
            }
            _ => self.decide(player, bias, rng),
        }

        self.vel.y += GRAVITY;
        self.pos += self.vel;
        let size = self.size();
        let contact = resolve_against_geometry(&mut self.pos, &mut self.vel, size, platforms);
        self.grounded = contact.grounded;

        // Patrollers turn around at walls
        if self.state == EnemyState::Patrol && contact.touching_wall() {
            self.facing = self.facing.flipped();
        }
    }

    fn decide(&mut self, player: &Player, bias: BehaviorBias, rng: &mut Pcg32) {
        if player.state == PlayerState::Dead {
            self.state = EnemyState::Idle;
            self.vel.x = 0.0;
            return;
        }

        let to_player = player.body_box().center() - self.body_box().center();
        let in_range =
            to_player.x.abs() <= SOLDIER_DETECT_RANGE && to_player.y.abs() <= SOLDIER_DETECT_RANGE;
        if !in_range {
            // Out of range means standing down; a long enough lull rolls
            // over into a slow patrol
            if self.state == EnemyState::Patrol {
                self.vel.x = self.facing.sign() * SOLDIER_SPEED * 0.5;
            } else {
                self.state = EnemyState::Idle;
                self.vel.x = 0.0;
                self.idle_ticks += 1;
                if self.idle_ticks >= SOLDIER_IDLE_TO_PATROL_TICKS {
                    self.idle_ticks = 0;
                    self.state = EnemyState::Patrol;
                }
            }
            return;
        }
        self.idle_ticks = 0;

        self.facing = Facing::from_sign(to_player.x);
        let dir = self.facing.sign();

        if to_player.x.abs() <= SOLDIER_ATTACK_RANGE && self.attack_cooldown == 0 {
            self.state = EnemyState::Attack;
            self.state_ticks = SOLDIER_ATTACK_TICKS;
            self.attack_cooldown = SOLDIER_ATTACK_COOLDOWN_TICKS;
            self.vel.x = dir * SOLDIER_LUNGE_SPEED;
            // Adaptive pressure: leap into the attack when the director says so
            if self.grounded && bias.jump > 0.0 && rng.random::<f32>() < bias.jump {
                self.vel.y = SOLDIER_JUMP_IMPULSE;
                self.grounded = false;
            }
        } else {
            self.state = EnemyState::Chase;
            self.vel.x = dir * SOLDIER_SPEED;
        }
    }
}
