//! Whole-game state and the read-only snapshot a frontend consumes

use std::sync::Arc;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::director::AdaptiveDirector;
use super::enemy::{Enemy, EnemyKind, EnemyState};
use super::level::{SpawnKind, Stage};
use super::player::{Player, PlayerState};
use super::projectile::Projectile;

/// Horizontal orientation of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    /// Right for non-negative sign, Left otherwise
    #[inline]
    pub fn from_sign(v: f32) -> Self {
        if v < 0.0 { Facing::Left } else { Facing::Right }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}

/// Full mutable simulation state for one session
#[derive(Debug)]
pub struct GameState {
    pub tick: u64,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub stage: Stage,
    pub camera_x: f32,
    pub score: u64,
    /// Furthest x the player has reached, for distance scoring
    pub best_x: f32,
    pub game_over: bool,
    pub stage_cleared: bool,
    /// Session-lived: survives restarts so adaptation carries over
    pub director: Arc<AdaptiveDirector>,
    pub rng: Pcg32,
    seed: u64,
}

impl GameState {
    pub fn new(seed: u64, stage: Stage, director: Arc<AdaptiveDirector>) -> Self {
        let player = Player::new(stage.player_start);
        let enemies = spawn_enemies(&stage);
        log::info!(
            "new game: seed {seed}, {} enemies, {} platforms",
            enemies.len(),
            stage.platforms.len()
        );
        let best_x = player.pos.x;
        Self {
            tick: 0,
            player,
            enemies,
            projectiles: Vec::new(),
            stage,
            camera_x: 0.0,
            score: 0,
            best_x,
            game_over: false,
            stage_cleared: false,
            director,
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// Rebuild the run from the stage data. The director is deliberately
    /// left alone: enemies remember how the last run went.
    pub fn restart(&mut self) {
        log::info!("restart: final score {}", self.score);
        self.tick = 0;
        self.player = Player::new(self.stage.player_start);
        self.enemies = spawn_enemies(&self.stage);
        self.projectiles.clear();
        self.camera_x = 0.0;
        self.score = 0;
        self.best_x = self.player.pos.x;
        self.game_over = false;
        self.stage_cleared = false;
        self.rng = Pcg32::seed_from_u64(self.seed);
    }

    /// Immutable view of everything a frontend needs to draw a frame
    pub fn snapshot(&self) -> Snapshot {
        let boss = self.enemies.iter().find_map(|e| match e.kind {
            EnemyKind::Boss(data) if e.state != EnemyState::Dead => Some(BossView {
                health: e.health,
                max_health: e.max_health,
                phase: data.phase,
            }),
            _ => None,
        });

        Snapshot {
            tick: self.tick,
            player: PlayerView {
                pos: self.player.pos,
                state: self.player.state,
                health: self.player.health,
                max_health: self.player.max_health,
                combo: self.player.combo,
                facing: self.player.facing,
                invincible: self.player.invincible(),
            },
            enemies: self
                .enemies
                .iter()
                .map(|e| EnemyView {
                    pos: e.pos,
                    state: e.state,
                    health: e.health,
                    boss: e.is_boss(),
                })
                .collect(),
            projectiles: self
                .projectiles
                .iter()
                .filter(|p| p.alive)
                .map(|p| ProjectileView { pos: p.pos })
                .collect(),
            boss,
            score: self.score,
            camera_x: self.camera_x,
            game_over: self.game_over,
            stage_cleared: self.stage_cleared,
        }
    }
}

fn spawn_enemies(stage: &Stage) -> Vec<Enemy> {
    stage
        .spawns
        .iter()
        .map(|s| match s.kind {
            SpawnKind::Soldier => Enemy::soldier(s.x, s.y),
            SpawnKind::Boss => Enemy::boss(s.x, s.y),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub state: PlayerState,
    pub health: i32,
    pub max_health: i32,
    pub combo: u8,
    pub facing: Facing,
    pub invincible: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnemyView {
    pub pos: Vec2,
    pub state: EnemyState,
    pub health: i32,
    pub boss: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProjectileView {
    pub pos: Vec2,
}

/// Boss health bar data, present while the boss is alive
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BossView {
    pub health: i32,
    pub max_health: i32,
    pub phase: u8,
}

/// One frame's worth of drawable state
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub boss: Option<BossView>,
    pub score: u64,
    pub camera_x: f32,
    pub game_over: bool,
    pub stage_cleared: bool,
}
