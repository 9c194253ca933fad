//! Shadow Brawl - a side-scrolling melee action simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, combat, AI)
//! - `input`: Synchronized pending-input slot for the UI thread
//! - `highscores`: Integer key-value persistence boundary for the high score

pub mod highscores;
pub mod input;
pub mod sim;

pub use highscores::{HighScore, MemoryStore, ScoreStore};
pub use input::InputSlot;
pub use sim::{GameState, Snapshot, TickInput, tick};

/// Game tuning constants
///
/// Every duration is a raw tick count at the assumed tick rate. Keeping them
/// named here lets the simulation rate be decoupled from presentation later.
pub mod consts {
    /// Simulation ticks per second (fixed step, no delta-time scaling)
    pub const TICK_RATE: u32 = 60;

    // === Player physics ===
    /// Gravity, world units per tick²
    pub const GRAVITY: f32 = 2.0;
    /// Horizontal speed at full stick deflection, units per tick
    pub const MOVE_SPEED: f32 = 10.0;
    /// Upward jump impulse (y-down world, so negative is up)
    pub const JUMP_IMPULSE: f32 = -40.0;
    /// Horizontal kick applied on a wall jump, opposite the wall
    pub const WALL_JUMP_KICK: f32 = 14.0;
    /// Ticks of input lockout after a wall jump
    pub const WALL_JUMP_LOCK_TICKS: u32 = 10;

    /// Player frame dimensions
    pub const PLAYER_WIDTH: f32 = 80.0;
    pub const PLAYER_HEIGHT: f32 = 160.0;
    /// Bounding box height while dashing (hugs the ground)
    pub const DASH_HEIGHT: f32 = 80.0;
    pub const PLAYER_MAX_HEALTH: i32 = 100;

    // === Player abilities ===
    pub const DASH_SPEED: f32 = 24.0;
    pub const DASH_TICKS: u32 = 20;
    pub const DASH_COOLDOWN_TICKS: u32 = 45;
    /// Duration of a sword swing
    pub const ATTACK_TICKS: u32 = 10;
    /// Window after a swing completes during which a follow-up extends the combo
    pub const COMBO_WINDOW_TICKS: u32 = 90;
    pub const COMBO_MAX: u8 = 3;
    /// Sword reach from the body edge in the facing direction
    pub const SWORD_REACH: f32 = 120.0;
    /// Extended reach at max combo
    pub const SWORD_REACH_MAX_COMBO: f32 = 160.0;

    // === Shuriken throw ===
    pub const PROJECTILE_SPEED: f32 = 24.0;
    pub const PROJECTILE_SIZE: f32 = 24.0;
    /// Flight time before a shuriken despawns on its own
    pub const PROJECTILE_TTL_TICKS: u32 = 60;
    pub const PROJECTILE_DAMAGE: i32 = 25;
    pub const THROW_COOLDOWN_TICKS: u32 = 30;

    // === Player damage response ===
    pub const INVINCIBILITY_TICKS: u32 = 45;
    pub const KNOCKBACK_X: f32 = 12.0;
    pub const KNOCKBACK_Y: f32 = -18.0;
    /// Ticks during which knockback overrides horizontal input
    pub const KNOCKBACK_LOCK_TICKS: u32 = 12;

    // === Post-step state classifier thresholds ===
    /// |vy| above this counts as airborne
    pub const AIRBORNE_SPEED_THRESHOLD: f32 = 1.0;
    /// |vx| above this counts as running
    pub const RUN_SPEED_THRESHOLD: f32 = 0.5;

    // === Soldier ===
    pub const SOLDIER_WIDTH: f32 = 80.0;
    pub const SOLDIER_HEIGHT: f32 = 120.0;
    pub const SOLDIER_MAX_HEALTH: i32 = 100;
    pub const SOLDIER_SPEED: f32 = 6.0;
    /// Horizontal and vertical detection range
    pub const SOLDIER_DETECT_RANGE: f32 = 600.0;
    /// Horizontal range inside which the soldier commits to an attack
    pub const SOLDIER_ATTACK_RANGE: f32 = 120.0;
    pub const SOLDIER_ATTACK_COOLDOWN_TICKS: u32 = 60;
    pub const SOLDIER_ATTACK_TICKS: u32 = 15;
    /// Forward lunge speed during an attack
    pub const SOLDIER_LUNGE_SPEED: f32 = 10.0;
    /// Upward impulse for an adaptive jump-attack
    pub const SOLDIER_JUMP_IMPULSE: f32 = -30.0;
    /// HURT recovery duration (also the enemy i-frame window)
    pub const SOLDIER_HURT_TICKS: u32 = 20;
    pub const SOLDIER_TOUCH_DAMAGE: i32 = 10;
    /// Ticks a soldier stands idle out of range before it starts patrolling
    pub const SOLDIER_IDLE_TO_PATROL_TICKS: u32 = 180;
    pub const ENEMY_KNOCKBACK_X: f32 = 16.0;
    pub const ENEMY_KNOCKBACK_Y: f32 = -14.0;
    /// Enemies farther than this from the player skip their AI update
    pub const ENEMY_AI_CULL_DISTANCE: f32 = 1500.0;

    // === Boss ===
    pub const BOSS_WIDTH: f32 = 200.0;
    pub const BOSS_HEIGHT: f32 = 200.0;
    pub const BOSS_MAX_HEALTH: i32 = 400;
    /// Phase-1 approach speed
    pub const BOSS_WALK_SPEED: f32 = 3.0;
    pub const BOSS_MELEE_RANGE: f32 = 150.0;
    /// Telegraph duration before a phase-1 swing lands
    pub const BOSS_WINDUP_TICKS: u32 = 30;
    pub const BOSS_ATTACK_TICKS: u32 = 20;
    /// Recovery between phase-1 swings
    pub const BOSS_ATTACK_COOLDOWN_TICKS: u32 = 90;
    pub const BOSS_REACH: f32 = 140.0;
    /// Phase-2 teleport-strike period
    pub const BOSS_TELEPORT_INTERVAL_TICKS: u32 = 150;
    /// Horizontal distance of a teleport landing spot from the player
    pub const BOSS_TELEPORT_OFFSET_X: f32 = 180.0;
    /// Where the boss reappears when phase 2 begins
    pub const BOSS_PHASE2_RELOCATE_OFFSET: f32 = 220.0;
    /// One player hit per swing: boss i-frames after taking damage
    pub const BOSS_HIT_COOLDOWN_TICKS: u32 = 10;

    // === Combat policy ===
    /// Slash damage is BASE + combo * STEP
    pub const BASE_SLASH_DAMAGE: i32 = 35;
    pub const COMBO_DAMAGE_STEP: i32 = 10;
    /// Fixed per-hit damage the player deals to the boss (not combo-scaled)
    pub const PLAYER_HIT_VS_BOSS: i32 = 20;
    /// Damage of the boss strike hitbox against the player
    pub const BOSS_STRIKE_DAMAGE: i32 = 25;
    /// Body-contact damage the boss deals outside a strike
    pub const BOSS_TOUCH_DAMAGE: i32 = 20;
    pub const KILL_SCORE_BONUS: u64 = 100;
    /// Ranged kills score less than melee ones
    pub const PROJECTILE_KILL_SCORE_BONUS: u64 = 50;
    pub const BOSS_KILL_SCORE_BONUS: u64 = 1000;
    /// Health restored to the player on each kill
    pub const KILL_REGEN: i32 = 5;

    // === World bookkeeping ===
    /// Entities falling past this y are culled (y-down world)
    pub const STAGE_KILL_Y: f32 = 2000.0;
    /// Camera sits this far behind the player
    pub const CAMERA_LEAD: f32 = 400.0;
    /// World units of forward progress worth one score point
    pub const DISTANCE_PER_POINT: f32 = 10.0;
}

/// Clamp an input-vector component to [-1, 1]
#[inline]
pub fn clamp_unit(v: f32) -> f32 {
    v.clamp(-1.0, 1.0)
}
