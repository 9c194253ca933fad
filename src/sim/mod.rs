//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, everything counted in ticks
//! - Seeded RNG only
//! - Single-threaded entity mutation, one `tick()` at a time
//! - No rendering or platform dependencies

pub mod aabb;
pub mod boss;
pub mod collision;
pub mod combat;
pub mod director;
pub mod enemy;
pub mod level;
pub mod player;
pub mod projectile;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use collision::{Contact, resolve_against_geometry};
pub use director::{AdaptiveDirector, BehaviorBias, KillCause};
pub use enemy::{Enemy, EnemyKind, EnemyState};
pub use level::{Spawn, SpawnKind, Stage};
pub use player::{Player, PlayerState};
pub use projectile::Projectile;
pub use state::{BossView, EnemyView, Facing, GameState, PlayerView, ProjectileView, Snapshot};
pub use tick::{TickInput, tick};
