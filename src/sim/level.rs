//! Stage geometry and enemy spawn tables

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnKind {
    Soldier,
    Boss,
}

/// Where an enemy starts when the stage is (re)built
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spawn {
    pub kind: SpawnKind,
    pub x: f32,
    pub y: f32,
}

/// Static level data: platforms, spawn table, player start
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    pub platforms: Vec<Aabb>,
    pub spawns: Vec<Spawn>,
    pub player_start: Vec2,
}

impl Stage {
    /// The built-in stage: a long run to the right ending in the boss arena
    pub fn one() -> Self {
        const GROUND_Y: f32 = 900.0;
        let soldier_y = GROUND_Y - SOLDIER_HEIGHT;

        Self {
            platforms: vec![
                // Main ground, in segments with pits between them
                Aabb::new(-400.0, GROUND_Y, 3200.0, 300.0),
                Aabb::new(3400.0, GROUND_Y, 2600.0, 300.0),
                Aabb::new(6400.0, GROUND_Y, 4000.0, 300.0),
                // Ledges over the pits and along the run
                Aabb::new(1200.0, 650.0, 400.0, 60.0),
                Aabb::new(2900.0, 750.0, 500.0, 60.0),
                Aabb::new(4400.0, 640.0, 360.0, 60.0),
                Aabb::new(6000.0, 760.0, 400.0, 60.0),
                // Walls for wall jumps
                Aabb::new(5200.0, 500.0, 120.0, 400.0),
                Aabb::new(7600.0, 420.0, 120.0, 480.0),
                // Arena back wall
                Aabb::new(10280.0, 100.0, 120.0, 800.0),
            ],
            spawns: vec![
                Spawn { kind: SpawnKind::Soldier, x: 1500.0, y: soldier_y },
                Spawn { kind: SpawnKind::Soldier, x: 2400.0, y: soldier_y },
                Spawn { kind: SpawnKind::Soldier, x: 3800.0, y: soldier_y },
                Spawn { kind: SpawnKind::Soldier, x: 4600.0, y: soldier_y },
                Spawn { kind: SpawnKind::Soldier, x: 5600.0, y: soldier_y },
                Spawn { kind: SpawnKind::Soldier, x: 6900.0, y: soldier_y },
                Spawn { kind: SpawnKind::Soldier, x: 7300.0, y: soldier_y },
                Spawn { kind: SpawnKind::Boss, x: 9400.0, y: GROUND_Y - BOSS_HEIGHT },
            ],
            player_start: Vec2::new(0.0, GROUND_Y - PLAYER_HEIGHT),
        }
    }
}
