//! Thrown shuriken
//!
//! Projectiles fly straight in the direction they were thrown, despawn on
//! level contact or when their flight time runs out, and are compacted out
//! of the world alongside dead enemies. The collection is cleared on restart.

use glam::Vec2;

use super::aabb::Aabb;
use super::state::Facing;
use crate::consts::*;

#[derive(Debug, Clone)]
pub struct Projectile {
    /// Top-left corner, y-down
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining flight ticks; hits zero and the shuriken is spent
    pub ttl: u32,
    pub alive: bool,
}

impl Projectile {
    /// Launch from a point, flying flat in the facing direction
    pub fn thrown_from(origin: Vec2, facing: Facing) -> Self {
        Self {
            pos: origin - Vec2::splat(PROJECTILE_SIZE / 2.0),
            vel: Vec2::new(facing.sign() * PROJECTILE_SPEED, 0.0),
            ttl: PROJECTILE_TTL_TICKS,
            alive: true,
        }
    }

    pub fn body_box(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, PROJECTILE_SIZE, PROJECTILE_SIZE)
    }

    /// Advance one tick: fly, expire, stick into level geometry
    pub fn step(&mut self, platforms: &[Aabb]) {
        if !self.alive {
            return;
        }
        self.pos += self.vel;
        self.ttl = self.ttl.saturating_sub(1);
        if self.ttl == 0 {
            self.alive = false;
            return;
        }
        let body = self.body_box();
        if platforms.iter().any(|p| body.intersects(p)) {
            self.alive = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flies_flat_in_the_thrown_direction() {
        let mut p = Projectile::thrown_from(Vec2::new(100.0, 200.0), Facing::Left);
        let y = p.pos.y;
        p.step(&[]);
        assert_eq!(p.vel.y, 0.0);
        assert_eq!(p.pos.y, y); // no gravity on shuriken
        assert!(p.vel.x < 0.0);
    }

    #[test]
    fn expires_after_its_flight_time() {
        let mut p = Projectile::thrown_from(Vec2::ZERO, Facing::Right);
        for _ in 0..PROJECTILE_TTL_TICKS - 1 {
            p.step(&[]);
            assert!(p.alive);
        }
        p.step(&[]);
        assert!(!p.alive);
    }

    #[test]
    fn sticks_into_level_geometry() {
        let wall = Aabb::new(100.0, -500.0, 100.0, 1000.0);
        let mut p = Projectile::thrown_from(Vec2::new(0.0, 0.0), Facing::Right);
        for _ in 0..20 {
            p.step(&[wall]);
            if !p.alive {
                break;
            }
        }
        assert!(!p.alive);
        // It stopped at the wall, not past it
        assert!(p.pos.x < wall.right());
    }
}
