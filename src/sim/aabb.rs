//! Axis-aligned bounding boxes
//!
//! Every collision and hitbox test in the game is an AABB overlap check.
//! Boxes are stored as top-left corner plus size in a y-down world, matching
//! how entities track their positions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle: top-left corner + size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_pos(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge (larger y in a y-down world)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap test. Boxes that merely share an edge do not intersect,
    /// which is what makes collision resolution idempotent: once an entity is
    /// snapped flush to a surface, the pair stops reporting contact.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_boxes_intersect() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn separated_boxes_do_not_intersect() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(20.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn edge_touching_boxes_do_not_intersect() {
        // Flush contact is not overlap - required for resolution idempotence
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));

        let below = Aabb::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&below));
    }

    #[test]
    fn center_is_midpoint() {
        let a = Aabb::new(10.0, 20.0, 4.0, 8.0);
        assert_eq!(a.center(), Vec2::new(12.0, 24.0));
    }

    #[test]
    fn contains_point_half_open() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.contains_point(Vec2::new(0.0, 0.0)));
        assert!(!a.contains_point(Vec2::new(10.0, 10.0)));
    }
}
