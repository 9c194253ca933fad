//! Collision resolution against static level geometry
//!
//! Entities are resolved one platform at a time: compute the four axis
//! penetration depths, correct along the shallowest one, zero the matching
//! velocity component, and record the contact kind so state machines can
//! react (grounded, wall slide).

use glam::Vec2;

use super::aabb::Aabb;

/// Contact flags produced by one resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contact {
    /// Entity landed on top of a platform this pass
    pub grounded: bool,
    /// Entity pressed against a wall on its left side
    pub wall_left: bool,
    /// Entity pressed against a wall on its right side
    pub wall_right: bool,
}

impl Contact {
    pub fn touching_wall(&self) -> bool {
        self.wall_left || self.wall_right
    }
}

/// Correction axis, named for which penetration depth won
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Bottom,
    Top,
    Left,
    Right,
}

/// Resolve an entity box against every platform, in platform order.
///
/// Mutates `pos` (top-left) and `vel` in place and returns the accumulated
/// contact flags. An empty geometry list is a no-op.
///
/// The axis check order bottom, top, left, right is deliberate policy: on an
/// exact penetration tie the resolver prefers a floor-landing correction over
/// a side eject. Game feel depends on it, so ties are not "fixed" here.
pub fn resolve_against_geometry(
    pos: &mut Vec2,
    vel: &mut Vec2,
    size: Vec2,
    platforms: &[Aabb],
) -> Contact {
    let mut contact = Contact::default();

    for plat in platforms {
        let body = Aabb::from_pos(*pos, size);
        if !body.intersects(plat) {
            continue;
        }

        // Depth the entity would have to move along each axis to separate
        let pen_bottom = body.bottom() - plat.y; // standing on the platform top
        let pen_top = plat.bottom() - body.y; // bumped the platform underside
        let pen_left = body.right() - plat.x; // entity's right edge went in
        let pen_right = plat.right() - body.x; // entity's left edge went in

        let mut axis = Axis::Bottom;
        let mut min_pen = pen_bottom;
        if pen_top < min_pen {
            axis = Axis::Top;
            min_pen = pen_top;
        }
        if pen_left < min_pen {
            axis = Axis::Left;
            min_pen = pen_left;
        }
        if pen_right < min_pen {
            axis = Axis::Right;
        }

        match axis {
            Axis::Bottom => {
                pos.y = plat.y - size.y;
                vel.y = 0.0;
                contact.grounded = true;
            }
            Axis::Top => {
                pos.y = plat.bottom();
                vel.y = 0.0;
            }
            Axis::Left => {
                pos.x = plat.x - size.x;
                vel.x = 0.0;
                contact.wall_right = true;
            }
            Axis::Right => {
                pos.x = plat.right();
                vel.x = 0.0;
                contact.wall_left = true;
            }
        }
    }

    contact
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ground() -> Aabb {
        Aabb::new(-1000.0, 500.0, 2000.0, 100.0)
    }

    #[test]
    fn falling_entity_lands_on_platform() {
        let mut pos = Vec2::new(0.0, 420.0); // bottom edge at 520, 20 into ground
        let mut vel = Vec2::new(0.0, 10.0);
        let size = Vec2::new(80.0, 100.0);

        let contact = resolve_against_geometry(&mut pos, &mut vel, size, &[ground()]);

        assert!(contact.grounded);
        assert_eq!(pos.y, 400.0); // snapped flush to the platform top
        assert_eq!(vel.y, 0.0);
        assert_eq!(pos.x, 0.0);
    }

    #[test]
    fn lateral_contact_zeroes_horizontal_velocity() {
        let wall = Aabb::new(100.0, 0.0, 50.0, 1000.0);
        let mut pos = Vec2::new(30.0, 400.0); // right edge at 110, 10 into the wall
        let mut vel = Vec2::new(8.0, 4.0);
        let size = Vec2::new(80.0, 160.0);

        let contact = resolve_against_geometry(&mut pos, &mut vel, size, &[wall]);

        assert!(contact.wall_right);
        assert!(!contact.grounded);
        assert_eq!(pos.x, 20.0);
        assert_eq!(vel.x, 0.0);
        assert_eq!(vel.y, 4.0); // vertical motion untouched
    }

    #[test]
    fn empty_geometry_is_a_no_op() {
        let mut pos = Vec2::new(5.0, 7.0);
        let mut vel = Vec2::new(1.0, 2.0);
        let contact = resolve_against_geometry(&mut pos, &mut vel, Vec2::new(10.0, 10.0), &[]);
        assert_eq!(contact, Contact::default());
        assert_eq!(pos, Vec2::new(5.0, 7.0));
        assert_eq!(vel, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn resolution_is_idempotent() {
        let mut pos = Vec2::new(0.0, 450.0);
        let mut vel = Vec2::new(0.0, 12.0);
        let size = Vec2::new(80.0, 100.0);
        let plats = [ground()];

        resolve_against_geometry(&mut pos, &mut vel, size, &plats);
        let settled = pos;

        // Second pass with zero residual velocity moves nothing
        resolve_against_geometry(&mut pos, &mut vel, size, &plats);
        assert_eq!(pos, settled);
        assert_eq!(vel, Vec2::ZERO);
    }

    #[test]
    fn exact_tie_prefers_bottom_correction() {
        // A square sunk into a platform corner by the same depth on both axes
        let plat = Aabb::new(100.0, 100.0, 200.0, 200.0);
        let size = Vec2::new(40.0, 40.0);
        // bottom pen = (70 + 40) - 100 = 10, left pen = (70 + 40) - 100 = 10
        let mut pos = Vec2::new(70.0, 70.0);
        let mut vel = Vec2::new(3.0, 3.0);

        let contact = resolve_against_geometry(&mut pos, &mut vel, size, &[plat]);

        assert!(contact.grounded);
        assert!(!contact.wall_right);
        assert_eq!(pos.y, 60.0); // corrected upward onto the top
        assert_eq!(pos.x, 70.0); // x untouched
        assert_eq!(vel.y, 0.0);
        assert_eq!(vel.x, 3.0);
    }

    proptest! {
        #[test]
        fn resolved_entity_never_overlaps_single_platform(
            px in -500.0f32..500.0,
            py in 350.0f32..560.0,
            vx in -20.0f32..20.0,
            vy in -20.0f32..20.0,
        ) {
            let mut pos = Vec2::new(px, py);
            let mut vel = Vec2::new(vx, vy);
            let size = Vec2::new(80.0, 100.0);
            let plats = [ground()];

            resolve_against_geometry(&mut pos, &mut vel, size, &plats);

            let body = Aabb::from_pos(pos, size);
            prop_assert!(!body.intersects(&plats[0]));
        }
    }
}
