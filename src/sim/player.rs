//! Player state machine, physics and combat actions
//!
//! The player is a fixed-tick state machine. External input arrives through
//! `set_movement_vector` and the one-shot actions `jump`/`dash`/`attack`;
//! `step` advances physics, resolves level contacts and reclassifies the
//! state from the post-collision velocity.

use glam::Vec2;

use super::aabb::Aabb;
use super::collision::resolve_against_geometry;
use super::state::Facing;
use crate::clamp_unit;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PlayerState {
    Idle,
    Running,
    Jumping,
    Falling,
    WallSliding,
    Dashing,
    Attacking,
    /// Terminal: no further physics or input applies
    Dead,
}

#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner of the full-size frame (y-down world units)
    pub pos: Vec2,
    pub vel: Vec2,
    pub facing: Facing,
    pub state: PlayerState,
    pub health: i32,
    pub max_health: i32,
    /// Remaining i-frames after taking a hit
    pub invincibility_ticks: u32,
    /// Combo chain length, 0..=3
    pub combo: u8,
    /// Ticks left in which a follow-up attack extends the combo
    pub combo_window_ticks: u32,
    attack_ticks: u32,
    dash_ticks: u32,
    pub dash_cooldown_ticks: u32,
    pub throw_cooldown_ticks: u32,
    /// Input lockout after a wall jump
    input_lock_ticks: u32,
    /// Knockback overrides horizontal input while nonzero
    knockback_ticks: u32,
    pub grounded: bool,
    /// -1.0 wall on the left, 1.0 wall on the right, 0.0 no wall contact
    wall_side: f32,
    move_input: Vec2,
}

impl Player {
    pub fn new(spawn: Vec2) -> Self {
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            facing: Facing::Right,
            state: PlayerState::Idle,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            invincibility_ticks: 0,
            combo: 0,
            combo_window_ticks: 0,
            attack_ticks: 0,
            dash_ticks: 0,
            dash_cooldown_ticks: 0,
            throw_cooldown_ticks: 0,
            input_lock_ticks: 0,
            knockback_ticks: 0,
            grounded: false,
            wall_side: 0.0,
            move_input: Vec2::ZERO,
        }
    }

    /// True while i-frames from a previous hit are active
    pub fn invincible(&self) -> bool {
        self.invincibility_ticks > 0
    }

    /// Movement input with components clamped to [-1, 1]
    pub fn set_movement_vector(&mut self, x: f32, y: f32) {
        self.move_input = Vec2::new(clamp_unit(x), clamp_unit(y));
    }

    /// Upward impulse when grounded, or a wall jump while wall sliding
    pub fn jump(&mut self) {
        match self.state {
            PlayerState::Dead | PlayerState::Dashing => {}
            PlayerState::WallSliding => {
                let away = if self.wall_side != 0.0 {
                    -self.wall_side
                } else {
                    -self.facing.sign()
                };
                self.vel.y = JUMP_IMPULSE;
                self.vel.x = away * WALL_JUMP_KICK;
                self.input_lock_ticks = WALL_JUMP_LOCK_TICKS;
                self.facing = Facing::from_sign(away);
                self.state = PlayerState::Jumping;
                self.grounded = false;
            }
            _ => {
                if self.grounded {
                    self.vel.y = JUMP_IMPULSE;
                    self.state = PlayerState::Jumping;
                    self.grounded = false;
                }
            }
        }
    }

    /// Fixed-duration dash in the facing direction with full damage immunity
    pub fn dash(&mut self) {
        if matches!(self.state, PlayerState::Dead | PlayerState::Dashing)
            || self.dash_cooldown_ticks > 0
        {
            return;
        }
        self.state = PlayerState::Dashing;
        self.dash_ticks = DASH_TICKS;
        self.dash_cooldown_ticks = DASH_COOLDOWN_TICKS;
    }

    /// Start a sword swing, extending the combo if inside the window.
    ///
    /// Ignored while already attacking. Also ignored while dashing: the dash
    /// is its own committed attack (contact damage) and keeps its i-frames.
    pub fn attack(&mut self) {
        if matches!(
            self.state,
            PlayerState::Dead | PlayerState::Attacking | PlayerState::Dashing
        ) {
            return;
        }
        self.combo = if self.combo_window_ticks > 0 {
            (self.combo + 1).min(COMBO_MAX)
        } else {
            1
        };
        self.combo_window_ticks = 0;
        self.state = PlayerState::Attacking;
        self.attack_ticks = ATTACK_TICKS;
    }

    /// Consume a shuriken throw if one is available right now. The actual
    /// projectile is spawned by the tick driver.
    pub fn try_throw(&mut self) -> bool {
        if matches!(self.state, PlayerState::Dead | PlayerState::Dashing)
            || self.throw_cooldown_ticks > 0
        {
            return false;
        }
        self.throw_cooldown_ticks = THROW_COOLDOWN_TICKS;
        true
    }

    /// Take damage. No-op while invincible, dashing or dead.
    /// Returns whether the hit connected.
    pub fn on_hit(&mut self, damage: i32) -> bool {
        if self.invincible() || matches!(self.state, PlayerState::Dashing | PlayerState::Dead) {
            return false;
        }
        self.health -= damage;
        if self.health <= 0 {
            self.health = 0;
            self.state = PlayerState::Dead;
            self.vel = Vec2::ZERO;
            log::info!("player died");
            return true;
        }
        self.invincibility_ticks = INVINCIBILITY_TICKS;
        self.vel = Vec2::new(-self.facing.sign() * KNOCKBACK_X, KNOCKBACK_Y);
        self.knockback_ticks = KNOCKBACK_LOCK_TICKS;
        self.state = PlayerState::Falling;
        true
    }

    /// Minor health regeneration on each enemy kill
    pub fn on_kill(&mut self) {
        self.health = (self.health + KILL_REGEN).min(self.max_health);
    }

    /// Vertical offset of the bounding box inside the full frame.
    /// The box hugs the ground while dashing.
    fn box_offset(&self) -> f32 {
        if self.state == PlayerState::Dashing {
            PLAYER_HEIGHT - DASH_HEIGHT
        } else {
            0.0
        }
    }

    fn box_size(&self) -> Vec2 {
        if self.state == PlayerState::Dashing {
            Vec2::new(PLAYER_WIDTH, DASH_HEIGHT)
        } else {
            Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT)
        }
    }

    /// Current body hitbox (state-dependent height)
    pub fn body_box(&self) -> Aabb {
        Aabb::new(
            self.pos.x,
            self.pos.y + self.box_offset(),
            self.box_size().x,
            self.box_size().y,
        )
    }

    /// Active sword hitbox, extending from the body edge in the facing
    /// direction. Reach is longer at max combo.
    pub fn sword_hitbox(&self) -> Option<Aabb> {
        if self.state != PlayerState::Attacking {
            return None;
        }
        let body = self.body_box();
        let reach = if self.combo >= COMBO_MAX {
            SWORD_REACH_MAX_COMBO
        } else {
            SWORD_REACH
        };
        Some(match self.facing {
            Facing::Right => Aabb::new(body.right(), body.y, reach, body.h),
            Facing::Left => Aabb::new(body.x - reach, body.y, reach, body.h),
        })
    }

    /// Advance one tick: timers, control, gravity, integration, level
    /// contacts, and the post-step state classifier.
    pub fn step(&mut self, platforms: &[Aabb]) {
        if self.state == PlayerState::Dead {
            return;
        }

        if self.invincibility_ticks > 0 {
            self.invincibility_ticks -= 1;
        }
        if self.dash_cooldown_ticks > 0 {
            self.dash_cooldown_ticks -= 1;
        }
        if self.throw_cooldown_ticks > 0 {
            self.throw_cooldown_ticks -= 1;
        }
        if self.input_lock_ticks > 0 {
            self.input_lock_ticks -= 1;
        }
        if self.knockback_ticks > 0 {
            self.knockback_ticks -= 1;
        }
        // The combo window only runs between swings
        if self.state != PlayerState::Attacking && self.combo_window_ticks > 0 {
            self.combo_window_ticks -= 1;
            if self.combo_window_ticks == 0 {
                self.combo = 0;
            }
        }

        // Horizontal control, unless something overrides it
        if self.state != PlayerState::Dashing
            && self.input_lock_ticks == 0
            && self.knockback_ticks == 0
        {
            self.vel.x = self.move_input.x * MOVE_SPEED;
            if self.move_input.x > 0.01 {
                self.facing = Facing::Right;
            } else if self.move_input.x < -0.01 {
                self.facing = Facing::Left;
            }
        }

        // Gravity, except the dash which overrides velocity outright
        if self.state == PlayerState::Dashing {
            self.vel = Vec2::new(self.facing.sign() * DASH_SPEED, 0.0);
            self.dash_ticks -= 1;
            if self.dash_ticks == 0 {
                self.state = PlayerState::Falling;
            }
        } else {
            self.vel.y += GRAVITY;
        }

        // Swing timer; the combo window opens when the swing completes
        if self.state == PlayerState::Attacking {
            self.attack_ticks -= 1;
            if self.attack_ticks == 0 {
                self.state = PlayerState::Falling;
                self.combo_window_ticks = COMBO_WINDOW_TICKS;
            }
        }

        // Integrate, then resolve against level geometry
        self.pos += self.vel;
        let offset = self.box_offset();
        let size = self.box_size();
        let mut box_pos = Vec2::new(self.pos.x, self.pos.y + offset);
        let contact = resolve_against_geometry(&mut box_pos, &mut self.vel, size, platforms);
        self.pos = Vec2::new(box_pos.x, box_pos.y - offset);
        self.grounded = contact.grounded;
        self.wall_side = if contact.wall_left {
            -1.0
        } else if contact.wall_right {
            1.0
        } else {
            0.0
        };

        // Lateral contact while airborne and falling forces a wall slide
        let sliding = !contact.grounded
            && self.vel.y >= 0.0
            && contact.touching_wall()
            && !matches!(self.state, PlayerState::Dashing | PlayerState::Attacking);
        if sliding {
            self.state = PlayerState::WallSliding;
        } else if self.state == PlayerState::WallSliding {
            self.state = PlayerState::Falling;
        }

        // Generic classifier from post-collision velocity
        if !matches!(
            self.state,
            PlayerState::Dashing
                | PlayerState::Attacking
                | PlayerState::WallSliding
                | PlayerState::Dead
        ) {
            self.state = if self.vel.y.abs() > AIRBORNE_SPEED_THRESHOLD {
                if self.vel.y < 0.0 {
                    PlayerState::Jumping
                } else {
                    PlayerState::Falling
                }
            } else if self.vel.x.abs() > RUN_SPEED_THRESHOLD {
                PlayerState::Running
            } else {
                PlayerState::Idle
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn flat_ground() -> Vec<Aabb> {
        vec![Aabb::new(-5000.0, 500.0, 10000.0, 200.0)]
    }

    /// A player standing on the test ground
    fn grounded_player() -> (Player, Vec<Aabb>) {
        let plats = flat_ground();
        let mut player = Player::new(Vec2::new(0.0, 500.0 - PLAYER_HEIGHT));
        player.step(&plats);
        assert!(player.grounded);
        (player, plats)
    }

    #[test]
    fn jump_returns_to_rest_with_unchanged_x() {
        let (mut player, plats) = grounded_player();
        let start_x = player.pos.x;
        player.jump();
        assert_eq!(player.state, PlayerState::Jumping);

        for _ in 0..200 {
            player.step(&plats);
        }

        assert!(player.grounded);
        assert!(matches!(
            player.state,
            PlayerState::Idle | PlayerState::Running
        ));
        assert_eq!(player.vel, Vec2::ZERO);
        assert_eq!(player.pos.x, start_x);
    }

    #[test]
    fn jump_requires_ground() {
        let plats = flat_ground();
        let mut player = Player::new(Vec2::new(0.0, 0.0)); // high in the air
        player.step(&plats);
        assert!(!player.grounded);
        let vy = player.vel.y;
        player.jump();
        assert_eq!(player.vel.y, vy); // no mid-air jump
    }

    #[test]
    fn combo_extends_within_window_and_caps_at_three() {
        let (mut player, plats) = grounded_player();
        for expected in [1u8, 2, 3, 3] {
            player.attack();
            assert_eq!(player.combo, expected);
            // Finish the swing; the window opens on the last swing tick
            for _ in 0..ATTACK_TICKS {
                player.step(&plats);
            }
            assert!(player.combo_window_ticks > 0);
        }
    }

    #[test]
    fn combo_decays_exactly_at_window_expiry() {
        let (mut player, plats) = grounded_player();
        player.attack();
        for _ in 0..ATTACK_TICKS {
            player.step(&plats);
        }
        assert_eq!(player.combo, 1);
        assert_eq!(player.combo_window_ticks, COMBO_WINDOW_TICKS);

        // Combo holds through the whole window...
        for _ in 0..COMBO_WINDOW_TICKS - 1 {
            player.step(&plats);
            assert_eq!(player.combo, 1);
        }
        // ...and resets on the tick the window closes
        player.step(&plats);
        assert_eq!(player.combo, 0);
        // Querying again without new attacks changes nothing
        player.step(&plats);
        assert_eq!(player.combo, 0);
    }

    #[test]
    fn attack_without_window_resets_combo_to_one() {
        let (mut player, plats) = grounded_player();
        player.attack();
        for _ in 0..ATTACK_TICKS {
            player.step(&plats);
        }
        // Let the window lapse entirely
        for _ in 0..COMBO_WINDOW_TICKS {
            player.step(&plats);
        }
        assert_eq!(player.combo, 0);
        player.attack();
        assert_eq!(player.combo, 1);
    }

    #[test]
    fn repeated_attack_calls_during_swing_are_ignored() {
        let (mut player, _plats) = grounded_player();
        player.attack();
        assert_eq!(player.combo, 1);
        player.attack();
        player.attack();
        assert_eq!(player.combo, 1);
    }

    #[test]
    fn dash_grants_full_immunity() {
        let (mut player, _plats) = grounded_player();
        player.dash();
        assert_eq!(player.state, PlayerState::Dashing);
        let health = player.health;
        assert!(!player.on_hit(50));
        assert_eq!(player.health, health);
    }

    #[test]
    fn hit_applies_iframes_knockback_and_falling() {
        let (mut player, _plats) = grounded_player();
        assert!(player.on_hit(30));
        assert_eq!(player.health, PLAYER_MAX_HEALTH - 30);
        assert_eq!(player.state, PlayerState::Falling);
        assert!(player.invincible());
        assert!(player.vel.y < 0.0); // knocked upward
        assert!(player.vel.x < 0.0); // away from the facing direction

        // Second hit inside the i-frame window does nothing
        assert!(!player.on_hit(30));
        assert_eq!(player.health, PLAYER_MAX_HEALTH - 30);
    }

    #[test]
    fn lethal_hit_clamps_health_and_is_terminal() {
        let (mut player, plats) = grounded_player();
        assert!(player.on_hit(9999));
        assert_eq!(player.health, 0);
        assert_eq!(player.state, PlayerState::Dead);

        // Dead is absorbing: stepping moves nothing
        let pos = player.pos;
        player.set_movement_vector(1.0, 0.0);
        player.jump();
        player.step(&plats);
        assert_eq!(player.pos, pos);
        assert_eq!(player.state, PlayerState::Dead);
    }

    #[test]
    fn kill_regen_never_exceeds_max_health() {
        let (mut player, _plats) = grounded_player();
        player.on_hit(2);
        player.invincibility_ticks = 0;
        player.on_kill();
        assert_eq!(player.health, PLAYER_MAX_HEALTH);
        player.on_kill();
        assert_eq!(player.health, PLAYER_MAX_HEALTH);
    }

    #[test]
    fn movement_vector_components_are_clamped() {
        let mut player = Player::new(Vec2::ZERO);
        player.set_movement_vector(7.0, -3.0);
        assert_eq!(player.move_input, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn sword_reach_extends_at_max_combo() {
        let (mut player, _plats) = grounded_player();
        player.combo = 2;
        player.attack(); // combo window closed -> resets to 1? No: window is 0 here
        assert_eq!(player.combo, 1);
        let short = player.sword_hitbox().expect("attacking");
        assert_eq!(short.w, SWORD_REACH);

        player.combo = COMBO_MAX;
        let long = player.sword_hitbox().expect("attacking");
        assert_eq!(long.w, SWORD_REACH_MAX_COMBO);
        assert_eq!(long.x, player.body_box().right());
    }

    #[test]
    fn dash_shrinks_bounding_box_to_ground_level() {
        let (mut player, _plats) = grounded_player();
        let full = player.body_box();
        player.dash();
        let ducked = player.body_box();
        assert_eq!(ducked.h, DASH_HEIGHT);
        assert_eq!(ducked.bottom(), full.bottom()); // feet stay planted
    }

    #[test]
    fn wall_slide_and_wall_jump() {
        // Ground plus a wall to the right of the player
        let plats = vec![
            Aabb::new(-5000.0, 500.0, 10000.0, 200.0),
            Aabb::new(200.0, -500.0, 100.0, 1000.0),
        ];
        let mut player = Player::new(Vec2::new(60.0, 0.0));
        player.set_movement_vector(1.0, 0.0);

        let mut slid = false;
        for _ in 0..60 {
            player.step(&plats);
            if player.state == PlayerState::WallSliding {
                slid = true;
                break;
            }
        }
        assert!(slid, "player should enter WallSliding against the wall");

        player.jump();
        assert_eq!(player.state, PlayerState::Jumping);
        assert!(player.vel.x < 0.0, "wall jump kicks away from the wall");
        assert_eq!(player.facing, Facing::Left);

        // Input lockout: holding toward the wall does not cancel the kick
        player.step(&plats);
        assert!(player.vel.x < 0.0);
    }

    #[test]
    fn throw_respects_its_cooldown() {
        let (mut player, plats) = grounded_player();
        assert!(player.try_throw());
        assert!(!player.try_throw()); // cooldown just started

        for _ in 0..THROW_COOLDOWN_TICKS {
            player.step(&plats);
        }
        assert!(player.try_throw());
    }

    #[test]
    fn no_throw_while_dashing_or_dead() {
        let (mut player, _plats) = grounded_player();
        player.dash();
        assert!(!player.try_throw());

        let (mut player, _plats) = grounded_player();
        player.on_hit(9999);
        assert!(!player.try_throw());
    }

    proptest! {
        #[test]
        fn health_is_never_negative(damages in proptest::collection::vec(0i32..200, 1..20)) {
            let (mut player, plats) = grounded_player();
            for dmg in damages {
                player.on_hit(dmg);
                player.invincibility_ticks = 0;
                player.step(&plats);
                prop_assert!(player.health >= 0);
            }
        }
    }
}
