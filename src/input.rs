//! Pending-input slot between a frontend thread and the simulation
//!
//! A frontend pushes input whenever it likes; the simulation drains the slot
//! exactly once at the top of each tick. One-shot actions (jump, dash,
//! attack) latch until drained so a quick tap between ticks is never lost.
//! The movement vector persists across drains like a held stick.

use std::sync::Mutex;
use std::sync::PoisonError;

use crate::clamp_unit;
use crate::sim::TickInput;

#[derive(Debug, Default, Clone, Copy)]
struct Pending {
    move_x: f32,
    move_y: f32,
    jump: bool,
    dash: bool,
    attack: bool,
    throw: bool,
}

#[derive(Debug, Default)]
pub struct InputSlot {
    pending: Mutex<Pending>,
}

impl InputSlot {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Pending> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Held-stick movement, clamped per component to [-1, 1]
    pub fn set_movement_vector(&self, x: f32, y: f32) {
        let mut p = self.lock();
        p.move_x = clamp_unit(x);
        p.move_y = clamp_unit(y);
    }

    pub fn queue_jump(&self) {
        self.lock().jump = true;
    }

    pub fn queue_dash(&self) {
        self.lock().dash = true;
    }

    pub fn queue_attack(&self) {
        self.lock().attack = true;
    }

    pub fn queue_throw(&self) {
        self.lock().throw = true;
    }

    /// Take this tick's input. One-shots are consumed; movement persists.
    pub fn drain(&self) -> TickInput {
        let mut p = self.lock();
        let input = TickInput {
            move_x: p.move_x,
            move_y: p.move_y,
            jump: p.jump,
            dash: p.dash,
            attack: p.attack,
            throw: p.throw,
        };
        p.jump = false;
        p.dash = false;
        p.attack = false;
        p.throw = false;
        input
    }
}
