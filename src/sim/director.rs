//! Adaptive difficulty director
//!
//! A session-lived observer shared behind an `Arc`. Combat reports how each
//! enemy died; once enough deaths accumulate, the director skews behavior
//! biases that enemy AI samples every tick. Biases only ever ratchet upward
//! within a session.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::PoisonError;

use serde::Serialize;

/// Minimum observed kills before any adaptation kicks in
const MIN_SAMPLE: u32 = 3;

/// How an enemy was killed, as seen from the player's state at the kill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KillCause {
    Slash,
    JumpAttack,
    DashAttack,
}

impl KillCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            KillCause::Slash => "SLASH",
            KillCause::JumpAttack => "JUMP_ATTACK",
            KillCause::DashAttack => "DASH_ATTACK",
        }
    }
}

/// Behavior skews derived from the death ledger. All values are
/// probabilities in [0, 1]. Only `jump` is consumed by enemy AI today;
/// `block` and `aggression` are reserved policy hooks, tracked and exported
/// but not yet sampled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BehaviorBias {
    /// Reserved: chance to block an incoming slash
    pub block: f32,
    /// Chance for a soldier to leap into its attack
    pub jump: f32,
    /// Reserved: general aggression skew
    pub aggression: f32,
}

#[derive(Debug, Default)]
struct MindState {
    deaths: HashMap<KillCause, u32>,
    bias: BehaviorBias,
}

/// Shared death ledger plus the biases derived from it
#[derive(Debug, Default)]
pub struct AdaptiveDirector {
    inner: Mutex<MindState>,
}

impl AdaptiveDirector {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MindState> {
        // A poisoned ledger is still a valid ledger
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record one enemy death and re-derive the biases
    pub fn record_death(&self, cause: KillCause) {
        let mut state = self.lock();
        *state.deaths.entry(cause).or_insert(0) += 1;
        log::debug!("enemy death recorded: {}", cause.as_str());

        let total: u32 = state.deaths.values().sum();
        if total < MIN_SAMPLE {
            return;
        }
        let slash_ratio = *state.deaths.get(&KillCause::Slash).unwrap_or(&0) as f32 / total as f32;
        let jump_ratio =
            *state.deaths.get(&KillCause::JumpAttack).unwrap_or(&0) as f32 / total as f32;

        // Ratchet only: adaptation never relaxes within a session
        if slash_ratio > 0.5 {
            state.bias.block = state.bias.block.max(0.4);
            state.bias.jump = state.bias.jump.max(0.3);
        }
        if jump_ratio > 0.4 {
            state.bias.aggression = state.bias.aggression.max(0.6);
        }
    }

    /// Current biases, copied out so callers never hold the lock
    pub fn biases(&self) -> BehaviorBias {
        self.lock().bias
    }

    pub fn death_count(&self, cause: KillCause) -> u32 {
        *self.lock().deaths.get(&cause).unwrap_or(&0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_adaptation_below_minimum_sample() {
        let director = AdaptiveDirector::new();
        director.record_death(KillCause::Slash);
        director.record_death(KillCause::Slash);
        assert_eq!(director.biases(), BehaviorBias::default());
    }

    #[test]
    fn slash_heavy_pattern_raises_block_and_jump() {
        let director = AdaptiveDirector::new();
        director.record_death(KillCause::Slash);
        director.record_death(KillCause::Slash);
        director.record_death(KillCause::JumpAttack);

        // 2/3 slash kills: block and jump skew, aggression untouched
        let bias = director.biases();
        assert_eq!(bias.block, 0.4);
        assert_eq!(bias.jump, 0.3);
        assert_eq!(bias.aggression, 0.0);
    }

    #[test]
    fn jump_attack_heavy_pattern_raises_aggression() {
        let director = AdaptiveDirector::new();
        director.record_death(KillCause::JumpAttack);
        director.record_death(KillCause::JumpAttack);
        director.record_death(KillCause::Slash);

        assert_eq!(director.biases().aggression, 0.6);
    }

    #[test]
    fn biases_only_ratchet_upward() {
        let director = AdaptiveDirector::new();
        for _ in 0..3 {
            director.record_death(KillCause::Slash);
        }
        assert_eq!(director.biases().block, 0.4);

        // Dilute the slash ratio below the threshold: bias must not drop
        for _ in 0..10 {
            director.record_death(KillCause::DashAttack);
        }
        assert_eq!(director.biases().block, 0.4);
        assert_eq!(director.biases().jump, 0.3);
    }

    #[test]
    fn death_counts_accumulate_per_cause() {
        let director = AdaptiveDirector::new();
        director.record_death(KillCause::DashAttack);
        director.record_death(KillCause::DashAttack);
        assert_eq!(director.death_count(KillCause::DashAttack), 2);
        assert_eq!(director.death_count(KillCause::Slash), 0);
    }
}
