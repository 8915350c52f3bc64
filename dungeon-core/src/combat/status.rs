//! Timed status effects.
//!
//! An effect fires its action whenever its remaining time is a multiple of
//! its pulse period, then counts down by one frame. Temporary effects undo
//! their attribute change once when they expire.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What an effect does to its holder on each pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectAction {
    Heal,
    Poison,
    Strength,
    Defense,
    Speed,
}

impl EffectAction {
    /// Attribute changes can be undone; hitpoint changes cannot.
    pub fn is_reversible(self) -> bool {
        matches!(
            self,
            EffectAction::Strength | EffectAction::Defense | EffectAction::Speed
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub title: String,
    pub action: EffectAction,
    remaining: i32,
    pulse: i32,
    potency: i32,
    temporary: bool,
}

impl StatusEffect {
    /// Potency is stored as a magnitude and the pulse is at least one frame.
    pub fn new(
        title: impl Into<String>,
        action: EffectAction,
        duration: i32,
        pulse: i32,
        potency: i32,
        temporary: bool,
    ) -> Self {
        Self {
            title: title.into(),
            action,
            remaining: duration,
            pulse: pulse.max(1),
            potency: potency.abs(),
            temporary,
        }
    }

    pub fn remaining(&self) -> i32 {
        self.remaining
    }

    pub fn pulse(&self) -> i32 {
        self.pulse
    }

    pub fn potency(&self) -> i32 {
        self.potency
    }

    pub fn is_temporary(&self) -> bool {
        self.temporary
    }

    /// True on frames where the action fires
    pub fn is_time(&self) -> bool {
        self.remaining % self.pulse == 0
    }

    pub fn update_time(&mut self) {
        self.remaining -= 1;
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= 0
    }
}

impl fmt::Display for StatusEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_schedule() {
        let mut effect = StatusEffect::new("healing", EffectAction::Heal, 240, 60, 5, false);
        let mut fired = 0;
        while !effect.is_expired() {
            if effect.is_time() {
                fired += 1;
            }
            effect.update_time();
        }
        // Fires at 240, 180, 120 and 60 remaining
        assert_eq!(fired, 4);
    }

    #[test]
    fn test_potency_is_magnitude() {
        let effect = StatusEffect::new("poison", EffectAction::Poison, 10, 1, -7, false);
        assert_eq!(effect.potency(), 7);
    }

    #[test]
    fn test_zero_pulse_clamped() {
        let effect = StatusEffect::new("odd", EffectAction::Speed, 10, 0, 1, true);
        assert_eq!(effect.pulse(), 1);
        assert!(effect.is_time());
    }

    #[test]
    fn test_reversible_actions() {
        assert!(EffectAction::Strength.is_reversible());
        assert!(EffectAction::Speed.is_reversible());
        assert!(!EffectAction::Heal.is_reversible());
        assert!(!EffectAction::Poison.is_reversible());
    }

    #[test]
    fn test_display() {
        let effect = StatusEffect::new("speed", EffectAction::Speed, 240, 240, 1, true);
        assert_eq!(effect.to_string(), "speed (240)");
    }
}
