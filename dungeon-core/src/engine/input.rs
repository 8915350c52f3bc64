//! Per-frame input. Hosts translate their own devices into these.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

/// Held intents sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputFrame {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
    /// Fire toward this point in room pixels
    pub fire_at: Option<Vec2>,
    /// Use the item in this hotbar slot
    pub use_item: Option<usize>,
}

impl InputFrame {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn moving(north: bool, south: bool, east: bool, west: bool) -> Self {
        Self {
            north,
            south,
            east,
            west,
            ..Self::default()
        }
    }

    pub fn firing(target: Vec2) -> Self {
        Self {
            fire_at: Some(target),
            ..Self::default()
        }
    }

    pub fn using(slot: usize) -> Self {
        Self {
            use_item: Some(slot),
            ..Self::default()
        }
    }

    /// Movement for this frame at `speed` pixels per axis. Opposite keys
    /// cancel out.
    pub fn displacement(&self, speed: f32) -> Vec2 {
        let mut delta = Vec2::ZERO;
        if self.north {
            delta.y -= speed;
        }
        if self.south {
            delta.y += speed;
        }
        if self.east {
            delta.x += speed;
        }
        if self.west {
            delta.x -= speed;
        }
        delta
    }
}

/// Discrete, edge-triggered commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Starts the game, or restarts it after a game over
    AnyKey,
    TogglePause,
}
