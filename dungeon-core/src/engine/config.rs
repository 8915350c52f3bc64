use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use crate::combat::weapons::Weapon;
use crate::combat::{Actor, ActorAttributes};
use crate::constants::*;
use crate::equipment::Boots;
use crate::error::{DungeonError, Result};
use crate::loot::PotionKind;
use crate::movement::Body;

/// Base stats and hitbox for one kind of actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorProfile {
    pub strength: i32,
    pub hitpoints: i32,
    pub defense: i32,
    pub speed: i32,
    pub damage_window: i32,
    pub size: [f32; 2],
}

impl ActorProfile {
    pub fn attributes(&self) -> ActorAttributes {
        ActorAttributes::new(self.strength, self.hitpoints, self.defense, self.speed)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::from(self.size)
    }

    pub fn actor(&self, position: Vec2) -> Actor {
        Actor::new(Body::new(position, self.size()), self.attributes(), self.damage_window)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyProfile {
    pub stats: ActorProfile,
    /// Distance at which the enemy notices the player
    pub trigger_range: f32,
    /// Pixels per frame while chasing
    pub charge_speed: f32,
}

/// What the player starts every run with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loadout {
    pub potions: Vec<(PotionKind, i32)>,
    pub weapon: Option<Weapon>,
    pub boots: Option<Boots>,
    pub key: Option<String>,
}

impl Default for Loadout {
    fn default() -> Self {
        Self {
            potions: vec![
                (PotionKind::Healing, 5),
                (PotionKind::Healing, 5),
                (PotionKind::Speed, 5),
            ],
            weapon: Some(Weapon::basic_bow()),
            boots: Some(Boots::cheap_boots()),
            key: Some("Dungeon Key".into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed seed for reproducible runs; OS entropy when absent
    pub seed: Option<u64>,
    pub rooms_per_dungeon: usize,
    pub tile_size: f32,
    pub shot_cooldown: i32,
    pub projectile_range_tiles: f32,
    pub spike_damage: i32,
    pub pickup_score: u32,
    pub wander_distance: i32,
    pub initial_wander_distance: i32,
    pub player: ActorProfile,
    pub enemy: EnemyProfile,
    pub boss: EnemyProfile,
    pub loadout: Loadout,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            rooms_per_dungeon: DEFAULT_ROOMS_PER_DUNGEON,
            tile_size: TILE_SIZE,
            shot_cooldown: SHOT_COOLDOWN,
            projectile_range_tiles: PROJECTILE_RANGE_TILES,
            spike_damage: SPIKE_DAMAGE,
            pickup_score: PICKUP_SCORE,
            wander_distance: WANDER_DISTANCE,
            initial_wander_distance: INITIAL_WANDER_DISTANCE,
            player: ActorProfile {
                strength: 50,
                hitpoints: 100,
                defense: 0,
                speed: 4,
                damage_window: PLAYER_DAMAGE_WINDOW,
                size: [32.0, 32.0],
            },
            enemy: EnemyProfile {
                stats: ActorProfile {
                    strength: 10,
                    hitpoints: 100,
                    defense: 10,
                    speed: 4,
                    damage_window: ENEMY_DAMAGE_WINDOW,
                    size: [32.0, 32.0],
                },
                trigger_range: 110.0,
                charge_speed: 3.0,
            },
            boss: EnemyProfile {
                stats: ActorProfile {
                    strength: 30,
                    hitpoints: 1000,
                    defense: 10,
                    speed: 4,
                    damage_window: BOSS_DAMAGE_WINDOW,
                    size: [64.0, 64.0],
                },
                trigger_range: 300.0,
                charge_speed: 4.0,
            },
            loadout: Loadout::default(),
        }
    }
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse a RON document. Missing fields take their defaults.
    pub fn from_ron(text: &str) -> Result<Self> {
        let config: GameConfig =
            ron::from_str(text).map_err(|e| DungeonError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| DungeonError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.tile_size <= 0.0 {
            return Err(DungeonError::Config("tile_size must be positive".into()));
        }
        if self.rooms_per_dungeon == 0 {
            return Err(DungeonError::Config("rooms_per_dungeon must be at least 1".into()));
        }
        if self.shot_cooldown < 0 {
            return Err(DungeonError::Config("shot_cooldown must not be negative".into()));
        }
        for (name, profile) in [
            ("player", &self.player),
            ("enemy", &self.enemy.stats),
            ("boss", &self.boss.stats),
        ] {
            if profile.hitpoints <= 0 {
                return Err(DungeonError::Config(format!("{} hitpoints must be positive", name)));
            }
            if profile.size[0] <= 0.0 || profile.size[1] <= 0.0 {
                return Err(DungeonError::Config(format!("{} size must be positive", name)));
            }
        }
        Ok(())
    }

    /// Projectile travel budget in pixels
    pub fn projectile_range(&self) -> f32 {
        self.projectile_range_tiles * self.tile_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.projectile_range(), 320.0);
        assert_eq!(config.player.attributes().current_strength, 50);
        assert_eq!(config.boss.stats.hitpoints, 1000);
    }

    #[test]
    fn test_ron_roundtrip() {
        let config = GameConfig::with_seed(99);
        let text = config.to_ron().unwrap();
        let restored = GameConfig::from_ron(&text).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let config = GameConfig::from_ron("(seed: Some(7), rooms_per_dungeon: 9)").unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.rooms_per_dungeon, 9);
        assert_eq!(config.spike_damage, SPIKE_DAMAGE);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = GameConfig::from_ron("(rooms_per_dungeon: 0)").unwrap_err();
        assert!(matches!(err, DungeonError::Config(_)));
        let err = GameConfig::from_ron("(tile_size: ").unwrap_err();
        assert!(matches!(err, DungeonError::Config(_)));
    }
}
