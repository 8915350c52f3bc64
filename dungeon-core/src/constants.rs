//! Centralized game constants for the dungeon core.
//!
//! Tunables that a host may want to change live in `engine::config::GameConfig`
//! and default to the values here. Layout constants (grid size, door cells)
//! are fixed by the room format and are not configurable.

// =====================================================
// Room Layout
// =====================================================

/// Rows in every room grid
pub const ROOM_ROWS: usize = 24;

/// Columns in every room grid
pub const ROOM_COLUMNS: usize = 40;

/// Edge length of one tile in pixels
pub const TILE_SIZE: f32 = 32.0;

/// Rooms generated per dungeon floor, excluding the start and end rooms
pub const DEFAULT_ROOMS_PER_DUNGEON: usize = 5;

// =====================================================
// Combat
// =====================================================

/// Hard ceiling for healing and the upper clamp of strength/defense buffs
pub const ATTRIBUTE_CAP: i32 = 100;

/// Minimum damage dealt by any hit that lands
pub const MIN_DAMAGE: i32 = 1;

/// Frames of immunity after the player is hit
pub const PLAYER_DAMAGE_WINDOW: i32 = 30;

/// Frames of immunity after a regular enemy is hit
pub const ENEMY_DAMAGE_WINDOW: i32 = 5;

/// Frames of immunity after a boss is hit
pub const BOSS_DAMAGE_WINDOW: i32 = 2;

/// Frames between player shots
pub const SHOT_COOLDOWN: i32 = 15;

/// Projectile travel budget in tiles
pub const PROJECTILE_RANGE_TILES: f32 = 10.0;

/// Damage dealt by a spike tile per hit
pub const SPIKE_DAMAGE: i32 = 5;

// =====================================================
// Enemy Behavior
// =====================================================

/// Wander distance assigned when an enemy picks a new direction
pub const WANDER_DISTANCE: i32 = 256;

/// Wander distance an enemy spawns with
pub const INITIAL_WANDER_DISTANCE: i32 = 128;

/// Pixels per frame while wandering
pub const WANDER_SPEED: f32 = 1.0;

/// Chasing stops once the enemy is this close to the player
pub const CHASE_STOP_DISTANCE: f32 = 3.0;

/// Number of sprite variants a regular enemy may be drawn with
pub const ENEMY_SPRITE_VARIANTS: u8 = 4;

// =====================================================
// Items & Scoring
// =====================================================

/// Score awarded for every dropped item picked up
pub const PICKUP_SCORE: u32 = 10;

/// Lifetime in frames of every catalogue potion
pub const POTION_DURATION: i32 = 240;

/// Pulse period of healing and poison potions
pub const POTION_PULSE: i32 = 60;

/// Number of high-score entries retained
pub const HIGH_SCORE_SLOTS: usize = 3;

// =====================================================
// Simulation
// =====================================================

/// Fixed simulation rate in frames per second
pub const TICK_RATE_HZ: f64 = 60.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_matches_pixel_extent() {
        assert_eq!(ROOM_COLUMNS as f32 * TILE_SIZE, 1280.0);
        assert_eq!(ROOM_ROWS as f32 * TILE_SIZE, 768.0);
    }

    #[test]
    fn test_damage_windows_ordered() {
        assert!(PLAYER_DAMAGE_WINDOW > ENEMY_DAMAGE_WINDOW);
        assert!(ENEMY_DAMAGE_WINDOW > BOSS_DAMAGE_WINDOW);
    }
}
