//! Dungeon Crawler - Simulation Core Library
//!
//! This crate provides the deterministic game logic for a top-down,
//! tile-based dungeon crawler:
//! - Room templates and the tile catalogue
//! - Procedural dungeon generation (random room graph, seeded RNG)
//! - Axis-aligned movement against the tile grid
//! - Combat (damage windows, status effects, projectiles)
//! - Enemy AI (wander and chase)
//! - Items, potions, inventory and equipment
//! - Per-frame game state with pause, game over and restart
//! - Bevy plugin for fixed-timestep hosting

pub mod combat;
pub mod constants;
pub mod engine;
pub mod equipment;
pub mod error;
pub mod generation;
pub mod logging;
pub mod loot;
pub mod monster;
pub mod movement;
pub mod player;
pub mod world;

pub use error::{DungeonError, Result};
