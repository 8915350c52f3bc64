//! Room grids, tiles, and the dungeon graph.
//!
//! Positions are pixel coordinates with the origin at the top-left of the
//! room and y growing downward, so "north" is toward row 0.

pub mod dungeon;
pub mod room;
pub mod tile;

use std::fmt;
use std::str::FromStr;

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::DungeonError;

/// One of the four room sides a door can sit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Fixed iteration order; generation draws depend on it.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }

    /// Where the player lands in the next room after leaving through a door
    /// on this side. Walking north arrives just inside the south wall.
    pub fn arrival_point(self, tile_size: f32) -> Vec2 {
        match self {
            Direction::North => Vec2::new(19.5 * tile_size, 22.0 * tile_size),
            Direction::South => Vec2::new(19.5 * tile_size, 2.0 * tile_size),
            Direction::East => Vec2::new(tile_size, 11.5 * tile_size),
            Direction::West => Vec2::new(38.0 * tile_size, 11.5 * tile_size),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = DungeonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" => Ok(Direction::North),
            "south" => Ok(Direction::South),
            "east" => Ok(Direction::East),
            "west" => Ok(Direction::West),
            _ => Err(DungeonError::InvalidDirection(s.to_string())),
        }
    }
}

/// Player spawn point when entering a fresh dungeon.
pub fn room_center(tile_size: f32) -> Vec2 {
    Vec2::new(20.0 * tile_size, 12.0 * tile_size)
}
