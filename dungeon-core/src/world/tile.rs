//! Tile kinds and their per-cell flags.
//!
//! Every room cell owns a full `Tile` value. Flags are copied out of the
//! kind's template at construction so that changing one cell at runtime
//! never touches another cell or room.

use serde::{Deserialize, Serialize};

use super::Direction;

/// Tile types that can appear in a room grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Wall,
    WallTwo,
    Floor,
    Spikes,
    Mushroom,
    Lock,
    DoorNorth,
    DoorSouth,
    DoorEast,
    DoorWest,
}

/// Optional per-tile hook evaluated while the player stands on the tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileBehavior {
    /// Heal the player by this amount each frame
    Heal(i32),
    /// Add this amount to the score each frame
    Score(u32),
}

/// A single cell of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    pub passable: bool,
    pub damaging: bool,
    pub spawnpoint: bool,
    pub portal: bool,
    pub door: Option<Direction>,
    pub behavior: Option<TileBehavior>,
}

impl TileKind {
    pub fn all() -> &'static [TileKind] {
        &[
            TileKind::Wall,
            TileKind::WallTwo,
            TileKind::Floor,
            TileKind::Spikes,
            TileKind::Mushroom,
            TileKind::Lock,
            TileKind::DoorNorth,
            TileKind::DoorSouth,
            TileKind::DoorEast,
            TileKind::DoorWest,
        ]
    }

    /// Template symbol lookup. Door tiles have no symbol; they are carved
    /// into rooms when rooms are linked.
    pub fn from_symbol(symbol: char) -> Option<TileKind> {
        match symbol {
            '#' => Some(TileKind::Wall),
            '_' => Some(TileKind::Floor),
            '@' => Some(TileKind::WallTwo),
            'M' => Some(TileKind::Mushroom),
            'X' => Some(TileKind::Spikes),
            'L' => Some(TileKind::Lock),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            TileKind::Wall => '#',
            TileKind::Floor => '_',
            TileKind::WallTwo => '@',
            TileKind::Mushroom => 'M',
            TileKind::Spikes => 'X',
            TileKind::Lock => 'L',
            TileKind::DoorNorth => 'n',
            TileKind::DoorSouth => 's',
            TileKind::DoorEast => 'e',
            TileKind::DoorWest => 'w',
        }
    }

    pub fn door(direction: Direction) -> TileKind {
        match direction {
            Direction::North => TileKind::DoorNorth,
            Direction::South => TileKind::DoorSouth,
            Direction::East => TileKind::DoorEast,
            Direction::West => TileKind::DoorWest,
        }
    }

    /// Fresh tile carrying this kind's default flags
    pub fn tile(self) -> Tile {
        let door = match self {
            TileKind::DoorNorth => Some(Direction::North),
            TileKind::DoorSouth => Some(Direction::South),
            TileKind::DoorEast => Some(Direction::East),
            TileKind::DoorWest => Some(Direction::West),
            _ => None,
        };
        Tile {
            kind: self,
            passable: !matches!(self, TileKind::Wall | TileKind::WallTwo) && door.is_none(),
            damaging: self == TileKind::Spikes,
            spawnpoint: self == TileKind::Mushroom,
            portal: self == TileKind::Lock,
            door,
            behavior: None,
        }
    }
}

impl Tile {
    pub fn is_door(&self) -> bool {
        self.door.is_some()
    }

    pub fn with_behavior(mut self, behavior: TileBehavior) -> Self {
        self.behavior = Some(behavior);
        self
    }
}

impl From<TileKind> for Tile {
    fn from(kind: TileKind) -> Self {
        kind.tile()
    }
}
