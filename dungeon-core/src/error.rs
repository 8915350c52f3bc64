//! Error types shared across the dungeon core.

use crate::world::dungeon::RoomId;
use crate::world::Direction;

/// Problems found while parsing an ASCII room template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("template is empty")]
    Empty,
    #[error("template has {found} rows, expected {expected}")]
    WrongHeight { expected: usize, found: usize },
    #[error("template row {row} has {found} tiles, expected {expected}")]
    WrongWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum DungeonError {
    #[error("room {room} already has a neighbour to the {direction}")]
    DirectionOccupied { room: RoomId, direction: Direction },
    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),
    #[error("unknown room {0}")]
    UnknownRoom(RoomId),
    #[error("invalid template `{name}`: {source}")]
    Template {
        name: String,
        #[source]
        source: TemplateError,
    },
    #[error("template pool is empty")]
    EmptyTemplatePool,
    #[error("no room has an open direction left for the end room")]
    NoOpenDirection,
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DungeonError>;
