//! Axis-aligned bodies and tile collision.
//!
//! A body overlaps every tile its rectangle covers with positive area.
//! Cells outside the room grid count as impassable.

use bevy::math::Vec2;

use crate::world::room::Room;
use crate::world::tile::Tile;

/// Axis-aligned rectangle in room pixel coordinates (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size / 2.0
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Body) -> bool {
        self.position.x < other.position.x + other.size.x
            && other.position.x < self.position.x + self.size.x
            && self.position.y < other.position.y + other.size.y
            && other.position.y < self.position.y + self.size.y
    }

    pub fn translated(&self, delta: Vec2) -> Body {
        Body {
            position: self.position + delta,
            size: self.size,
        }
    }

    /// Inclusive `(row, col)` ranges of the tiles this body covers, or `None`
    /// when any part of it lies outside a `rows` x `columns` grid.
    pub fn tile_span(
        &self,
        tile_size: f32,
        rows: usize,
        columns: usize,
    ) -> Option<((usize, usize), (usize, usize))> {
        let first_col = (self.position.x / tile_size).floor();
        let first_row = (self.position.y / tile_size).floor();
        let last_col = ((self.position.x + self.size.x) / tile_size).ceil() - 1.0;
        let last_row = ((self.position.y + self.size.y) / tile_size).ceil() - 1.0;
        if first_col < 0.0 || first_row < 0.0 {
            return None;
        }
        if last_col >= columns as f32 || last_row >= rows as f32 {
            return None;
        }
        Some((
            (first_row as usize, last_row.max(first_row) as usize),
            (first_col as usize, last_col.max(first_col) as usize),
        ))
    }
}

/// Result of attempting to move a body one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// Reverted to the previous position
    Blocked,
    /// Standing on an unlocked door; the move is kept
    EnteredDoor,
}

/// Tiles overlapped by `body` in row-major order, or `None` if the body
/// leaves the grid.
pub fn overlapped_tiles(body: &Body, room: &Room, tile_size: f32) -> Option<Vec<Tile>> {
    let ((r0, r1), (c0, c1)) = body.tile_span(tile_size, room.rows(), room.columns())?;
    let mut tiles = Vec::with_capacity((r1 - r0 + 1) * (c1 - c0 + 1));
    for row in r0..=r1 {
        for col in c0..=c1 {
            tiles.push(*room.tile(row, col)?);
        }
    }
    Some(tiles)
}

/// True when every tile under `body` is passable.
pub fn can_occupy(body: &Body, room: &Room, tile_size: f32) -> bool {
    overlapped_tiles(body, room, tile_size)
        .is_some_and(|tiles| tiles.iter().all(|tile| tile.passable))
}

/// Translate `body` by `delta` and check the tiles it lands on.
///
/// Scanning stops at the first tile that decides the outcome: an
/// impassable non-door tile, or a door while `doors_locked`, reverts the
/// move; an unlocked door keeps it and reports `EnteredDoor`.
pub fn try_move(
    body: &mut Body,
    delta: Vec2,
    room: &Room,
    tile_size: f32,
    doors_locked: bool,
) -> MoveOutcome {
    let previous = body.position;
    body.position += delta;
    let Some(tiles) = overlapped_tiles(body, room, tile_size) else {
        body.position = previous;
        return MoveOutcome::Blocked;
    };
    for tile in tiles {
        if tile.passable {
            continue;
        }
        if !tile.is_door() || doors_locked {
            body.position = previous;
            return MoveOutcome::Blocked;
        }
        return MoveOutcome::EnteredDoor;
    }
    MoveOutcome::Moved
}
