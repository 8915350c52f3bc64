//! A single room: a 24x40 tile grid plus up to four neighbour links.

use super::dungeon::RoomId;
use super::tile::{Tile, TileKind};
use super::Direction;
use crate::constants::{ROOM_COLUMNS, ROOM_ROWS};

#[derive(Debug, Clone)]
pub struct Room {
    name: String,
    tiles: Vec<Vec<Tile>>,
    neighbors: [Option<RoomId>; 4],
    initialized: bool,
}

impl Room {
    /// Build a room from an already validated grid of tile kinds.
    pub(crate) fn from_kinds(name: &str, kinds: &[Vec<TileKind>]) -> Self {
        Self {
            name: name.to_string(),
            tiles: kinds
                .iter()
                .map(|row| row.iter().map(|kind| kind.tile()).collect())
                .collect(),
            neighbors: [None; 4],
            initialized: false,
        }
    }

    /// A walled room with an open floor, handy for tests and tools.
    pub fn open_floor(name: &str) -> Self {
        let kinds: Vec<Vec<TileKind>> = (0..ROOM_ROWS)
            .map(|row| {
                (0..ROOM_COLUMNS)
                    .map(|col| {
                        if row == 0 || row == ROOM_ROWS - 1 || col == 0 || col == ROOM_COLUMNS - 1 {
                            TileKind::Wall
                        } else {
                            TileKind::Floor
                        }
                    })
                    .collect()
            })
            .collect();
        Self::from_kinds(name, &kinds)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> usize {
        self.tiles.len()
    }

    pub fn columns(&self) -> usize {
        self.tiles.first().map_or(0, Vec::len)
    }

    pub fn tile_matrix(&self) -> &[Vec<Tile>] {
        &self.tiles
    }

    pub fn tile(&self, row: usize, col: usize) -> Option<&Tile> {
        self.tiles.get(row).and_then(|r| r.get(col))
    }

    pub fn tile_mut(&mut self, row: usize, col: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Replace one cell with a fresh tile of `kind`. Out-of-grid writes are ignored.
    pub fn set_tile(&mut self, row: usize, col: usize, kind: TileKind) {
        if let Some(tile) = self.tile_mut(row, col) {
            *tile = kind.tile();
        }
    }

    pub fn neighbor(&self, direction: Direction) -> Option<RoomId> {
        self.neighbors[direction.index()]
    }

    /// Directions without a neighbour, in `Direction::ALL` order.
    pub fn available_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|dir| self.neighbor(*dir).is_none())
            .collect()
    }

    pub(crate) fn link(&mut self, direction: Direction, other: RoomId) {
        self.neighbors[direction.index()] = Some(other);
    }

    /// Grid cells the door for `direction` occupies.
    pub fn door_cells(&self, direction: Direction) -> [(usize, usize); 2] {
        let last_row = self.rows().saturating_sub(1);
        let last_col = self.columns().saturating_sub(1);
        let mid_col = self.columns() / 2;
        let mid_row = self.rows() / 2;
        match direction {
            Direction::North => [(0, mid_col - 1), (0, mid_col)],
            Direction::South => [(last_row, mid_col - 1), (last_row, mid_col)],
            Direction::East => [(mid_row - 1, last_col), (mid_row, last_col)],
            Direction::West => [(mid_row - 1, 0), (mid_row, 0)],
        }
    }

    /// Carve the two door tiles for `direction` into the wall.
    pub fn add_door(&mut self, direction: Direction) {
        let kind = TileKind::door(direction);
        for (row, col) in self.door_cells(direction) {
            self.set_tile(row, col, kind);
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub(crate) fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    pub fn has_portal(&self) -> bool {
        self.tiles.iter().flatten().any(|tile| tile.portal)
    }

    /// ASCII rendering using the template symbols, doors as lowercase letters.
    pub fn render(&self) -> String {
        self.tiles
            .iter()
            .map(|row| row.iter().map(|tile| tile.kind.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_floor_dimensions() {
        let room = Room::open_floor("test");
        assert_eq!(room.rows(), ROOM_ROWS);
        assert_eq!(room.columns(), ROOM_COLUMNS);
        assert_eq!(room.tile(0, 0).map(|t| t.kind), Some(TileKind::Wall));
        assert_eq!(room.tile(5, 5).map(|t| t.kind), Some(TileKind::Floor));
        assert!(room.tile(ROOM_ROWS, 0).is_none());
    }

    #[test]
    fn test_door_cells() {
        let room = Room::open_floor("test");
        assert_eq!(room.door_cells(Direction::North), [(0, 19), (0, 20)]);
        assert_eq!(room.door_cells(Direction::South), [(23, 19), (23, 20)]);
        assert_eq!(room.door_cells(Direction::East), [(11, 39), (12, 39)]);
        assert_eq!(room.door_cells(Direction::West), [(11, 0), (12, 0)]);
    }

    #[test]
    fn test_add_door_sets_door_flag() {
        let mut room = Room::open_floor("test");
        room.add_door(Direction::East);
        let tile = room.tile(11, 39).copied().unwrap();
        assert_eq!(tile.door, Some(Direction::East));
        assert!(!tile.passable);
        // Neighbouring wall cell untouched
        assert_eq!(room.tile(10, 39).map(|t| t.kind), Some(TileKind::Wall));
    }

    #[test]
    fn test_available_directions_shrink() {
        let mut room = Room::open_floor("test");
        assert_eq!(room.available_directions().len(), 4);
        room.link(Direction::South, RoomId(1));
        assert_eq!(
            room.available_directions(),
            vec![Direction::North, Direction::East, Direction::West]
        );
    }

    #[test]
    fn test_set_tile_out_of_grid_ignored() {
        let mut room = Room::open_floor("test");
        room.set_tile(100, 100, TileKind::Lock);
        assert!(!room.has_portal());
        room.set_tile(3, 3, TileKind::Lock);
        assert!(room.has_portal());
    }
}
