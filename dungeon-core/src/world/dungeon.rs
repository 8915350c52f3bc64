//! Dungeon graph: an arena of rooms addressed by `RoomId`.
//!
//! Links are stored on both rooms, so traversal in either direction is a
//! plain lookup. `to_graph` exposes the same topology as a petgraph graph
//! for connectivity checks and tooling.

use std::fmt;
use std::ops::{Index, IndexMut};

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::Bfs;
use serde::{Deserialize, Serialize};

use super::room::Room;
use super::Direction;
use crate::error::{DungeonError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Dungeon {
    rooms: Vec<Room>,
    root: RoomId,
    end: Option<RoomId>,
}

impl Dungeon {
    pub fn new(root: Room) -> Self {
        Self {
            rooms: vec![root],
            root: RoomId(0),
            end: None,
        }
    }

    pub fn add_room(&mut self, room: Room) -> RoomId {
        self.rooms.push(room);
        RoomId(self.rooms.len() - 1)
    }

    /// Link `to` on the `direction` side of `from` and carve doors in both.
    ///
    /// Fails if either side of the link is already taken, leaving both rooms
    /// untouched.
    pub fn connect(&mut self, from: RoomId, to: RoomId, direction: Direction) -> Result<()> {
        if from == to {
            return Err(DungeonError::DirectionOccupied {
                room: from,
                direction,
            });
        }
        let back = direction.opposite();
        let (a, b) = self.pair_mut(from, to)?;
        if a.neighbor(direction).is_some() {
            return Err(DungeonError::DirectionOccupied {
                room: from,
                direction,
            });
        }
        if b.neighbor(back).is_some() {
            return Err(DungeonError::DirectionOccupied {
                room: to,
                direction: back,
            });
        }
        a.link(direction, to);
        a.add_door(direction);
        b.link(back, from);
        b.add_door(back);
        Ok(())
    }

    fn pair_mut(&mut self, a: RoomId, b: RoomId) -> Result<(&mut Room, &mut Room)> {
        let len = self.rooms.len();
        for id in [a, b] {
            if id.0 >= len {
                return Err(DungeonError::UnknownRoom(id));
            }
        }
        if a.0 < b.0 {
            let (left, right) = self.rooms.split_at_mut(b.0);
            Ok((&mut left[a.0], &mut right[0]))
        } else {
            let (left, right) = self.rooms.split_at_mut(a.0);
            Ok((&mut right[0], &mut left[b.0]))
        }
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.0)
    }

    pub fn root(&self) -> RoomId {
        self.root
    }

    pub fn end(&self) -> Option<RoomId> {
        self.end
    }

    pub(crate) fn set_end(&mut self, id: RoomId) {
        self.end = Some(id);
    }

    pub fn neighbor(&self, id: RoomId, direction: Direction) -> Option<RoomId> {
        self.room(id).and_then(|room| room.neighbor(direction))
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Room ids in creation order
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = RoomId> {
        (0..self.rooms.len()).map(RoomId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, room)| (RoomId(i), room))
    }

    /// Undirected view of the room links. Node indices equal room ids.
    pub fn to_graph(&self) -> UnGraph<RoomId, Direction> {
        let mut graph = UnGraph::with_capacity(self.rooms.len(), self.rooms.len());
        for id in self.ids() {
            graph.add_node(id);
        }
        for (id, room) in self.iter() {
            for dir in Direction::ALL {
                if let Some(other) = room.neighbor(dir) {
                    // Each link is stored twice; keep one edge per pair.
                    if id < other {
                        graph.add_edge(NodeIndex::new(id.0), NodeIndex::new(other.0), dir);
                    }
                }
            }
        }
        graph
    }

    /// Number of rooms reachable from the root, root included.
    pub fn reachable_from_root(&self) -> usize {
        let graph = self.to_graph();
        let mut bfs = Bfs::new(&graph, NodeIndex::new(self.root.0));
        let mut count = 0;
        while bfs.next(&graph).is_some() {
            count += 1;
        }
        count
    }

    /// True when every link has a matching back-link on the opposite side.
    pub fn is_symmetric(&self) -> bool {
        self.iter().all(|(id, room)| {
            Direction::ALL.into_iter().all(|dir| match room.neighbor(dir) {
                Some(other) => self.neighbor(other, dir.opposite()) == Some(id),
                None => true,
            })
        })
    }
}

impl Index<RoomId> for Dungeon {
    type Output = Room;

    fn index(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }
}

impl IndexMut<RoomId> for Dungeon {
    fn index_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_rooms() -> Dungeon {
        let mut dungeon = Dungeon::new(Room::open_floor("root"));
        dungeon.add_room(Room::open_floor("a"));
        dungeon.add_room(Room::open_floor("b"));
        dungeon
    }

    #[test]
    fn test_connect_is_symmetric() {
        let mut dungeon = three_rooms();
        dungeon
            .connect(RoomId(0), RoomId(1), Direction::North)
            .unwrap();
        assert_eq!(dungeon.neighbor(RoomId(0), Direction::North), Some(RoomId(1)));
        assert_eq!(dungeon.neighbor(RoomId(1), Direction::South), Some(RoomId(0)));
        assert!(dungeon.is_symmetric());
        // Doors carved on both sides
        assert_eq!(
            dungeon[RoomId(0)].tile(0, 19).and_then(|t| t.door),
            Some(Direction::North)
        );
        assert_eq!(
            dungeon[RoomId(1)].tile(23, 20).and_then(|t| t.door),
            Some(Direction::South)
        );
    }

    #[test]
    fn test_connect_occupied_direction_fails() {
        let mut dungeon = three_rooms();
        dungeon.connect(RoomId(0), RoomId(1), Direction::East).unwrap();
        let err = dungeon
            .connect(RoomId(0), RoomId(2), Direction::East)
            .unwrap_err();
        assert!(matches!(err, DungeonError::DirectionOccupied { .. }));
        // Room 2 untouched by the failed link
        assert_eq!(dungeon[RoomId(2)].available_directions().len(), 4);
    }

    #[test]
    fn test_connect_occupied_back_link_fails() {
        let mut dungeon = three_rooms();
        dungeon.connect(RoomId(0), RoomId(1), Direction::East).unwrap();
        let err = dungeon
            .connect(RoomId(2), RoomId(1), Direction::East)
            .unwrap_err();
        assert!(matches!(
            err,
            DungeonError::DirectionOccupied {
                direction: Direction::West,
                ..
            }
        ));
    }

    #[test]
    fn test_connect_unknown_room() {
        let mut dungeon = three_rooms();
        let err = dungeon
            .connect(RoomId(0), RoomId(9), Direction::West)
            .unwrap_err();
        assert!(matches!(err, DungeonError::UnknownRoom(RoomId(9))));
    }

    #[test]
    fn test_connect_reversed_ids() {
        let mut dungeon = three_rooms();
        dungeon.connect(RoomId(2), RoomId(0), Direction::West).unwrap();
        assert_eq!(dungeon.neighbor(RoomId(0), Direction::East), Some(RoomId(2)));
    }

    #[test]
    fn test_graph_reachability() {
        let mut dungeon = three_rooms();
        assert_eq!(dungeon.reachable_from_root(), 1);
        dungeon.connect(RoomId(0), RoomId(1), Direction::North).unwrap();
        dungeon.connect(RoomId(1), RoomId(2), Direction::West).unwrap();
        assert_eq!(dungeon.reachable_from_root(), 3);
        assert_eq!(dungeon.to_graph().edge_count(), 2);
    }
}
