//! ASCII room templates.
//!
//! A template is 24 lines of 40 symbols. Unknown symbols are skipped, so
//! stray whitespace or carriage returns inside a line are harmless, but the
//! remaining tiles must fill the grid exactly.

use crate::constants::{ROOM_COLUMNS, ROOM_ROWS};
use crate::error::{DungeonError, Result, TemplateError};
use crate::world::room::Room;
use crate::world::tile::TileKind;

/// A parsed, validated room layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomTemplate {
    name: String,
    kinds: Vec<Vec<TileKind>>,
}

impl RoomTemplate {
    pub fn parse(name: &str, text: &str) -> std::result::Result<Self, TemplateError> {
        let body = text.trim();
        if body.is_empty() {
            return Err(TemplateError::Empty);
        }
        let kinds: Vec<Vec<TileKind>> = body
            .lines()
            .map(|line| line.chars().filter_map(TileKind::from_symbol).collect())
            .collect();
        if kinds.len() != ROOM_ROWS {
            return Err(TemplateError::WrongHeight {
                expected: ROOM_ROWS,
                found: kinds.len(),
            });
        }
        if let Some((row, found)) = kinds
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != ROOM_COLUMNS)
            .map(|(i, r)| (i, r.len()))
        {
            return Err(TemplateError::WrongWidth {
                row,
                expected: ROOM_COLUMNS,
                found,
            });
        }
        Ok(Self {
            name: name.to_string(),
            kinds,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind_at(&self, row: usize, col: usize) -> Option<TileKind> {
        self.kinds.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.kinds.iter().flatten().filter(|k| **k == kind).count()
    }

    /// Fresh room with its own copy of every tile.
    pub fn instantiate(&self) -> Room {
        Room::from_kinds(&self.name, &self.kinds)
    }
}

/// Templates used by the generator: one start room, a pool for the
/// intermediate rooms, and one end room holding the portal.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    pub start: RoomTemplate,
    pub pool: Vec<RoomTemplate>,
    pub end: RoomTemplate,
}

impl TemplateSet {
    pub fn new(start: RoomTemplate, pool: Vec<RoomTemplate>, end: RoomTemplate) -> Result<Self> {
        if pool.is_empty() {
            return Err(DungeonError::EmptyTemplatePool);
        }
        Ok(Self { start, pool, end })
    }

    /// The layouts shipped with the crate.
    pub fn builtin() -> Result<Self> {
        let parse = |name: &str, text: &str| {
            RoomTemplate::parse(name, text).map_err(|source| DungeonError::Template {
                name: name.to_string(),
                source,
            })
        };
        let pool = POOL_ROOMS
            .iter()
            .map(|&(name, text)| parse(name, text))
            .collect::<Result<Vec<_>>>()?;
        Self::new(parse("start", START_ROOM)?, pool, parse("end", END_ROOM)?)
    }
}

const POOL_ROOMS: [(&str, &str); 3] = [
    ("pillars", PILLARS_ROOM),
    ("spikes", SPIKES_ROOM),
    ("halls", HALLS_ROOM),
];

const START_ROOM: &str = "
########################################
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
########################################
";

const END_ROOM: &str = "
########################################
#______________________________________#
#______________________________________#
#______________________________________#
#_____@@@@@@@@@@@@@__@@@@@@@@@@@@@_____#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#__________________L___________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#_____@@@@@@@@@@@@@__@@@@@@@@@@@@@_____#
#______________________________________#
#______________________________________#
#______________________________________#
########################################
";

const PILLARS_ROOM: &str = "
########################################
#______________________________________#
#______________________________________#
#______________________________________#
#_____________M__________M_____________#
#_______@@____________________@@_______#
#_______@@____________________@@_______#
#______________________________________#
#________________________________M_____#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#_____M________________________________#
#______________________________________#
#_______@@____________________@@_______#
#_______@@____________________@@_______#
#_____________M__________M_____________#
#______________________________________#
#______________________________________#
#______________________________________#
########################################
";

const SPIKES_ROOM: &str = "
########################################
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#_________M____________________________#
#______________________________________#
#_____XXXXXXXXXX________XXXXXXXXXX_____#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
#_______M______________________M_______#
#______________________________________#
#______________________________________#
#______________________________________#
#_____XXXXXXXXXX________XXXXXXXXXX_____#
#______________________________________#
#____________________________M_________#
#______________________________________#
#______________________________________#
#______________________________________#
#______________________________________#
########################################
";

const HALLS_ROOM: &str = "
########################################
#______________________________________#
#______________________________________#
#___________#______________#___________#
#___________#______________#___________#
#___________#______________#___________#
#_____M_____#______________#_____M_____#
#___________#______________#___________#
#___________#______________#___________#
#___________#______________#___________#
#____X_________________________________#
#______________________________________#
#______________________________________#
#_________________________________X____#
#___________#______________#___________#
#___________#______________#___________#
#___________#______________#___________#
#_____M_____#______________#_____M_____#
#___________#______________#___________#
#___________#______________#___________#
#___________#______________#___________#
#______________________________________#
#______________________________________#
########################################
";
