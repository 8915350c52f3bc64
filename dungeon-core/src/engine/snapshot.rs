//! Serializable read model of a session for HUDs and tooling.

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};
use crate::combat::ActorAttributes;
use crate::monster::EnemyKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub position: [f32; 2],
    pub attributes: ActorAttributes,
    pub damage_timer: i32,
    pub shot_timer: i32,
    pub effects: Vec<String>,
    pub hotbar: Vec<Option<HotbarSlot>>,
    pub weapon: Option<String>,
    pub boots: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotbarSlot {
    pub title: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySnapshot {
    pub kind: EnemyKind,
    pub position: [f32; 2],
    pub hitpoints: i32,
    pub triggered: bool,
    pub sprite_variant: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub score: u32,
    pub floor: u32,
    pub enemies_slain: u32,
    pub room: usize,
    pub room_name: String,
    pub player: PlayerSnapshot,
    pub enemies: Vec<EnemySnapshot>,
    pub projectiles: usize,
    pub dropped_items: usize,
    pub high_scores: Vec<u32>,
}

impl StateSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let player = state.player();
        let inventory = &player.inventory;
        Self {
            tick: state.tick(),
            phase: state.phase(),
            score: state.score(),
            floor: state.room_count(),
            enemies_slain: state.enemies_slain(),
            room: state.room_id().0,
            room_name: state.room().name().to_string(),
            player: PlayerSnapshot {
                position: player.position().to_array(),
                attributes: player.actor.attributes,
                damage_timer: player.actor.damage_timer(),
                shot_timer: player.shot_timer(),
                effects: player
                    .actor
                    .status_effects()
                    .iter()
                    .map(|effect| effect.to_string())
                    .collect(),
                hotbar: inventory
                    .hotbar()
                    .iter()
                    .map(|stack| {
                        stack.first().map(|item| HotbarSlot {
                            title: item.title.clone(),
                            count: stack.len(),
                        })
                    })
                    .collect(),
                weapon: inventory.weapon.as_ref().map(|w| w.title.clone()),
                boots: inventory.boots.as_ref().map(|b| b.title.clone()),
            },
            enemies: state
                .enemies()
                .iter()
                .map(|enemy| EnemySnapshot {
                    kind: enemy.kind(),
                    position: enemy.position().to_array(),
                    hitpoints: enemy.actor.attributes.current_hitpoints,
                    triggered: enemy.is_triggered(),
                    sprite_variant: enemy.sprite_variant(),
                })
                .collect(),
            projectiles: state.projectiles().len(),
            dropped_items: state.dropped_items().len(),
            high_scores: state.high_scores(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl GameState {
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::GameConfig;

    #[test]
    fn test_snapshot_of_new_session() {
        let state = GameState::new(GameConfig::with_seed(3)).unwrap();
        let snapshot = state.snapshot();
        assert_eq!(snapshot.phase, GamePhase::NotStarted);
        assert_eq!(snapshot.floor, 1);
        assert_eq!(snapshot.room_name, "start");
        assert_eq!(snapshot.player.position, [640.0, 384.0]);
        assert_eq!(snapshot.player.hotbar.len(), 5);
        assert_eq!(
            snapshot.player.hotbar[0],
            Some(HotbarSlot {
                title: "healing".into(),
                count: 1
            })
        );
        assert_eq!(snapshot.player.hotbar[4], None);
        assert_eq!(snapshot.high_scores, vec![0, 0, 0]);
    }

    #[test]
    fn test_snapshot_json() {
        let state = GameState::new(GameConfig::with_seed(3)).unwrap();
        let json = state.snapshot().to_json().unwrap();
        assert!(json.contains("\"phase\":\"NotStarted\""));
        assert!(json.contains("Basic Bow"));
        let restored: StateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state.snapshot());
    }
}
