use bevy::prelude::*;

use crate::constants::TICK_RATE_HZ;
use crate::engine::config::GameConfig;
use crate::engine::input::{InputFrame, Intent};
use crate::engine::state::GameState;
use crate::logging::LoggingPlugin;

/// Runs a dungeon session on Bevy's fixed timestep. Hosts write the held
/// input into `PendingInput` and send `DungeonIntent` events for discrete
/// commands.
#[derive(Default)]
pub struct DungeonPlugin {
    pub config: GameConfig,
}

impl Plugin for DungeonPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<LoggingPlugin>() {
            app.add_plugins(LoggingPlugin);
        }

        let state = match GameState::new(self.config.clone()) {
            Ok(state) => state,
            Err(err) => {
                tracing::error!(%err, "failed to create dungeon session");
                return;
            }
        };

        app.insert_resource(DungeonSession(state))
            .init_resource::<PendingInput>()
            .add_event::<DungeonIntent>()
            .insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
            .add_systems(FixedUpdate, (apply_intents_system, session_tick_system).chain());
    }
}

#[derive(Resource)]
pub struct DungeonSession(pub GameState);

#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PendingInput(pub InputFrame);

#[derive(Event, Debug, Clone, Copy)]
pub struct DungeonIntent(pub Intent);

fn apply_intents_system(mut events: EventReader<DungeonIntent>, mut session: ResMut<DungeonSession>) {
    for DungeonIntent(intent) in events.read() {
        if let Err(err) = session.0.apply_intent(*intent) {
            tracing::error!(%err, ?intent, "intent failed");
        }
    }
}

fn session_tick_system(input: Res<PendingInput>, mut session: ResMut<DungeonSession>) {
    if let Err(err) = session.0.update(&input.0) {
        tracing::error!(%err, "session tick failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::state::GamePhase;

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins(DungeonPlugin {
            config: GameConfig::with_seed(11),
        });
        app
    }

    #[test]
    fn test_plugin_inserts_session() {
        let app = app();
        let session = app.world().get_resource::<DungeonSession>().unwrap();
        assert_eq!(session.0.phase(), GamePhase::NotStarted);
        assert!(app.world().get_resource::<PendingInput>().is_some());
        assert!(app.is_plugin_added::<LoggingPlugin>());
    }

    #[test]
    fn test_host_logging_plugin_kept() {
        let mut app = App::new();
        app.add_plugins(LoggingPlugin);
        app.add_plugins(DungeonPlugin::default());
        assert!(app.world().get_resource::<DungeonSession>().is_some());
    }

    #[test]
    fn test_fixed_tick_applies_intent_then_steps() {
        let mut app = app();
        app.world_mut().send_event(DungeonIntent(Intent::AnyKey));
        app.world_mut().resource_mut::<PendingInput>().0 = InputFrame::moving(false, true, false, false);
        app.world_mut().run_schedule(FixedUpdate);

        let session = app.world().resource::<DungeonSession>();
        assert_eq!(session.0.phase(), GamePhase::Running);
        assert_eq!(session.0.tick(), 1);
        assert_eq!(session.0.player().position().y, 388.0);
    }

    #[test]
    fn test_invalid_config_skips_session() {
        let mut app = App::new();
        app.add_plugins(DungeonPlugin {
            config: GameConfig {
                rooms_per_dungeon: 0,
                ..GameConfig::default()
            },
        });
        assert!(app.world().get_resource::<DungeonSession>().is_none());
    }
}
