//! Game engine: session state, the frame pipeline, and host integration.
//!
//! Hosts feed one `InputFrame` per tick plus discrete `Intent`s, and read
//! back state through accessors or a `StateSnapshot`. Audio and high-score
//! persistence are collaborators injected at construction.

pub mod audio;
pub mod config;
pub mod input;
pub mod plugin;
pub mod scores;
pub mod snapshot;
pub mod state;

pub use audio::{AudioSink, RecordingAudio, SilentAudio, Song, SoundEffect};
pub use config::{ActorProfile, EnemyProfile, GameConfig, Loadout};
pub use input::{InputFrame, Intent};
pub use plugin::{DungeonIntent, DungeonPlugin, DungeonSession, PendingInput};
pub use scores::{ScoreBoard, TopScores};
pub use snapshot::StateSnapshot;
pub use state::{GamePhase, GameState};
