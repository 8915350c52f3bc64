//! Fire-and-forget audio cues.
//!
//! The core never waits on or reads back from the sink; hosts plug in a
//! real mixer, tests plug in `RecordingAudio`.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    Arrow,
    Pain,
    Heal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Song {
    Dungeon,
    GameOver,
}

pub trait AudioSink: Send + Sync {
    fn play_effect(&mut self, effect: SoundEffect);
    /// `loops` of -1 repeats forever
    fn play_music(&mut self, song: Song, loops: i32);
}

/// Discards every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play_effect(&mut self, _effect: SoundEffect) {}
    fn play_music(&mut self, _song: Song, _loops: i32) {}
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AudioLog {
    pub effects: Vec<SoundEffect>,
    pub music: Vec<(Song, i32)>,
}

/// Records cues into a shared log that stays readable after the sink has
/// been handed to a `GameState`.
#[derive(Debug, Default, Clone)]
pub struct RecordingAudio {
    log: Arc<Mutex<AudioLog>>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> AudioLog {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }
}

impl AudioSink for RecordingAudio {
    fn play_effect(&mut self, effect: SoundEffect) {
        if let Ok(mut log) = self.log.lock() {
            log.effects.push(effect);
        }
    }

    fn play_music(&mut self, song: Song, loops: i32) {
        if let Ok(mut log) = self.log.lock() {
            log.music.push((song, loops));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_shared_between_clones() {
        let recorder = RecordingAudio::new();
        let mut sink: Box<dyn AudioSink> = Box::new(recorder.clone());
        sink.play_effect(SoundEffect::Arrow);
        sink.play_music(Song::GameOver, 1);
        let log = recorder.log();
        assert_eq!(log.effects, vec![SoundEffect::Arrow]);
        assert_eq!(log.music, vec![(Song::GameOver, 1)]);
    }
}
