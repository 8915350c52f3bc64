//! Session state and the per-frame update pipeline.
//!
//! `GameState` exclusively owns the dungeon, the player, and everything
//! active in the current room. One call to `update` runs one full frame:
//! player movement and actions, enemy AI, then environment resolution.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::audio::{AudioSink, SilentAudio, Song, SoundEffect};
use super::config::GameConfig;
use super::input::{InputFrame, Intent};
use super::scores::{ScoreBoard, TopScores};
use crate::combat::weapons::{aim_angle, aim_delta, Projectile};
use crate::combat::CombatEvent;
use crate::error::Result;
use crate::generation::{seeded_rng, DungeonGenerator, DungeonRng};
use crate::loot::{DroppedItem, ItemFactory};
use crate::monster::{Enemy, EnemyKind};
use crate::movement::{overlapped_tiles, try_move, MoveOutcome};
use crate::player::Player;
use crate::world::dungeon::{Dungeon, RoomId};
use crate::world::room::Room;
use crate::world::tile::TileBehavior;
use crate::world::{room_center, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

pub struct GameState {
    config: GameConfig,
    generator: DungeonGenerator,
    rng: DungeonRng,
    dungeon: Dungeon,
    room: RoomId,
    player: Player,
    enemies: Vec<Enemy>,
    projectiles: Vec<Projectile>,
    dropped_items: Vec<DroppedItem>,
    items: ItemFactory,
    score: u32,
    enemies_slain: u32,
    room_count: u32,
    tick: u64,
    started: bool,
    paused: bool,
    game_over: bool,
    current_song: Option<Song>,
    audio: Box<dyn AudioSink>,
    scores: Box<dyn ScoreBoard>,
}

impl GameState {
    /// New session with the built-in templates, no audio, and an in-memory
    /// score table. The session starts paused and not started.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_collaborators(
            config,
            DungeonGenerator::builtin()?,
            Box::new(SilentAudio),
            Box::new(TopScores::default()),
        )
    }

    pub fn with_collaborators(
        config: GameConfig,
        generator: DungeonGenerator,
        audio: Box<dyn AudioSink>,
        scores: Box<dyn ScoreBoard>,
    ) -> Result<Self> {
        config.validate()?;
        let mut rng = seeded_rng(config.seed);
        let dungeon = generator.generate_with(&mut rng, config.rooms_per_dungeon)?;
        let player = Player::new(&config.player, room_center(config.tile_size));
        let mut state = Self {
            room: dungeon.root(),
            dungeon,
            player,
            config,
            generator,
            rng,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            dropped_items: Vec::new(),
            items: ItemFactory::new(),
            score: 0,
            enemies_slain: 0,
            room_count: 0,
            tick: 0,
            started: false,
            paused: true,
            game_over: false,
            current_song: None,
            audio,
            scores,
        };
        state.spawn();
        state.finish_dungeon_entry();
        Ok(state)
    }

    // =====================================================
    // Accessors
    // =====================================================

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else if !self.started {
            GamePhase::NotStarted
        } else if self.paused {
            GamePhase::Paused
        } else {
            GamePhase::Running
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    pub fn room_id(&self) -> RoomId {
        self.room
    }

    pub fn room(&self) -> &Room {
        &self.dungeon[self.room]
    }

    /// Mutable access to the current room, e.g. to attach tile behaviors
    pub fn room_mut(&mut self) -> &mut Room {
        &mut self.dungeon[self.room]
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut Vec<Enemy> {
        &mut self.enemies
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn dropped_items(&self) -> &[DroppedItem] {
        &self.dropped_items
    }

    pub fn dropped_items_mut(&mut self) -> &mut Vec<DroppedItem> {
        &mut self.dropped_items
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn enemies_slain(&self) -> u32 {
        self.enemies_slain
    }

    /// Dungeon floors entered since the last respawn
    pub fn room_count(&self) -> u32 {
        self.room_count
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn high_scores(&self) -> Vec<u32> {
        self.scores.scores()
    }

    // =====================================================
    // Intents & lifecycle
    // =====================================================

    pub fn apply_intent(&mut self, intent: Intent) -> Result<()> {
        match intent {
            Intent::AnyKey if !self.started => {
                self.started = true;
                self.paused = false;
                info!("session started");
            }
            Intent::AnyKey if self.game_over => {
                self.scores.record(self.score);
                self.paused = false;
                self.spawn();
                self.enter_new_dungeon()?;
                info!("session restarted");
            }
            Intent::AnyKey => {}
            Intent::TogglePause => {
                if self.started && !self.game_over {
                    self.paused = !self.paused;
                    debug!(paused = self.paused, "pause toggled");
                }
            }
        }
        Ok(())
    }

    /// Record the current score, e.g. when the host quits mid-run.
    pub fn finish_session(&mut self) -> bool {
        self.scores.record(self.score)
    }

    /// Reset the run: fresh player with the starting loadout, score and
    /// floor counter cleared, back to the root room.
    pub fn spawn(&mut self) {
        self.room = self.dungeon.root();
        self.room_count = 0;
        self.score = 0;
        self.enemies_slain = 0;
        self.game_over = false;
        self.player = self.fresh_player();
        self.clear_entities();
        self.change_music(Song::Dungeon, -1);
    }

    fn fresh_player(&mut self) -> Player {
        let mut player = Player::new(&self.config.player, room_center(self.config.tile_size));
        let loadout = &self.config.loadout;
        for (kind, potency) in &loadout.potions {
            player.inventory.add(self.items.potion(*kind, *potency));
        }
        player.inventory.weapon = loadout.weapon.clone();
        player.inventory.boots = loadout.boots.clone();
        if let Some(title) = &loadout.key {
            player.inventory.add(self.items.key(title));
        }
        player
    }

    /// Replace the dungeon with a freshly generated one and start at its root.
    /// Score and inventory carry over.
    pub fn enter_new_dungeon(&mut self) -> Result<()> {
        self.dungeon = self
            .generator
            .generate_with(&mut self.rng, self.config.rooms_per_dungeon)?;
        self.finish_dungeon_entry();
        Ok(())
    }

    fn finish_dungeon_entry(&mut self) {
        self.clear_entities();
        self.room_count += 1;
        self.room = self.dungeon.root();
        self.player.set_position(room_center(self.config.tile_size));
        info!(floor = self.room_count, rooms = self.dungeon.len(), "entered dungeon");
    }

    fn clear_entities(&mut self) {
        self.enemies.clear();
        self.projectiles.clear();
        self.dropped_items.clear();
    }

    /// Move the player into the neighbour on `direction`. Returns false when
    /// there is no such neighbour.
    pub fn send_player_through_door(&mut self, direction: Direction) -> bool {
        let Some(next) = self.dungeon.neighbor(self.room, direction) else {
            warn!(room = %self.room, %direction, "door has no neighbouring room");
            return false;
        };
        self.player
            .set_position(direction.arrival_point(self.config.tile_size));
        self.room = next;
        self.clear_entities();
        if !self.dungeon[next].is_initialized() {
            self.initialize_room();
        }
        debug!(room = %next, %direction, enemies = self.enemies.len(), "changed room");
        true
    }

    /// Spawn one enemy per spawnpoint and a boss on the first portal tile,
    /// scanning row by row. Enemies are centred in their tile; the boss sits
    /// on the tile's top-left corner.
    pub fn initialize_room(&mut self) {
        let ts = self.config.tile_size;
        let mut placements = Vec::new();
        let mut boss_placed = false;
        for (row, tiles) in self.dungeon[self.room].tile_matrix().iter().enumerate() {
            for (col, tile) in tiles.iter().enumerate() {
                let corner = Vec2::new(col as f32 * ts, row as f32 * ts);
                if tile.spawnpoint {
                    placements.push((EnemyKind::Grunt, corner));
                }
                if tile.portal && !boss_placed {
                    placements.push((EnemyKind::Boss, corner));
                    boss_placed = true;
                }
            }
        }
        for (kind, corner) in placements {
            let position = match kind {
                EnemyKind::Grunt => corner + (Vec2::splat(ts) - self.config.enemy.stats.size()) / 2.0,
                EnemyKind::Boss => corner,
            };
            self.spawn_enemy(kind, position);
        }
        self.dungeon[self.room].mark_initialized();
    }

    /// Add an enemy of `kind` to the current room.
    pub fn spawn_enemy(&mut self, kind: EnemyKind, position: Vec2) {
        let profile = match kind {
            EnemyKind::Grunt => &self.config.enemy,
            EnemyKind::Boss => &self.config.boss,
        };
        let enemy = Enemy::spawn(
            kind,
            profile,
            position,
            self.config.initial_wander_distance,
            &mut self.rng,
        );
        self.enemies.push(enemy);
    }

    // =====================================================
    // Frame pipeline
    // =====================================================

    /// Run one frame. Does nothing unless the session is running.
    pub fn update(&mut self, input: &InputFrame) -> Result<()> {
        if self.phase() != GamePhase::Running {
            return Ok(());
        }
        self.tick += 1;

        self.move_player(input);
        let events = self.player.actor.update_effects();
        self.cue_combat(&events);
        self.player.update_player_attributes();
        self.handle_fire(input);
        if let Some(slot) = input.use_item {
            self.player.use_item(slot);
        }

        self.update_enemies();
        self.update_environment()
    }

    fn move_player(&mut self, input: &InputFrame) {
        let ts = self.config.tile_size;
        let locked = !self.enemies.is_empty();
        let delta = input.displacement(self.player.actor.attributes.current_speed as f32);
        let room = &self.dungeon[self.room];
        // Axes resolve independently so the player slides along walls.
        if delta.x != 0.0 {
            try_move(&mut self.player.actor.body, Vec2::new(delta.x, 0.0), room, ts, locked);
        }
        if delta.y != 0.0 {
            try_move(&mut self.player.actor.body, Vec2::new(0.0, delta.y), room, ts, locked);
        }
    }

    fn handle_fire(&mut self, input: &InputFrame) {
        self.player.decrease_shot_timer();
        let Some(target) = input.fire_at else {
            return;
        };
        let delta = aim_delta(self.player.position(), target);
        let projectile = self.player.generate_attack(
            delta.normalize(),
            aim_angle(delta),
            self.config.shot_cooldown,
            self.config.projectile_range(),
        );
        if let Some(projectile) = projectile {
            self.projectiles.push(projectile);
            self.audio.play_effect(SoundEffect::Arrow);
        }
    }

    fn update_enemies(&mut self) {
        let player = self.player.position();
        let room = &self.dungeon[self.room];
        for enemy in &mut self.enemies {
            enemy.think(
                player,
                room,
                self.config.tile_size,
                self.config.wander_distance,
                &mut self.rng,
            );
        }
    }

    fn update_environment(&mut self) -> Result<()> {
        self.resolve_tiles()?;
        self.update_projectiles();
        self.collect_dropped_items();
        self.reap_dead_enemies();
        self.update_damage_timers();
        self.apply_contact_damage();
        self.check_game_over();
        Ok(())
    }

    /// Apply every tile under the player: behavior hook, spikes, then at
    /// most one door or portal transition.
    fn resolve_tiles(&mut self) -> Result<()> {
        let tiles = overlapped_tiles(&self.player.actor.body, &self.dungeon[self.room], self.config.tile_size)
            .unwrap_or_default();
        for tile in tiles {
            match tile.behavior {
                Some(TileBehavior::Heal(amount)) => {
                    if self.player.actor.take_healing(amount).is_some() {
                        self.audio.play_effect(SoundEffect::Heal);
                    }
                }
                Some(TileBehavior::Score(amount)) => self.score += amount,
                None => {}
            }
            if tile.damaging && self.player.actor.take_damage(self.config.spike_damage).is_some() {
                self.audio.play_effect(SoundEffect::Pain);
            }
            if let Some(direction) = tile.door {
                if self.send_player_through_door(direction) {
                    // Remaining tiles belong to the room we just left.
                    break;
                }
            }
            if tile.portal && self.enemies.is_empty() {
                self.enter_new_dungeon()?;
                break;
            }
        }
        Ok(())
    }

    fn update_projectiles(&mut self) {
        let ts = self.config.tile_size;
        let locked = !self.enemies.is_empty();
        let room = &self.dungeon[self.room];
        self.projectiles.retain_mut(|projectile| {
            let step = projectile.velocity();
            projectile.consume_range(step);
            let outcome = try_move(&mut projectile.body, step, room, ts, locked);
            outcome == MoveOutcome::Moved && !projectile.is_out_of_range()
        });

        for enemy in &mut self.enemies {
            let mut i = 0;
            while i < self.projectiles.len() {
                if !self.projectiles[i].body.overlaps(&enemy.actor.body) {
                    i += 1;
                    continue;
                }
                let projectile = self.projectiles.remove(i);
                if enemy.actor.take_damage(projectile.damage()).is_some() {
                    self.audio.play_effect(SoundEffect::Pain);
                }
            }
        }
    }

    /// Pick up everything under the player. Carried items go to the
    /// inventory; a drop whose item does not fit stays on the floor.
    fn collect_dropped_items(&mut self) {
        let player = self.player.actor.body;
        let mut i = 0;
        while i < self.dropped_items.len() {
            let dropped = &self.dropped_items[i];
            let fits = dropped
                .item
                .as_ref()
                .map_or(true, |item| self.player.inventory.can_accept(item));
            if !dropped.body.overlaps(&player) || !fits {
                i += 1;
                continue;
            }
            if let Some(item) = self.dropped_items.remove(i).item {
                self.player.inventory.add(item);
            }
            self.score += self.config.pickup_score;
        }
    }

    fn reap_dead_enemies(&mut self) {
        let (dead, alive): (Vec<_>, Vec<_>) = std::mem::take(&mut self.enemies)
            .into_iter()
            .partition(|enemy| enemy.actor.is_dead());
        self.enemies = alive;
        for enemy in dead {
            debug!(kind = ?enemy.kind(), "enemy slain");
            self.dropped_items.push(DroppedItem::new(enemy.position(), None));
            self.enemies_slain += 1;
        }
    }

    fn update_damage_timers(&mut self) {
        self.player.actor.update_damage_timer();
        for enemy in &mut self.enemies {
            enemy.actor.update_damage_timer();
        }
    }

    /// The first enemy touching the player hits for its current strength.
    fn apply_contact_damage(&mut self) {
        let player = self.player.actor.body;
        let Some(strength) = self
            .enemies
            .iter()
            .find(|enemy| enemy.actor.body.overlaps(&player))
            .map(|enemy| enemy.actor.attributes.current_strength)
        else {
            return;
        };
        if self.player.actor.take_damage(strength).is_some() {
            self.audio.play_effect(SoundEffect::Pain);
        }
    }

    fn check_game_over(&mut self) {
        if !self.player.actor.is_dead() || self.game_over {
            return;
        }
        self.game_over = true;
        self.paused = true;
        self.change_music(Song::GameOver, 1);
        info!(score = self.score, floor = self.room_count, slain = self.enemies_slain, "game over");
    }

    fn cue_combat(&mut self, events: &[CombatEvent]) {
        for event in events {
            let effect = match event {
                CombatEvent::Damaged(_) => SoundEffect::Pain,
                CombatEvent::Healed(_) => SoundEffect::Heal,
            };
            self.audio.play_effect(effect);
        }
    }

    /// Switch background music unless `song` is already playing.
    fn change_music(&mut self, song: Song, loops: i32) {
        if self.current_song == Some(song) {
            return;
        }
        self.current_song = Some(song);
        self.audio.play_music(song, loops);
    }
}
