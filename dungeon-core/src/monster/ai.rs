//! Enemy behavior: a trigger-distance chase with random wandering otherwise.
//!
//! The trigger is recomputed every frame, so an enemy that loses the player
//! goes back to wandering immediately.

use bevy::math::Vec2;
use rand::Rng;
use tracing::trace;

use super::Enemy;
use crate::constants::{CHASE_STOP_DISTANCE, WANDER_SPEED};
use crate::movement::{can_occupy, try_move, MoveOutcome};
use crate::world::room::Room;

/// Wander headings, indexed by `Enemy::wander_direction`.
pub const WANDER_VECTORS: [Vec2; 8] = [
    Vec2::new(0.0, 1.0),
    Vec2::new(0.0, -1.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(-1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(1.0, -1.0),
    Vec2::new(-1.0, -1.0),
    Vec2::new(-1.0, 1.0),
];

impl Enemy {
    /// Triggered iff the player is within trigger range. Distances are
    /// measured between top-left corners.
    pub fn check_for_trigger(&mut self, player: Vec2) -> bool {
        self.triggered = player.distance(self.position()) <= self.trigger_range;
        self.triggered
    }

    pub fn pick_new_direction<R: Rng + ?Sized>(&mut self, rng: &mut R, distance: i32) {
        self.direction = rng.gen_range(0..WANDER_VECTORS.len());
        self.distance = distance;
    }

    /// Step toward `player` at charge speed. Stops within
    /// `CHASE_STOP_DISTANCE` and skips steps that would enter a blocking tile.
    pub fn chase(&mut self, player: Vec2, room: &Room, tile_size: f32) -> bool {
        let delta = player - self.position();
        let dist = delta.length();
        if dist <= CHASE_STOP_DISTANCE {
            return false;
        }
        let step = delta / dist * self.charge_speed;
        let next = self.actor.body.translated(step);
        if !can_occupy(&next, room, tile_size) {
            trace!(kind = ?self.kind, "chase step blocked");
            return false;
        }
        self.actor.body = next;
        true
    }

    /// One wander step. A fresh heading and budget are drawn when the budget
    /// runs out or the step is blocked.
    pub fn wander<R: Rng + ?Sized>(&mut self, room: &Room, tile_size: f32, wander_distance: i32, rng: &mut R) {
        if self.distance <= 0 {
            self.pick_new_direction(rng, wander_distance);
        }
        let step = WANDER_VECTORS[self.direction] * WANDER_SPEED;
        if can_occupy(&self.actor.body.translated(step), room, tile_size) {
            // Hostiles are present by definition, so doors stay locked.
            if try_move(&mut self.actor.body, step, room, tile_size, true) == MoveOutcome::Moved {
                self.distance -= 1;
            }
        } else {
            self.pick_new_direction(rng, wander_distance);
        }
    }

    /// Per-frame AI update against the player's position.
    pub fn think<R: Rng + ?Sized>(
        &mut self,
        player: Vec2,
        room: &Room,
        tile_size: f32,
        wander_distance: i32,
        rng: &mut R,
    ) {
        if self.check_for_trigger(player) {
            self.chase(player, room, tile_size);
        } else {
            self.wander(room, tile_size, wander_distance, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::GameConfig;
    use crate::generation::seeded_rng;
    use crate::monster::EnemyKind;

    const T: f32 = 32.0;

    fn grunt(at: Vec2) -> Enemy {
        let config = GameConfig::default();
        let mut rng = seeded_rng(Some(4));
        Enemy::spawn(EnemyKind::Grunt, &config.enemy, at, 128, &mut rng)
    }

    #[test]
    fn test_trigger_recomputed_each_frame() {
        let mut enemy = grunt(Vec2::new(320.0, 320.0));
        assert!(enemy.check_for_trigger(Vec2::new(400.0, 320.0)));
        assert!(enemy.check_for_trigger(Vec2::new(430.0, 320.0)));
        assert!(!enemy.check_for_trigger(Vec2::new(431.0, 320.0)));
        assert!(!enemy.is_triggered());
    }

    #[test]
    fn test_chase_moves_at_charge_speed() {
        let room = Room::open_floor("test");
        let mut enemy = grunt(Vec2::new(320.0, 320.0));
        assert!(enemy.chase(Vec2::new(400.0, 320.0), &room, T));
        assert_eq!(enemy.position(), Vec2::new(323.0, 320.0));
    }

    #[test]
    fn test_chase_stops_when_close() {
        let room = Room::open_floor("test");
        let mut enemy = grunt(Vec2::new(320.0, 320.0));
        assert!(!enemy.chase(Vec2::new(322.0, 321.0), &room, T));
        assert_eq!(enemy.position(), Vec2::new(320.0, 320.0));
    }

    #[test]
    fn test_chase_blocked_by_wall() {
        let room = Room::open_floor("test");
        let mut enemy = grunt(Vec2::new(33.0, 320.0));
        assert!(!enemy.chase(Vec2::new(-60.0, 320.0), &room, T));
        assert_eq!(enemy.position(), Vec2::new(33.0, 320.0));
    }

    #[test]
    fn test_wander_decrements_budget() {
        let room = Room::open_floor("test");
        let mut rng = seeded_rng(Some(2));
        let mut enemy = grunt(Vec2::new(320.0, 320.0));
        let start = enemy.position();
        let heading = WANDER_VECTORS[enemy.wander_direction()];
        enemy.wander(&room, T, 256, &mut rng);
        assert_eq!(enemy.wander_distance(), 127);
        assert_eq!(enemy.position(), start + heading);
    }

    #[test]
    fn test_wander_repicks_when_blocked() {
        let room = Room::open_floor("test");
        let mut rng = seeded_rng(Some(2));
        // Wedged into the top-left corner: every heading with a -x or -y
        // component is blocked.
        let mut enemy = grunt(Vec2::new(32.0, 32.0));
        for _ in 0..50 {
            enemy.wander(&room, T, 256, &mut rng);
        }
        assert!(can_occupy(&enemy.actor.body, &room, T));
        assert!(enemy.position().x >= 32.0 && enemy.position().y >= 32.0);
    }

    #[test]
    fn test_wander_exhausted_budget_repicks() {
        let room = Room::open_floor("test");
        let mut rng = seeded_rng(Some(2));
        let mut enemy = grunt(Vec2::new(320.0, 320.0));
        enemy.distance = 0;
        enemy.wander(&room, T, 256, &mut rng);
        assert_eq!(enemy.wander_distance(), 255);
    }
}
