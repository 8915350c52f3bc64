use bevy::math::Vec2;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use dungeon_core::engine::{GameConfig, GameState, InputFrame, Intent};
use dungeon_core::generation::templates::RoomTemplate;
use dungeon_core::generation::DungeonGenerator;
use dungeon_core::monster::EnemyKind;

fn bench_dungeon_generation(c: &mut Criterion) {
    let generator = DungeonGenerator::builtin().unwrap();

    c.bench_function("generate_dungeon_5", |b| {
        b.iter(|| generator.generate(black_box(Some(42)), black_box(5)).unwrap())
    });

    c.bench_function("generate_dungeon_30", |b| {
        b.iter(|| generator.generate(black_box(Some(42)), black_box(30)).unwrap())
    });

    let dungeon = generator.generate(Some(42), 30).unwrap();
    c.bench_function("dungeon_reachability_30", |b| {
        b.iter(|| black_box(&dungeon).reachable_from_root())
    });
}

fn bench_template_parse(c: &mut Criterion) {
    let text = DungeonGenerator::builtin().unwrap().templates().start.instantiate().render();

    c.bench_function("parse_room_template", |b| {
        b.iter(|| RoomTemplate::parse("bench", black_box(&text)).unwrap())
    });
}

fn bench_frame_update(c: &mut Criterion) {
    let running = || {
        let mut state = GameState::new(GameConfig::with_seed(7)).unwrap();
        state.apply_intent(Intent::AnyKey).unwrap();
        state
    };

    c.bench_function("update_idle_frame", |b| {
        b.iter_batched(
            running,
            |mut state| state.update(black_box(&InputFrame::idle())).unwrap(),
            BatchSize::SmallInput,
        )
    });

    // A busy room: a handful of enemies chasing while the player shoots
    c.bench_function("update_combat_60_frames", |b| {
        b.iter_batched(
            || {
                let mut state = running();
                for i in 0..6 {
                    let offset = i as f32 * 48.0;
                    state.spawn_enemy(EnemyKind::Grunt, Vec2::new(200.0 + offset, 200.0));
                }
                state
            },
            |mut state| {
                for tick in 0..60u32 {
                    let mut input = InputFrame::moving(false, false, tick % 2 == 0, tick % 2 == 1);
                    input.fire_at = Some(Vec2::new(300.0, 200.0));
                    state.update(&input).unwrap();
                }
                state
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::new(GameConfig::with_seed(7)).unwrap();

    c.bench_function("snapshot_to_json", |b| {
        b.iter(|| black_box(&state).snapshot().to_json().unwrap())
    });
}

criterion_group!(
    benches,
    bench_dungeon_generation,
    bench_template_parse,
    bench_frame_update,
    bench_snapshot,
);
criterion_main!(benches);
