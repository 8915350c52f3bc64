//! Headless dungeon runner.
//!
//! Plays a scripted session for a fixed number of ticks and prints the final
//! state snapshot as JSON.
//!
//! ```text
//! dungeon-sim [--seed N] [--ticks N] [--config game.ron] [--log LEVEL]
//! ```

use anyhow::{bail, Context};
use bevy::math::Vec2;

use dungeon_core::engine::{GameConfig, GameState, InputFrame, Intent};
use dungeon_core::logging::{init_tracing, LogLevel, TracingConfig};

struct Args {
    seed: Option<u64>,
    ticks: u64,
    config: Option<String>,
    log: LogLevel,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        seed: None,
        ticks: 1800,
        config: None,
        log: LogLevel::Info,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        let mut value = || iter.next().with_context(|| format!("{} expects a value", flag));
        match flag.as_str() {
            "--seed" => args.seed = Some(value()?.parse().context("--seed must be an integer")?),
            "--ticks" => args.ticks = value()?.parse().context("--ticks must be an integer")?,
            "--config" => args.config = Some(value()?),
            "--log" => args.log = value()?.parse().map_err(anyhow::Error::msg)?,
            other => bail!("unknown argument `{}`", other),
        }
    }
    Ok(args)
}

/// Walks a slow loop around the start room, shooting toward the centre
/// and drinking a potion now and then.
fn scripted_input(tick: u64) -> InputFrame {
    let phase = (tick / 90) % 4;
    let mut input = InputFrame::moving(phase == 0, phase == 2, phase == 1, phase == 3);
    if tick % 20 == 0 {
        input.fire_at = Some(Vec2::new(640.0, 384.0));
    }
    if tick % 600 == 300 {
        input.use_item = Some(0);
    }
    input
}

fn main() -> anyhow::Result<()> {
    let args = parse_args()?;
    init_tracing(&TracingConfig::with_level(args.log));

    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
            GameConfig::from_ron(&text).with_context(|| format!("parsing {}", path))?
        }
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut state = GameState::new(config).context("creating session")?;
    state.apply_intent(Intent::AnyKey)?;
    for tick in 0..args.ticks {
        state.update(&scripted_input(tick))?;
        if state.is_game_over() {
            tracing::info!(tick, "run ended early");
            break;
        }
    }
    state.finish_session();

    println!("{}", state.snapshot().to_json_pretty()?);
    Ok(())
}
