//! Headless driver: runs an input script through the simulation plugin and
//! optionally writes the resulting trace as JSON.

use bevy::log::LogPlugin;
use bevy::prelude::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use wwiii::SimulationPlugin;
use wwiii::actor::{ActorConfig, actor_bundle};
use wwiii::combat::DamageRequest;
use wwiii::content::{ActorProfiles, ConfigError, load_actor_profiles};
use wwiii::layout::{LayoutParams, sample_layout};
use wwiii::movement::InputIntent;
use wwiii::replay::{InputFrame, InputScript, drive_app, trace_to_json};

const DEFAULT_PROFILES: &str = "assets/data/actors.ron";
const DEFAULT_PROFILE_ID: &str = "player";
const DEMO_DT: f32 = 1.0 / 60.0;

#[derive(Debug, Default)]
struct Args {
    profiles: Option<PathBuf>,
    profile: Option<String>,
    script: Option<PathBuf>,
    trace: Option<PathBuf>,
    seed: u64,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);

    while let Some(flag) = iter.next() {
        let mut value = || {
            iter.next()
                .ok_or_else(|| format!("missing value for {}", flag))
        };
        match flag.as_str() {
            "--profiles" => args.profiles = Some(PathBuf::from(value()?)),
            "--profile" => args.profile = Some(value()?),
            "--script" => args.script = Some(PathBuf::from(value()?)),
            "--trace" => args.trace = Some(PathBuf::from(value()?)),
            "--seed" => {
                let raw = value()?;
                args.seed = raw
                    .parse()
                    .map_err(|_| format!("--seed expects an integer, got '{}'", raw))?;
            }
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }

    Ok(args)
}

fn resolve_config(args: &Args) -> Result<ActorConfig, ConfigError> {
    let id = args.profile.as_deref().unwrap_or(DEFAULT_PROFILE_ID);

    let profiles = match &args.profiles {
        Some(path) => load_actor_profiles(path)?,
        None if Path::new(DEFAULT_PROFILES).exists() => {
            load_actor_profiles(Path::new(DEFAULT_PROFILES))?
        }
        None => {
            warn!("No profile file found; using built-in defaults");
            let mut profiles = ActorProfiles::default();
            profiles.insert(DEFAULT_PROFILE_ID, ActorConfig::default());
            profiles
        }
    };

    profiles.get(id).cloned()
}

/// A short run: walk right, jump, take a hit mid-air, land, hit a checkpoint,
/// then take enough hits to respawn.
fn demo_script() -> InputScript {
    let mut frames = Vec::new();
    let walk = InputIntent::moving(1.0);

    for _ in 0..10 {
        frames.push(InputFrame::new(DEMO_DT, walk, true));
    }
    frames.push(InputFrame::new(
        DEMO_DT,
        InputIntent::jump().with_horizontal(1.0),
        true,
    ));
    for _ in 0..20 {
        frames.push(InputFrame::new(DEMO_DT, walk.holding_jump(), false));
    }
    frames.push(
        InputFrame::new(DEMO_DT, walk, false).with_damage(
            DamageRequest::new(1)
                .with_knockback(Vec2::new(-6.0, 4.0))
                .with_hit_stun(0.25)
                .with_invulnerability(1.0),
        ),
    );
    for _ in 0..30 {
        frames.push(InputFrame::new(DEMO_DT, walk, true));
    }
    frames.push(
        InputFrame::new(DEMO_DT, InputIntent::idle(), true)
            .with_checkpoint(Vec2::new(12.0, 0.0)),
    );
    for _ in 0..3 {
        for _ in 0..70 {
            frames.push(InputFrame::new(DEMO_DT, InputIntent::idle(), true));
        }
        frames.push(
            InputFrame::new(DEMO_DT, InputIntent::idle(), true).with_damage(
                DamageRequest::new(1)
                    .with_knockback(Vec2::new(3.0, 2.0))
                    .with_invulnerability(1.0),
            ),
        );
    }

    InputScript { frames }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default(), SimulationPlugin));

    let config = resolve_config(&args)?;
    let script = match &args.script {
        Some(path) => InputScript::load(path)?,
        None => demo_script(),
    };

    let layout = sample_layout(
        &LayoutParams {
            seed: args.seed,
            ..default()
        },
        &config.movement,
    );
    info!(
        "Layout seed {}: {} spans, {} checkpoints, spawn at ({:.2}, {:.2})",
        args.seed,
        layout.spans.len(),
        layout.checkpoints.len(),
        layout.spawn_point.x,
        layout.spawn_point.y
    );

    let player = app
        .world_mut()
        .spawn(actor_bundle(config, layout.spawn_point)?)
        .id();

    let records = drive_app(&mut app, player, &script);

    let event_count: usize = records.iter().map(|r| r.events.len()).sum();
    info!(
        "Ran {} ticks ({:.2}s simulated), {} events",
        records.len(),
        script.duration(),
        event_count
    );

    if let Some(path) = &args.trace {
        std::fs::write(path, trace_to_json(&records)?)?;
        info!("Wrote trace to {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!(
                "usage: wwiii [--profiles actors.ron] [--profile id] [--script script.json] [--trace out.json] [--seed n]"
            );
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
