//! Ledge Run headless driver
//!
//! Runs the simulation at a fixed tick with scripted input and logs what
//! happens. Usage: `ledge-run [SETTINGS.json] [--seconds N] [--dump]`.
//! `RUST_LOG=debug` shows per-second hero state and audio cues.

use ledge_run::consts::*;
use ledge_run::sim::{GamePhase, World};
use ledge_run::{Menu, MenuAction, SimError, SoundBoard, Settings};

/// Cap on ticks per rendered frame, so a stall can't spiral
const MAX_SUBSTEPS: u32 = 8;
/// Simulated frame time of the scripted run (a 50 Hz display)
const FRAME_TIME: f32 = 0.02;

struct Args {
    settings_path: Option<String>,
    seconds: f32,
    dump: bool,
}

fn parse_args() -> Result<Args, SimError> {
    let mut args = Args {
        settings_path: None,
        seconds: 20.0,
        dump: false,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--dump" => args.dump = true,
            "--seconds" => {
                let value = iter.next().unwrap_or_default();
                args.seconds = value
                    .parse()
                    .map_err(|_| SimError::Settings(format!("bad --seconds value '{value}'")))?;
            }
            _ => args.settings_path = Some(arg),
        }
    }
    Ok(args)
}

/// Scripted player: run right, turn around every three seconds, hop often
fn drive(world: &mut World, elapsed: f32) {
    let dir = if (elapsed / 3.0) as u32 % 2 == 0 { 1 } else { -1 };
    world.release_horizontal(-dir);
    world.set_horizontal_intent(dir);
    if (elapsed / 0.75).fract() < FRAME_TIME / 0.75 {
        world.request_jump();
    }
}

fn main() -> Result<(), SimError> {
    env_logger::init();
    log::info!("Ledge Run (headless) starting...");

    let args = parse_args()?;
    let settings = match &args.settings_path {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let dt = settings.dt();

    let mut world = World::new(&settings)?;
    let sound = SoundBoard::from_settings(&settings);
    let mut menu = Menu::new(&settings)?;

    // Press "Start Game"
    let Some(start) = menu.button(MenuAction::Start).map(|b| b.rect.center()) else {
        return Ok(());
    };
    menu.hover(start);
    if menu.click(start) != Some(MenuAction::Start) {
        return Ok(());
    }
    let event = world.start_round()?;
    log::debug!("Cues: {:?}", sound.cues(&[event]));

    let mut elapsed = 0.0;
    let mut accumulator = 0.0;
    let mut next_report = 1.0;

    while elapsed < args.seconds {
        elapsed += FRAME_TIME;
        accumulator += FRAME_TIME;

        let mut substeps = 0;
        while accumulator >= dt && substeps < MAX_SUBSTEPS {
            drive(&mut world, elapsed);
            let events = world.update(dt)?;
            for event in &events {
                log::info!("t={elapsed:.2}s {event:?}");
            }
            let cues = sound.cues(&events);
            if cues.music.is_some() || !cues.effects.is_empty() {
                log::debug!("Cues: {cues:?}");
            }
            accumulator -= dt;
            substeps += 1;
        }

        if elapsed >= next_report {
            next_report += 1.0;
            let body = world.hero.body();
            log::debug!(
                "t={elapsed:.0}s hero at ({:.1}, {:.1}) {} on_ground={} image={}",
                body.rect.x,
                body.rect.y,
                body.active.as_str(),
                body.on_ground,
                body.current_image()
            );
        }

        if world.phase == GamePhase::Menu {
            break;
        }
    }

    let frame = world.draw();
    log::info!(
        "Finished in {:?}: score {}, lives {}/{HERO_LIVES}, {} coins left",
        frame.phase,
        frame.score,
        frame.lives,
        frame.coins.len()
    );

    if args.dump {
        println!("{}", serde_json::to_string_pretty(&world)?);
    }
    Ok(())
}
