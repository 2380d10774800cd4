//! Sweep Pong entry point
//!
//! Headless demo: plays AI against AI on the default arena until one side
//! reaches the winning score.
//!
//! Usage: `sweep-pong [settings.json] [seed]`

use sweep_pong::consts::SIM_DT;
use sweep_pong::{Arena, Predictor, Settings, Side, Starter};

/// Frame cap: ten minutes of play at 60 Hz
const MAX_FRAMES: u32 = 60 * 60 * 10;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::warn!("Invalid seed ({e}), using 0");
            0
        }
        None => 0,
    };

    log::info!("Sweep Pong starting (seed {seed}, {settings:?})");
    let (lhs, rhs, frames) = play(&settings, seed);

    match (lhs, rhs) {
        (l, r) if l >= settings.winning_score => log::info!("Left wins {l} - {r}"),
        (l, r) if r >= settings.winning_score => log::info!("Right wins {r} - {l}"),
        (l, r) => log::info!("No winner after {frames} frames: {l} - {r}"),
    }
    println!("{lhs} - {rhs}");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Headless demo is native only
}

/// Run one AI-versus-AI game; returns both scores and the frames played
fn play(settings: &Settings, seed: u64) -> (u32, u32, u32) {
    let mut arena = Arena::new(Starter::new(seed));
    arena.set_paddle_size(settings.paddle_size);

    let radius = arena.puck().radius;
    let mut lhs_ai = Predictor::from_settings(seed.wrapping_add(1), settings, radius);
    let mut rhs_ai = Predictor::from_settings(seed.wrapping_add(2), settings, radius);

    let mut frames = 0;
    while arena.in_play(settings.winning_score) && frames < MAX_FRAMES {
        for (side, ai) in [(Side::Left, &mut lhs_ai), (Side::Right, &mut rhs_ai)] {
            if let Some(speed) = ai.paddle_speed(&arena, side) {
                arena.paddle_mut(side).velocity.y = speed;
            }
        }
        arena.advance_time(SIM_DT);
        frames += 1;
    }

    (arena.lhs_score(), arena.rhs_score(), frames)
}
