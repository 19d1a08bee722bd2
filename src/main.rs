//! Home Run Derby headless runner
//!
//! Plays one full game with the demo batter and reports the result.
//!
//! Usage: `home-run-derby [tuning.json] [seed]`

use home_run_derby::sim::{GamePhase, PitchOutcome, Simulator, TickInput, tick};
use home_run_derby::{Tuning, display_feet};

/// Frames before giving up on a game that never ends
const MAX_TICKS: u64 = 100_000;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Home Run Derby (headless) starting...");

    let mut args = std::env::args().skip(1);

    let tuning = match args.next() {
        Some(path) => Tuning::load(&path).unwrap_or_else(|e| {
            log::warn!("Using default tuning ({})", e);
            Tuning::default()
        }),
        None => Tuning::default(),
    };

    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        });
    log::info!("Game initialized with seed: {}", seed);

    let mut sim = match Simulator::new(&tuning, seed) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            std::process::exit(1);
        }
    };
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let mut hits = 0u32;
    let mut ticks = 0u64;
    while ticks < MAX_TICKS {
        if let Some(PitchOutcome::Hit { distance }) = tick(&mut sim, &input, &tuning) {
            hits += 1;
            log::info!(
                "Home run {}: {:.0} ft",
                hits,
                display_feet(distance, tuning.distance_scale)
            );
        }
        ticks += 1;
        if sim.current_game_state() == GamePhase::End {
            break;
        }
    }

    if sim.current_game_state() != GamePhase::End {
        log::warn!("Stopped after {} ticks without finishing the game", ticks);
    }

    let board = sim.scoreboard();
    match serde_json::to_string(&board) {
        Ok(json) => log::info!("Scoreboard: {}", json),
        Err(e) => log::warn!("Could not serialize scoreboard: {:?}", e),
    }
    if board.is_new_high_score() {
        println!("You got a new high score!");
    }
    println!(
        "Total distance hit: {:.0} ft. in {} outs ({} hits, {} ticks)",
        display_feet(board.score, tuning.distance_scale),
        board.outs,
        hits,
        ticks
    );
}
