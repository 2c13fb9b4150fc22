//! Tank Duel headless demo
//!
//! Runs a solo-vs-bot match with an idle player at simulated 60 Hz, logging
//! kill and reset events, then prints the final scoreboard as JSON. Useful as
//! a smoke run and as a minimal embedding example: a real frontend drives the
//! same `tick` call from its frame loop and renders the state in between.

use serde::Serialize;

use tank_duel::consts::MS_PER_TICK;
use tank_duel::sim::{tick, MatchEvent, MatchMode, MatchState, Slot, TickInput};

/// Simulated match length in ticks (two minutes at 60 Hz)
const DEMO_TICKS: u64 = 2 * 60 * 60;

#[derive(Serialize)]
struct Scoreboard<'a> {
    seed: u64,
    ticks: u64,
    rounds: u32,
    p1_kills: u32,
    p2_kills: u32,
    p2_label: &'a str,
}

fn main() {
    env_logger::init();

    let seed = 0x7a4e5_u64;
    let mut state = MatchState::new(MatchMode::SoloVsBot, seed);
    log::info!("starting solo match, seed {seed:#x}");

    let input = TickInput::default();
    let mut rounds = 0u32;
    for t in 0..DEMO_TICKS {
        tick(&mut state, &input, t as f64 * MS_PER_TICK);
        for event in state.drain_events() {
            match event {
                MatchEvent::Kill { by, victim } => {
                    log::info!(
                        "tick {t}: {} eliminated {}",
                        state.label(by),
                        state.label(victim)
                    );
                }
                MatchEvent::RoundReset => {
                    rounds += 1;
                    log::info!("tick {t}: round reset, terrain regenerated");
                }
            }
        }
    }

    let scoreboard = Scoreboard {
        seed,
        ticks: state.time_ticks,
        rounds,
        p1_kills: state.combatants[0].kills,
        p2_kills: state.combatants[1].kills,
        p2_label: state.label(Slot::P2),
    };
    match serde_json::to_string_pretty(&scoreboard) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("scoreboard serialization failed: {err}"),
    }
}
