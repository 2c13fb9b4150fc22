//! Fixed timestep simulation tick
//!
//! One call per rendered frame. Order within a tick is fixed and load-bearing
//! for determinism: combatants move (and may fire), projectiles fly, dead
//! projectiles are pruned, then hits are resolved.

use super::state::{MatchEvent, MatchState};
use crate::consts::ROUND_RESET_DELAY_MS;

/// Held state of one player's logical actions for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PadState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Per-slot logical pads. The bot's slot is ignored in solo mode.
    pub pads: [PadState; 2],
    /// Manual restart command (restart button / hotkey)
    pub restart: bool,
}

/// Advance the match by one fixed logical tick.
///
/// `now_ms` is a caller-supplied monotonic clock reading; the simulation
/// never reads wall time itself, so tests drive both ticks and elapsed time
/// explicitly.
pub fn tick(state: &mut MatchState, input: &TickInput, now_ms: f64) {
    if input.restart {
        state.manual_restart();
    }

    // A kill-triggered reset fires on the first tick at-or-after its
    // deadline. The action is idempotent, so a manual restart or mode
    // switch racing it is harmless.
    if let Some(due) = state.pending_reset_ms {
        if now_ms >= due {
            state.pending_reset_ms = None;
            state.reset_round();
            state.events.push(MatchEvent::RoundReset);
        }
    }

    state.time_ticks += 1;

    // 1. Combatants, in slot order. Each observes its opponent as of this
    //    moment, so P2 sees P1's move from earlier in the same tick.
    for idx in 0..state.combatants.len() {
        let opponent = state.combatants[1 - idx].observe();
        let pad = input.pads[idx];
        let MatchState {
            ref arena,
            ref mut combatants,
            ref mut projectiles,
            ref mut rng,
            ..
        } = *state;
        combatants[idx].step(arena, Some(opponent), pad, rng, now_ms, projectiles);
    }

    // 2. Projectiles, including any fired this tick
    for shot in &mut state.projectiles {
        shot.step(&state.arena);
    }

    // 3. Prune by rebuilding, never by removing mid-iteration
    state.projectiles = std::mem::take(&mut state.projectiles)
        .into_iter()
        .filter(|p| p.alive)
        .collect();

    // 4. Hits, kills, and the delayed round reset
    let kills = super::combat::resolve_hits(&mut state.combatants, &mut state.projectiles);
    for kill in kills {
        state.events.push(MatchEvent::Kill {
            by: kill.by,
            victim: kill.victim,
        });
        state.pending_reset_ms = Some(now_ms + ROUND_RESET_DELAY_MS);
    }
}
