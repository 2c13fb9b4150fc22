//! Match state and core simulation types
//!
//! Everything a renderer or HUD needs to draw a frame lives here, owned by
//! one [`MatchState`] rather than scattered module globals.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::arena::Arena;
use super::tick::PadState;
use crate::consts::*;

/// Which of the two tanks an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    P1,
    P2,
}

impl Slot {
    /// Index into per-slot arrays (pads, combatants)
    pub fn index(self) -> usize {
        match self {
            Slot::P1 => 0,
            Slot::P2 => 1,
        }
    }

    /// The opposing slot
    pub fn other(self) -> Slot {
        match self {
            Slot::P1 => Slot::P2,
            Slot::P2 => Slot::P1,
        }
    }
}

/// Match mode selected at start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    /// One player against the bot
    SoloVsBot,
    /// Two players on one keyboard
    TwoPlayer,
}

/// Discrete outcomes surfaced to the HUD/overlay layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A projectile from `by` eliminated `victim`
    Kill { by: Slot, victim: Slot },
    /// A kill-triggered delayed reset fired: fresh terrain, both respawned
    RoundReset,
}

/// Opponent snapshot handed to a control strategy when it decides
#[derive(Debug, Clone, Copy)]
pub struct Observed {
    pub center: Vec2,
    pub alive: bool,
}

/// What a control strategy wants its tank to do this tick
#[derive(Debug, Clone, Copy)]
pub struct Intent {
    /// Movement direction, unit length or zero
    pub dir: Vec2,
    /// Fraction of full tank speed to move at
    pub throttle: f32,
    /// New facing angle, if the strategy turned this tick
    pub face: Option<f32>,
    /// Whether to attempt a shot (still gated by reload)
    pub fire: bool,
}

/// Mutable state of the bot strategy between decisions
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BotState {
    /// Last-decided movement direction, held until the next decision
    pub intent: Vec2,
    /// Clock timestamp at which the bot re-evaluates
    pub next_think_ms: f64,
}

/// Control strategy for one combatant
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Control {
    /// Driven by the slot's logical input pad
    Player,
    /// Driven by the built-in opponent logic
    Bot(BotState),
}

impl Control {
    /// Reload cooldown applied after this strategy fires
    pub fn reload_ticks(&self) -> u32 {
        match self {
            Control::Player => PLAYER_RELOAD_TICKS,
            Control::Bot(_) => BOT_RELOAD_TICKS,
        }
    }

    /// Produce this tick's intent. The simulation step is strategy-agnostic:
    /// both variants answer through this one capability.
    pub fn decide(
        &mut self,
        center: Vec2,
        opponent: Option<Observed>,
        pad: PadState,
        rng: &mut Pcg32,
        now_ms: f64,
    ) -> Intent {
        match self {
            Control::Player => {
                let mut dir = Vec2::ZERO;
                if pad.up {
                    dir.y -= 1.0;
                }
                if pad.down {
                    dir.y += 1.0;
                }
                if pad.left {
                    dir.x -= 1.0;
                }
                if pad.right {
                    dir.x += 1.0;
                }
                let (dir, face) = if dir != Vec2::ZERO {
                    let dir = dir.normalize();
                    (dir, Some(dir.y.atan2(dir.x)))
                } else {
                    (Vec2::ZERO, None)
                };
                Intent {
                    dir,
                    throttle: 1.0,
                    face,
                    fire: pad.fire,
                }
            }
            Control::Bot(bot) => {
                let mut face = None;
                let mut fire = false;
                if now_ms >= bot.next_think_ms {
                    bot.next_think_ms =
                        now_ms + BOT_THINK_MIN_MS + rng.random::<f64>() * BOT_THINK_SPREAD_MS;
                    match opponent {
                        Some(opp) if opp.alive => {
                            let to = opp.center - center;
                            let dist = to.length();
                            let heading = to.normalize_or_zero();
                            // Back off when close, close in when far
                            bot.intent = if dist < BOT_NEAR_RANGE { -heading } else { heading };
                            face = Some(to.y.atan2(to.x));
                            fire =
                                dist < BOT_FIRE_RANGE && rng.random::<f32>() < BOT_FIRE_CHANCE;
                        }
                        _ => {
                            // Nobody to hunt; drift
                            bot.intent = Vec2::from_angle(rng.random::<f32>() * TAU);
                        }
                    }
                }
                Intent {
                    dir: bot.intent,
                    throttle: BOT_THROTTLE,
                    face,
                    fire,
                }
            }
        }
    }

    /// Called when the decided move was rejected by a wall. The bot re-rolls
    /// a fresh direction immediately (it would otherwise grind against the
    /// wall until its think timer expires); returns the new facing if any.
    pub fn on_blocked(&mut self, rng: &mut Pcg32) -> Option<f32> {
        match self {
            Control::Player => None,
            Control::Bot(bot) => {
                let angle = rng.random::<f32>() * TAU;
                bot.intent = Vec2::from_angle(angle);
                Some(angle)
            }
        }
    }
}

/// One tank, player- or bot-controlled
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    pub slot: Slot,
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    /// Bounding box side lengths
    pub size: Vec2,
    /// Facing angle in radians
    pub angle: f32,
    /// Full movement speed in units per tick
    pub speed: f32,
    /// Ticks until the next shot is permitted; never negative
    pub reload: u32,
    pub alive: bool,
    pub kills: u32,
    /// Fixed respawn position
    pub spawn: Vec2,
    /// Render hint (0xRRGGBB)
    pub color: u32,
    pub control: Control,
}

impl Combatant {
    pub fn new(slot: Slot, spawn: Vec2, color: u32, control: Control) -> Self {
        Self {
            slot,
            pos: spawn,
            size: Vec2::splat(TANK_SIZE),
            angle: 0.0,
            speed: TANK_SPEED,
            reload: 0,
            alive: true,
            kills: 0,
            spawn,
            color,
            control,
        }
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Snapshot for the opposing strategy's decision
    pub fn observe(&self) -> Observed {
        Observed {
            center: self.center(),
            alive: self.alive,
        }
    }

    /// Return to the spawn point and come back to life. Kill count persists.
    pub fn respawn(&mut self) {
        self.pos = self.spawn;
        self.alive = true;
    }

    /// The single authoritative movement gate: commits the candidate position
    /// only when its box overlaps no wall. All motion, player and bot, passes
    /// through here.
    pub fn try_move(&mut self, arena: &Arena, delta: Vec2) -> bool {
        let candidate = self.pos + delta;
        if arena.rect_collides(candidate, self.size) {
            return false;
        }
        self.pos = candidate;
        true
    }

    /// Spawn a projectile if the reload countdown permits
    pub fn try_fire(&mut self, projectiles: &mut Vec<Projectile>) -> bool {
        if self.reload > 0 {
            return false;
        }
        projectiles.push(Projectile::fire(self));
        self.reload = self.control.reload_ticks();
        true
    }

    /// Advance one tick: decide, turn, move, maybe fire, cool down.
    /// A dead combatant does nothing.
    pub fn step(
        &mut self,
        arena: &Arena,
        opponent: Option<Observed>,
        pad: PadState,
        rng: &mut Pcg32,
        now_ms: f64,
        projectiles: &mut Vec<Projectile>,
    ) {
        if !self.alive {
            return;
        }

        let intent = self.control.decide(self.center(), opponent, pad, rng, now_ms);
        if let Some(angle) = intent.face {
            self.angle = angle;
        }
        if intent.dir != Vec2::ZERO {
            let delta = intent.dir * self.speed * intent.throttle;
            if !self.try_move(arena, delta) {
                if let Some(angle) = self.control.on_blocked(rng) {
                    self.angle = angle;
                }
            }
        }
        if intent.fire {
            let _ = self.try_fire(projectiles);
        }
        if self.reload > 0 {
            self.reload -= 1;
        }
    }
}

/// A fired shot with finite lifetime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Combatant credited if this projectile scores
    pub owner: Slot,
    /// Remaining ticks before it fizzles
    pub life: u32,
    pub alive: bool,
}

impl Projectile {
    /// Spawn from a firer, offset forward of its center so the shot never
    /// starts inside the firing tank.
    pub fn fire(firer: &Combatant) -> Self {
        let heading = Vec2::from_angle(firer.angle);
        Self {
            pos: firer.center() + heading * MUZZLE_OFFSET,
            vel: heading * PROJECTILE_SPEED,
            radius: PROJECTILE_RADIUS,
            owner: firer.slot,
            life: PROJECTILE_LIFE_TICKS,
            alive: true,
        }
    }

    /// Advance one tick; dies on lifetime exhaustion or wall entry.
    pub fn step(&mut self, arena: &Arena) {
        self.pos += self.vel;
        self.life = self.life.saturating_sub(1);
        if self.life == 0 || arena.is_wall(self.pos) {
            self.alive = false;
        }
    }
}

/// Tank render colors
const P1_COLOR: u32 = 0x58b3ff;
const P2_COLOR: u32 = 0xff6b6b;
const BOT_COLOR: u32 = 0xa17cff;

/// Everything one match owns: terrain, the two tanks, shots in flight,
/// queued events, and the deterministic RNG driving generation and bot play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub seed: u64,
    pub mode: MatchMode,
    pub arena: Arena,
    pub combatants: [Combatant; 2],
    pub projectiles: Vec<Projectile>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Clock deadline of a scheduled kill-triggered reset, if any
    pub(crate) pending_reset_ms: Option<f64>,
    pub(crate) events: Vec<MatchEvent>,
    pub(crate) rng: Pcg32,
}

impl MatchState {
    /// Start a new match: fresh terrain, both tanks at their fixed spawns,
    /// zero kills, no shots in flight.
    pub fn new(mode: MatchMode, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let arena = Arena::generate(&mut rng);

        let p1_spawn = Vec2::splat(TILE_SIZE + SPAWN_INSET);
        let p2_spawn = Vec2::new(
            arena.width() - TILE_SIZE - TANK_SIZE - 2.0,
            arena.height() - TILE_SIZE - TANK_SIZE - 2.0,
        );

        let p2 = match mode {
            MatchMode::SoloVsBot => Combatant::new(
                Slot::P2,
                p2_spawn,
                BOT_COLOR,
                Control::Bot(BotState::default()),
            ),
            MatchMode::TwoPlayer => Combatant::new(Slot::P2, p2_spawn, P2_COLOR, Control::Player),
        };

        Self {
            seed,
            mode,
            arena,
            combatants: [
                Combatant::new(Slot::P1, p1_spawn, P1_COLOR, Control::Player),
                p2,
            ],
            projectiles: Vec::new(),
            time_ticks: 0,
            pending_reset_ms: None,
            events: Vec::new(),
            rng,
        }
    }

    /// Explicit restart command: new terrain, both tanks respawned, kill
    /// counters zeroed. Takes effect immediately. Shots in flight are left
    /// alone, as is any pending kill-triggered reset (running it later is
    /// harmless).
    pub fn manual_restart(&mut self) {
        self.reset_round();
        for tank in &mut self.combatants {
            tank.kills = 0;
        }
    }

    /// Regenerate terrain and respawn both tanks. Kill counters persist.
    /// Idempotent: safe to run on an already-fresh round.
    pub(crate) fn reset_round(&mut self) {
        self.arena = Arena::generate(&mut self.rng);
        for tank in &mut self.combatants {
            tank.respawn();
        }
    }

    /// Display label for a slot under the current mode
    pub fn label(&self, slot: Slot) -> &'static str {
        match (slot, self.mode) {
            (Slot::P1, _) => "Player 1",
            (Slot::P2, MatchMode::SoloVsBot) => "Bot",
            (Slot::P2, MatchMode::TwoPlayer) => "Player 2",
        }
    }

    /// Take the events queued since the last drain (kills, round resets)
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    /// Projectiles still in flight, for rendering
    pub fn live_projectiles(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter().filter(|p| p.alive)
    }
}
