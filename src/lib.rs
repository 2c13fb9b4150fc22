//! Tank Duel - a top-down tile-arena tank shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (arena, combatants, projectiles, combat)
//!
//! Rendering, input device wiring, audio, and score persistence are external
//! collaborators: they feed logical inputs and a clock into [`sim::tick`] and
//! read the resulting state back out.

pub mod sim;

pub use sim::{Arena, Combatant, MatchEvent, MatchMode, MatchState, Projectile, Slot};

/// Game configuration constants
pub mod consts {
    /// Simulation tick rate (one tick per rendered frame)
    pub const TICK_HZ: f32 = 60.0;
    /// Milliseconds of simulated time per tick
    pub const MS_PER_TICK: f64 = 1000.0 / TICK_HZ as f64;

    /// Arena tile side length in world units
    pub const TILE_SIZE: f32 = 40.0;
    /// Arena width in tiles
    pub const ARENA_COLS: usize = 24;
    /// Arena height in tiles
    pub const ARENA_ROWS: usize = 15;
    /// Chance for an interior cell to become a wall, on top of the
    /// deterministic lattice pattern
    pub const WALL_CHANCE: f32 = 0.06;

    /// Tank bounding box side length
    pub const TANK_SIZE: f32 = 28.0;
    /// Tank movement speed in world units per tick
    pub const TANK_SPEED: f32 = 1.8;
    /// Spawn inset from the safe-zone tile corner
    pub const SPAWN_INSET: f32 = 5.0;

    /// Ticks between player shots
    pub const PLAYER_RELOAD_TICKS: u32 = 25;
    /// Ticks between bot shots
    pub const BOT_RELOAD_TICKS: u32 = 35;

    /// Bot moves at this fraction of full tank speed
    pub const BOT_THROTTLE: f32 = 0.7;
    /// Below this distance the bot backs away from its opponent
    pub const BOT_NEAR_RANGE: f32 = 200.0;
    /// Within this distance the bot considers firing
    pub const BOT_FIRE_RANGE: f32 = 450.0;
    /// Chance the bot fires when in range, rolled once per decision
    pub const BOT_FIRE_CHANCE: f32 = 0.6;
    /// Minimum delay between bot decisions (ms)
    pub const BOT_THINK_MIN_MS: f64 = 400.0;
    /// Random extra delay between bot decisions (ms)
    pub const BOT_THINK_SPREAD_MS: f64 = 600.0;

    /// Projectile speed in world units per tick
    pub const PROJECTILE_SPEED: f32 = 6.0;
    /// Projectile collision radius
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    /// Projectile lifetime in ticks
    pub const PROJECTILE_LIFE_TICKS: u32 = 200;
    /// Muzzle offset from the firer's center, so a fresh projectile never
    /// starts inside its own tank
    pub const MUZZLE_OFFSET: f32 = 20.0;

    /// Delay between a kill and the round reset (ms)
    pub const ROUND_RESET_DELAY_MS: f64 = 800.0;
}
