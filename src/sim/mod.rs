//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, one tick per rendered frame
//! - Seeded RNG only
//! - Clock readings supplied by the caller, never read ambiently
//! - No rendering or platform dependencies

pub mod arena;
pub mod combat;
pub mod state;
pub mod tick;

pub use arena::{Arena, Cell};
pub use combat::{projectile_hits_box, resolve_hits, Kill};
pub use state::{
    BotState, Combatant, Control, Intent, MatchEvent, MatchMode, MatchState, Observed, Projectile,
    Slot,
};
pub use tick::{tick, PadState, TickInput};
