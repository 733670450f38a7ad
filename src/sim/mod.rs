//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - All durations are tick counts, never wall-clock time
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, rects_overlap};
pub use state::{EnergyField, GamePhase, GameState, Obstacle, Player};
pub use tick::{TickInput, tick};
