//! Neon Dodge - a falling-block dodge arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collision, game state)
//! - `render`: Canvas-2D rendering (wasm only)
//! - `tuning`: Data-driven game balance

pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod render;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Drawing surface dimensions
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    /// Player bounding box (square) and resting offset above the bottom edge
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const PLAYER_BOTTOM_MARGIN: f32 = 10.0;
    /// Horizontal speed in pixels per tick
    pub const PLAYER_BASE_SPEED: f32 = 4.0;
    pub const PLAYER_BOOST_SPEED: f32 = 7.0;

    /// Dash teleport distance in pixels
    pub const DASH_OFFSET: f32 = 100.0;
    /// Invulnerability window after a dash
    pub const DASH_ACTIVE_MS: u32 = 200;
    /// Cooldown before the next dash (also how long the highlight color holds)
    pub const DASH_COOLDOWN_MS: u32 = 1500;

    /// Speed boost duration after touching an energy field
    pub const BOOST_MS: u32 = 500;

    /// Obstacle bounding box (square) and fall speed in pixels per tick
    pub const OBSTACLE_SIZE: f32 = 30.0;
    pub const OBSTACLE_SPEED: f32 = 2.0;
    /// Interval between obstacle spawns
    pub const SPAWN_INTERVAL_MS: u32 = 3000;

    /// Energy field bounding box
    pub const FIELD_WIDTH: f32 = 20.0;
    pub const FIELD_HEIGHT: f32 = 10.0;
    /// Untouched fields expire after this long
    pub const FIELD_LIFETIME_MS: u32 = 1000;
    /// Fields appear this far above the bottom edge
    pub const FIELD_DROP_HEIGHT: f32 = 40.0;
}

/// Convert a millisecond duration to whole simulation ticks
#[inline]
pub fn ms_to_ticks(ms: u32) -> u64 {
    (ms as u64 * 60) / 1000
}
