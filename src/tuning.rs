//! Data-driven game balance
//!
//! Balance values ship in an embedded JSON file so they can be tweaked
//! without touching gameplay code. Missing keys fall back to the compiled-in
//! defaults from [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay balance values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player speed, pixels per tick
    pub base_speed: f32,
    /// Player speed while boosted
    pub boost_speed: f32,
    /// Dash teleport distance, pixels
    pub dash_offset: f32,
    /// Post-dash invulnerability window, milliseconds
    pub dash_active_ms: u32,
    /// Dash cooldown, milliseconds
    pub dash_cooldown_ms: u32,
    /// Speed boost duration, milliseconds
    pub boost_ms: u32,
    /// Obstacle fall speed, pixels per tick
    pub obstacle_speed: f32,
    /// Obstacle spawn interval, milliseconds
    pub spawn_interval_ms: u32,
    /// Untouched energy field lifetime, milliseconds
    pub field_lifetime_ms: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_speed: PLAYER_BASE_SPEED,
            boost_speed: PLAYER_BOOST_SPEED,
            dash_offset: DASH_OFFSET,
            dash_active_ms: DASH_ACTIVE_MS,
            dash_cooldown_ms: DASH_COOLDOWN_MS,
            boost_ms: BOOST_MS,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            field_lifetime_ms: FIELD_LIFETIME_MS,
        }
    }
}

/// Balance file embedded at build time
const TUNING_JSON: &str = include_str!("../tuning.json");

impl Tuning {
    /// Parse the embedded balance file, falling back to defaults if it
    /// fails to parse.
    pub fn load() -> Self {
        match serde_json::from_str(TUNING_JSON) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("tuning.json invalid ({e}), using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_tuning_parses() {
        let tuning: Tuning = serde_json::from_str(TUNING_JSON).expect("tuning.json must parse");
        assert_eq!(tuning.base_speed, PLAYER_BASE_SPEED);
        assert_eq!(tuning.spawn_interval_ms, SPAWN_INTERVAL_MS);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "boost_speed": 9.0 }"#).unwrap();
        assert_eq!(tuning.boost_speed, 9.0);
        assert_eq!(tuning.base_speed, PLAYER_BASE_SPEED);
        assert_eq!(tuning.field_lifetime_ms, FIELD_LIFETIME_MS);
    }
}
