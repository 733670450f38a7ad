//! Game state and entity types
//!
//! The original timer-callback design (dash/boost expiry via one-shot timers)
//! is replaced by scheduled-expiry tick timestamps stored on the entities and
//! checked each tick, so a reset can never race a stale timer.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::ms_to_ticks;
use crate::tuning::Tuning;

use super::collision::Rect;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; nothing advances until an explicit reset
    GameOver,
}

/// The player-controlled triangle
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner of the bounding box (y never changes)
    pub pos: Vec2,
    /// Current horizontal speed in pixels per tick
    pub speed: f32,
    /// While set and in the future: invulnerable to obstacle hits
    pub dashing_until: Option<u64>,
    /// While set and in the future: dash input is ignored, highlight color shows
    pub cooldown_until: Option<u64>,
    /// While set and in the future: speed stays boosted; cleared on expiry
    pub boost_until: Option<u64>,
}

impl Player {
    pub fn new(base_speed: f32) -> Self {
        Self {
            pos: Vec2::new(
                SURFACE_WIDTH / 2.0 - PLAYER_SIZE / 2.0,
                SURFACE_HEIGHT - PLAYER_SIZE - PLAYER_BOTTOM_MARGIN,
            ),
            speed: base_speed,
            dashing_until: None,
            cooldown_until: None,
            boost_until: None,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos(self.pos, PLAYER_SIZE, PLAYER_SIZE)
    }

    /// Invulnerable to obstacle collisions?
    pub fn is_dashing(&self, now: u64) -> bool {
        self.dashing_until.is_some_and(|t| now < t)
    }

    /// Dash input is gated while this holds; also drives the highlight color
    pub fn on_cooldown(&self, now: u64) -> bool {
        self.cooldown_until.is_some_and(|t| now < t)
    }

    /// Apply directional input, left before right, then clamp into bounds
    pub fn apply_move(&mut self, left: bool, right: bool) {
        if left {
            self.pos.x -= self.speed;
        }
        if right {
            self.pos.x += self.speed;
        }
        self.clamp_x();
    }

    /// Keep x within [0, surface_width - player_width]
    pub fn clamp_x(&mut self) {
        self.pos.x = self.pos.x.clamp(0.0, SURFACE_WIDTH - PLAYER_SIZE);
    }
}

/// A falling square obstacle
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    /// Fall speed in pixels per tick
    pub speed: f32,
    /// Set once the top edge passes the bottom of the surface
    pub marked: bool,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect::from_pos(self.pos, OBSTACLE_SIZE, OBSTACLE_SIZE)
    }

    /// Advance straight down by one tick
    pub fn fall(&mut self) {
        self.pos.y += self.speed;
    }

    /// Top edge below the bottom edge of the surface?
    pub fn past_bottom(&self) -> bool {
        self.pos.y > SURFACE_HEIGHT
    }
}

/// A temporary speed-boost pickup dropped by an expiring obstacle
#[derive(Debug, Clone)]
pub struct EnergyField {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    /// Tick at which the field expires untouched
    pub expires_at: u64,
    /// Touched by the player or expired; pruned at end of tick
    pub collected: bool,
}

impl EnergyField {
    pub fn rect(&self) -> Rect {
        Rect::from_pos(self.pos, FIELD_WIDTH, FIELD_HEIGHT)
    }

    pub fn expired(&self, now: u64) -> bool {
        now >= self.expires_at
    }
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG (obstacle spawn positions, directionless dash)
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// One increment per tick while playing
    pub score: u64,
    pub player: Player,
    /// Live obstacles, insertion order
    pub obstacles: Vec<Obstacle>,
    /// Live energy fields, insertion order
    pub fields: Vec<EnergyField>,
    /// Next tick at which the spawner fires; not re-armed after game over
    pub next_spawn_tick: u64,
    /// Balance values
    pub tuning: Tuning,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            phase: GamePhase::Playing,
            score: 0,
            player: Player::new(tuning.base_speed),
            obstacles: Vec::new(),
            fields: Vec::new(),
            // First obstacle appears on the first tick, like the spawner
            // chain firing immediately at startup
            next_spawn_tick: 0,
            tuning,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Full reset after game over: collections cleared, score zeroed,
    /// player re-centered at base speed, spawner re-armed.
    pub fn reset(&mut self) {
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.player = Player::new(self.tuning.base_speed);
        self.obstacles.clear();
        self.fields.clear();
        self.next_spawn_tick = 0;
    }

    /// Spawn one obstacle at a random x just above the top edge
    pub fn spawn_obstacle(&mut self) {
        let id = self.next_entity_id();
        let x = self.rng.random_range(0.0..SURFACE_WIDTH - OBSTACLE_SIZE);
        self.obstacles.push(Obstacle {
            id,
            pos: Vec2::new(x, -OBSTACLE_SIZE),
            speed: self.tuning.obstacle_speed,
            marked: false,
        });
    }

    /// Spawn one energy field near the bottom edge at the given x
    pub fn spawn_field(&mut self, x: f32) {
        let id = self.next_entity_id();
        let expires_at = self.time_ticks + ms_to_ticks(self.tuning.field_lifetime_ms);
        self.fields.push(EnergyField {
            id,
            pos: Vec2::new(x, SURFACE_HEIGHT - FIELD_DROP_HEIGHT),
            expires_at,
            collected: false,
        });
    }
}
