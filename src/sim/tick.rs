//! Per-frame simulation tick
//!
//! One tick is one rendered frame. Ordering within a tick is fixed:
//! expiries, player movement, dash, spawner, obstacles (fall, drop,
//! collision), obstacle pruning, energy fields (expire, touch), field
//! pruning, score.

use rand::Rng;

use super::collision::rects_overlap;
use super::state::{GamePhase, GameState};
use crate::consts::OBSTACLE_SIZE;
use crate::ms_to_ticks;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move left (key or left-half touch)
    pub left: bool,
    /// Move right (key or right-half touch)
    pub right: bool,
    /// Dash (one-shot; the driver clears it after each tick)
    pub dash: bool,
}

/// Advance the game state by one tick. No-op once the game is over.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;
    let now = state.time_ticks;

    // Scheduled boost reversion. Each field touch rewrites boost_until, so
    // overlapping boosts extend a single deadline instead of racing timers.
    if let Some(t) = state.player.boost_until {
        if now > t {
            state.player.speed = state.tuning.base_speed;
            state.player.boost_until = None;
        }
    }

    state.player.apply_move(input.left, input.right);

    if input.dash {
        try_dash(state, input, now);
    }

    // Spawner: fixed cadence, armed at tick zero so the first obstacle
    // appears immediately; goes silent on game over until reset.
    if now >= state.next_spawn_tick {
        state.spawn_obstacle();
        state.next_spawn_tick = now + ms_to_ticks(state.tuning.spawn_interval_ms);
    }

    let player_rect = state.player.rect();
    let dashing = state.player.is_dashing(now);

    // Obstacles: advance, mark off-bottom ones (each drops exactly one
    // energy field), and test collision against the player.
    let mut drops: Vec<f32> = Vec::new();
    let mut hit = false;
    for ob in &mut state.obstacles {
        ob.fall();
        if ob.past_bottom() && !ob.marked {
            ob.marked = true;
            drops.push(ob.pos.x + OBSTACLE_SIZE / 2.0);
        }
        if !hit && !dashing && rects_overlap(&player_rect, &ob.rect()) {
            hit = true;
        }
    }
    for x in drops {
        state.spawn_field(x);
    }

    if hit {
        // Terminal state transition; no score this frame, no pruning.
        state.phase = GamePhase::GameOver;
        return;
    }

    state.obstacles.retain(|ob| !ob.marked);

    // Energy fields: age-based expiry first, so a field that just expired
    // cannot be touched on the same tick.
    for field in &mut state.fields {
        if field.expired(now) {
            field.collected = true;
        }
        if !field.collected && rects_overlap(&player_rect, &field.rect()) {
            field.collected = true;
            state.player.speed = state.tuning.boost_speed;
            state.player.boost_until = Some(now + ms_to_ticks(state.tuning.boost_ms));
        }
    }
    state.fields.retain(|f| !f.collected);

    state.score += 1;
}

/// Teleport by the dash offset in the held direction (right wins over left,
/// uniform random when neither is held), then start invulnerability and
/// cooldown windows. Ignored entirely while cooling down.
fn try_dash(state: &mut GameState, input: &TickInput, now: u64) {
    if state.player.on_cooldown(now) {
        return;
    }

    let dir = if input.right {
        1.0
    } else if input.left {
        -1.0
    } else if state.rng.random_bool(0.5) {
        1.0
    } else {
        -1.0
    };

    state.player.pos.x += state.tuning.dash_offset * dir;
    state.player.clamp_x();
    state.player.dashing_until = Some(now + ms_to_ticks(state.tuning.dash_active_ms));
    state.player.cooldown_until = Some(now + ms_to_ticks(state.tuning.dash_cooldown_ms));
}
