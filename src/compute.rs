/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG and logging.
use std::sync::Arc;

use log::info;
use rand::Rng;

use crate::collision::collides;
use crate::config::Config;
use crate::entities::{GameState, GameStatus};
use crate::physics::{self, new_bull, new_player, update_bull, update_obstacle, update_player};
use crate::spawn::spawn_obstacle;

// ── Constructors ─────────────────────────────────────────────────────────────

/// The state shown behind the start menu, before any session has begun.
pub fn init_state(config: Arc<Config>) -> GameState {
    GameState {
        player: new_player(&config),
        obstacles: Vec::new(),
        bull: new_bull(&config),
        bull_timer: 0,
        score: 0,
        frame: 0,
        speed: config.speed.start,
        status: GameStatus::Menu,
        paused: false,
        milestone_shown: false,
        duck_held: false,
        config,
    }
}

/// Reinitialise every entity and session field.  The milestone latch and any
/// running bull countdown carry over.
fn reset_session(state: &GameState) -> GameState {
    let cfg = &state.config;

    let mut bull = new_bull(cfg);
    if state.bull_timer > 0 {
        physics::activate_bull(&mut bull, cfg);
    }

    GameState {
        player: new_player(cfg),
        obstacles: Vec::new(),
        bull,
        score: 0,
        frame: 0,
        speed: cfg.speed.start,
        status: GameStatus::Playing,
        paused: false,
        duck_held: false,
        ..state.clone()
    }
}

// ── Lifecycle transitions ────────────────────────────────────────────────────

/// Menu → Playing.  A no-op from any other status.
pub fn start_game(state: &GameState) -> GameState {
    if state.status != GameStatus::Menu {
        return state.clone();
    }
    info!("game started");
    reset_session(state)
}

/// GameOver → Playing.  A no-op from any other status.
pub fn restart(state: &GameState) -> GameState {
    if state.status != GameStatus::GameOver {
        return state.clone();
    }
    info!("game restarted (bull timer {})", state.bull_timer);
    reset_session(state)
}

/// Dismiss the milestone overlay and let the loop run again.
pub fn acknowledge_milestone(state: &GameState) -> GameState {
    if !state.paused {
        return state.clone();
    }
    info!("milestone acknowledged, resuming");
    GameState {
        paused: false,
        ..state.clone()
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn jump(state: &GameState) -> GameState {
    if !is_running(state) {
        return state.clone();
    }
    let mut player = state.player.clone();
    physics::jump(&mut player, &state.config);
    GameState {
        player,
        ..state.clone()
    }
}

pub fn set_duck(state: &GameState, held: bool) -> GameState {
    GameState {
        duck_held: held,
        ..state.clone()
    }
}

/// Summon the bull with a fresh countdown.  Allowed in every status; from the
/// menu the countdown carries into the first session.  A zero duration leaves
/// the state untouched, since only the countdown ever retires the bull.
pub fn activate_bull(state: &GameState) -> GameState {
    if state.config.bull.duration == 0 {
        return state.clone();
    }
    let mut bull = state.bull.clone();
    physics::activate_bull(&mut bull, &state.config);
    info!("bull activated for {} ticks", state.config.bull.duration);
    GameState {
        bull,
        bull_timer: state.config.bull.duration,
        ..state.clone()
    }
}

// ── Queries ──────────────────────────────────────────────────────────────────

fn is_running(state: &GameState) -> bool {
    state.status == GameStatus::Playing && !state.paused
}

/// Whether the frame driver should run another tick.
pub fn wants_next_frame(state: &GameState) -> bool {
    is_running(state)
}

pub fn displayed_score(state: &GameState) -> u64 {
    state.score / state.config.score.divisor
}

/// Five-digit zero-padded score readout.
pub fn score_text(state: &GameState) -> String {
    format!("{:05}", displayed_score(state))
}

// ── Per-frame tick (pure apart from the injected RNG) ───────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
pub fn tick(state: &GameState, rng: &mut impl Rng) -> GameState {
    if !is_running(state) {
        return state.clone();
    }

    let cfg = Arc::clone(&state.config);
    let mut next = state.clone();

    // ── 1. Speed ramp ────────────────────────────────────────────────────────
    if next.frame % cfg.speed.interval == 0 && next.speed < cfg.speed.max {
        next.speed = (next.speed + cfg.speed.step).min(cfg.speed.max);
    }

    // ── 2. Player ────────────────────────────────────────────────────────────
    update_player(&mut next.player, &cfg, next.duck_held);

    // ── 3. Bull countdown ────────────────────────────────────────────────────
    if next.bull_timer > 0 {
        next.bull_timer -= 1;
        update_bull(&mut next.bull, &mut next.obstacles, &cfg);
        if next.bull_timer == 0 {
            next.bull.active = false;
            info!("bull expired");
        }
    }

    // ── 4. Spawn ─────────────────────────────────────────────────────────────
    if let Some(obstacle) = spawn_obstacle(&next.obstacles, next.score, &cfg, rng) {
        next.obstacles.push(obstacle);
    }

    // ── 5. Scroll & prune ────────────────────────────────────────────────────
    for obstacle in &mut next.obstacles {
        update_obstacle(obstacle, next.speed);
    }
    next.obstacles.retain(|o| !o.marked_for_deletion);

    // ── 6. Collision: player ↔ obstacles ─────────────────────────────────────
    let player_box = next.player.bounds();
    let hit = next
        .obstacles
        .iter()
        .any(|o| collides(&player_box, &o.bounds(), cfg.collision_padding));
    if hit && !next.bull.active {
        next.status = GameStatus::GameOver;
        info!("game over at score {}", displayed_score(&next));
    }

    // ── 7. Score & milestone ─────────────────────────────────────────────────
    next.score += 1;

    if !next.milestone_shown && displayed_score(&next) >= cfg.score.milestone {
        next.milestone_shown = true;
        next.paused = true;
        info!("milestone {} reached, pausing", cfg.score.milestone);
        return next;
    }

    next.frame += 1;
    next
}
