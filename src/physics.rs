/// Per-tick entity updates.
///
/// These mutate a single entity in place; `compute::tick` clones the session
/// first, so callers of the public API still see pure state transitions.
use crate::collision::collides;
use crate::config::Config;
use crate::entities::{Bull, Obstacle, Player};
use crate::sprites::{BULL, HORSE};

// ── Constructors ─────────────────────────────────────────────────────────────

/// A fresh player standing on the ground line.
pub fn new_player(cfg: &Config) -> Player {
    let normal_height = HORSE.height();
    Player {
        x: cfg.physics.player_x,
        y: cfg.canvas.ground_y - normal_height,
        vy: 0.0,
        grounded: true,
        ducking: false,
        width: HORSE.width(),
        height: normal_height,
        normal_height,
        duck_height: (normal_height * cfg.physics.duck_ratio).floor(),
        anim_timer: 0,
    }
}

/// An inactive bull parked off the left edge.
pub fn new_bull(cfg: &Config) -> Bull {
    Bull {
        x: cfg.bull.start_x,
        y: cfg.canvas.ground_y - BULL.height(),
        width: BULL.width(),
        height: BULL.height(),
        active: false,
        anim_timer: 0,
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

pub fn update_player(player: &mut Player, cfg: &Config, duck_held: bool) {
    let ground = cfg.canvas.ground_y;

    if !player.grounded {
        player.vy += cfg.physics.gravity;
    }
    player.y += player.vy;

    if player.y >= ground - player.normal_height {
        player.y = ground - player.normal_height;
        player.vy = 0.0;
        player.grounded = true;
    } else {
        player.grounded = false;
    }

    player.ducking = duck_held && player.grounded;

    if player.grounded {
        // Re-seat so the feet stay on the ground whichever height is active.
        player.height = if player.ducking {
            player.duck_height
        } else {
            player.normal_height
        };
        player.y = ground - player.height;
    } else {
        player.height = player.normal_height;
    }

    player.anim_timer = player.anim_timer.wrapping_add(1);
}

/// Honoured only from a standing start.
pub fn jump(player: &mut Player, cfg: &Config) -> bool {
    if player.grounded && !player.ducking {
        player.vy = cfg.physics.jump_impulse;
        player.grounded = false;
        true
    } else {
        false
    }
}

/// Sprite frame for the current pose: gathered legs while ducking, a gallop
/// cycle on the ground, and the extended pose in the air.
pub fn player_frame(player: &Player) -> usize {
    if player.ducking {
        1
    } else if player.grounded {
        (player.anim_timer / 8 % 2) as usize
    } else {
        0
    }
}

// ── Obstacles ────────────────────────────────────────────────────────────────

pub fn update_obstacle(obstacle: &mut Obstacle, speed: f32) {
    obstacle.x -= speed;
    if obstacle.x + obstacle.width < 0.0 {
        obstacle.marked_for_deletion = true;
    }
    obstacle.anim_timer = obstacle.anim_timer.wrapping_add(1);
}

// ── Bull ─────────────────────────────────────────────────────────────────────

pub fn activate_bull(bull: &mut Bull, cfg: &Config) {
    bull.active = true;
    bull.x = cfg.bull.start_x;
}

/// Charge toward `max_x` and hold there, removing every obstacle in the way.
/// Returns how many obstacles were cleared.
pub fn update_bull(bull: &mut Bull, obstacles: &mut Vec<Obstacle>, cfg: &Config) -> usize {
    if !bull.active {
        return 0;
    }

    bull.x = (bull.x + cfg.bull.speed).min(cfg.bull.max_x);
    bull.anim_timer = bull.anim_timer.wrapping_add(1);

    let bounds = bull.bounds();
    let before = obstacles.len();
    obstacles.retain(|o| !collides(&bounds, &o.bounds(), cfg.collision_padding));
    before - obstacles.len()
}

pub fn bull_frame(bull: &Bull) -> usize {
    (bull.anim_timer / 5 % 2) as usize
}
