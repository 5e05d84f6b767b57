use pixel_runner::config::Config;
use pixel_runner::entities::{Obstacle, ObstacleKind};
use pixel_runner::physics::*;

fn cfg() -> Config {
    Config::default()
}

fn obstacle_at(x: f32) -> Obstacle {
    Obstacle {
        kind: ObstacleKind::SmallGround,
        x,
        y: 318.0,
        width: 32.0,
        height: 32.0,
        marked_for_deletion: false,
        anim_timer: 0,
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[test]
fn new_player_stands_on_ground() {
    let p = new_player(&cfg());
    assert_eq!(p.x, 50.0);
    assert_eq!(p.height, 45.0);
    assert_eq!(p.y + p.height, 350.0);
    assert_eq!(p.duck_height, 27.0);
    assert!(p.grounded);
}

#[test]
fn idle_player_stays_clamped() {
    let c = cfg();
    let mut p = new_player(&c);
    for _ in 0..10 {
        update_player(&mut p, &c, false);
        assert_eq!(p.y, 305.0);
        assert_eq!(p.vy, 0.0);
        assert!(p.grounded);
    }
    assert_eq!(p.anim_timer, 10);
}

#[test]
fn jump_sets_impulse_and_clears_grounded() {
    let c = cfg();
    let mut p = new_player(&c);
    assert!(jump(&mut p, &c));
    assert_eq!(p.vy, -12.0);
    assert!(!p.grounded);
}

#[test]
fn jump_arc_velocity_rises_until_landing() {
    let c = cfg();
    let mut p = new_player(&c);
    jump(&mut p, &c);

    let mut prev_vy = p.vy;
    let mut ticks = 0;
    loop {
        update_player(&mut p, &c, false);
        ticks += 1;
        assert!(p.y + p.height <= c.canvas.ground_y);
        if p.grounded {
            break;
        }
        assert!(p.vy > prev_vy, "gravity must keep increasing vy");
        prev_vy = p.vy;
        assert!(ticks < 200, "player never landed");
    }

    assert_eq!(p.y, 305.0);
    assert_eq!(p.vy, 0.0);
    // 12 / 0.6 up, same down
    assert!((35..=45).contains(&ticks));
}

#[test]
fn cannot_jump_mid_air() {
    let c = cfg();
    let mut p = new_player(&c);
    jump(&mut p, &c);
    update_player(&mut p, &c, false);
    let vy = p.vy;
    assert!(!jump(&mut p, &c));
    assert_eq!(p.vy, vy);
}

#[test]
fn duck_swaps_height_and_keeps_feet_on_ground() {
    let c = cfg();
    let mut p = new_player(&c);
    update_player(&mut p, &c, true);
    assert!(p.ducking);
    assert_eq!(p.height, 27.0);
    assert_eq!(p.y, 323.0);

    update_player(&mut p, &c, false);
    assert!(!p.ducking);
    assert_eq!(p.height, 45.0);
    assert_eq!(p.y, 305.0);
}

#[test]
fn cannot_jump_while_ducking() {
    let c = cfg();
    let mut p = new_player(&c);
    update_player(&mut p, &c, true);
    assert!(!jump(&mut p, &c));
    assert!(p.grounded);
}

#[test]
fn duck_ignored_in_the_air() {
    let c = cfg();
    let mut p = new_player(&c);
    jump(&mut p, &c);
    update_player(&mut p, &c, true);
    assert!(!p.ducking);
    assert_eq!(p.height, 45.0);
}

#[test]
fn player_frame_tracks_pose() {
    let c = cfg();
    let mut p = new_player(&c);
    assert_eq!(player_frame(&p), 0);
    p.anim_timer = 8;
    assert_eq!(player_frame(&p), 1);
    p.anim_timer = 16;
    assert_eq!(player_frame(&p), 0);

    p.ducking = true;
    assert_eq!(player_frame(&p), 1);

    p.ducking = false;
    p.grounded = false;
    p.anim_timer = 8;
    assert_eq!(player_frame(&p), 0);
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

#[test]
fn obstacle_scrolls_by_speed() {
    let mut o = obstacle_at(1100.0);
    update_obstacle(&mut o, 6.0);
    assert_eq!(o.x, 1094.0);
    assert!(!o.marked_for_deletion);
}

#[test]
fn obstacle_flagged_once_fully_off_left() {
    let mut o = obstacle_at(-26.0); // right edge at 6
    update_obstacle(&mut o, 6.0);
    assert!(!o.marked_for_deletion); // right edge exactly 0
    update_obstacle(&mut o, 6.0);
    assert!(o.marked_for_deletion);
}

// ── Bull ──────────────────────────────────────────────────────────────────────

#[test]
fn inactive_bull_does_nothing() {
    let c = cfg();
    let mut bull = new_bull(&c);
    let mut obstacles = vec![obstacle_at(-150.0)];
    assert_eq!(update_bull(&mut bull, &mut obstacles, &c), 0);
    assert_eq!(bull.x, -150.0);
    assert_eq!(obstacles.len(), 1);
}

#[test]
fn bull_advances_and_holds_at_max() {
    let c = cfg();
    let mut bull = new_bull(&c);
    activate_bull(&mut bull, &c);
    let mut obstacles = Vec::new();

    update_bull(&mut bull, &mut obstacles, &c);
    assert_eq!(bull.x, -146.0);

    for _ in 0..200 {
        update_bull(&mut bull, &mut obstacles, &c);
        assert!(bull.x <= 250.0);
    }
    assert_eq!(bull.x, 250.0);
}

#[test]
fn bull_clears_overlapping_obstacles_only() {
    let c = cfg();
    let mut bull = new_bull(&c);
    activate_bull(&mut bull, &c);
    bull.x = 100.0;

    let mut obstacles = vec![obstacle_at(150.0), obstacle_at(600.0)];
    let cleared = update_bull(&mut bull, &mut obstacles, &c);

    assert_eq!(cleared, 1);
    assert_eq!(obstacles.len(), 1);
    assert_eq!(obstacles[0].x, 600.0);
}

#[test]
fn activate_rewinds_bull_to_start() {
    let c = cfg();
    let mut bull = new_bull(&c);
    bull.x = 250.0;
    activate_bull(&mut bull, &c);
    assert!(bull.active);
    assert_eq!(bull.x, -150.0);
}
