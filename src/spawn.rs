/// Obstacle spawning.  All randomness comes through the injected RNG.
use log::debug;
use rand::Rng;

use crate::config::Config;
use crate::entities::{Obstacle, ObstacleKind, PlacementRule};

/// Build an obstacle of `kind` just beyond the right edge, pushed further out
/// by a random jitter.
pub fn new_obstacle(kind: ObstacleKind, cfg: &Config, rng: &mut impl Rng) -> Obstacle {
    let placement = kind.placement();
    let height = placement.sprite.height();
    let ground = cfg.canvas.ground_y;

    let y = match placement.rule {
        PlacementRule::Ground => ground - height,
        PlacementRule::Altitude => {
            let altitudes = &cfg.obstacles.airborne_altitudes;
            ground - altitudes[rng.gen_range(0..altitudes.len())]
        }
    };

    Obstacle {
        kind,
        x: cfg.canvas.width + rng.gen::<f32>() * cfg.obstacles.spawn_jitter,
        y,
        width: placement.sprite.width(),
        height,
        marked_for_deletion: false,
        anim_timer: 0,
    }
}

/// Pick a variant from a uniform draw `r` in [0, 1).  Airborne only unlocks
/// once the raw score has passed the configured threshold.
pub fn choose_kind(r: f32, score: u64, cfg: &Config) -> ObstacleKind {
    let o = &cfg.obstacles;
    if score > o.airborne_after_score && r > o.airborne_threshold {
        ObstacleKind::Airborne
    } else if r > o.tall_threshold {
        ObstacleKind::TallGround
    } else {
        ObstacleKind::SmallGround
    }
}

/// Called once per tick.  Declines while the most recent obstacle is still
/// within a randomised minimum gap of the right edge.
pub fn spawn_obstacle(
    obstacles: &[Obstacle],
    score: u64,
    cfg: &Config,
    rng: &mut impl Rng,
) -> Option<Obstacle> {
    if let Some(last) = obstacles.last() {
        let gap = cfg.obstacles.min_gap + rng.gen::<f32>() * cfg.obstacles.gap_jitter;
        if cfg.canvas.width - last.x < gap {
            return None;
        }
    }

    let kind = choose_kind(rng.gen::<f32>(), score, cfg);
    let obstacle = new_obstacle(kind, cfg, rng);
    debug!("spawned {:?} at x={:.1} y={:.1}", kind, obstacle.x, obstacle.y);
    Some(obstacle)
}
