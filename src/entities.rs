/// Game entity types: plain data, no simulation logic.
use std::sync::Arc;

use crate::collision::Rect;
use crate::config::Config;
use crate::sprites::{Sprite, CACTUS_LARGE_SPRITE, CACTUS_SMALL_SPRITE, VULTURE_SPRITE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Start menu shown; nothing simulated yet.
    Menu,
    Playing,
    /// Terminal until an explicit restart.
    GameOver,
}

// ── Obstacles ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObstacleKind {
    SmallGround,
    TallGround,
    Airborne,
}

/// How an obstacle's vertical position is chosen at spawn time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementRule {
    /// Flush on the ground line.
    Ground,
    /// One of the configured altitudes above the ground, picked per instance.
    Altitude,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub sprite: Sprite,
    pub rule: PlacementRule,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [
        ObstacleKind::SmallGround,
        ObstacleKind::TallGround,
        ObstacleKind::Airborne,
    ];

    pub fn placement(self) -> Placement {
        match self {
            ObstacleKind::SmallGround => Placement {
                sprite: CACTUS_SMALL_SPRITE,
                rule: PlacementRule::Ground,
            },
            ObstacleKind::TallGround => Placement {
                sprite: CACTUS_LARGE_SPRITE,
                rule: PlacementRule::Ground,
            },
            ObstacleKind::Airborne => Placement {
                sprite: VULTURE_SPRITE,
                rule: PlacementRule::Altitude,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Set once the obstacle has scrolled fully off the left edge.
    pub marked_for_deletion: bool,
    pub anim_timer: u32,
}

impl Obstacle {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vy: f32,
    pub grounded: bool,
    pub ducking: bool,
    pub width: f32,
    /// Active collision height; swaps between `normal_height` and `duck_height`.
    pub height: f32,
    pub normal_height: f32,
    pub duck_height: f32,
    pub anim_timer: u32,
}

impl Player {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Bull (power-up actor) ────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bull {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub active: bool,
    pub anim_timer: u32,
}

impl Bull {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Master game state ────────────────────────────────────────────────────────

/// The entire session.  Cloneable so pure update functions can return a new
/// copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub bull: Bull,
    /// Ticks left on the bull power-up; zero when inactive.
    pub bull_timer: u32,
    /// Raw counter, one point per tick. Displayed as `score / divisor`.
    pub score: u64,
    pub frame: u64,
    pub speed: f32,
    pub status: GameStatus,
    /// Set only while the milestone overlay is up.
    pub paused: bool,
    /// Latched for the life of the process; survives resets.
    pub milestone_shown: bool,
    /// Live state of the duck key, consumed by the next tick.
    pub duck_held: bool,
    pub config: Arc<Config>,
}
