/// Drawing side of the simulation.
///
/// `draw_scene` translates a `GameState` into primitive calls on a `Surface`;
/// it performs no game logic.  Backends (the terminal canvas, or a recorder in
/// tests) decide what those primitives mean.
use crate::entities::GameState;
use crate::physics::{bull_frame, player_frame};
use crate::sprites::{BULL, HORSE};

/// Ground line thickness in canvas pixels.
pub const GROUND_LINE_WIDTH: f32 = 2.0;

/// Minimal 2D drawing target addressed in canvas pixels.
pub trait Surface {
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, width: f32);
}

/// A recorded drawing primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    FillRect { x: f32, y: f32, w: f32, h: f32 },
    StrokeLine { x0: f32, y0: f32, x1: f32, y1: f32, width: f32 },
}

/// Recording surface, handy for headless inspection of a frame.
impl Surface for Vec<DrawOp> {
    fn clear(&mut self) {
        self.push(DrawOp::Clear);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.push(DrawOp::FillRect { x, y, w, h });
    }

    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, width: f32) {
        self.push(DrawOp::StrokeLine { x0, y0, x1, y1, width });
    }
}

pub fn draw_ground<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    let canvas = &state.config.canvas;
    surface.stroke_line(0.0, canvas.ground_y, canvas.width, canvas.ground_y, GROUND_LINE_WIDTH);
}

/// Redraw the full visible state: ground, player, obstacles, then the bull.
pub fn draw_scene<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    surface.clear();
    draw_ground(surface, state);

    let p = &state.player;
    HORSE.draw(surface, p.x, p.y, player_frame(p));

    for obstacle in &state.obstacles {
        obstacle
            .kind
            .placement()
            .sprite
            .draw(surface, obstacle.x, obstacle.y, 0);
    }

    if state.bull.active {
        BULL.draw(surface, state.bull.x, state.bull.y, bull_frame(&state.bull));
    }
}
