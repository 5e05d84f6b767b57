/// Rendering layer.  All terminal I/O lives here.
///
/// `TermCanvas` is the drawing surface: canvas pixels are scaled onto a
/// half-block grid (two pixel rows per terminal row).  `TermUi` is the overlay
/// host, printing the HUD, banners and the modal as text on top.  No game
/// logic is performed; this module only translates state into terminal
/// commands.
use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use pixel_runner::render::Surface;
use pixel_runner::ui::{Modal, UiElement, UiHost};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PAPER: Color = Color::Rgb { r: 247, g: 247, b: 247 };
const C_INK: Color = Color::Rgb { r: 83, g: 83, b: 83 };
const C_HUD: Color = Color::Rgb { r: 83, g: 83, b: 83 };
const C_BANNER: Color = Color::Red;
const C_MODAL: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;

/// Row 0 holds the HUD; the canvas starts below it.
const CANVAS_TOP: u16 = 1;

// ── Canvas ───────────────────────────────────────────────────────────────────

pub struct TermCanvas {
    cols: u16,
    rows: u16,
    /// Logical canvas size in pixels, as the simulation sees it.
    canvas_w: f32,
    canvas_h: f32,
    /// One flag per half-block pixel: `cols` wide, `rows * 2` tall.
    ink: Vec<bool>,
}

impl TermCanvas {
    pub fn new(cols: u16, rows: u16, canvas_w: f32, canvas_h: f32) -> Self {
        let mut canvas = Self {
            cols: 0,
            rows: 0,
            canvas_w,
            canvas_h,
            ink: Vec::new(),
        };
        canvas.resize(cols, rows);
        canvas
    }

    /// Fit the canvas to a terminal of `cols` × `rows`, keeping the HUD row
    /// and the hint row free.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols.max(1);
        self.rows = rows.saturating_sub(2).max(1);
        self.ink = vec![false; self.px_w() * self.px_h()];
    }

    fn px_w(&self) -> usize {
        self.cols as usize
    }

    fn px_h(&self) -> usize {
        self.rows as usize * 2
    }

    fn sx(&self) -> f32 {
        self.px_w() as f32 / self.canvas_w
    }

    fn sy(&self) -> f32 {
        self.px_h() as f32 / self.canvas_h
    }

    fn set(&mut self, x: i32, y: i32) {
        if x >= 0 && y >= 0 && (x as usize) < self.px_w() && (y as usize) < self.px_h() {
            let w = self.px_w();
            self.ink[y as usize * w + x as usize] = true;
        }
    }

    fn get(&self, x: usize, y: usize) -> bool {
        self.ink[y * self.px_w() + x]
    }

    pub fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        out.queue(style::SetBackgroundColor(C_PAPER))?;
        out.queue(style::SetForegroundColor(C_INK))?;

        for row in 0..self.rows as usize {
            out.queue(cursor::MoveTo(0, CANVAS_TOP + row as u16))?;
            let line: String = (0..self.px_w())
                .map(|col| match (self.get(col, row * 2), self.get(col, row * 2 + 1)) {
                    (true, true) => '\u{2588}',  // █
                    (true, false) => '\u{2580}', // ▀
                    (false, true) => '\u{2584}', // ▄
                    (false, false) => ' ',
                })
                .collect();
            out.queue(Print(line))?;
        }

        out.queue(style::ResetColor)?;
        Ok(())
    }
}

impl Surface for TermCanvas {
    fn clear(&mut self) {
        self.ink.fill(false);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let x0 = (x * self.sx()).floor() as i32;
        let y0 = (y * self.sy()).floor() as i32;
        let x1 = ((x + w) * self.sx()).ceil() as i32;
        let y1 = ((y + h) * self.sy()).ceil() as i32;
        for py in y0..y1 {
            for px in x0..x1 {
                self.set(px, py);
            }
        }
    }

    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, _width: f32) {
        // Line width collapses to a single half-block pixel at terminal scale.
        let (ax, ay) = (x0 * self.sx(), y0 * self.sy());
        let (bx, by) = (x1 * self.sx(), y1 * self.sy());
        let steps = (bx - ax).abs().max((by - ay).abs()).ceil().max(1.0) as i32;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.set(
                (ax + (bx - ax) * t).floor() as i32,
                (ay + (by - ay) * t).floor() as i32,
            );
        }
    }
}

// ── Overlay host ─────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct TermUi {
    score: bool,
    game_over: bool,
    start_menu: bool,
    instructions: bool,
    score_text: String,
    modal: Option<Modal>,
}

impl UiHost for TermUi {
    fn set_visible(&mut self, element: UiElement, visible: bool) {
        match element {
            UiElement::Score => self.score = visible,
            UiElement::GameOver => self.game_over = visible,
            UiElement::StartMenu => self.start_menu = visible,
            UiElement::Instructions => self.instructions = visible,
        }
    }

    fn set_score_text(&mut self, text: &str) {
        self.score_text.clear();
        self.score_text.push_str(text);
    }

    fn show_modal(&mut self, modal: &Modal) {
        self.modal = Some(modal.clone());
    }

    fn hide_modal(&mut self) {
        self.modal = None;
    }
}

impl TermUi {
    pub fn render<W: Write>(&self, out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
        if self.score {
            let x = cols.saturating_sub(self.score_text.chars().count() as u16 + 1);
            out.queue(cursor::MoveTo(x, 0))?;
            out.queue(style::SetForegroundColor(C_HUD))?;
            out.queue(Print(&self.score_text))?;
        }

        if self.instructions {
            out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
            out.queue(style::SetForegroundColor(C_HINT))?;
            out.queue(Print("SPACE / ↑ : Jump   ↓ : Duck   Q : Quit"))?;
        }

        if self.start_menu {
            draw_box(
                out,
                cols,
                rows,
                &[
                    ("╔══════════════════╗", C_INK),
                    ("║   PIXEL RUNNER   ║", C_INK),
                    ("╚══════════════════╝", C_INK),
                    ("SPACE / ENTER - Start", C_HINT),
                ],
            )?;
        }

        if self.game_over {
            draw_box(
                out,
                cols,
                rows,
                &[
                    ("╔══════════════════╗", C_BANNER),
                    ("║    GAME  OVER    ║", C_BANNER),
                    ("╚══════════════════╝", C_BANNER),
                    ("SPACE - Play Again  Q - Quit", C_HINT),
                ],
            )?;
        }

        if let Some(modal) = &self.modal {
            let action = format!("[ {} ]", modal.action);
            let mut lines = vec![(modal.title, C_MODAL), ("", C_MODAL)];
            lines.extend(modal.body.iter().map(|&line| (line, C_MODAL)));
            lines.push(("", C_MODAL));
            lines.push((action.as_str(), C_HUD));
            draw_box(out, cols, rows, &lines)?;
        }

        out.queue(style::ResetColor)?;
        Ok(())
    }
}

fn draw_box<W: Write>(
    out: &mut W,
    cols: u16,
    rows: u16,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let cx = cols / 2;
    let start_row = (rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Present one complete frame: canvas first, overlays on top.
pub fn present<W: Write>(
    out: &mut W,
    canvas: &TermCanvas,
    ui: &TermUi,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    canvas.render(out)?;
    ui.render(out, cols, rows)?;

    // Park cursor in a harmless spot and flush
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}
