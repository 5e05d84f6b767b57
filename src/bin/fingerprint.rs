use std::f32::consts::TAU;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEventKind,
    },
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};
use log::{info, LevelFilter};

use pixel_runner::fingerprint::{Part, PartView, ScanView, Scanner};

const FRAME: Duration = Duration::from_millis(16);

const C_DARK_BG: Color = Color::Rgb { r: 22, g: 24, b: 38 };
const C_LIGHT_BG: Color = Color::Rgb { r: 245, g: 247, b: 255 };
const C_BASE: Color = Color::Rgb { r: 70, g: 76, b: 110 };
const C_COVER: Color = Color::Rgb { r: 90, g: 140, b: 255 };
const C_FACE: Color = Color::Rgb { r: 60, g: 90, b: 200 };
const C_TEXT: Color = Color::Rgb { r: 150, g: 160, b: 200 };

/// Canvas pixels per terminal row; 12px offsets in the timeline move a row.
const PX_PER_ROW: f32 = 12.0;

/// Half-widths (in columns) of the concentric ridges.
const RIDGES: [f32; 6] = [2.0, 4.0, 6.0, 8.0, 10.0, 12.0];

#[derive(Parser, Debug)]
#[command(name = "fingerprint", about = "Click the print three times to unlock")]
struct Cli {
    /// Write logs here; the terminal itself is taken by the animation.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ── Drawing ───────────────────────────────────────────────────────────────────

struct Frame {
    cols: u16,
    rows: u16,
    cx: f32,
    cy: f32,
}

impl Frame {
    fn plot<W: Write>(&self, out: &mut W, x: f32, y: f32, ch: char) -> std::io::Result<()> {
        let (col, row) = (x.round(), y.round());
        if col >= 0.0 && row >= 0.0 && col < self.cols as f32 && row < self.rows as f32 {
            out.queue(cursor::MoveTo(col as u16, row as u16))?;
            out.queue(Print(ch))?;
        }
        Ok(())
    }

    fn text<W: Write>(&self, out: &mut W, row: f32, msg: &str) -> std::io::Result<()> {
        let col = (self.cx - msg.chars().count() as f32 / 2.0).max(0.0);
        let row = row.round().max(0.0);
        out.queue(cursor::MoveTo(col as u16, row as u16))?;
        out.queue(Print(msg))?;
        Ok(())
    }
}

/// Stroke an elliptical arc, revealing only the `draw` range (in percent of
/// the arc length) like a dash offset on a vector path.
fn stroke_arc<W: Write>(
    out: &mut W,
    frame: &Frame,
    (rx, ry): (f32, f32),
    (from, sweep): (f32, f32),
    view: &PartView,
    y_offset: f32,
) -> std::io::Result<()> {
    let (start, end) = (view.draw.0 / 100.0, view.draw.1 / 100.0);
    if end <= start {
        return Ok(());
    }
    let samples = ((rx + ry) * sweep).ceil().max(8.0) as usize;
    for i in 0..=samples {
        let f = i as f32 / samples as f32;
        if f < start || f > end {
            continue;
        }
        let a = from + sweep * f;
        let x = frame.cx + rx * a.cos();
        let y = frame.cy + ry * a.sin() + y_offset;
        frame.plot(out, x, y, '•')?;
    }
    Ok(())
}

fn draw<W: Write>(out: &mut W, view: &ScanView) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let frame = Frame {
        cols,
        rows,
        cx: cols as f32 / 2.0,
        cy: rows as f32 / 2.0 - 2.0,
    };

    let bg = if view.light_background { C_LIGHT_BG } else { C_DARK_BG };
    out.queue(style::SetBackgroundColor(bg))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    // Ridges: open loops with the gap at the bottom, as on a fingertip.
    let ridge_arc = (TAU * 0.3, TAU * 0.9);
    for (part, color) in [(Part::Base, C_BASE), (Part::Cover, C_COVER)] {
        let v = view.part(part);
        if v.opacity < 0.5 {
            continue;
        }
        out.queue(style::SetForegroundColor(color))?;
        for rx in RIDGES {
            stroke_arc(out, &frame, (rx, rx / 2.0), ridge_arc, v, 0.0)?;
        }
    }

    // Face
    out.queue(style::SetForegroundColor(C_FACE))?;
    stroke_arc(out, &frame, (12.0, 6.0), (-TAU / 4.0, TAU), view.part(Part::Head), 0.0)?;
    for (part, dx) in [(Part::LeftEye, -4.0), (Part::RightEye, 4.0)] {
        let v = view.part(part);
        let eye = Frame {
            cx: frame.cx + dx,
            cy: frame.cy - 2.0,
            ..frame
        };
        stroke_arc(out, &eye, (0.0, 1.0), (-TAU / 4.0, TAU / 2.0), v, v.offset_y / PX_PER_ROW)?;
    }
    let smile = view.part(Part::Smile);
    stroke_arc(
        out,
        &frame,
        (14.0, 7.0),
        (0.0, TAU / 2.0),
        smile,
        smile.offset_y / PX_PER_ROW - 5.0,
    )?;

    // Captions share a line; whichever is opaque shows.
    out.queue(style::SetForegroundColor(C_TEXT))?;
    let caption_row = frame.cy + 9.0;
    let tooltip = view.part(Part::Tooltip);
    if tooltip.opacity >= 0.5 {
        frame.text(out, caption_row + tooltip.offset_y / PX_PER_ROW, "Scan your fingerprint")?;
    }
    let message = view.part(Part::Message);
    if message.opacity >= 0.5 {
        frame.text(out, caption_row + message.offset_y / PX_PER_ROW, "Welcome back!")?;
    }
    frame.text(out, rows as f32 - 1.0, "click / SPACE : scan   R : reset   Q : quit")?;

    out.queue(style::ResetColor)?;
    out.flush()
}

// ── Loop ──────────────────────────────────────────────────────────────────────

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let mut scanner = Scanner::new();
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();

        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    ..
                }) => match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('r') | KeyCode::Char('R') => scanner.reset(),
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        scanner.click();
                    }
                    _ => {}
                },
                Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                    scanner.click();
                }
                _ => {}
            }
        }

        let now = Instant::now();
        scanner.advance((now - last).as_secs_f32());
        last = now;

        draw(out, &scanner.view())?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("could not create log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(LevelFilter::Off);
        }
    }
    builder.init();

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode().context("could not enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(EnableMouseCapture)?;
    out.execute(cursor::Hide)?;

    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    info!("fingerprint demo started");
    let result = run(&mut out, &rx);

    let _ = out.execute(cursor::Show);
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("terminal I/O failed")
}
