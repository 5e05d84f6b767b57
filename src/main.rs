mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;

use pixel_runner::compute::{self, init_state};
use pixel_runner::config::Config;
use pixel_runner::entities::GameState;
use pixel_runner::input::{apply, map_key, CheatSequence, HeldKeys, Intent};
use pixel_runner::render::draw_scene;
use pixel_runner::ui::{sync_ui, UiSync};

use display::{TermCanvas, TermUi};

#[derive(Parser, Debug)]
#[command(name = "pixel_runner", about = "Side-scrolling pixel runner for the terminal")]
struct Cli {
    /// JSON file overriding the default tuning.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed the obstacle RNG for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs here; the terminal itself is taken by the game.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match log_file {
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
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: one-shot keys (jump, start, restart, acknowledge) become
/// intents the moment they arrive.  The duck key is a held state: `HeldKeys`
/// records the frame each key was last seen, so terminals without release
/// events still report Down as held while it auto-repeats.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
) -> std::io::Result<()> {
    let cfg = Arc::clone(&state.config);
    let frame_time = Duration::from_secs_f64(1.0 / f64::from(cfg.fps));

    let (mut cols, mut rows) = terminal::size()?;
    let mut canvas = TermCanvas::new(cols, rows, cfg.canvas.width, cfg.canvas.height);
    let mut ui = TermUi::default();
    let mut sync = UiSync::default();

    let mut held = HeldKeys::default();
    let mut cheat = CheatSequence::new(&cfg.cheat_code);
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => match kind {
                    KeyEventKind::Press => {
                        held.press(code, frame);
                        if let Some(intent) = map_key(code, modifiers, state) {
                            if intent == Intent::Quit {
                                return Ok(());
                            }
                            *state = apply(state, intent);
                        }
                        if cheat.feed(code) {
                            *state = compute::activate_bull(state);
                        }
                    }
                    KeyEventKind::Repeat => held.press(code, frame),
                    KeyEventKind::Release => held.release(code),
                },
                Event::Resize(c, r) => {
                    cols = c;
                    rows = r;
                    canvas.resize(c, r);
                }
                _ => {}
            }
        }

        *state = compute::set_duck(state, held.is_held(KeyCode::Down, frame));

        if compute::wants_next_frame(state) {
            *state = compute::tick(state, rng);
        }

        draw_scene(&mut canvas, state);
        sync_ui(&mut ui, state, &mut sync);
        display::present(out, &canvas, &ui, cols, rows)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!("starting with seed {:?}", cli.seed);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("could not enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release events so ducking ends the moment Down is let go.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let mut state = init_state(Arc::new(config));
    let result = game_loop(&mut out, &mut state, &rx, &mut rng);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("exiting at score {}", compute::displayed_score(&state));
    result.context("terminal I/O failed")
}
