mod display;
mod keys;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use alien_invasion::backdrop::Starfield;
use alien_invasion::compute::{apply_command, init_state, tick, Command};
use alien_invasion::entities::GameState;
use alien_invasion::fleet::check_screen;
use alien_invasion::settings::Settings;
use alien_invasion::sprite::{Sprite, SpriteSet};

use keys::KeyTracker;

#[derive(Parser)]
#[command(name = "alien_invasion")]
#[command(version, about = "Shoot down the alien fleet before it lands")]
struct Cli {
    /// Settings file (TOML); defaults to the user config directory
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Text file with the ship's glyph art
    #[arg(long)]
    ship_sprite: Option<PathBuf>,

    /// Text file with an alien's glyph art
    #[arg(long)]
    alien_sprite: Option<PathBuf>,

    /// Seed for the starfield
    #[arg(long)]
    seed: Option<u64>,
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn load_sprites(cli: &Cli) -> Result<SpriteSet> {
    let mut sprites = SpriteSet::default();
    if let Some(path) = &cli.ship_sprite {
        sprites.ship = Sprite::load(path)?;
    }
    if let Some(path) = &cli.alien_sprite {
        sprites.alien = Sprite::load(path)?;
    }
    Ok(sprites)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Space and P act once per key press.  Movement follows the held-key
/// tracker, so arrows keep working alongside Space on terminals that never
/// report key releases.
fn game_loop<W: Write>(
    out: &mut W,
    mut state: GameState,
    starfield: &Starfield,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let frame_len = state.settings.frame_duration();
    let mut keys = KeyTracker::default();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        loop {
            let ev = match rx.try_recv() {
                Ok(ev) => ev,
                Err(TryRecvError::Empty) => break,
                // Input thread is gone: the terminal closed.
                Err(TryRecvError::Disconnected) => return Ok(()),
            };
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => match kind {
                    KeyEventKind::Press => {
                        keys.press(code, frame);
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                return Ok(());
                            }
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                return Ok(());
                            }
                            KeyCode::Char(' ') => state = apply_command(&state, Command::Fire),
                            KeyCode::Char('p') | KeyCode::Char('P') => {
                                state = apply_command(&state, Command::Play)
                            }
                            _ => {}
                        }
                    }
                    KeyEventKind::Repeat => keys.press(code, frame),
                    KeyEventKind::Release => keys.release(&code),
                },
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    let click = Command::Click {
                        column: column as i32,
                        row: row as i32,
                    };
                    state = apply_command(&state, click);
                }
                _ => {}
            }
        }

        // ── Movement intent from held keys ────────────────────────────────────
        let left = keys.left_held(frame);
        if left != state.ship.moving_left {
            state = apply_command(&state, Command::MoveLeft(left));
        }
        let right = keys.right_held(frame);
        if right != state.ship.moving_right {
            state = apply_command(&state, Command::MoveRight(right));
        }

        state = tick(&state, frame_len);
        display::render(out, &state, starfield)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_len {
            thread::sleep(frame_len - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(fps) = cli.fps {
        settings.fps = fps.clamp(1, 240);
    }
    let sprites = load_sprites(&cli)?;

    let (width, height) = terminal::size().context("cannot read terminal size")?;
    let settings = settings.with_screen(width, height);
    check_screen(
        &settings,
        sprites.alien.width(),
        sprites.alien.height(),
        sprites.ship.height(),
    )?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let starfield = Starfield::new(settings.screen_width, settings.screen_height, &mut rng);
    let state = init_state(settings, sprites);
    log::info!("screen {width}x{height}, {} aliens in the first fleet", state.aliens.len());

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, state, &starfield, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("terminal I/O failed")
}
