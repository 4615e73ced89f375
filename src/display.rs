/// Rendering layer — all terminal output lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use alien_invasion::backdrop::Starfield;
use alien_invasion::entities::{GameState, Phase};
use alien_invasion::geometry::Rect;
use alien_invasion::scoreboard::{
    high_score_text, level_text, play_button_rect, respawn_text, score_text, PLAY_LABEL,
};
use alien_invasion::settings::{Rgb, Settings};
use alien_invasion::sprite::Sprite;

const C_STAR: Color = Color::Rgb { r: 190, g: 190, b: 200 };
const TITLE: &str = "ALIEN INVASION";
const HINT: &str = "← → : Move   SPACE : Fire   P / click Play : Start   Q : Quit";
const MSG_GAME_OVER: &str = "GAME OVER";

fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    starfield: &Starfield,
) -> std::io::Result<()> {
    let settings = &state.settings;

    out.queue(cursor::Hide)?;
    out.queue(style::SetBackgroundColor(rgb(settings.bg_color)))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_stars(out, settings, starfield)?;

    for alien in &state.aliens {
        draw_sprite(out, settings, &state.sprites.alien, &alien.rect, settings.alien_color)?;
    }
    for bullet in &state.bullets {
        draw_block(out, settings, &bullet.rect, settings.bullet_color)?;
    }
    draw_sprite(out, settings, &state.sprites.ship, &state.ship.rect, settings.ship_color)?;

    draw_hud(out, state)?;

    if let Some(msg) = respawn_text(state) {
        draw_centered(out, settings, settings.screen_height / 2, &msg, settings.text_color)?;
    }

    if !state.game_active() {
        draw_menu(out, state)?;
    }

    out.queue(style::ResetColor)?;
    if state.cursor_visible {
        // Rest the cursor on the Play label so it reads as a pointer.
        let button = play_button_rect(settings);
        out.queue(cursor::MoveTo(
            button.centerx().max(0) as u16,
            button.centery().max(0) as u16,
        ))?;
        out.queue(cursor::Show)?;
    }
    out.flush()?;
    Ok(())
}

// ── Clipped primitives ────────────────────────────────────────────────────────

/// Print `text` at `(x, y)`, dropping whatever falls outside the screen.
fn put<W: Write>(
    out: &mut W,
    settings: &Settings,
    x: i32,
    y: i32,
    text: &str,
) -> std::io::Result<()> {
    if y < 0 || y >= settings.screen_height {
        return Ok(());
    }
    let visible: String = text
        .chars()
        .enumerate()
        .filter(|(i, _)| {
            let col = x + *i as i32;
            col >= 0 && col < settings.screen_width
        })
        .map(|(_, ch)| ch)
        .collect();
    if visible.is_empty() {
        return Ok(());
    }
    out.queue(cursor::MoveTo(x.max(0) as u16, y as u16))?;
    out.queue(Print(visible))?;
    Ok(())
}

fn draw_centered<W: Write>(
    out: &mut W,
    settings: &Settings,
    y: i32,
    text: &str,
    color: Rgb,
) -> std::io::Result<()> {
    let x = settings.screen_width / 2 - text.chars().count() as i32 / 2;
    out.queue(style::SetForegroundColor(rgb(color)))?;
    put(out, settings, x, y, text)
}

// ── Scenery & entities ────────────────────────────────────────────────────────

fn draw_stars<W: Write>(
    out: &mut W,
    settings: &Settings,
    starfield: &Starfield,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_STAR))?;
    for star in &starfield.stars {
        put(out, settings, star.x, star.y, &star.glyph.to_string())?;
    }
    Ok(())
}

fn draw_sprite<W: Write>(
    out: &mut W,
    settings: &Settings,
    sprite: &Sprite,
    rect: &Rect,
    color: Rgb,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(rgb(color)))?;
    for (dy, row) in sprite.rows().iter().enumerate() {
        put(out, settings, rect.x, rect.y + dy as i32, row)?;
    }
    Ok(())
}

fn draw_block<W: Write>(
    out: &mut W,
    settings: &Settings,
    rect: &Rect,
    color: Rgb,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(rgb(color)))?;
    let row = "█".repeat(rect.w.max(0) as usize);
    for y in rect.top()..rect.bottom() {
        put(out, settings, rect.x, y, &row)?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let settings = &state.settings;
    out.queue(style::SetForegroundColor(rgb(settings.text_color)))?;

    // Remaining ships — left
    let ships = "▲".repeat(state.stats.ships_left as usize);
    put(out, settings, 1, 0, &ships)?;

    // High score — centre
    let high = high_score_text(state);
    put(out, settings, settings.screen_width / 2 - high.chars().count() as i32 / 2, 0, &high)?;

    // Score, with the level beneath it — right
    let score = score_text(state);
    put(out, settings, settings.screen_width - score.chars().count() as i32 - 1, 0, &score)?;
    let level = level_text(state);
    put(out, settings, settings.screen_width - level.chars().count() as i32 - 1, 1, &level)?;

    Ok(())
}

// ── Inactive overlay ──────────────────────────────────────────────────────────

fn draw_menu<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let settings = &state.settings;
    let button = play_button_rect(settings);

    let heading = match state.phase {
        Phase::GameOver => MSG_GAME_OVER,
        _ => TITLE,
    };
    draw_centered(out, settings, button.top() - 2, heading, settings.text_color)?;

    out.queue(style::SetBackgroundColor(rgb(settings.button_color)))?;
    out.queue(style::SetForegroundColor(rgb(settings.button_text_color)))?;
    let blank = " ".repeat(button.w.max(0) as usize);
    for y in button.top()..button.bottom() {
        put(out, settings, button.x, y, &blank)?;
    }
    let label_x = button.centerx() - PLAY_LABEL.len() as i32 / 2;
    put(out, settings, label_x, button.centery(), PLAY_LABEL)?;
    out.queue(style::SetBackgroundColor(rgb(settings.bg_color)))?;

    draw_centered(out, settings, button.bottom() + 1, HINT, settings.text_color)?;
    Ok(())
}
