/// Text shown in the heads-up display, and the Play button.

use crate::entities::{GameState, Phase};
use crate::geometry::Rect;
use crate::settings::Settings;

pub const PLAY_BUTTON_WIDTH: i32 = 12;
pub const PLAY_BUTTON_HEIGHT: i32 = 3;
pub const PLAY_LABEL: &str = "Play";

/// Centred on the screen.
pub fn play_button_rect(settings: &Settings) -> Rect {
    let mut rect = Rect::new(0, 0, PLAY_BUTTON_WIDTH, PLAY_BUTTON_HEIGHT);
    rect.set_center(settings.screen_width / 2, settings.screen_height / 2);
    rect
}

/// Round to the nearest ten (halves away from zero) and group thousands
/// with commas: `1234567` → `"1,234,570"`.
pub fn format_score(score: u32) -> String {
    let rounded = (score as u64 + 5) / 10 * 10;
    let digits = rounded.to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn score_text(state: &GameState) -> String {
    format_score(state.stats.score)
}

pub fn high_score_text(state: &GameState) -> String {
    format!("High: {}", format_score(state.stats.high_score))
}

pub fn level_text(state: &GameState) -> String {
    format!("Level {}", state.stats.level)
}

/// Overlay line for the life-loss pause, e.g. `"Ship lost - ready in 2"`.
pub fn respawn_text(state: &GameState) -> Option<String> {
    match &state.phase {
        Phase::Respawning { remaining } => {
            let secs = remaining.as_secs_f32().ceil() as u32;
            Some(format!("Ship lost - ready in {secs}"))
        }
        _ => None,
    }
}
