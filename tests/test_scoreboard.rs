use std::time::Duration;

use alien_invasion::compute::init_state;
use alien_invasion::entities::Phase;
use alien_invasion::scoreboard::*;
use alien_invasion::settings::Settings;
use alien_invasion::sprite::SpriteSet;

#[test]
fn score_rounds_to_tens() {
    assert_eq!(format_score(0), "0");
    assert_eq!(format_score(4), "0");
    assert_eq!(format_score(5), "10");
    assert_eq!(format_score(75), "80");
}

#[test]
fn score_groups_thousands() {
    assert_eq!(format_score(999), "1,000");
    assert_eq!(format_score(1_234_567), "1,234,570");
    assert_eq!(format_score(100_000), "100,000");
}

#[test]
fn play_button_is_centred() {
    let rect = play_button_rect(&Settings::default());
    assert_eq!((rect.w, rect.h), (PLAY_BUTTON_WIDTH, PLAY_BUTTON_HEIGHT));
    assert_eq!((rect.centerx(), rect.centery()), (40, 12));
}

#[test]
fn hud_text() {
    let mut state = init_state(Settings::default(), SpriteSet::default());
    state.stats.score = 1234;
    state.stats.high_score = 5000;
    state.stats.level = 3;
    assert_eq!(score_text(&state), "1,230");
    assert_eq!(high_score_text(&state), "High: 5,000");
    assert_eq!(level_text(&state), "Level 3");
}

#[test]
fn respawn_text_only_while_paused() {
    let mut state = init_state(Settings::default(), SpriteSet::default());
    assert_eq!(respawn_text(&state), None);
    state.phase = Phase::Respawning {
        remaining: Duration::from_millis(1500),
    };
    assert_eq!(respawn_text(&state).as_deref(), Some("Ship lost - ready in 2"));
}
