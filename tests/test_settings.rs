use std::time::Duration;

use alien_invasion::error::GameError;
use alien_invasion::settings::*;

use approx::assert_relative_eq;

#[test]
fn defaults_match_baseline() {
    let s = Settings::default();
    assert_eq!(s.ship_limit, 3);
    assert_eq!(s.bullet_allowed, 3);
    assert_eq!(s.fleet_drop_speed, 1);
    assert_eq!(s.dynamic.alien_points, 50);
    assert_eq!(s.dynamic.fleet_direction, FleetDirection::Right);
    assert_eq!(s.respawn_pause(), Duration::from_secs(3));
}

#[test]
fn increase_speed_scales_dynamic_subset() {
    let mut s = Settings::default();
    s.increase_speed();
    s.increase_speed();
    assert_relative_eq!(s.dynamic.ship_speed, 1.21, epsilon = 1e-5);
    assert_relative_eq!(s.dynamic.bullet_speed, 1.21, epsilon = 1e-5);
    assert_relative_eq!(s.dynamic.alien_speed, 0.3025, epsilon = 1e-5);
    // 50 → 75 → 112 (truncated)
    assert_eq!(s.dynamic.alien_points, 112);
}

#[test]
fn increase_speed_leaves_permanent_settings_alone() {
    let mut s = Settings::default();
    s.increase_speed();
    assert_relative_eq!(s.speedup_scale, 1.1);
    assert_relative_eq!(s.score_scale, 1.5);
    assert_eq!(s.baseline, Baseline::default());
}

#[test]
fn initialize_restores_baseline() {
    let mut s = Settings::default();
    s.increase_speed();
    s.dynamic.fleet_direction = FleetDirection::Left;
    s.initialize_dynamic_settings();
    assert_eq!(s.dynamic, DynamicSettings::default());
}

#[test]
fn toml_overrides_only_given_keys() {
    let s = Settings::from_toml_str(
        r#"
        bullet_allowed = 5
        bg_color = [0, 0, 0]

        [baseline]
        alien_points = 10
        "#,
    )
    .unwrap();
    assert_eq!(s.bullet_allowed, 5);
    assert_eq!(s.bg_color, (0, 0, 0));
    assert_eq!(s.dynamic.alien_points, 10);
    assert_eq!(s.ship_limit, 3);
    assert_relative_eq!(s.dynamic.alien_speed, 0.25);
}

#[test]
fn malformed_toml_is_rejected() {
    assert!(Settings::from_toml_str("bullet_allowed = \"many\"").is_err());
}

#[test]
fn explicit_missing_file_is_an_error() {
    let path = std::env::temp_dir().join("alien_invasion_no_such_config.toml");
    let err = Settings::load(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, GameError::Config { .. }));
}

#[test]
fn load_reads_file() {
    let path = std::env::temp_dir().join(format!(
        "alien_invasion_config_{}.toml",
        std::process::id()
    ));
    std::fs::write(&path, "ship_limit = 1\nfps = 60\n").unwrap();
    let s = Settings::load(Some(path.as_path())).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(s.ship_limit, 1);
    assert_eq!(s.fps, 60);
}

#[test]
fn frame_duration_follows_fps() {
    let mut s = Settings::default();
    s.fps = 50;
    assert_eq!(s.frame_duration(), Duration::from_millis(20));
}

#[test]
fn with_screen_sets_dimensions() {
    let s = Settings::default().with_screen(132, 43);
    assert_eq!((s.screen_width, s.screen_height), (132, 43));
}
