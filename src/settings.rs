use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::GameError;

const DEFAULT_RESPAWN_PAUSE_SECS: f32 = 3.0;
const MAX_RESPAWN_PAUSE_SECS: f32 = 60.0;

/// RGB triple; written as `[r, g, b]` in the config file.
pub type Rgb = (u8, u8, u8);

/// Horizontal heading shared by every alien in the fleet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FleetDirection {
    #[default]
    Right,
    Left,
}

impl FleetDirection {
    pub fn sign(self) -> f32 {
        match self {
            FleetDirection::Right => 1.0,
            FleetDirection::Left => -1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            FleetDirection::Right => FleetDirection::Left,
            FleetDirection::Left => FleetDirection::Right,
        }
    }
}

/// Starting values of the settings that change while a game is played.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Baseline {
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    pub alien_points: u32,
}

impl Default for Baseline {
    fn default() -> Self {
        Self {
            ship_speed: 1.0,
            bullet_speed: 1.0,
            alien_speed: 0.25,
            alien_points: 50,
        }
    }
}

/// The resettable subset: speeds in cells per frame, points per alien, and
/// the fleet heading.
#[derive(Clone, Debug, PartialEq)]
pub struct DynamicSettings {
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    pub alien_points: u32,
    pub fleet_direction: FleetDirection,
}

impl From<&Baseline> for DynamicSettings {
    fn from(b: &Baseline) -> Self {
        Self {
            ship_speed: b.ship_speed,
            bullet_speed: b.bullet_speed,
            alien_speed: b.alien_speed,
            alien_points: b.alien_points,
            fleet_direction: FleetDirection::Right,
        }
    }
}

impl Default for DynamicSettings {
    fn default() -> Self {
        Self::from(&Baseline::default())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Taken from the terminal at startup, never from the file.
    #[serde(skip)]
    pub screen_width: i32,
    #[serde(skip)]
    pub screen_height: i32,

    pub bg_color: Rgb,
    pub text_color: Rgb,
    pub ship_color: Rgb,
    pub alien_color: Rgb,
    pub bullet_color: Rgb,
    pub button_color: Rgb,
    pub button_text_color: Rgb,

    pub ship_limit: u32,

    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_allowed: usize,

    pub fleet_drop_speed: i32,

    /// How quickly the game speeds up after each wave.
    pub speedup_scale: f32,
    /// How quickly alien point values grow after each wave.
    pub score_scale: f32,

    /// Length of the freeze after losing a ship.
    pub respawn_pause_secs: f32,
    pub fps: u32,

    pub baseline: Baseline,
    #[serde(skip)]
    pub dynamic: DynamicSettings,
}

impl Default for Settings {
    fn default() -> Self {
        let baseline = Baseline::default();
        Self {
            screen_width: 80,
            screen_height: 24,
            bg_color: (230, 230, 230),
            text_color: (30, 30, 30),
            ship_color: (20, 40, 140),
            alien_color: (30, 130, 40),
            bullet_color: (60, 60, 60),
            button_color: (0, 135, 0),
            button_text_color: (255, 255, 255),
            ship_limit: 3,
            bullet_width: 1,
            bullet_height: 1,
            bullet_allowed: 3,
            fleet_drop_speed: 1,
            speedup_scale: 1.1,
            score_scale: 1.5,
            respawn_pause_secs: DEFAULT_RESPAWN_PAUSE_SECS,
            fps: 30,
            dynamic: DynamicSettings::from(&baseline),
            baseline,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or from the default location when `path`
    /// is `None`.  A missing default file yields the defaults; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, GameError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::config_path(), false),
        };

        if !path.exists() {
            if explicit {
                return Err(GameError::Config {
                    path,
                    reason: "file not found".to_string(),
                });
            }
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path).map_err(|e| GameError::Config {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let settings = Self::from_toml_str(&text).map_err(|reason| GameError::Config {
            path: path.clone(),
            reason,
        })?;
        log::info!("loaded config from {}", path.display());
        Ok(settings)
    }

    /// Parse a TOML document; absent keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, String> {
        let mut settings: Settings = toml::from_str(text).map_err(|e| e.to_string())?;
        settings.sanitize();
        settings.initialize_dynamic_settings();
        Ok(settings)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("alien_invasion")
            .join("config.toml")
    }

    pub fn with_screen(mut self, width: u16, height: u16) -> Self {
        self.screen_width = width as i32;
        self.screen_height = height as i32;
        self
    }

    /// Reset speeds, points and fleet heading for a new game.
    pub fn initialize_dynamic_settings(&mut self) {
        self.dynamic = DynamicSettings::from(&self.baseline);
    }

    /// Speed everything up and raise the alien point value.
    pub fn increase_speed(&mut self) {
        let d = &mut self.dynamic;
        d.ship_speed *= self.speedup_scale;
        d.bullet_speed *= self.speedup_scale;
        d.alien_speed *= self.speedup_scale;
        d.alien_points = (d.alien_points as f32 * self.score_scale) as u32;
    }

    pub fn respawn_pause(&self) -> Duration {
        Duration::try_from_secs_f32(self.respawn_pause_secs.max(0.0))
            .unwrap_or(Duration::from_secs_f32(DEFAULT_RESPAWN_PAUSE_SECS))
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }

    fn sanitize(&mut self) {
        if self.fps == 0 || self.fps > 240 {
            log::warn!("fps {} out of range, clamping to 1..=240", self.fps);
            self.fps = self.fps.clamp(1, 240);
        }
        if self.bullet_width < 1 || self.bullet_height < 1 {
            log::warn!("bullet size must be at least 1x1");
            self.bullet_width = self.bullet_width.max(1);
            self.bullet_height = self.bullet_height.max(1);
        }
        if self.speedup_scale < 1.0 || self.score_scale < 1.0 {
            log::warn!("scale factors below 1.0 would slow the game down; raising to 1.0");
            self.speedup_scale = self.speedup_scale.max(1.0);
            self.score_scale = self.score_scale.max(1.0);
        }
        if !self.respawn_pause_secs.is_finite() || self.respawn_pause_secs < 0.0 {
            log::warn!(
                "respawn pause {} is not a duration, using {DEFAULT_RESPAWN_PAUSE_SECS}",
                self.respawn_pause_secs
            );
            self.respawn_pause_secs = DEFAULT_RESPAWN_PAUSE_SECS;
        } else if self.respawn_pause_secs > MAX_RESPAWN_PAUSE_SECS {
            log::warn!("respawn pause capped at {MAX_RESPAWN_PAUSE_SECS}s");
            self.respawn_pause_secs = MAX_RESPAWN_PAUSE_SECS;
        }
    }
}
