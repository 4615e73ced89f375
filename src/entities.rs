/// All game entity types: mostly data, plus the per-entity motion rules.

use std::time::Duration;

use crate::geometry::{Bounded, Rect};
use crate::settings::Settings;
use crate::sprite::SpriteSet;

// ── Player ship ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub rect: Rect,
    /// Exact horizontal position; `rect.x` is its truncation.
    pub x: f32,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    /// A ship of the given size, parked at the bottom centre of the screen.
    pub fn new(width: i32, height: i32, settings: &Settings) -> Self {
        let mut ship = Ship {
            rect: Rect::new(0, 0, width, height),
            x: 0.0,
            moving_left: false,
            moving_right: false,
        };
        ship.center(settings);
        ship
    }

    pub fn center(&mut self, settings: &Settings) {
        self.rect
            .set_midbottom(settings.screen_width / 2, settings.screen_height);
        self.x = self.rect.x as f32;
    }

    /// Step toward the held direction.  The bound check happens before the
    /// step, so the ship can overshoot an edge by less than one step.
    pub fn update(&mut self, settings: &Settings) {
        let speed = settings.dynamic.ship_speed;
        if self.moving_left && self.rect.left() > 0 {
            self.x -= speed;
        }
        if self.moving_right && self.rect.right() < settings.screen_width {
            self.x += speed;
        }
        self.rect.x = self.x as i32;
    }
}

impl Bounded for Ship {
    fn rect(&self) -> Rect {
        self.rect
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub rect: Rect,
    /// Exact vertical position; `rect.y` is its truncation.
    pub y: f32,
}

impl Bullet {
    /// A bullet leaving the nose of `ship`.
    pub fn fired_from(ship: &Ship, settings: &Settings) -> Self {
        let mut rect = Rect::new(0, 0, settings.bullet_width, settings.bullet_height);
        rect.set_midtop(ship.rect.centerx(), ship.rect.top());
        Bullet {
            rect,
            y: rect.y as f32,
        }
    }

    pub fn update(&mut self, settings: &Settings) {
        self.y -= settings.dynamic.bullet_speed;
        self.rect.y = self.y as i32;
    }

    /// Has the bullet left through the top of the screen?
    pub fn is_off_screen(&self) -> bool {
        self.rect.bottom() <= 0
    }
}

impl Bounded for Bullet {
    fn rect(&self) -> Rect {
        self.rect
    }
}

// ── Aliens ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    pub rect: Rect,
    /// Exact horizontal position; `rect.x` is its truncation.
    pub x: f32,
}

impl Alien {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Alien {
            rect: Rect::new(x, y, width, height),
            x: x as f32,
        }
    }

    /// Touching the left or right side of the screen?
    pub fn check_edges(&self, settings: &Settings) -> bool {
        self.rect.right() >= settings.screen_width || self.rect.left() <= 0
    }

    pub fn update(&mut self, settings: &Settings) {
        self.x += settings.dynamic.alien_speed * settings.dynamic.fleet_direction.sign();
        self.rect.x = self.x as i32;
    }
}

impl Bounded for Alien {
    fn rect(&self) -> Rect {
        self.rect
    }
}

// ── Session counters ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    pub ships_left: u32,
    pub score: u32,
    pub level: u32,
    /// Best score of this process; survives `reset`.
    pub high_score: u32,
}

impl Stats {
    pub fn new(settings: &Settings) -> Self {
        Stats {
            ships_left: settings.ship_limit,
            score: 0,
            level: 1,
            high_score: 0,
        }
    }

    pub fn reset(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }

    pub fn check_high_score(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }
}

// ── Life cycle ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    /// Waiting for the first click on Play.
    PreStart,
    Active,
    /// Frozen after losing a ship; play resumes when `remaining` runs out.
    Respawning { remaining: Duration },
    GameOver,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so the update functions can return a
/// new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub settings: Settings,
    pub sprites: SpriteSet,
    pub stats: Stats,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    pub phase: Phase,
    /// Whether the frontend should show its pointer.
    pub cursor_visible: bool,
    pub frame: u64,
}

impl GameState {
    /// True while a game is in progress, including the respawn pause.
    pub fn game_active(&self) -> bool {
        matches!(self.phase, Phase::Active | Phase::Respawning { .. })
    }
}
