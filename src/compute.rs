/// Game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` and returns a brand-new `GameState`.  The private helpers work
/// on that fresh copy in place.

use std::time::Duration;

use crate::entities::{Bullet, GameState, Phase, Ship, Stats};
use crate::fleet;
use crate::geometry::{collide_any, group_collide};
use crate::scoreboard::play_button_rect;
use crate::settings::Settings;
use crate::sprite::SpriteSet;

/// Player intent, already decoded from whatever input device produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start or stop holding the left arrow.
    MoveLeft(bool),
    MoveRight(bool),
    Fire,
    /// Keyboard shortcut for the Play button.
    Play,
    /// Mouse click at a screen cell.
    Click { column: i32, row: i32 },
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the pre-start state: fleet on screen, ship centred, waiting for Play.
pub fn init_state(settings: Settings, sprites: SpriteSet) -> GameState {
    let ship = Ship::new(sprites.ship.width(), sprites.ship.height(), &settings);
    let stats = Stats::new(&settings);
    let mut state = GameState {
        settings,
        sprites,
        stats,
        ship,
        bullets: Vec::new(),
        aliens: Vec::new(),
        phase: Phase::PreStart,
        cursor_visible: true,
        frame: 0,
    };
    create_fleet(&mut state);
    state
}

// ── Input-driven state transitions ──────────────────────────────────────────

pub fn apply_command(state: &GameState, command: Command) -> GameState {
    match command {
        Command::MoveLeft(held) => {
            let mut next = state.clone();
            next.ship.moving_left = held;
            next
        }
        Command::MoveRight(held) => {
            let mut next = state.clone();
            next.ship.moving_right = held;
            next
        }
        Command::Fire => fire_bullet(state),
        Command::Play => start_game(state),
        Command::Click { column, row } => click(state, column, row),
    }
}

/// Fire a bullet from the ship, unless `bullet_allowed` are already in flight.
pub fn fire_bullet(state: &GameState) -> GameState {
    let mut next = state.clone();
    if next.phase == Phase::Active && next.bullets.len() < next.settings.bullet_allowed {
        next.bullets.push(Bullet::fired_from(&next.ship, &next.settings));
    }
    next
}

/// Start a new game if none is running.
pub fn start_game(state: &GameState) -> GameState {
    let mut next = state.clone();
    if next.game_active() {
        return next;
    }

    next.settings.initialize_dynamic_settings();
    next.stats.reset(&next.settings);
    next.phase = Phase::Active;

    next.aliens.clear();
    next.bullets.clear();
    create_fleet(&mut next);
    next.ship.center(&next.settings);

    next.cursor_visible = false;
    log::info!("new game started with {} ships", next.stats.ships_left);
    next
}

/// A click only matters while no game is running and it lands on Play.
pub fn click(state: &GameState, column: i32, row: i32) -> GameState {
    if play_button_rect(&state.settings).collide_point(column, row) {
        start_game(state)
    } else {
        state.clone()
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame that lasted `dt`.  Motion is per
/// frame; `dt` only drains the respawn pause.
pub fn tick(state: &GameState, dt: Duration) -> GameState {
    let mut next = state.clone();
    next.frame += 1;

    match next.phase {
        Phase::Active => {
            next.ship.update(&next.settings);
            update_bullets(&mut next);
            update_aliens(&mut next);
        }
        Phase::Respawning { remaining } => {
            let remaining = remaining.saturating_sub(dt);
            next.phase = if remaining.is_zero() {
                Phase::Active
            } else {
                Phase::Respawning { remaining }
            };
        }
        Phase::PreStart | Phase::GameOver => {}
    }

    next
}

// ── Steps (in place on the fresh copy) ──────────────────────────────────────

fn create_fleet(state: &mut GameState) {
    state.aliens = fleet::build_fleet(
        &state.settings,
        state.sprites.alien.width(),
        state.sprites.alien.height(),
        state.ship.rect.h,
    );
}

/// Move bullets, drop those gone past the top, then resolve hits.
fn update_bullets(state: &mut GameState) {
    for bullet in state.bullets.iter_mut() {
        bullet.update(&state.settings);
    }
    state.bullets.retain(|b| !b.is_off_screen());

    check_bullet_alien_collisions(state);
}

/// Each bullet is consumed by its first contact and takes with it every
/// alien it overlaps that frame; each of those aliens scores.
fn check_bullet_alien_collisions(state: &mut GameState) {
    let hits = group_collide(&state.bullets, &state.aliens);

    if !hits.is_empty() {
        let mut dead_bullets = vec![false; state.bullets.len()];
        let mut dead_aliens = vec![false; state.aliens.len()];
        for (bi, aliens) in &hits {
            dead_bullets[*bi] = true;
            for &ai in aliens {
                dead_aliens[ai] = true;
            }
            let gain = state
                .settings
                .dynamic
                .alien_points
                .saturating_mul(aliens.len() as u32);
            state.stats.score = state.stats.score.saturating_add(gain);
        }

        let mut flags = dead_bullets.into_iter();
        state.bullets.retain(|_| !flags.next().unwrap_or(false));
        let mut flags = dead_aliens.into_iter();
        state.aliens.retain(|_| !flags.next().unwrap_or(false));

        state.stats.check_high_score();
    }

    if state.aliens.is_empty() {
        state.bullets.clear();
        create_fleet(state);
        state.settings.increase_speed();
        state.stats.level += 1;
        log::info!(
            "wave cleared, level {} (aliens now worth {})",
            state.stats.level,
            state.settings.dynamic.alien_points
        );
    }
}

fn update_aliens(state: &mut GameState) {
    fleet::check_fleet_edges(&mut state.aliens, &mut state.settings);
    fleet::update_aliens(&mut state.aliens, &state.settings);

    if collide_any(&state.ship.rect, &state.aliens) {
        ship_hit(state);
        return;
    }

    if fleet::reached_bottom(&state.aliens, &state.settings) {
        ship_hit(state);
    }
}

/// Lose a ship: regroup and pause, or end the game when none are left.
fn ship_hit(state: &mut GameState) {
    if state.stats.ships_left > 0 {
        state.stats.ships_left -= 1;

        state.aliens.clear();
        state.bullets.clear();
        create_fleet(state);
        state.ship.center(&state.settings);

        let pause = state.settings.respawn_pause();
        state.phase = if pause.is_zero() {
            Phase::Active
        } else {
            Phase::Respawning { remaining: pause }
        };
        log::info!("ship lost, {} left", state.stats.ships_left);
    } else {
        state.phase = Phase::GameOver;
        state.cursor_visible = true;
        log::info!(
            "game over at level {} with score {}",
            state.stats.level,
            state.stats.score
        );
    }
}
