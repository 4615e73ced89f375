/// Fleet manager: lays out the alien grid and steers it as one body.

use crate::entities::Alien;
use crate::error::GameError;
use crate::settings::Settings;

/// Grid size for the current screen: `(rows, columns)`.
///
/// One alien width of margin on each side, one alien width between columns
/// and one alien height between rows, with three alien heights plus the ship
/// kept clear at the bottom.  Two rows are dropped from what would fit to
/// give the player room; at least one row is always kept.  A sprite with no
/// area yields no grid.
pub fn fleet_dimensions(settings: &Settings, alien_w: i32, alien_h: i32, ship_h: i32) -> (i32, i32) {
    if alien_w <= 0 || alien_h <= 0 {
        return (0, 0);
    }
    let available_x = settings.screen_width - 2 * alien_w;
    let number_aliens_x = available_x.div_euclid(2 * alien_w);

    let available_y = settings.screen_height - 3 * alien_h - ship_h;
    let number_rows = available_y.div_euclid(2 * alien_h);

    ((number_rows - 2).max(1), number_aliens_x + 1)
}

/// Reject screens where not even a single row of aliens fits above the ship.
pub fn check_screen(settings: &Settings, alien_w: i32, alien_h: i32, ship_h: i32) -> Result<(), GameError> {
    let available_y = settings.screen_height - 3 * alien_h - ship_h;
    if alien_w <= 0
        || alien_h <= 0
        || settings.screen_width < 3 * alien_w
        || available_y < 2 * alien_h
    {
        return Err(GameError::ScreenTooSmall {
            width: settings.screen_width.max(0) as u16,
            height: settings.screen_height.max(0) as u16,
        });
    }
    Ok(())
}

/// Build a fresh fleet.  Row 0 sits one alien height below the top and
/// column 0 one alien width in from the left.
pub fn build_fleet(settings: &Settings, alien_w: i32, alien_h: i32, ship_h: i32) -> Vec<Alien> {
    let (rows, cols) = fleet_dimensions(settings, alien_w, alien_h, ship_h);

    let mut aliens = Vec::with_capacity((rows * cols).max(0) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let x = alien_w + 2 * alien_w * col;
            let y = alien_h + 2 * alien_h * row;
            aliens.push(Alien::new(x, y, alien_w, alien_h));
        }
    }

    log::debug!("built fleet of {} aliens ({rows}x{cols})", aliens.len());
    aliens
}

/// Drop the whole fleet and reverse its heading if any alien touches a side.
/// Applied at most once per call however many aliens are at the edge.
/// Returns whether the fleet turned.
pub fn check_fleet_edges(aliens: &mut [Alien], settings: &mut Settings) -> bool {
    if !aliens.iter().any(|a| a.check_edges(settings)) {
        return false;
    }
    change_fleet_direction(aliens, settings);
    true
}

pub fn change_fleet_direction(aliens: &mut [Alien], settings: &mut Settings) {
    for alien in aliens.iter_mut() {
        alien.rect.y += settings.fleet_drop_speed;
    }
    settings.dynamic.fleet_direction = settings.dynamic.fleet_direction.reversed();
    log::debug!("fleet turned {:?}", settings.dynamic.fleet_direction);
}

/// Move every alien one step along the fleet heading.
pub fn update_aliens(aliens: &mut [Alien], settings: &Settings) {
    for alien in aliens.iter_mut() {
        alien.update(settings);
    }
}

/// Has any alien reached the bottom of the screen?
pub fn reached_bottom(aliens: &[Alien], settings: &Settings) -> bool {
    aliens
        .iter()
        .any(|a| a.rect.bottom() >= settings.screen_height)
}
