/// Glyph-art sprites.  A sprite is a block of text; its bounding box is the
/// widest row by the number of rows.

use std::fs;
use std::path::Path;

use crate::error::GameError;

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    rows: Vec<String>,
}

impl Sprite {
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        Self {
            rows: rows.iter().map(|r| r.as_ref().to_string()).collect(),
        }
    }

    /// Read a sprite from a text file.  Trailing blank lines are dropped.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let text = fs::read_to_string(path).map_err(|e| GameError::Asset {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut rows: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
        while rows.last().is_some_and(|r| r.is_empty()) {
            rows.pop();
        }
        if rows.is_empty() {
            return Err(GameError::EmptySprite {
                path: path.to_path_buf(),
            });
        }

        log::debug!("loaded sprite {} ({} rows)", path.display(), rows.len());
        Ok(Self { rows })
    }

    /// The player's ship.
    pub fn default_ship() -> Self {
        Self::from_rows(&[" ▲ ", "/█\\"])
    }

    pub fn default_alien() -> Self {
        Self::from_rows(&["<▼>", "[_]"])
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn width(&self) -> i32 {
        self.rows
            .iter()
            .map(|r| r.chars().count())
            .max()
            .unwrap_or(0) as i32
    }

    pub fn height(&self) -> i32 {
        self.rows.len() as i32
    }
}

/// The pair of sprites a game needs.
#[derive(Clone, Debug, PartialEq)]
pub struct SpriteSet {
    pub ship: Sprite,
    pub alien: Sprite,
}

impl Default for SpriteSet {
    fn default() -> Self {
        Self {
            ship: Sprite::default_ship(),
            alien: Sprite::default_alien(),
        }
    }
}
