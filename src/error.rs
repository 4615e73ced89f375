use std::fmt;
use std::path::PathBuf;

/// Failures that can stop the game before the first frame.
///
/// Nothing in the per-frame logic returns an error: firing at the bullet cap
/// or clicking outside the Play button are silent no-ops.
#[derive(Debug)]
pub enum GameError {
    /// A sprite file could not be read.
    Asset { path: PathBuf, reason: String },
    /// A sprite file was read but contains no drawable rows.
    EmptySprite { path: PathBuf },
    /// The configuration file is missing (when named explicitly) or malformed.
    Config { path: PathBuf, reason: String },
    /// The terminal cannot fit a single alien row above the ship.
    ScreenTooSmall { width: u16, height: u16 },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asset { path, reason } => {
                write!(f, "failed to load sprite {}: {reason}", path.display())
            }
            Self::EmptySprite { path } => write!(f, "sprite {} is empty", path.display()),
            Self::Config { path, reason } => {
                write!(f, "invalid configuration {}: {reason}", path.display())
            }
            Self::ScreenTooSmall { width, height } => write!(
                f,
                "terminal too small: {width}x{height} cannot fit the alien fleet"
            ),
        }
    }
}

impl std::error::Error for GameError {}
