/// Static starfield drawn behind the play area.

use rand::Rng;

const STAR_GLYPHS: [char; 3] = ['.', '·', '*'];

/// Roughly one star per this many cells.
const STAR_DENSITY: i32 = 60;

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x: i32,
    pub y: i32,
    pub glyph: char,
}

#[derive(Clone, Debug, Default)]
pub struct Starfield {
    pub stars: Vec<Star>,
}

impl Starfield {
    /// Scatter stars over a `width` x `height` screen.  All randomness comes
    /// through `rng` so a seeded generator gives the same sky every run.
    pub fn new(width: i32, height: i32, rng: &mut impl Rng) -> Self {
        if width <= 0 || height <= 0 {
            return Self::default();
        }
        let count = (width * height) / STAR_DENSITY;
        let stars = (0..count)
            .map(|_| Star {
                x: rng.gen_range(0..width),
                y: rng.gen_range(0..height),
                glyph: STAR_GLYPHS[rng.gen_range(0..STAR_GLYPHS.len())],
            })
            .collect();
        Self { stars }
    }
}
