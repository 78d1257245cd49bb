//! Nine-glyph ramps, from "zero" to "one" in eighth steps.

use std::{
    fmt::{self, Write as _},
    ops::Index,
    str::FromStr,
};

use crate::core::{constants::RAMP_LEVELS, error::RampError};

/// Named slots of a ramp.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Level {
    Zero,
    Eighth,
    Quarter,
    ThreeEighths,
    Half,
    FiveEighths,
    ThreeQuarters,
    SevenEighths,
    One,
}

impl Level {
    pub const ALL: [Level; RAMP_LEVELS] = [
        Level::Zero,
        Level::Eighth,
        Level::Quarter,
        Level::ThreeEighths,
        Level::Half,
        Level::FiveEighths,
        Level::ThreeQuarters,
        Level::SevenEighths,
        Level::One,
    ];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// `None` for anything past [`Level::One`].
    #[inline]
    #[must_use]
    pub const fn from_index(i: usize) -> Option<Self> {
        if i < RAMP_LEVELS {
            Some(Self::ALL[i])
        } else {
            None
        }
    }
}

/// Ordered set of nine glyphs. Any nine characters are accepted as-is,
/// duplicates included.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct GlyphRamp([char; RAMP_LEVELS]);

/// Unicode block elements, increasing in height.
pub const NICE_BAR_SET: GlyphRamp =
    GlyphRamp::new([' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█']);

/// Braille dot density. Neighbouring slots share a glyph, which leaves five
/// visible levels over nine indices.
pub const BRAILLE_BAR_SET: GlyphRamp =
    GlyphRamp::new([' ', '⣀', '⣀', '⣤', '⣤', '⣶', '⣶', '⣿', '⣿']);

impl GlyphRamp {
    #[inline]
    #[must_use]
    pub const fn new(glyphs: [char; RAMP_LEVELS]) -> Self {
        Self(glyphs)
    }

    /// Predefined ramps by name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self, RampError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "block" | "nice" => Ok(NICE_BAR_SET),
            "braille" | "dots" => Ok(BRAILLE_BAR_SET),
            _ => Err(RampError::UnknownName(name.to_owned())),
        }
    }

    /// Glyph for bucket `i`, or `None` past the top of the ramp.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize) -> Option<char> {
        self.0.get(i).copied()
    }

    #[inline]
    #[must_use]
    pub const fn glyphs(&self) -> &[char; RAMP_LEVELS] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        NICE_BAR_SET
    }
}

impl Index<usize> for GlyphRamp {
    type Output = char;

    #[inline]
    fn index(&self, i: usize) -> &char {
        &self.0[i]
    }
}

impl Index<Level> for GlyphRamp {
    type Output = char;

    #[inline]
    fn index(&self, level: Level) -> &char {
        &self.0[level.index()]
    }
}

impl From<[char; RAMP_LEVELS]> for GlyphRamp {
    #[inline]
    fn from(glyphs: [char; RAMP_LEVELS]) -> Self {
        Self(glyphs)
    }
}

impl TryFrom<&str> for GlyphRamp {
    type Error = RampError;

    /// Exactly nine `char`s, lowest first.
    fn try_from(s: &str) -> Result<Self, RampError> {
        let mut glyphs = [' '; RAMP_LEVELS];
        let mut n = 0;
        for c in s.chars() {
            if n < RAMP_LEVELS {
                glyphs[n] = c;
            }
            n += 1;
        }
        if n == RAMP_LEVELS {
            Ok(Self(glyphs))
        } else {
            Err(RampError::WrongLength(n))
        }
    }
}

impl FromStr for GlyphRamp {
    type Err = RampError;

    fn from_str(s: &str) -> Result<Self, RampError> {
        Self::try_from(s)
    }
}

impl fmt::Display for GlyphRamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0 {
            f.write_char(c)?;
        }
        Ok(())
    }
}
