//! A collection of constants.

/// Every ramp has nine glyphs: zero to one in eighth steps
pub const RAMP_LEVELS: usize = 9;

/// Highest bucket index a value can land in
pub const MAX_LEVEL: usize = RAMP_LEVELS - 1;

/// The "half" glyph, used for single values and flat series
pub const HALF_LEVEL: usize = 4;

/// Half of one eighth.
///
/// Added before scaling so each bucket is centred on its eighth:
/// `[0, 1/16)` is zero, `[1/16, 3/16)` is one eighth and so on.
pub const HALF_STEP: f64 = 1.0 / 16.0;

/// Unicode minus sign (U+2212), accepted in place of `-` when parsing
pub const UNICODE_MINUS: char = '\u{2212}';
