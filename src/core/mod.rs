//! Aggregates the data layer: ramps, ranges, parsing and errors.

pub mod bounds;
pub mod constants;
pub mod error;
pub mod ramp;
pub mod values;

// re-export frequently-used items for convenience
pub use bounds::Range;
pub use constants::{HALF_LEVEL, HALF_STEP, MAX_LEVEL, RAMP_LEVELS};
pub use error::{ConfigError, ParseValuesError, RampError, Result, SparkError};
pub use ramp::{BRAILLE_BAR_SET, GlyphRamp, Level, NICE_BAR_SET};
pub use values::parse_values;
