//! Public-facing crate root – re-exports + one-shot helper.
//!
//! ```
//! let line = sparkbars::sparkline(&[1.0, 5.0, 22.0, 13.0, 5.0]).unwrap();
//! assert_eq!(line, " ▂█▅▂");
//! ```

pub mod core;
pub mod render;

pub use crate::core::{
    bounds::Range,
    error::{ConfigError, ParseValuesError, RampError, Result, SparkError},
    ramp::{BRAILLE_BAR_SET, GlyphRamp, Level, NICE_BAR_SET},
    values::parse_values,
};

pub use crate::render::{
    Sparkline, SparklineBuilder, bucket, downsample, render, render_indices,
};

/// Block-ramp sparkline for `values`, one glyph per value.
pub fn sparkline(values: &[f64]) -> Result<String> {
    Sparkline::default().render(values)
}
