//! Reusable sparkline settings + fluent builder.

use crate::{
    core::{
        bounds::Range,
        error::{ConfigError, Result},
        ramp::GlyphRamp,
    },
    render::{bars::render, binner::downsample},
};

/// Immutable rendering parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sparkline {
    pub ramp: GlyphRamp,
    /// Longer series are averaged down to this many glyphs.
    pub max_width: Option<usize>,
}

impl Sparkline {
    #[inline]
    #[must_use]
    pub fn builder() -> SparklineBuilder {
        SparklineBuilder::new()
    }

    /// One glyph per value, or `max_width` glyphs for longer series.
    pub fn render_chars(&self, values: &[f64]) -> Result<Vec<char>> {
        match self.max_width {
            Some(w) if values.len() > w => {
                // reject NaN before it is averaged away from its index
                Range::of(values)?;
                render(&downsample(values, w), &self.ramp)
            }
            _ => render(values, &self.ramp),
        }
    }

    pub fn render(&self, values: &[f64]) -> Result<String> {
        Ok(self.render_chars(values)?.into_iter().collect())
    }
}

/// Fluent builder; validation happens in `build`.
#[derive(Debug, Default)]
pub struct SparklineBuilder {
    ramp: Option<GlyphRamp>,
    max_width: Option<usize>,
}

impl SparklineBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn ramp(mut self, r: impl Into<GlyphRamp>) -> Self {
        self.ramp = Some(r.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn max_width(mut self, w: usize) -> Self {
        self.max_width = Some(w);
        self
    }
    #[inline]
    #[must_use]
    pub fn max_width_opt(mut self, w: Option<usize>) -> Self {
        if let Some(w) = w {
            self.max_width = Some(w);
        }
        self
    }

    pub fn build(self) -> std::result::Result<Sparkline, ConfigError> {
        if self.max_width == Some(0) {
            return Err(ConfigError::ZeroWidth);
        }
        Ok(Sparkline {
            ramp: self.ramp.unwrap_or_default(),
            max_width: self.max_width,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<SparklineBuilder> for std::result::Result<Sparkline, ConfigError> {
    fn from(b: SparklineBuilder) -> Self {
        b.build()
    }
}
