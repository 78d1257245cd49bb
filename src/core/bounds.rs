//! Extrema of a value sequence.

use crate::core::error::{Result, SparkError};

/// Inclusive extrema of a non-empty sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Exact extrema in one pass.
    ///
    /// * `Ok(None)` for an empty slice.
    /// * The first NaN or infinity aborts the scan with
    ///   [`SparkError::NonFinite`] carrying its index.
    pub fn of(values: &[f64]) -> Result<Option<Self>> {
        let Some((&first, rest)) = values.split_first() else {
            return Ok(None);
        };
        check_finite(0, first)?;

        let (mut low, mut high) = (first, first);
        for (off, &v) in rest.iter().enumerate() {
            check_finite(off + 1, v)?;
            if v < low {
                low = v;
            } else if v > high {
                high = v;
            }
        }
        Ok(Some(Self {
            min: low,
            max: high,
        }))
    }

    #[inline]
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// All values equal.
    #[inline]
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.span() == 0.0
    }

    /// Position of `v` between `min` and `max`, in `[0, 1]` for values
    /// inside the range. NaN on a flat range (0 / 0); check
    /// [`Range::is_flat`] first.
    #[inline]
    #[must_use]
    pub fn percent(&self, v: f64) -> f64 {
        let span = self.span();
        if span.is_finite() {
            (v - self.min) / span
        } else {
            // finite ends more than f64::MAX apart
            (v * 0.5 - self.min * 0.5) / (self.max * 0.5 - self.min * 0.5)
        }
    }
}

#[inline]
fn check_finite(index: usize, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SparkError::NonFinite { index, value })
    }
}
