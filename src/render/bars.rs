//! Value sequence to ramp glyphs, one glyph per value.
//!
//! ### Workflow
//! 1. One pass over the input finds `min` and `max` and rejects NaN or
//!    infinities before anything is allocated.
//! 2. Every value is normalised to `percent = (v - min) / (max - min)`.
//! 3. [`bucket`] rounds `percent` to the nearest eighth, giving an index
//!    into the nine-glyph ramp.
//!
//! A single value, or a series where every value is equal, has no relative
//! magnitude; all of its values get the middle ("half") glyph.

use tracing::{debug, trace};

use crate::core::{
    bounds::Range,
    constants::{HALF_LEVEL, HALF_STEP, MAX_LEVEL},
    error::Result,
    ramp::GlyphRamp,
};

/// Bucket index for a normalised value.
///
/// `[0, 1/16)` maps to 0, `[1/16, 3/16)` to 1, ..., `[15/16, 1]` to 8.
/// Out-of-range input is clamped to `0..=8`.
#[inline]
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn bucket(percent: f64) -> usize {
    let scaled = ((percent + HALF_STEP) * MAX_LEVEL as f64).floor();
    scaled.clamp(0.0, MAX_LEVEL as f64) as usize
}

/// Ramp indices (`0..=8`) for `values`, same length and order.
///
/// Fails only on a non-finite value; nothing is returned in that case.
pub fn render_indices(values: &[f64]) -> Result<Vec<usize>> {
    trace!(len = values.len(), "rendering bar indices");

    let Some(range) = Range::of(values)? else {
        return Ok(Vec::new());
    };

    // single point: no relative magnitude
    if values.len() == 1 {
        return Ok(vec![HALF_LEVEL]);
    }

    if range.is_flat() {
        debug!(
            len = values.len(),
            value = range.min,
            "flat series, using the half glyph"
        );
        return Ok(vec![HALF_LEVEL; values.len()]);
    }

    Ok(values.iter().map(|&v| bucket(range.percent(v))).collect())
}

/// Render `values` with `ramp`, one glyph per value.
///
/// * empty input gives an empty result
/// * a single value gives `ramp[Level::Half]`
/// * otherwise the minimum gets `ramp[Level::Zero]`, the maximum gets
///   `ramp[Level::One]` and everything else is rounded to the nearest eighth
///
/// [`Level::Half`]: crate::core::ramp::Level::Half
/// [`Level::Zero`]: crate::core::ramp::Level::Zero
/// [`Level::One`]: crate::core::ramp::Level::One
pub fn render(values: &[f64], ramp: &GlyphRamp) -> Result<Vec<char>> {
    Ok(render_indices(values)?
        .into_iter()
        .map(|i| ramp[i])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        error::SparkError,
        ramp::{BRAILLE_BAR_SET, Level, NICE_BAR_SET},
    };

    fn nice(values: &[f64]) -> String {
        render(values, &NICE_BAR_SET).unwrap().into_iter().collect()
    }

    #[test]
    fn bucket_boundaries_sit_on_odd_sixteenths() {
        assert_eq!(bucket(0.0), 0);
        assert_eq!(bucket(0.062), 0);
        assert_eq!(bucket(1.0 / 16.0), 1);
        assert_eq!(bucket(3.0 / 16.0 - 1e-9), 1);
        assert_eq!(bucket(3.0 / 16.0), 2);
        assert_eq!(bucket(0.5), 4);
        assert_eq!(bucket(15.0 / 16.0 - 1e-9), 7);
        assert_eq!(bucket(15.0 / 16.0), 8);
        assert_eq!(bucket(1.0), 8);
    }

    #[test]
    fn bucket_clamps_strays() {
        assert_eq!(bucket(-0.5), 0);
        assert_eq!(bucket(1.5), 8);
    }

    #[test]
    fn empty_and_single() {
        assert!(render(&[], &NICE_BAR_SET).unwrap().is_empty());
        assert_eq!(render(&[42.0], &NICE_BAR_SET).unwrap(), vec!['▄']);
        assert_eq!(render(&[-1e300], &BRAILLE_BAR_SET).unwrap(), vec!['⣤']);
    }

    #[test]
    fn linear_spread_hits_every_bucket() {
        let values: Vec<f64> = (0..9).map(f64::from).collect();
        assert_eq!(nice(&values), " ▁▂▃▄▅▆▇█");
        assert_eq!(render_indices(&values).unwrap(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn flat_series_uses_half() {
        assert_eq!(nice(&[5.0, 5.0, 5.0]), "▄▄▄");
        assert_eq!(render_indices(&[0.0, 0.0]).unwrap(), vec![4, 4]);
    }

    #[test]
    fn unordered_extrema() {
        assert_eq!(
            render(&[10.0, 1.0, 5.0], &NICE_BAR_SET).unwrap(),
            vec!['█', ' ', '▄']
        );
    }

    #[test]
    fn braille_ramp_keeps_its_duplicates() {
        let values: Vec<f64> = (0..9).map(f64::from).collect();
        let got: String = render(&values, &BRAILLE_BAR_SET)
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(got, " ⣀⣀⣤⣤⣶⣶⣿⣿");
    }

    #[test]
    fn custom_ramp_is_used_as_is() {
        let digits: GlyphRamp = "012345678".parse().unwrap();
        let got: String = render(&[0.0, 0.25, 0.5, 0.75, 1.0], &digits)
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(got, "02468");
    }

    #[test]
    fn negative_values() {
        let got = render(&[-8.0, -4.0, 0.0], &NICE_BAR_SET).unwrap();
        assert_eq!(
            got,
            vec![
                NICE_BAR_SET[Level::Zero],
                NICE_BAR_SET[Level::Half],
                NICE_BAR_SET[Level::One]
            ]
        );
    }

    #[test]
    fn non_finite_fails_atomically() {
        assert_eq!(
            render(&[1.0, f64::INFINITY, 3.0], &NICE_BAR_SET),
            Err(SparkError::NonFinite {
                index: 1,
                value: f64::INFINITY
            })
        );
        // singletons are checked too
        assert!(render(&[f64::NAN], &NICE_BAR_SET).is_err());
    }
}
