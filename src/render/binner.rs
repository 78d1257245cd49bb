//! Index binning so long series fit a fixed glyph width.
//!
//! Bucket `i` of `width` covers `[i * n / width, (i + 1) * n / width)` and is
//! replaced by its mean. When `n > width` every bucket holds at least one
//! sample, so no bucket is ever empty.

use tracing::debug;

/// Bucket mean that stays finite for finite samples.
#[allow(clippy::cast_precision_loss)]
fn mean(slice: &[f64]) -> f64 {
    let len = slice.len() as f64;
    let sum: f64 = slice.iter().sum();
    if !sum.is_infinite() {
        return sum / len;
    }

    // partial sums overflowed: scale before adding, then keep the result
    // inside the bucket's own extrema
    let (lo, hi) = slice
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    slice.iter().map(|v| v / len).sum::<f64>().clamp(lo, hi)
}

/// Shrink `values` to at most `width` samples, keeping their order.
///
/// Series that already fit are returned unchanged.
#[must_use]
pub fn downsample(values: &[f64], width: usize) -> Vec<f64> {
    let n = values.len();
    if width == 0 {
        return Vec::new();
    }
    if n <= width {
        return values.to_vec();
    }

    debug!(from = n, to = width, "downsampling series");

    (0..width)
        .map(|i| {
            let start = i * n / width;
            let end = (i + 1) * n / width;
            mean(&values[start..end])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_already() {
        let v = [1.0, 2.0, 3.0];
        assert_eq!(downsample(&v, 3), v.to_vec());
        assert_eq!(downsample(&v, 10), v.to_vec());
        assert!(downsample(&[], 4).is_empty());
    }

    #[test]
    fn zero_width() {
        assert!(downsample(&[1.0, 2.0], 0).is_empty());
    }

    #[test]
    fn even_buckets_average() {
        let v = [1.0, 3.0, 5.0, 7.0, 9.0, 11.0];
        assert_eq!(downsample(&v, 3), vec![2.0, 6.0, 10.0]);
        assert_eq!(downsample(&v, 1), vec![6.0]);
    }

    #[test]
    fn uneven_buckets_cover_everything() {
        // 7 into 3: [0,2) [2,4) [4,7)
        let v = [0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0];
        assert_eq!(downsample(&v, 3), vec![1.0, 5.0, 10.0]);
    }

    #[test]
    fn huge_values_do_not_overflow() {
        assert_eq!(downsample(&[f64::MAX, f64::MAX], 1), vec![f64::MAX]);
        assert_eq!(
            downsample(&[f64::MAX, f64::MAX, 0.0, 0.0], 2),
            vec![f64::MAX, 0.0]
        );
        assert_eq!(
            downsample(&[-f64::MAX, -f64::MAX, -f64::MAX], 1),
            vec![-f64::MAX]
        );
        assert!(downsample(&[f64::MAX, f64::MAX, f64::MAX], 1)[0].is_finite());
    }
}
