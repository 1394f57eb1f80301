//! Global min-max rescaling of population at risk to a `[0, 100]` score.

/// Upper bound of the vulnerability score scale.
pub const SCORE_SCALE: f64 = 100.0;

/// Rescales `values` linearly to `[0, SCORE_SCALE]` using the extremes of
/// the slice itself, returning the rescaled column together with the
/// `(min, max)` parameters that were fit.
///
/// This is a pure function — there is no persisted scaler object, so every
/// call refits from scratch. The parameters come from the *whole* slice,
/// which makes scores comparable across wards and dates within one
/// dataset snapshot.
///
/// Empty input returns an empty column and no parameters. A zero-range
/// input (every value identical) is degenerate: rather than dividing by
/// zero, every score falls back to `0.0`.
#[must_use]
pub fn rescale(values: &[f64]) -> (Vec<f64>, Option<(f64, f64)>) {
    let Some(min) = values.iter().copied().reduce(f64::min) else {
        return (Vec::new(), None);
    };
    let max = values.iter().copied().fold(min, f64::max);
    let range = max - min;

    if range == 0.0 {
        log::warn!(
            "Population at risk is constant across the dataset; vulnerability scores fall back to 0"
        );
        return (vec![0.0; values.len()], Some((min, max)));
    }

    let scaled = values
        .iter()
        .map(|value| (value - min) / range * SCORE_SCALE)
        .collect();
    (scaled, Some((min, max)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes_map_to_0_and_100() {
        let (scaled, range) = rescale(&[10.0, 55.0, 100.0]);
        assert!((scaled[0] - 0.0).abs() < 1e-9);
        assert!((scaled[1] - 50.0).abs() < 1e-9);
        assert!((scaled[2] - 100.0).abs() < 1e-9);
        assert_eq!(range, Some((10.0, 100.0)));
    }

    #[test]
    fn every_score_is_within_bounds() {
        let values: Vec<f64> = (0..50).map(|i| f64::from(i * 13 % 17) - 5.0).collect();
        let (scaled, _) = rescale(&values);
        assert!(scaled.iter().all(|s| (0.0..=SCORE_SCALE).contains(s)));
    }

    #[test]
    fn zero_range_falls_back_to_zero_scores() {
        let (scaled, range) = rescale(&[42.0, 42.0, 42.0]);
        assert_eq!(scaled, vec![0.0, 0.0, 0.0]);
        assert_eq!(range, Some((42.0, 42.0)));
        assert!(scaled.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn empty_input_has_no_parameters() {
        let (scaled, range) = rescale(&[]);
        assert!(scaled.is_empty());
        assert_eq!(range, None);
    }
}
