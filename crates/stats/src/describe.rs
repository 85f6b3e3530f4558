/// Arithmetic mean; NaN on empty input.
#[must_use]
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Sample standard deviation (n-1 denominator); NaN below 2 points.
#[must_use]
pub fn std_dev(xs: &[f64]) -> f64 {
    let n = xs.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(xs);
    let variance = xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (n as f64 - 1.0);
    variance.sqrt()
}

/// Pearson correlation coefficient between two series.
///
/// NaN when either series has fewer than 2 points or zero variance.
#[must_use]
pub fn correlation(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return f64::NAN;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;

    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator < f64::EPSILON {
        return f64::NAN;
    }

    covariance / denominator
}

/// Z-score of the most recent spread observation.
///
/// Defined as exactly `0.0` when the spread's standard deviation is zero,
/// NaN on empty input.
#[must_use]
pub fn zscore_last(spread: &[f64]) -> f64 {
    let Some(last) = spread.last() else {
        return f64::NAN;
    };
    let sd = std_dev(spread);
    if sd == 0.0 {
        return 0.0;
    }
    (last - mean(spread)) / sd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_std_of_known_values() {
        let xs = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

        assert!((mean(&xs) - 5.0).abs() < 1e-12);
        // Sample variance of the set above is 32/7.
        assert!((std_dev(&xs) - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn mean_of_empty_is_nan() {
        assert!(mean(&[]).is_nan());
        assert!(std_dev(&[]).is_nan());
        assert!(std_dev(&[1.0]).is_nan());
    }

    #[test]
    fn correlation_is_bounded() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = vec![2.0, 1.5, 3.5, 3.0, 6.0];

        let r = correlation(&x, &y);

        assert!((-1.0..=1.0).contains(&r), "correlation was {r}");
    }

    #[test]
    fn perfectly_linear_series_correlate_at_one() {
        let x = vec![1.0, 2.0, 3.0, 4.0];
        let y: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();
        let y_neg: Vec<f64> = x.iter().map(|v| -v).collect();

        assert!((correlation(&x, &y) - 1.0).abs() < 1e-12);
        assert!((correlation(&x, &y_neg) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn constant_series_correlation_is_nan() {
        let constant = vec![3.0; 10];
        let varying: Vec<f64> = (0..10).map(f64::from).collect();

        assert!(correlation(&constant, &varying).is_nan());
        assert!(correlation(&varying, &constant).is_nan());
    }

    #[test]
    fn correlation_below_two_points_is_nan() {
        assert!(correlation(&[1.0], &[2.0]).is_nan());
        assert!(correlation(&[], &[]).is_nan());
    }

    #[test]
    fn zscore_is_zero_when_std_is_zero() {
        let flat = vec![1.5; 6];

        assert_eq!(zscore_last(&flat), 0.0);
    }

    #[test]
    fn zscore_uses_last_observation() {
        let spread = vec![0.0, 0.0, 0.0, 0.0, 2.0];

        let z = zscore_last(&spread);
        let expected = (2.0 - mean(&spread)) / std_dev(&spread);

        assert!((z - expected).abs() < 1e-12);
        assert!(z > 0.0);
    }

    #[test]
    fn zscore_of_empty_is_nan() {
        assert!(zscore_last(&[]).is_nan());
    }
}
