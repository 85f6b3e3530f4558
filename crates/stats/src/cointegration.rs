use crate::error::StatError;
use crate::ols::ols;
use crate::stationarity::{adf_with_deterministic, Deterministic};

/// Two-step Engle-Granger cointegration test statistic.
///
/// Step one regresses `a` on `b` with an intercept; step two runs an
/// ADF test (no deterministic term) on the residuals. Returns only the
/// test statistic; a degenerate first-step regression yields NaN.
///
/// # Errors
/// Returns `InsufficientData` below 12 observations.
pub fn engle_granger_statistic(a: &[f64], b: &[f64]) -> Result<f64, StatError> {
    let n = a.len().min(b.len());
    if n < 12 {
        return Err(StatError::InsufficientData { needed: 12, got: n });
    }

    let fit = match ols(&a[..n], &[b[..n].to_vec()], true) {
        Ok(fit) => fit,
        Err(StatError::Degenerate) => return Ok(f64::NAN),
        Err(e) => return Err(e),
    };

    adf_with_deterministic(&fit.residuals, Deterministic::None)
}

/// Optimal hedge ratio: the slope of an OLS regression of `a` on `b`
/// with an intercept (the intercept is discarded).
///
/// Degenerate regressions (constant `b`) yield NaN.
///
/// # Errors
/// Returns `InsufficientData` below 3 observations.
pub fn hedge_ratio(a: &[f64], b: &[f64]) -> Result<f64, StatError> {
    let n = a.len().min(b.len());
    if n < 3 {
        return Err(StatError::InsufficientData { needed: 3, got: n });
    }

    match ols(&a[..n], &[b[..n].to_vec()], true) {
        Ok(fit) => Ok(fit.params[1]),
        Err(StatError::Degenerate) => Ok(f64::NAN),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lcg(seed: &mut u64) -> f64 {
        *seed = seed
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((*seed >> 33) as f64 / f64::from(1u32 << 31)) - 0.5
    }

    fn random_walk(n: usize, seed: u64) -> Vec<f64> {
        let mut seed = seed;
        let mut y = vec![100.0];
        for _ in 1..n {
            let e = lcg(&mut seed);
            y.push(y.last().unwrap() + e);
        }
        y
    }

    #[test]
    fn cointegrated_pair_has_strongly_negative_statistic() {
        // a = 2*b + stationary noise, so the residual is stationary.
        let b = random_walk(400, 3);
        let mut seed = 17u64;
        let a: Vec<f64> = b.iter().map(|v| 2.0 * v + 0.5 * lcg(&mut seed)).collect();

        let stat = engle_granger_statistic(&a, &b).unwrap();

        assert!(stat < -5.0, "Engle-Granger statistic was {stat}");
    }

    #[test]
    fn independent_walks_score_closer_to_zero() {
        let a = random_walk(400, 5);
        let b = random_walk(400, 23);

        let coupled_b = random_walk(400, 3);
        let mut seed = 17u64;
        let coupled_a: Vec<f64> = coupled_b
            .iter()
            .map(|v| 2.0 * v + 0.5 * lcg(&mut seed))
            .collect();

        let independent = engle_granger_statistic(&a, &b).unwrap();
        let coupled = engle_granger_statistic(&coupled_a, &coupled_b).unwrap();

        assert!(
            independent > coupled + 2.0,
            "independent {independent} vs coupled {coupled}"
        );
    }

    #[test]
    fn engle_granger_below_minimum_sample_is_an_error() {
        let short = vec![1.0; 5];

        assert!(matches!(
            engle_granger_statistic(&short, &short),
            Err(StatError::InsufficientData { .. })
        ));
    }

    #[test]
    fn hedge_ratio_recovers_known_slope() {
        let b = random_walk(300, 9);
        let mut seed = 31u64;
        let a: Vec<f64> = b.iter().map(|v| 1.5 * v + 0.1 * lcg(&mut seed)).collect();

        let ratio = hedge_ratio(&a, &b).unwrap();

        assert!((ratio - 1.5).abs() < 0.1, "hedge ratio was {ratio}");
    }

    #[test]
    fn hedge_ratio_against_constant_series_is_nan() {
        let a: Vec<f64> = (0..50).map(f64::from).collect();
        let b = vec![7.0; 50];

        assert!(hedge_ratio(&a, &b).unwrap().is_nan());
    }
}
