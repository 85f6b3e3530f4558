use crate::error::StatError;
use crate::ols::ols;
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

/// Default maximum lag tested for Granger causality.
pub const DEFAULT_MAX_LAG: usize = 5;

/// F-test p-value for "`cause` Granger-causes `effect`" at a single lag.
///
/// Compares the restricted model (`effect` on its own `lag` lags plus an
/// intercept) against the unrestricted model that adds `lag` lags of
/// `cause`. Degenerate regressions yield NaN.
///
/// # Errors
/// Returns `InsufficientData` when the sample cannot support the
/// unrestricted model at this lag.
pub fn granger_pvalue(cause: &[f64], effect: &[f64], lag: usize) -> Result<f64, StatError> {
    if lag == 0 {
        return Err(StatError::Degenerate);
    }
    let n = cause.len().min(effect.len());
    let k_unrestricted = 2 * lag + 1;
    // One residual degree of freedom beyond the unrestricted parameters.
    let needed = lag + k_unrestricted + 1;
    if n < needed {
        return Err(StatError::InsufficientData { needed, got: n });
    }

    let y = effect[lag..n].to_vec();
    let mut effect_lags: Vec<Vec<f64>> = Vec::with_capacity(lag);
    let mut all_lags: Vec<Vec<f64>> = Vec::with_capacity(2 * lag);
    for j in 1..=lag {
        effect_lags.push(effect[lag - j..n - j].to_vec());
    }
    all_lags.extend(effect_lags.iter().cloned());
    for j in 1..=lag {
        all_lags.push(cause[lag - j..n - j].to_vec());
    }

    let restricted = match ols(&y, &effect_lags, true) {
        Ok(fit) => fit,
        Err(StatError::Degenerate) => return Ok(f64::NAN),
        Err(e) => return Err(e),
    };
    let unrestricted = match ols(&y, &all_lags, true) {
        Ok(fit) => fit,
        Err(StatError::Degenerate) => return Ok(f64::NAN),
        Err(e) => return Err(e),
    };

    let df1 = lag as f64;
    let df2 = unrestricted.df_resid;
    if unrestricted.ssr <= 0.0 || df2 <= 0.0 {
        return Ok(f64::NAN);
    }

    let f_stat = ((restricted.ssr - unrestricted.ssr) / df1) / (unrestricted.ssr / df2);
    let Ok(dist) = FisherSnedecor::new(df1, df2) else {
        return Ok(f64::NAN);
    };
    Ok(1.0 - dist.cdf(f_stat.max(0.0)))
}

/// Worst-case Granger causality p-value over lags `1..=max_lag`.
///
/// Reports the **maximum** per-lag p-value, i.e. the least significant
/// result, so a pair only screens as causal when every tested lag does.
/// NaN from any lag propagates.
///
/// # Errors
/// Returns `InsufficientData` when the sample cannot support the deepest
/// lag, and `Degenerate` when `max_lag` is zero.
pub fn granger_max_pvalue(cause: &[f64], effect: &[f64], max_lag: usize) -> Result<f64, StatError> {
    if max_lag == 0 {
        return Err(StatError::Degenerate);
    }

    let mut worst = 0.0f64;
    for lag in 1..=max_lag {
        let p = granger_pvalue(cause, effect, lag)?;
        if p.is_nan() {
            return Ok(f64::NAN);
        }
        worst = worst.max(p);
    }
    Ok(worst)
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

    fn noise(n: usize, seed: u64) -> Vec<f64> {
        let mut seed = seed;
        (0..n).map(|_| lcg(&mut seed)).collect()
    }

    /// `effect_t = cause_{t-1} + small noise`: a strong injected lag link.
    fn lagged_pair(n: usize) -> (Vec<f64>, Vec<f64>) {
        let cause = noise(n, 1234);
        let mut seed = 987u64;
        let mut effect = vec![0.0];
        for t in 1..n {
            effect.push(cause[t - 1] + 0.05 * lcg(&mut seed));
        }
        (cause, effect)
    }

    #[test]
    fn injected_lag_relationship_is_detected() {
        let (cause, effect) = lagged_pair(300);

        let p = granger_max_pvalue(&cause, &effect, DEFAULT_MAX_LAG).unwrap();

        assert!(p < 0.01, "worst-case p-value was {p}");
    }

    #[test]
    fn independent_series_are_not_causal() {
        let cause = noise(300, 2);
        let effect = noise(300, 77);

        let p = granger_max_pvalue(&cause, &effect, DEFAULT_MAX_LAG).unwrap();

        assert!(p > 0.05, "worst-case p-value was {p}");
    }

    #[test]
    fn max_pvalue_is_the_maximum_over_lags() {
        let (cause, effect) = lagged_pair(200);

        let per_lag: Vec<f64> = (1..=DEFAULT_MAX_LAG)
            .map(|lag| granger_pvalue(&cause, &effect, lag).unwrap())
            .collect();
        let expected = per_lag.iter().copied().fold(0.0f64, f64::max);
        let combined = granger_max_pvalue(&cause, &effect, DEFAULT_MAX_LAG).unwrap();

        assert!((combined - expected).abs() < 1e-15);
    }

    #[test]
    fn pvalues_are_probabilities() {
        let a = noise(120, 5);
        let b = noise(120, 6);

        for lag in 1..=DEFAULT_MAX_LAG {
            let p = granger_pvalue(&a, &b, lag).unwrap();
            assert!((0.0..=1.0).contains(&p), "lag {lag} p-value {p}");
        }
    }

    #[test]
    fn short_sample_is_an_error() {
        let a = noise(10, 1);
        let b = noise(10, 2);

        assert!(matches!(
            granger_max_pvalue(&a, &b, DEFAULT_MAX_LAG),
            Err(StatError::InsufficientData { .. })
        ));
    }
}
