use crate::describe::mean;
use crate::error::StatError;
use crate::ols::{ols, OlsFit};

/// Deterministic terms included in a Dickey-Fuller regression.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Deterministic {
    Constant,
    None,
}

/// Half-life of mean reversion for a spread series.
///
/// Regresses `Δspread_t` on `spread_{t-1}` with an intercept. A
/// non-negative slope means the series is not mean-reverting and the
/// result is NaN, as is any degenerate regression; otherwise the
/// half-life is `-ln(2) / slope`.
///
/// # Errors
/// Returns `InsufficientData` below 3 raw spread points (2 usable rows).
pub fn half_life(spread: &[f64]) -> Result<f64, StatError> {
    if spread.len() < 3 {
        return Err(StatError::InsufficientData {
            needed: 3,
            got: spread.len(),
        });
    }

    let lag = spread[..spread.len() - 1].to_vec();
    let delta: Vec<f64> = spread.windows(2).map(|w| w[1] - w[0]).collect();

    let fit = match ols(&delta, &[lag], true) {
        Ok(fit) => fit,
        Err(StatError::Degenerate) => return Ok(f64::NAN),
        Err(e) => return Err(e),
    };

    let beta = fit.params[1];
    if beta >= 0.0 {
        return Ok(f64::NAN);
    }
    Ok(-(2.0f64.ln()) / beta)
}

/// Augmented Dickey-Fuller test statistic with a constant term.
///
/// The lag order is selected by AIC over `0..=⌊12·(n/100)^¼⌋` on a fixed
/// trimmed sample, then the statistic is refit on the full usable sample
/// at the chosen lag. Returns only the tau statistic; degenerate inputs
/// (e.g. a constant series) yield NaN.
///
/// # Errors
/// Returns `InsufficientData` below 10 observations.
pub fn adf_statistic(series: &[f64]) -> Result<f64, StatError> {
    adf_with_deterministic(series, Deterministic::Constant)
}

pub(crate) fn adf_with_deterministic(
    series: &[f64],
    det: Deterministic,
) -> Result<f64, StatError> {
    let n = series.len();
    if n < 10 {
        return Err(StatError::InsufficientData { needed: 10, got: n });
    }

    let schwert = (12.0 * (n as f64 / 100.0).powf(0.25)).floor() as usize;
    let max_lag = schwert.min(n / 2 - 3);

    // Lag selection on a sample trimmed to the deepest candidate lag, so
    // every candidate sees the same observations.
    let selection_start = max_lag + 1;
    let mut best: Option<(f64, usize)> = None;
    for lag in 0..=max_lag {
        let fit = match df_regression(series, lag, selection_start, det) {
            Ok(fit) => fit,
            Err(StatError::Degenerate) => continue,
            Err(e) => return Err(e),
        };
        let nobs = fit.nobs as f64;
        let k = fit.params.len() as f64;
        let aic = nobs * (fit.ssr / nobs).ln() + 2.0 * k;
        if best.map_or(true, |(best_aic, _)| aic < best_aic) {
            best = Some((aic, lag));
        }
    }

    let Some((_, lag)) = best else {
        return Ok(f64::NAN);
    };

    let fit = match df_regression(series, lag, lag + 1, det) {
        Ok(fit) => fit,
        Err(StatError::Degenerate) => return Ok(f64::NAN),
        Err(e) => return Err(e),
    };
    let level_index = match det {
        Deterministic::Constant => 1,
        Deterministic::None => 0,
    };
    Ok(fit.t_stat(level_index))
}

/// Dickey-Fuller regression: `Δy_t` on `y_{t-1}` and `lag` lagged
/// differences, for `t` in `start..n`. Requires `start > lag`.
fn df_regression(
    series: &[f64],
    lag: usize,
    start: usize,
    det: Deterministic,
) -> Result<OlsFit, StatError> {
    let n = series.len();
    let rows = n - start;
    let mut delta = Vec::with_capacity(rows);
    let mut level = Vec::with_capacity(rows);
    let mut lagged_diffs: Vec<Vec<f64>> = vec![Vec::with_capacity(rows); lag];
    for t in start..n {
        delta.push(series[t] - series[t - 1]);
        level.push(series[t - 1]);
        for (j, column) in lagged_diffs.iter_mut().enumerate() {
            column.push(series[t - j - 1] - series[t - j - 2]);
        }
    }

    let mut regressors = Vec::with_capacity(lag + 1);
    regressors.push(level);
    regressors.extend(lagged_diffs);
    ols(&delta, &regressors, matches!(det, Deterministic::Constant))
}

/// KPSS test statistic with a constant ("c") regression.
///
/// Uses a Bartlett-kernel long-run variance with automatic bandwidth
/// `⌊4·(n/100)^¼⌋`. Returns only the statistic; a zero long-run variance
/// (constant series) yields NaN.
///
/// # Errors
/// Returns `InsufficientData` below 5 observations.
pub fn kpss_statistic(series: &[f64]) -> Result<f64, StatError> {
    let n = series.len();
    if n < 5 {
        return Err(StatError::InsufficientData { needed: 5, got: n });
    }
    let nf = n as f64;

    let mu = mean(series);
    let resid: Vec<f64> = series.iter().map(|v| v - mu).collect();

    let mut partial_sum = 0.0;
    let mut eta = 0.0;
    for e in &resid {
        partial_sum += e;
        eta += partial_sum * partial_sum;
    }
    eta /= nf * nf;

    let bandwidth = ((4.0 * (nf / 100.0).powf(0.25)).floor() as usize).min(n - 1);
    let mut long_run_var = resid.iter().map(|e| e * e).sum::<f64>() / nf;
    for j in 1..=bandwidth {
        let weight = 1.0 - j as f64 / (bandwidth as f64 + 1.0);
        let autocov: f64 =
            resid[j..].iter().zip(&resid[..n - j]).map(|(a, b)| a * b).sum::<f64>() / nf;
        long_run_var += 2.0 * weight * autocov;
    }

    if long_run_var.abs() < f64::EPSILON {
        return Ok(f64::NAN);
    }
    Ok(eta / long_run_var)
}
