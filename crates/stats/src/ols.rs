use crate::error::StatError;
use nalgebra::{DMatrix, DVector};

/// A fitted ordinary-least-squares regression.
#[derive(Debug, Clone)]
pub struct OlsFit {
    /// Coefficients, intercept first when one was requested.
    pub params: Vec<f64>,
    /// Standard errors per coefficient (NaN when residual df is zero).
    pub std_errors: Vec<f64>,
    /// Residuals, one per observation.
    pub residuals: Vec<f64>,
    /// Sum of squared residuals.
    pub ssr: f64,
    /// Number of observations.
    pub nobs: usize,
    /// Residual degrees of freedom.
    pub df_resid: f64,
}

impl OlsFit {
    /// Returns the t-statistic for coefficient `i`, NaN when its standard
    /// error is zero or undefined.
    #[must_use]
    pub fn t_stat(&self, i: usize) -> f64 {
        let se = self.std_errors[i];
        if se.is_finite() && se > f64::EPSILON {
            self.params[i] / se
        } else {
            f64::NAN
        }
    }
}

/// Fits `y` on the given regressor columns via the normal equations.
///
/// When `intercept` is true a constant column is prepended, so the
/// intercept is `params[0]` and the first regressor is `params[1]`.
///
/// # Errors
/// Returns `InsufficientData` when there are fewer observations than
/// coefficients, and `Degenerate` when the design matrix is singular.
pub fn ols(y: &[f64], regressors: &[Vec<f64>], intercept: bool) -> Result<OlsFit, StatError> {
    let n = y.len();
    let k = regressors.len() + usize::from(intercept);
    if k == 0 || regressors.iter().any(|r| r.len() != n) {
        return Err(StatError::Degenerate);
    }
    if n < k {
        return Err(StatError::InsufficientData { needed: k, got: n });
    }

    let x = DMatrix::from_fn(n, k, |i, j| {
        if intercept {
            if j == 0 {
                1.0
            } else {
                regressors[j - 1][i]
            }
        } else {
            regressors[j][i]
        }
    });
    let y_vec = DVector::from_row_slice(y);

    let xtx = x.transpose() * &x;
    let xtx_inv = xtx.try_inverse().ok_or(StatError::Degenerate)?;
    if xtx_inv.iter().any(|v| !v.is_finite()) {
        return Err(StatError::Degenerate);
    }

    let params = &xtx_inv * (x.transpose() * &y_vec);
    let residuals = y_vec - &x * &params;
    let ssr = residuals.dot(&residuals);

    let df_resid = (n - k) as f64;
    let sigma2 = if df_resid > 0.0 { ssr / df_resid } else { f64::NAN };
    let std_errors = (0..k).map(|i| (sigma2 * xtx_inv[(i, i)]).sqrt()).collect();

    Ok(OlsFit {
        params: params.iter().copied().collect(),
        std_errors,
        residuals: residuals.iter().copied().collect(),
        ssr,
        nobs: n,
        df_resid,
    })
}
