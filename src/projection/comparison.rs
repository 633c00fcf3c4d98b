//! Comparison metrics between the product and baseline totals

use serde::{Deserialize, Serialize};

use crate::error::{CalculatorError, Result};

/// How far the product total is ahead of the baseline total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonMetrics {
    /// `primary - baseline`
    pub difference: f64,
    /// `(primary / baseline - 1) * 100`
    pub percentage_gain: f64,
    /// `primary / baseline`
    pub multiple: f64,
}

/// Compare `primary_total` against `baseline_total`
///
/// Fails with [`CalculatorError::DegenerateComparison`] when the baseline is
/// zero or either total is not finite, so no Infinity or NaN ever escapes.
pub fn comparison_metrics(primary_total: f64, baseline_total: f64) -> Result<ComparisonMetrics> {
    if baseline_total == 0.0 || !baseline_total.is_finite() || !primary_total.is_finite() {
        return Err(CalculatorError::DegenerateComparison { baseline_total });
    }

    let multiple = primary_total / baseline_total;
    Ok(ComparisonMetrics {
        difference: primary_total - baseline_total,
        percentage_gain: (multiple - 1.0) * 100.0,
        multiple,
    })
}
