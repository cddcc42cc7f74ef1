use serde::Deserialize;

use crate::error::AdjustError;
use crate::reward::RewardSignal;

/// Tuning parameters for one adjustment step.
#[derive(Debug, Clone, Deserialize)]
pub struct AdjustParams {
    /// Learning rate: sensitivity of the update to the reward signal.
    pub eta: f64,
    /// Floor applied after the multiplicative step so no weight can reach
    /// zero or go negative. Must be strictly positive.
    pub clip_min: f64,
}

impl Default for AdjustParams {
    fn default() -> Self {
        Self {
            eta: 0.01,
            clip_min: 1e-12,
        }
    }
}

/// Stateless weight adjuster. Holds only its parameters; every call is an
/// independent pure computation over the inputs.
#[derive(Debug, Clone)]
pub struct WeightAdjuster {
    params: AdjustParams,
}

impl WeightAdjuster {
    pub fn new(params: AdjustParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AdjustParams {
        &self.params
    }

    /// Applies the multiplicative update `w[i] * (1 + eta * r[i])`, clips
    /// each entry to `clip_min`, and renormalizes onto the simplex.
    ///
    /// `weights` need not sum exactly to 1: a vector with a positive finite
    /// sum is re-projected onto the simplex before the update. Callers
    /// should treat that as a safeguard, not a license to pass arbitrary
    /// unnormalized vectors.
    ///
    /// Returns a freshly allocated vector of the same length; the input is
    /// never modified.
    pub fn adjust(
        &self,
        weights: &[f64],
        reward: impl Into<RewardSignal>,
    ) -> Result<Vec<f64>, AdjustError> {
        let AdjustParams { eta, clip_min } = self.params;

        if !eta.is_finite() {
            return Err(AdjustError::InvalidInput(format!(
                "eta must be finite, got {eta}"
            )));
        }
        // NumPy's maximum propagates NaN where f64::max discards it, so a
        // degenerate clip_min must be caught here rather than at the
        // collapse check.
        if !clip_min.is_finite() || clip_min <= 0.0 {
            return Err(AdjustError::InvalidInput(format!(
                "clip_min must be strictly positive and finite, got {clip_min}"
            )));
        }

        if let Some(bad) = weights.iter().find(|w| **w < 0.0) {
            return Err(AdjustError::InvalidInput(format!(
                "weights must be non-negative, got {bad}"
            )));
        }
        let s0: f64 = weights.iter().sum();
        if !s0.is_finite() || s0 <= 0.0 {
            return Err(AdjustError::InvalidInput(format!(
                "weights must have a positive finite sum, got {s0}"
            )));
        }

        let reward = reward.into();
        let rewards = reward.resolve(weights.len())?;

        tracing::debug!(
            "adjusting {} weights: reward={}, eta={}, input_sum={:.6}",
            weights.len(),
            reward,
            eta,
            s0
        );

        // normalize, multiplicative update, clip. f64::max discards a NaN
        // operand, so an overflow-produced NaN (e.g. a zero weight times an
        // infinite update factor) must pass through the clip untouched for
        // the sum check below to catch it.
        let new_w: Vec<f64> = weights
            .iter()
            .zip(&rewards)
            .map(|(w, r)| {
                let v = (w / s0) * (1.0 + eta * r);
                if v.is_nan() {
                    v
                } else {
                    v.max(clip_min)
                }
            })
            .collect();

        let s: f64 = new_w.iter().sum();
        if !s.is_finite() || s <= 0.0 {
            tracing::warn!("post-clip weight sum degenerate: {}", s);
            return Err(AdjustError::Collapse(format!(
                "post-clip sum is {s}; try a smaller eta or a valid reward signal"
            )));
        }

        Ok(new_w.iter().map(|w| w / s).collect())
    }
}

impl Default for WeightAdjuster {
    fn default() -> Self {
        Self::new(AdjustParams::default())
    }
}

/// One-shot adjustment with default parameters (`eta = 0.01`,
/// `clip_min = 1e-12`).
pub fn adjust_weights(
    weights: &[f64],
    reward: impl Into<RewardSignal>,
) -> Result<Vec<f64>, AdjustError> {
    WeightAdjuster::default().adjust(weights, reward)
}
