use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AdjustError;

/// Reward signal for one adjustment step: either a portfolio-level scalar
/// applied uniformly to every asset, or one signal per asset aligned by
/// index with the weight vector.
///
/// Untagged on the wire, so a JSON number decodes as `Scalar` and a JSON
/// array as `PerAsset`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RewardSignal {
    Scalar(f64),
    PerAsset(Vec<f64>),
}

impl RewardSignal {
    /// Resolves the signal into one reward per asset, validating shape and
    /// finiteness. `n` is the weight vector length.
    pub(crate) fn resolve(&self, n: usize) -> Result<Vec<f64>, AdjustError> {
        match self {
            RewardSignal::Scalar(r) => {
                if !r.is_finite() {
                    return Err(AdjustError::InvalidInput(format!(
                        "scalar reward must be finite, got {r}"
                    )));
                }
                Ok(vec![*r; n])
            }
            RewardSignal::PerAsset(rs) => {
                if rs.len() != n {
                    return Err(AdjustError::InvalidInput(format!(
                        "reward vector length {} does not match {} weights",
                        rs.len(),
                        n
                    )));
                }
                if let Some(bad) = rs.iter().find(|r| !r.is_finite()) {
                    return Err(AdjustError::InvalidInput(format!(
                        "reward entries must be finite, got {bad}"
                    )));
                }
                Ok(rs.clone())
            }
        }
    }
}

impl fmt::Display for RewardSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewardSignal::Scalar(r) => write!(f, "scalar({r})"),
            RewardSignal::PerAsset(rs) => write!(f, "per-asset({} entries)", rs.len()),
        }
    }
}

impl From<f64> for RewardSignal {
    fn from(r: f64) -> Self {
        RewardSignal::Scalar(r)
    }
}

impl From<Vec<f64>> for RewardSignal {
    fn from(rs: Vec<f64>) -> Self {
        RewardSignal::PerAsset(rs)
    }
}

impl From<&[f64]> for RewardSignal {
    fn from(rs: &[f64]) -> Self {
        RewardSignal::PerAsset(rs.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for RewardSignal {
    fn from(rs: [f64; N]) -> Self {
        RewardSignal::PerAsset(rs.to_vec())
    }
}
