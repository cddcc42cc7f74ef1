use thiserror::Error;

/// Failure modes of the weight adjustment. Both are synchronous and atomic:
/// no partial result is ever produced.
#[derive(Debug, Error)]
pub enum AdjustError {
    /// Malformed or out-of-domain arguments: negative weights, a weight sum
    /// that is not finite and positive, a reward vector whose length does
    /// not match, non-finite reward entries, or degenerate parameters.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The post-clip vector failed to produce a usable positive sum, making
    /// renormalization impossible. Unreachable with a positive `clip_min`
    /// and finite inputs unless `eta * reward` overflows f64 range.
    #[error("weights collapsed: {0}")]
    Collapse(String),
}
