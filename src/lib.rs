//! Reinforcement-inspired portfolio weight adjustment.
//!
//! Implements the multiplicative update rule
//!
//! ```text
//! w_{t+1}[i] = w_t[i] * (1 + eta * r[i])
//! ```
//!
//! followed by a clipping floor and L1 renormalization, so the result always
//! lies on the probability simplex (non-negative entries summing to 1). The
//! reward `r` is either a portfolio-level scalar broadcast to every asset or
//! a per-asset vector aligned by index.
//!
//! The core is a pure computation: no I/O, no shared state, safe to call
//! concurrently from independent call sites.

pub mod adjuster;
pub mod error;
pub mod logging;
pub mod reward;

pub use adjuster::{adjust_weights, AdjustParams, WeightAdjuster};
pub use error::AdjustError;
pub use reward::RewardSignal;
