//! Generator configuration.

use serde::{Deserialize, Serialize};

/// Generator-wide policy switches. Per-style timing lives in [`crate::params::StyleParams`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Refuse to generate randomized styles without an explicit seed instead of
    /// drawing one from entropy.
    pub require_seed: bool,

    /// Soft limit on `AnimationPlan::end_frame`. Long phrases on styles with
    /// per-slot stagger can run far past it; exceeding it is logged, not rejected.
    pub frame_budget: Option<u32>,
}
