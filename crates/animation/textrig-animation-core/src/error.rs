//! Error types for plan generation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::style::StyleTag;

/// Caller contract violations detected before any keyframe is emitted.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum GenerateError {
    /// Style tag is not one of the recognized animation styles.
    #[error("unrecognized animation style: {tag}")]
    InvalidStyle { tag: String },

    /// A parameter is out of its valid range.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Reproducible output was requested for a randomized style without a seed.
    #[error("style {style} is randomized and reproducible output requires a seed")]
    SeedRequired { style: StyleTag },
}

impl GenerateError {
    pub(crate) fn param(name: impl Into<String>, reason: impl Into<String>) -> Self {
        GenerateError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;
