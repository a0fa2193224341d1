//! Configuration types for the normalization pipeline.
//!
//! [`NormalizerConfig`] selects which pipeline steps run; it is fixed when a
//! [`TextNormalizer`](crate::TextNormalizer) is constructed and never
//! mutated afterwards. The types are cheap to clone and serialize so a
//! configuration can live in external JSON alongside a rule file.

use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;

/// Exclusive word-length bounds applied after all substitution and removal
/// steps.
///
/// A whitespace-separated word survives filtering only when
/// `min < chars < max`; both bounds are strict, so `LengthBounds { min: 2,
/// max: 5 }` keeps exactly the three- and four-character words.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LengthBounds {
    /// Words of this length or shorter are dropped.
    pub min: usize,
    /// Words of this length or longer are dropped.
    pub max: usize,
}

/// Configuration for [`TextNormalizer`](crate::TextNormalizer).
///
/// Every flag gates one pipeline step; the step order itself is fixed and
/// documented on [`TextNormalizer::transform`](crate::TextNormalizer::transform).
///
/// ```
/// use txtnorm::NormalizerConfig;
///
/// let config = NormalizerConfig {
///     remove_digits: false,
///     ..Default::default()
/// };
/// assert!(config.lowercase);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// If true, lowercase the input before any other step.
    pub lowercase: bool,
    /// If true, drop the 32 ASCII punctuation characters.
    pub remove_punctuation: bool,
    /// If true, drop ASCII decimal digits, including digits embedded inside
    /// alphanumeric tokens.
    pub remove_digits: bool,
    /// Optional exclusive length filter for whitespace-split words.
    pub length_bounds: Option<LengthBounds>,
    /// If true, emit a configuration summary event at construction.
    /// Diagnostic only; has no effect on transformation output.
    pub verbose: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            remove_punctuation: true,
            remove_digits: true,
            length_bounds: None,
            verbose: false,
        }
    }
}

impl NormalizerConfig {
    /// Rejects length bounds that can never keep a word.
    pub fn validate(&self) -> Result<(), NormalizeError> {
        if let Some(bounds) = self.length_bounds {
            if bounds.min >= bounds.max {
                return Err(NormalizeError::InvalidConfig(format!(
                    "length bounds require min < max, got ({}, {})",
                    bounds.min, bounds.max
                )));
            }
        }
        Ok(())
    }
}
