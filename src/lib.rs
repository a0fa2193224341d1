//! Configurable text normalization with persistable regex rule sets.
//!
//! [`TextNormalizer`] cleans a string through a fixed-order pipeline:
//!
//! 1. lowercase fold (optional)
//! 2. ordered regex substitution rules (when a rule set is active)
//! 3. ASCII digit removal (optional)
//! 4. non-ASCII runs collapsed to single spaces (always)
//! 5. ASCII punctuation removal (optional)
//! 6. exclusive word-length filtering (optional)
//! 7. edge trim (always)
//!
//! The order is part of the contract: every step operates on the output of
//! the previous one, so a rule substitution sees lowercased text and digit
//! removal sees the substituted text.
//!
//! ## Rule persistence
//!
//! Rule sets keep insertion order and round-trip through a flat JSON object
//! file, so a cleaning recipe survives across sessions. Reloading is gated
//! on a prior successful save in the same normalizer's lifetime; saving
//! never implicitly activates the saved rules.
//!
//! ## Invariants worth knowing
//!
//! - Output is pure 7-bit ASCII: non-ASCII runs always become single spaces
//! - Configuration is immutable after construction
//! - Failed operations leave configuration, rules, and persistence state
//!   untouched
//! - No I/O outside [`TextNormalizer::save_rules`] and
//!   [`TextNormalizer::load_rules`]
//!
//! ```
//! use txtnorm::{NormalizerConfig, RuleSet, TextNormalizer};
//!
//! let mut normalizer = TextNormalizer::new(NormalizerConfig::default())?;
//! normalizer.set_rules(RuleSet::from([("colou?r", "color")]));
//!
//! assert_eq!(normalizer.transform("The COLOUR Wheel!")?, "the color wheel");
//! # Ok::<(), txtnorm::NormalizeError>(())
//! ```

mod config;
mod error;
mod normalizer;
mod pipeline;
mod rules;

pub use crate::config::{LengthBounds, NormalizerConfig};
pub use crate::error::NormalizeError;
pub use crate::normalizer::TextNormalizer;
pub use crate::pipeline::{filter_by_length, mask_non_ascii, strip_digits, strip_punctuation};
pub use crate::rules::RuleSet;
