//! The normalizer object: configuration, rule lifecycle, and transform.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::info;

use crate::config::NormalizerConfig;
use crate::error::NormalizeError;
use crate::pipeline::{filter_by_length, mask_non_ascii, strip_digits, strip_punctuation};
use crate::rules::RuleSet;

/// Where this normalizer stands with respect to its rule file.
///
/// Loading is only valid after a successful save has moved the state to
/// `Saved`; the path recorded there is the one `load_rules` reads.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Persistence {
    Unsaved,
    Saved(PathBuf),
}

/// A configurable text cleaner with a persistable regex rule set.
///
/// Configuration is fixed at construction. The rule set starts empty and is
/// replaced wholesale by [`set_rules`](Self::set_rules) or
/// [`load_rules`](Self::load_rules); [`save_rules`](Self::save_rules)
/// writes a rule set to disk and records the path for later reloading
/// without touching the active set.
///
/// A single instance owns its rule set and persistence binding exclusively.
/// Concurrent use from multiple threads is unsupported and must be
/// externally serialized.
///
/// ```
/// use txtnorm::{NormalizerConfig, RuleSet, TextNormalizer};
///
/// let mut normalizer = TextNormalizer::new(NormalizerConfig::default())?;
/// normalizer.set_rules(RuleSet::from([("colou?r", "color")]));
///
/// let cleaned = normalizer.transform("The COLOUR Wheel!")?;
/// assert_eq!(cleaned, "the color wheel");
/// # Ok::<(), txtnorm::NormalizeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    config: NormalizerConfig,
    rules: RuleSet,
    persistence: Persistence,
}

impl TextNormalizer {
    /// Creates a normalizer with the given configuration.
    ///
    /// Fails with [`NormalizeError::InvalidConfig`] when `length_bounds`
    /// has `min >= max`. When `verbose` is set, emits one summary event
    /// with the resolved configuration.
    pub fn new(config: NormalizerConfig) -> Result<Self, NormalizeError> {
        config.validate()?;
        if config.verbose {
            info!(
                lowercase = config.lowercase,
                remove_punctuation = config.remove_punctuation,
                remove_digits = config.remove_digits,
                length_bounds = ?config.length_bounds,
                "normalizer_configured"
            );
        }
        Ok(Self {
            config,
            rules: RuleSet::new(),
            persistence: Persistence::Unsaved,
        })
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// The currently active rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// The path of the last successful save, if any.
    pub fn saved_path(&self) -> Option<&Path> {
        match &self.persistence {
            Persistence::Saved(path) => Some(path),
            Persistence::Unsaved => None,
        }
    }

    /// Replaces the active rule set wholesale.
    ///
    /// Persistence state is untouched; saving and setting are independent
    /// actions.
    pub fn set_rules(&mut self, rules: RuleSet) {
        self.rules = rules;
    }

    /// Serializes `rules` as a JSON object to `path` and records the path
    /// for [`load_rules`](Self::load_rules).
    ///
    /// The path must end in `.json`, unless its base name (the portion of
    /// the path string before the first `.`) is empty, in which case the
    /// extension check is bypassed. `rules` must be non-empty. The file is
    /// overwritten if it exists; key order in the file follows rule
    /// insertion order.
    ///
    /// The active rule set is **not** updated; call
    /// [`set_rules`](Self::set_rules) separately if the saved rules should
    /// also become active. On any failure the persistence binding is left
    /// unchanged.
    pub fn save_rules(
        &mut self,
        path: impl AsRef<Path>,
        rules: &RuleSet,
    ) -> Result<(), NormalizeError> {
        let path = path.as_ref();
        check_rule_path(path)?;
        if rules.is_empty() {
            return Err(NormalizeError::EmptyRuleSet);
        }
        let json = serde_json::to_string_pretty(rules)?;
        fs::write(path, json)?;
        self.persistence = Persistence::Saved(path.to_path_buf());
        Ok(())
    }

    /// Reloads the rule set from the last successfully saved path and makes
    /// it the active set.
    ///
    /// Fails with [`NormalizeError::NotSaved`] when no save has succeeded
    /// in this normalizer's lifetime, [`NormalizeError::Io`] when the file
    /// is missing or unreadable, and [`NormalizeError::Format`] when it is
    /// not a valid JSON object. On failure the active rule set is left
    /// unchanged.
    pub fn load_rules(&mut self) -> Result<&RuleSet, NormalizeError> {
        let path = match &self.persistence {
            Persistence::Saved(path) => path.clone(),
            Persistence::Unsaved => return Err(NormalizeError::NotSaved),
        };
        let contents = fs::read_to_string(&path)?;
        let rules: RuleSet = serde_json::from_str(&contents)?;
        info!(
            path = %path.display(),
            rule_count = rules.len(),
            "rules_loaded"
        );
        self.rules = rules;
        Ok(&self.rules)
    }

    /// Emits the currently active rule set on the diagnostic channel.
    pub fn print_rules(&self) {
        info!(
            rule_count = self.rules.len(),
            rules = %self.rules,
            "active_rules"
        );
    }

    /// Runs the cleaning pipeline over `input` and returns the result.
    ///
    /// Steps run in this exact order; every step operates on the output of
    /// the previous one, and reordering would change results:
    ///
    /// 1. lowercase fold (if `lowercase`)
    /// 2. each rule in insertion order: compile the pattern, replace all
    ///    non-overlapping matches (replacements use the regex crate's
    ///    `$group` expansion syntax)
    /// 3. ASCII digit removal (if `remove_digits`)
    /// 4. non-ASCII runs collapsed to single spaces (always)
    /// 5. ASCII punctuation removal (if `remove_punctuation`)
    /// 6. exclusive word-length filtering (if `length_bounds` is set)
    /// 7. edge trim (always)
    ///
    /// Fails with [`NormalizeError::Pattern`] when a rule pattern does not
    /// compile; the normalizer stays usable and unchanged. No other step
    /// can fail.
    pub fn transform(&self, input: &str) -> Result<String, NormalizeError> {
        let mut text = if self.config.lowercase {
            input.to_lowercase()
        } else {
            input.to_owned()
        };

        for (pattern, replacement) in self.rules.iter() {
            let re = Regex::new(pattern).map_err(|source| NormalizeError::Pattern {
                pattern: pattern.to_string(),
                source,
            })?;
            text = re.replace_all(&text, replacement).into_owned();
        }

        if self.config.remove_digits {
            text = strip_digits(&text);
        }

        text = mask_non_ascii(&text);

        if self.config.remove_punctuation {
            text = strip_punctuation(&text);
        }

        if let Some(bounds) = self.config.length_bounds {
            text = filter_by_length(&text, bounds);
        }

        Ok(text.trim().to_string())
    }
}

/// Path rule for rule files: must end in `.json`, except that a path whose
/// base name (everything before the first `.` of the whole path string) is
/// empty skips the check entirely. That lets dot-paths like `.txt` or
/// `./rules.txt` through; callers relying on it should treat it as a
/// compatibility quirk, not a feature.
fn check_rule_path(path: &Path) -> Result<(), NormalizeError> {
    let text = path.to_string_lossy();
    let base = text.split('.').next().unwrap_or("");
    if base.is_empty() {
        return Ok(());
    }
    if !text.ends_with(".json") {
        return Err(NormalizeError::InvalidPath(text.into_owned()));
    }
    Ok(())
}
