use thiserror::Error;

/// Errors that can occur during normalization and rule persistence.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("rule file path must end in .json: {0}")]
    InvalidPath(String),
    #[error("rule set is empty; nothing to save")]
    EmptyRuleSet,
    #[error("no rule set has been saved yet; save_rules must succeed before load_rules")]
    NotSaved,
    #[error("invalid regex pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },
    #[error("rule file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("rule file is not a valid JSON object: {0}")]
    Format(#[from] serde_json::Error),
}
