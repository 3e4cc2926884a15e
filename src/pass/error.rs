use thiserror::Error;

use super::CharClass;

/// Reasons a password cannot be generated from a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The config can never be satisfied (no class enabled, or the minimums
    /// do not fit in the requested length).
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A class has fewer distinct characters than the per-class minimum.
    #[error("cannot draw {requested} distinct {class} characters, only {available} exist")]
    InsufficientAlphabet {
        class: CharClass,
        requested: usize,
        available: usize,
    },
}
