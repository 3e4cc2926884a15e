//! Generation config.

use super::{CharClass, ClassSet, GenerateError};

pub const DEFAULT_LENGTH: usize = 12;
pub const DEFAULT_MIN_PER_CLASS: usize = 1;

/// Length and composition constraints for one generated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub classes: ClassSet,
    pub min_per_class: usize,
}

impl GenerationConfig {
    /// All classes enabled, one of each required.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            classes: ClassSet::all(),
            min_per_class: DEFAULT_MIN_PER_CLASS,
        }
    }

    pub fn with_classes(mut self, classes: ClassSet) -> Self {
        self.classes = classes;
        self
    }

    pub fn with_class(mut self, class: CharClass) -> Self {
        self.classes.insert(class);
        self
    }

    pub fn without_class(mut self, class: CharClass) -> Self {
        self.classes.remove(class);
        self
    }

    pub fn min_per_class(mut self, min: usize) -> Self {
        self.min_per_class = min;
        self
    }

    /// Total characters the minimums need.
    pub fn required_len(&self) -> usize {
        self.min_per_class.saturating_mul(self.classes.len())
    }

    /// Reject configs that can never be satisfied.
    ///
    /// Runs before any randomness is consumed. The per-class alphabet size is
    /// not checked here; that surfaces as `InsufficientAlphabet` at draw time.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.classes.is_empty() {
            return Err(GenerateError::InvalidConfig(
                "at least one character type must be selected".into(),
            ));
        }

        if self.min_per_class > 0 && self.length < self.required_len() {
            return Err(GenerateError::InvalidConfig(format!(
                "length {} is too short for {} of each of {} character types (needs {})",
                self.length,
                self.min_per_class,
                self.classes.len(),
                self.required_len()
            )));
        }

        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH)
    }
}
