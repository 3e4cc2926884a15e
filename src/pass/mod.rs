//! Password generation, strength scoring and output.

pub mod charset;
mod config;
mod error;
mod generate;
pub mod output;
mod strength;

pub use charset::{CharClass, ClassSet};
pub use config::{DEFAULT_LENGTH, DEFAULT_MIN_PER_CLASS, GenerationConfig};
pub use error::GenerateError;
pub use generate::{generate, generate_batch, generate_with};
pub use strength::{Strength, StrengthReport, evaluate};
