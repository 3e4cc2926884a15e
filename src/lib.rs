//! Password generation under composition constraints, and strength scoring.
//!
//! The core is [`pass::generate`] and [`pass::evaluate`]; the other modules
//! are the command-line and interactive front ends built on them.

pub mod cli;
pub mod exits;
pub mod pass;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use pass::{
    CharClass, ClassSet, GenerateError, GenerationConfig, Strength, StrengthReport, evaluate,
    generate,
};
