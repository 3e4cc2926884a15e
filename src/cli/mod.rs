//! Command-line mode: flag parsing, generation and strength checks.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Halt};
pub use flags::{CliFlags, CommandMode};
pub use parse::{ParseError, parse};

/// Run CLI mode and exit with a non-zero status on failure.
pub fn run(args: Vec<String>) {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e);
            prompts::error("Run with --help for usage.");
            std::process::exit(2);
        }
    };

    match ctx.run() {
        Ok(()) | Err(Halt::Done) => {}
        Err(Halt::Failed(msg)) => {
            prompts::error(&msg);
            std::process::exit(1);
        }
    }
}
