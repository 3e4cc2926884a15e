//! CLI context - bundles settings, flags, and clipboard state.

use std::io::Write;
use std::path::PathBuf;

use copypasta::{ClipboardContext, ClipboardProvider};
use log::debug;
use zeroize::Zeroize;

use super::{CliFlags, CommandMode, prompts, quiet};
use crate::pass::{self, CharClass, output};
use crate::settings::Settings;
use crate::tui::print_help;

/// Why a CLI run stopped before finishing normally.
#[derive(Debug)]
pub enum Halt {
    /// Early exit - not an error, just done.
    Done,
    /// Exit with a non-zero status after printing the message.
    Failed(String),
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub saved_settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
    args: Vec<String>,
    settings_path: PathBuf,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        Self::with_settings_path(args, Settings::path())
    }

    /// Like `new`, reading and writing settings at `settings_path`.
    pub fn with_settings_path(args: Vec<String>, settings_path: PathBuf) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;
        quiet::set(flags.quiet);

        let saved_settings = Settings::load_from(&settings_path).unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {}", e));
            Settings::default()
        });

        // `--saved` is resolved in apply_flags, after the saved command
        let settings = Settings {
            cli_command: saved_settings.cli_command.clone(),
            ..Default::default()
        };

        Ok(Self {
            settings,
            saved_settings,
            clipboard: None,
            flags,
            args,
            settings_path,
        })
    }

    /// Run CLI. Returns `Err(Halt::Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Halt> {
        self.handle_info_flags()?;
        self.handle_command_mode()?;
        self.resolve_command();
        self.handle_check()?;
        self.apply_flags()?;
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Halt> {
        if self.flags.help {
            print_help();
            return Err(Halt::Done);
        }
        if self.flags.version {
            println!("passgen {}", env!("CARGO_PKG_VERSION"));
            return Err(Halt::Done);
        }
        Ok(())
    }

    fn handle_command_mode(&mut self) -> Result<(), Halt> {
        match self.flags.command {
            CommandMode::Get => {
                if self.settings.cli_command.is_empty() {
                    println!("(no saved command)");
                } else {
                    println!("{}", self.settings.cli_command);
                }
                Err(Halt::Done)
            }
            CommandMode::Unset => {
                self.saved_settings.cli_command.clear();
                if let Err(e) = self.saved_settings.save_to(&self.settings_path) {
                    prompts::warn(&format!("Failed to clear command: {}", e));
                }
                Err(Halt::Done)
            }
            CommandMode::Set | CommandMode::None => Ok(()),
        }
    }

    /// Evaluate a password instead of generating one.
    fn handle_check(&self) -> Result<(), Halt> {
        if !self.flags.check {
            return Ok(());
        }

        let mut password = match &self.flags.check_value {
            Some(value) => value.clone(),
            None => prompts::read_password_to_check()
                .map_err(|e| Halt::Failed(format!("Failed to read password: {}", e)))?,
        };

        let report = pass::evaluate(&password);
        password.zeroize();

        if quiet::enabled() {
            println!("{}", report.score);
        } else {
            println!("{report}");
        }
        Err(Halt::Done)
    }

    /// Save the command for `-c <FLAGS>`, or swap in the saved command's
    /// flags when no explicit arguments were given.
    fn resolve_command(&mut self) {
        if self.flags.command == CommandMode::Set {
            let command = self.args[1..]
                .iter()
                .filter(|a| *a != "-c" && *a != "--command")
                .cloned()
                .collect::<Vec<_>>()
                .join(" ");
            self.saved_settings.cli_command = command.clone();
            if let Err(e) = self.saved_settings.save_to(&self.settings_path) {
                prompts::warn(&format!("Failed to save command: {}", e));
            }
            self.settings.cli_command = command;
        }

        // Apply saved command if no explicit args given
        if !self.settings.cli_command.is_empty()
            && self.flags.command == CommandMode::None
            && !self.flags.has_explicit_args()
        {
            let mut combined_args = vec![self.args[0].clone()];
            combined_args.extend(
                self.settings
                    .cli_command
                    .split_whitespace()
                    .map(String::from),
            );
            match super::parse(&combined_args) {
                Ok(saved_flags) => {
                    debug!("applying saved command: {}", self.settings.cli_command);
                    self.flags = saved_flags;
                }
                Err(e) => prompts::warn(&format!("Ignoring saved command: {}", e)),
            }
        }

        quiet::set(self.flags.quiet);
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) -> Result<(), Halt> {
        if self.flags.saved && !self.flags.default {
            self.settings = Settings {
                cli_command: self.settings.cli_command.clone(),
                ..self.saved_settings.clone()
            };
        }

        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }
        if let Some(min) = self.flags.min_each {
            self.settings.min_per_class = min;
        }

        for (class, off) in [
            (CharClass::Lowercase, self.flags.no_lowercase),
            (CharClass::Uppercase, self.flags.no_uppercase),
            (CharClass::Digit, self.flags.no_digits),
            (CharClass::Special, self.flags.no_special),
        ] {
            if off {
                self.settings.classes.remove(class);
            }
        }

        if self.settings.classes.is_empty() {
            return Err(Halt::Failed(
                "At least one character type must be enabled".to_string(),
            ));
        }

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => {
                    self.clipboard = Some(c);
                    self.settings.to_clipboard = true;
                }
                Err(_) => {
                    if prompts::clipboard_fallback_prompt() {
                        self.settings.to_clipboard = false;
                    } else {
                        return Err(Halt::Done);
                    }
                }
            }
        }

        Ok(())
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&mut self) -> Result<(), Halt> {
        let count = self.settings.number_of_passwords.max(1);
        let config = self.settings.to_config();

        let mut passwords = pass::generate_batch(&config, count)
            .map_err(|e| Halt::Failed(format!("Error: {}", e)))?;

        if self.settings.to_clipboard
            && let Some(ctx) = self.clipboard.as_mut()
        {
            let mut joined = passwords.join("\n");
            match ctx.set_contents(joined.clone()) {
                Ok(_) => {
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied(passwords.len());
                }
                Err(e) => prompts::clipboard_error(&e.to_string()),
            }
            joined.zeroize();
        } else {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for (i, password) in passwords.iter().enumerate() {
                if output::write_plain(&mut out, i + 1, password, quiet::enabled()).is_err() {
                    break;
                }
            }
            let _ = out.flush();
        }

        passwords.iter_mut().for_each(Zeroize::zeroize);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn args(line: &str) -> Vec<String> {
        std::iter::once("passgen")
            .chain(line.split_whitespace())
            .map(String::from)
            .collect()
    }

    fn context(line: &str, path: &Path) -> Context {
        Context::with_settings_path(args(line), path.to_path_buf()).unwrap()
    }

    /// Everything `run` does short of generating output.
    fn prepare(ctx: &mut Context) -> Result<(), Halt> {
        ctx.handle_command_mode()?;
        ctx.resolve_command();
        ctx.apply_flags()
    }

    fn save_command(path: &Path, command: &str) {
        Settings {
            cli_command: command.to_string(),
            ..Settings::default()
        }
        .save_to(path)
        .unwrap();
    }

    #[test]
    fn every_class_disabled_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        let mut ctx = context(
            "--no-lowercase --no-uppercase --no-digits --no-special",
            &path,
        );

        match ctx.run() {
            Err(Halt::Failed(msg)) => {
                assert_eq!(msg, "At least one character type must be enabled")
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn command_is_saved_then_cleared() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");

        let mut ctx = context("-c -l 20 -n 2", &path);
        assert!(prepare(&mut ctx).is_ok());
        assert_eq!(Settings::load_from(&path).unwrap().cli_command, "-l 20 -n 2");
        assert_eq!(ctx.settings.pass_length, 20);

        let mut ctx = context("-c", &path);
        assert!(matches!(prepare(&mut ctx), Err(Halt::Done)));
        assert_eq!(Settings::load_from(&path).unwrap().cli_command, "");
    }

    #[test]
    fn saved_command_applies_without_explicit_args() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        save_command(&path, "-l 30 -n 2 --no-special");

        let mut ctx = context("", &path);
        prepare(&mut ctx).unwrap();
        assert_eq!(ctx.settings.pass_length, 30);
        assert_eq!(ctx.settings.number_of_passwords, 2);
        assert!(!ctx.settings.uses(CharClass::Special));

        let mut ctx = context("-l 16", &path);
        prepare(&mut ctx).unwrap();
        assert_eq!(ctx.settings.pass_length, 16);
        assert_eq!(ctx.settings.number_of_passwords, 1);
        assert!(ctx.settings.uses(CharClass::Special));
    }

    #[test]
    fn saved_check_command_is_honored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        save_command(&path, "-e -Ab3!xyz9");

        let mut ctx = context("", &path);
        ctx.resolve_command();
        assert!(ctx.flags.check);
        assert_eq!(ctx.flags.check_value.as_deref(), Some("-Ab3!xyz9"));
        assert!(matches!(ctx.run(), Err(Halt::Done)));
    }

    #[test]
    fn saved_flag_overlays_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        let mut on_disk = Settings {
            pass_length: 40,
            number_of_passwords: 3,
            min_per_class: 3,
            ..Settings::default()
        };
        on_disk.classes.remove(CharClass::Digit);
        on_disk.save_to(&path).unwrap();

        let mut ctx = context("-s", &path);
        prepare(&mut ctx).unwrap();
        assert_eq!(ctx.settings, on_disk);

        let mut ctx = context("-s -l 20", &path);
        prepare(&mut ctx).unwrap();
        assert_eq!(ctx.settings.pass_length, 20);
        assert_eq!(ctx.settings.min_per_class, 3);
        assert!(!ctx.settings.uses(CharClass::Digit));

        let mut ctx = context("-l 20", &path);
        prepare(&mut ctx).unwrap();
        assert_eq!(ctx.settings.min_per_class, 1);
        assert!(ctx.settings.uses(CharClass::Digit));
    }
}
