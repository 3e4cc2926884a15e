//! Generation settings shared by the CLI and TUI.

mod file;

use std::path::{Path, PathBuf};

use crate::pass::{CharClass, ClassSet, DEFAULT_LENGTH, DEFAULT_MIN_PER_CLASS, GenerationConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub classes: ClassSet,
    pub min_per_class: usize,
    pub cli_command: String,
    pub to_clipboard: bool,
}

impl Settings {
    /// `$HOME/.config/passgen/settings`.
    pub fn path() -> PathBuf {
        file::get_path()
    }

    pub fn load_from_file() -> Result<Self, std::io::Error> {
        Self::load_from(&Self::path())
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        self.save_to(&Self::path())
    }

    /// Missing files are created with defaults.
    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(path, &mut settings)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        file::save(path, self)
    }

    pub fn has_saved_command() -> bool {
        Self::load_from_file()
            .map(|s| !s.cli_command.is_empty())
            .unwrap_or(false)
    }

    pub fn uses(&self, class: CharClass) -> bool {
        self.classes.contains(class)
    }

    /// The generator config these settings describe.
    pub fn to_config(&self) -> GenerationConfig {
        GenerationConfig::new(self.pass_length)
            .with_classes(self.classes)
            .min_per_class(self.min_per_class)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEFAULT_LENGTH,
            number_of_passwords: 1,
            classes: ClassSet::all(),
            min_per_class: DEFAULT_MIN_PER_CLASS,
            cli_command: String::new(),
            to_clipboard: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_make_a_valid_config() {
        let config = Settings::default().to_config();
        assert_eq!(config, GenerationConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_follows_class_toggles() {
        let mut settings = Settings::default();
        settings.classes.remove(CharClass::Special);
        settings.min_per_class = 2;

        let config = settings.to_config();
        assert!(!config.classes.contains(CharClass::Special));
        assert_eq!(config.min_per_class, 2);
        assert!(!settings.uses(CharClass::Special));
    }
}
