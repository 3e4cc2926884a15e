/// What `-c/--command` asks for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CommandMode {
    #[default]
    None,
    /// `-c <FLAGS>`: save the other flags as the default command.
    Set,
    /// `-c get`: print the saved command.
    Get,
    /// `-c` alone: clear the saved command.
    Unset,
}

#[derive(Debug, Default, Clone)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub default: bool,
    pub command: CommandMode,
    pub quiet: bool,
    pub no_lowercase: bool,
    pub no_uppercase: bool,
    pub no_digits: bool,
    pub no_special: bool,
    pub check: bool,
    pub check_value: Option<String>,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub min_each: Option<usize>,
}

impl CliFlags {
    /// Flags that change what gets generated (a saved command is ignored
    /// when any of these are given).
    pub fn has_explicit_args(&self) -> bool {
        self.length.is_some()
            || self.number.is_some()
            || self.min_each.is_some()
            || self.saved
            || self.default
            || self.no_lowercase
            || self.no_uppercase
            || self.no_digits
            || self.no_special
            || self.check
            || self.clipboard
    }
}
