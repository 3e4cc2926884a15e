//! Settings file persistence.
//!
//! One comma-separated line:
//! `length,number,lowercase,uppercase,digits,special,min_each,cli_command`.
//! `,` and `|` inside the command are escaped with `|`.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::Settings;
use crate::pass::CharClass;

const FIELDS: usize = 8;

pub fn save(path: &Path, settings: &Settings) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    file.write_all(encode(settings).as_bytes())?;
    debug!("saved settings to {}", path.display());
    Ok(())
}

pub fn load(path: &Path, settings: &mut Settings) -> std::io::Result<()> {
    if !path.exists() {
        debug!("no settings file at {}, writing defaults", path.display());
        return save(path, settings);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if !decode(line.trim_end_matches(['\r', '\n']), settings) {
        warn!("malformed settings file {}, resetting to defaults", path.display());
        *settings = Settings::default();
        save(path, settings)?;
    }

    Ok(())
}

pub fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passgen/settings")
}

fn encode(settings: &Settings) -> String {
    let command = settings
        .cli_command
        .chars()
        .map(|c| match c {
            ',' => "|,".to_string(),
            '|' => "||".to_string(),
            _ => c.to_string(),
        })
        .collect::<String>();

    format!(
        "{},{},{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.number_of_passwords,
        settings.uses(CharClass::Lowercase),
        settings.uses(CharClass::Uppercase),
        settings.uses(CharClass::Digit),
        settings.uses(CharClass::Special),
        settings.min_per_class,
        command
    )
}

/// Apply a settings line. Returns false if the line has the wrong shape.
/// Fields that fail to parse keep their current value.
fn decode(line: &str, settings: &mut Settings) -> bool {
    let parts = split_escaped(line, ',');
    if parts.len() != FIELDS {
        return false;
    }

    settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);
    settings.number_of_passwords = parts[1].parse().unwrap_or(settings.number_of_passwords);
    for (class, part) in CharClass::ALL.into_iter().zip(&parts[2..6]) {
        let enabled = part.parse().unwrap_or(settings.uses(class));
        settings.classes.set(class, enabled);
    }
    settings.min_per_class = parts[6].parse().unwrap_or(settings.min_per_class);
    settings.cli_command = parts[7].clone();

    if settings.classes.is_empty() {
        return false;
    }
    true
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}
