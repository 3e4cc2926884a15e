use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};
use zeroize::Zeroize;

use crate::terminal::{RawModeGuard, flush, format_number, reset_terminal};

/// How the line editor shows and filters what is typed.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Text,
    /// Digits only, shown with comma separators.
    Numeric,
    /// Any characters, shown as `*`.
    Masked,
}

impl Mode {
    fn accepts(self, c: char) -> bool {
        match self {
            Mode::Numeric => c.is_ascii_digit(),
            Mode::Text | Mode::Masked => true,
        }
    }

    fn render(self, input: &[char]) -> String {
        match self {
            Mode::Text => input.iter().collect(),
            Mode::Masked => "*".repeat(input.len()),
            Mode::Numeric => format_digits(input),
        }
    }

    /// 1-based display column for a 1-based cursor position.
    fn display_col(self, input: &[char], cursor_pos: usize) -> usize {
        match self {
            Mode::Numeric => digit_cursor_to_display(input.len(), cursor_pos),
            Mode::Text | Mode::Masked => cursor_pos,
        }
    }
}

/// Map a 1-based cursor position in raw digits to a 1-based position in the
/// comma-formatted display string.
fn digit_cursor_to_display(n: usize, cursor_pos: usize) -> usize {
    if n == 0 || cursor_pos <= 1 {
        return 1;
    }
    let digits_before = cursor_pos - 1;
    let first_group = match n % 3 {
        0 => 3,
        r => r,
    };
    let commas = if digits_before <= first_group {
        0
    } else {
        1 + (digits_before - first_group - 1) / 3
    };
    digits_before + commas + 1
}

fn format_digits(digits: &[char]) -> String {
    let digits: String = digits.iter().filter(|c| c.is_ascii_digit()).collect();
    match digits.parse::<usize>() {
        Ok(n) => format_number(n),
        Err(_) => digits,
    }
}

/// Raw-mode line editor. Returns None on Esc / Ctrl+Q.
fn edit_line(prompt: &str, initial: &str, mode: Mode) -> Option<String> {
    let mut input: Vec<char> = initial.chars().filter(|c| mode.accepts(*c)).collect();
    let mut cursor_pos = input.len() + 1; // 1-based: 1 = before first char
    let mut cancelled = false;

    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(input.into_iter().collect()),
    };

    let shown = mode.render(&input);
    print!("{}: {}", prompt, shown);
    flush();
    let mut last_display_len = shown.chars().count();

    loop {
        let key_event = match read() {
            Ok(Event::Key(k)) if k.kind != KeyEventKind::Release => k,
            Ok(_) => continue,
            Err(_) => break,
        };
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

        match key_event.code {
            KeyCode::Char('c') if ctrl => {
                input.zeroize();
                reset_terminal();
                println!();
                std::process::exit(0);
            }
            KeyCode::Char('q') if ctrl => {
                cancelled = true;
                break;
            }
            KeyCode::Esc => {
                cancelled = true;
                break;
            }
            KeyCode::Char('u') if ctrl => {
                input.zeroize();
                input.clear();
                cursor_pos = 1;
            }
            KeyCode::Enter => break,
            KeyCode::Backspace if cursor_pos > 1 => {
                cursor_pos -= 1;
                input.remove(cursor_pos - 1);
            }
            KeyCode::Delete if cursor_pos <= input.len() => {
                input.remove(cursor_pos - 1);
            }
            KeyCode::Left if cursor_pos > 1 => cursor_pos -= 1,
            KeyCode::Right if cursor_pos <= input.len() => cursor_pos += 1,
            KeyCode::Home => cursor_pos = 1,
            KeyCode::End => cursor_pos = input.len() + 1,
            KeyCode::Char(c) if !ctrl && mode.accepts(c) => {
                input.insert(cursor_pos - 1, c);
                cursor_pos += 1;
            }
            _ => {}
        }

        let shown = mode.render(&input);
        print!("\r{}: {}", prompt, " ".repeat(last_display_len + 1));
        print!("\r{}: {}", prompt, shown);
        last_display_len = shown.chars().count();
        print!(
            "\x1b[{}G",
            prompt.chars().count() + 2 + mode.display_col(&input, cursor_pos)
        );
        flush();
    }

    drop(guard);
    println!();

    if cancelled {
        input.zeroize();
        None
    } else {
        let line: String = input.iter().collect();
        input.zeroize();
        Some(line)
    }
}

/// Numeric input with live comma formatting. Empty input yields 0.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let initial = if initial_value > 0 {
        initial_value.to_string()
    } else {
        String::new()
    };
    let digits = edit_line(prompt, &initial, Mode::Numeric)?;
    Some(parse_digits(&digits))
}

/// Digits too large for `usize` saturate so range checks reject them.
fn parse_digits(digits: &str) -> usize {
    if digits.is_empty() {
        0
    } else {
        digits.parse().unwrap_or(usize::MAX)
    }
}

pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    edit_line(prompt, initial_value, Mode::Text)
}

/// Input echoed as `*`. Caller should zeroize the result.
pub fn get_masked_input(prompt: &str) -> Option<String> {
    edit_line(prompt, "", Mode::Masked)
}

/// y/n question; anything but `y`/`yes` is no. None if cancelled.
pub fn get_yes_no(prompt: &str, current: bool) -> Option<bool> {
    let initial = if current { "y" } else { "n" };
    let answer = get_editable_input(&format!("{prompt} (y/n)"), initial)?;
    Some(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
