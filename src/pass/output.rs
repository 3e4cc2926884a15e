//! Rendering of generated passwords and strength reports.

use std::io::{self, Write};

use zeroize::Zeroize;

use super::{GenerationConfig, StrengthReport, charset, evaluate};
use crate::terminal::{
    RESET, box_bottom, box_line, box_top, box_wrapped, calculate_entropy, entropy_strength,
    strength_color,
};

/// Entropy estimate for passwords built from `config`: (bits, description).
pub fn entropy(config: &GenerationConfig) -> (f64, &'static str) {
    let bits = calculate_entropy(config.length, charset::pool_size(config.classes));
    (bits, entropy_strength(bits))
}

fn draw_entropy(config: &GenerationConfig) {
    let (bits, strength) = entropy(config);
    box_top("Entropy");
    box_line(&format!("{:.1} bits ({})", bits, strength));
    box_line(&format!(
        "Charset: {} chars • Minimum per type: {}",
        charset::pool_size(config.classes),
        config.min_per_class
    ));
    box_bottom();
    println!();
}

fn draw_report(report: &StrengthReport) {
    let color = strength_color(report.label());
    box_top("Strength");
    box_line(&format!("{color}{}{RESET}", report.summary()));
    for note in &report.feedback {
        box_line(&format!("• {note}"));
    }
    box_bottom();
}

/// Boxed TUI view of freshly generated passwords.
pub fn print_generated(passwords: &[String], config: &GenerationConfig) {
    draw_entropy(config);

    for (i, pass) in passwords.iter().enumerate() {
        let title = if passwords.len() > 1 {
            format!("Password {}", i + 1)
        } else {
            "Generated Password".to_string()
        };
        box_top(&title);
        box_wrapped(pass);
        box_bottom();
        draw_report(&evaluate(pass));
        println!();
    }
}

/// Boxed TUI view of a checked password.
pub fn print_report(report: &StrengthReport) {
    draw_report(report);
    println!();
}

/// Plain CLI output: `Password N:`, the password, then its strength lines.
/// With `bare` set only the password line is written.
pub fn write_plain<W: Write>(out: &mut W, index: usize, password: &str, bare: bool) -> io::Result<()> {
    if bare {
        let mut line = String::with_capacity(password.len() + 1);
        line.push_str(password);
        line.push('\n');
        let result = out.write_all(line.as_bytes());
        line.zeroize();
        return result;
    }

    let report = evaluate(password);
    let mut block = format!("\nPassword {index}:\n{password}\n{report}\n");
    let result = out.write_all(block.as_bytes());
    block.zeroize();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{CharClass, ClassSet};

    #[test]
    fn plain_output_includes_report() {
        let mut out = Vec::new();
        write_plain(&mut out, 1, "aaaaaaaaaaaa", false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "\nPassword 1:\naaaaaaaaaaaa\nStrength: Weak (2/5)\nFeedback: Excellent length | Add more types of characters\n"
        );
    }

    #[test]
    fn bare_output_is_password_only() {
        let mut out = Vec::new();
        write_plain(&mut out, 3, "Abc123!@", true).unwrap();
        assert_eq!(out, b"Abc123!@\n");
    }

    #[test]
    fn entropy_tracks_enabled_classes() {
        let digits = GenerationConfig::new(10).with_classes(ClassSet::empty().with(CharClass::Digit));
        let (bits, label) = entropy(&digits);
        assert!((bits - 33.2).abs() < 0.1);
        assert_eq!(label, "Weak");
    }
}
