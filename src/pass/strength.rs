//! Password strength scoring.

use std::fmt;

use super::CharClass;

/// Coarse strength level for a 1-5 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    VeryWeak = 1,
    Weak = 2,
    Moderate = 3,
    Strong = 4,
    VeryStrong = 5,
}

impl Strength {
    /// Scores outside 1..=5 are clamped.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => Strength::VeryWeak,
            2 => Strength::Weak,
            3 => Strength::Moderate,
            4 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    /// 1 (very weak) to 5 (very strong).
    pub score: u8,
    /// Length note, then variety note.
    pub feedback: Vec<&'static str>,
}

impl StrengthReport {
    pub fn label(&self) -> Strength {
        Strength::from_score(self.score)
    }

    /// `Very Weak (1/5)`
    pub fn summary(&self) -> String {
        format!("{} ({}/5)", self.label(), self.score)
    }
}

impl fmt::Display for StrengthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Strength: {}", self.summary())?;
        write!(f, "Feedback: {}", self.feedback.join(" | "))
    }
}

/// Score a password on length and character-class variety. Never fails.
pub fn evaluate(password: &str) -> StrengthReport {
    let mut feedback = Vec::with_capacity(2);

    let len = password.chars().count();
    let mut raw: u8 = if len < 8 {
        feedback.push("Password is too short");
        1
    } else if len < 12 {
        feedback.push("Good length");
        2
    } else {
        feedback.push("Excellent length");
        3
    };

    let variety = CharClass::ALL
        .iter()
        .filter(|class| password.chars().any(|c| class.contains(c)))
        .count() as u8;
    raw += variety;

    feedback.push(match variety {
        0 | 1 => "Add more types of characters",
        2 | 3 => "Good character variety",
        _ => "Excellent character variety",
    });

    StrengthReport {
        score: (raw / 2).clamp(1, 5),
        feedback,
    }
}
