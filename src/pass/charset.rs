//! Character classes and pool building for password generation.

use std::fmt;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SPECIAL: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?/";

/// One of the four character classes a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharClass {
    /// All classes in canonical order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Special,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }

    /// Number of distinct characters in the class alphabet.
    pub fn size(self) -> usize {
        self.alphabet().len()
    }

    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }

    /// Class a character belongs to, if any.
    pub fn of(c: char) -> Option<CharClass> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }

    fn bit(self) -> u8 {
        match self {
            CharClass::Lowercase => 1,
            CharClass::Uppercase => 1 << 1,
            CharClass::Digit => 1 << 2,
            CharClass::Special => 1 << 3,
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digit => "digit",
            CharClass::Special => "special",
        };
        f.write_str(name)
    }
}

/// Set of enabled character classes. Iterates in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub const fn all() -> Self {
        ClassSet(0b1111)
    }

    pub fn with(mut self, class: CharClass) -> Self {
        self.insert(class);
        self
    }

    pub fn without(mut self, class: CharClass) -> Self {
        self.remove(class);
        self
    }

    pub fn insert(&mut self, class: CharClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharClass) {
        self.0 &= !class.bit();
    }

    /// Enable or disable `class`.
    pub fn set(&mut self, class: CharClass, enabled: bool) {
        if enabled {
            self.insert(class);
        } else {
            self.remove(class);
        }
    }

    pub fn contains(self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = CharClass> {
        CharClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }
}

impl FromIterator<CharClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

/// Build the candidate pool from the enabled classes.
pub fn build(classes: ClassSet) -> Vec<char> {
    let mut chars: Vec<char> = Vec::with_capacity(pool_size(classes));

    for class in classes.iter() {
        chars.extend(class.alphabet().chars());
    }

    chars
}

/// Size of the candidate pool (for entropy calculation).
pub fn pool_size(classes: ClassSet) -> usize {
    classes.iter().map(CharClass::size).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_are_disjoint() {
        for c in build(ClassSet::all()) {
            let owners = CharClass::ALL.iter().filter(|k| k.contains(c)).count();
            assert_eq!(owners, 1, "{c:?} belongs to {owners} classes");
        }
    }

    #[test]
    fn pool_matches_enabled_classes() {
        let classes: ClassSet = [CharClass::Digit, CharClass::Special].into_iter().collect();
        let pool = build(classes);

        assert_eq!(pool.len(), 10 + 27);
        assert_eq!(pool_size(classes), pool.len());
        assert!(pool.iter().all(|c| !c.is_ascii_alphabetic()));
    }

    #[test]
    fn class_set_iterates_in_canonical_order() {
        let mut set = ClassSet::empty();
        set.insert(CharClass::Special);
        set.insert(CharClass::Lowercase);
        set.set(CharClass::Digit, true);
        set.set(CharClass::Digit, false);

        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec![CharClass::Lowercase, CharClass::Special]);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }

    #[test]
    fn classifies_characters() {
        assert_eq!(CharClass::of('q'), Some(CharClass::Lowercase));
        assert_eq!(CharClass::of('Q'), Some(CharClass::Uppercase));
        assert_eq!(CharClass::of('7'), Some(CharClass::Digit));
        assert_eq!(CharClass::of('/'), Some(CharClass::Special));
        assert_eq!(CharClass::of(' '), None);
        assert_eq!(CharClass::of('é'), None);
    }
}
