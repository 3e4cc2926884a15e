use std::collections::HashSet;

use passgen::{CharClass, ClassSet, GenerateError, GenerationConfig, Strength, evaluate, generate};

const TRIALS: usize = 300;

fn distinct_from(password: &str, class: CharClass) -> HashSet<char> {
    password.chars().filter(|c| class.contains(*c)).collect()
}

fn assert_invariants(config: &GenerationConfig, password: &str) {
    assert_eq!(password.chars().count(), config.length, "{password}");
    for c in password.chars() {
        let class = CharClass::of(c).unwrap_or_else(|| panic!("{c:?} is in no class"));
        assert!(config.classes.contains(class), "{c:?} leaked from disabled {class}");
    }
    for class in config.classes.iter() {
        assert!(
            distinct_from(password, class).len() >= config.min_per_class,
            "{password} has too few distinct {class} characters"
        );
    }
}

#[test]
fn invariants_hold_over_many_configs() {
    let class_sets = [
        ClassSet::all(),
        ClassSet::empty().with(CharClass::Lowercase),
        ClassSet::empty().with(CharClass::Digit).with(CharClass::Special),
        ClassSet::all().without(CharClass::Special),
    ];

    for classes in class_sets {
        for (length, min) in [(8, 0), (12, 1), (24, 3), (40, 10)] {
            let config = GenerationConfig::new(length)
                .with_classes(classes)
                .min_per_class(min);
            if config.validate().is_err() {
                continue;
            }
            for _ in 0..TRIALS {
                let password = generate(&config).unwrap();
                assert_invariants(&config, &password);
            }
        }
    }
}

#[test]
fn four_of_four_fits_exactly() {
    let config = GenerationConfig::new(4).min_per_class(1);
    for _ in 0..TRIALS {
        let password = generate(&config).unwrap();
        assert_eq!(password.len(), 4);
        for class in CharClass::ALL {
            assert_eq!(distinct_from(&password, class).len(), 1);
        }
    }
}

#[test]
fn outputs_vary_between_calls() {
    let config = GenerationConfig::new(12);
    let seen: HashSet<String> = (0..50).map(|_| generate(&config).unwrap()).collect();
    assert!(seen.len() > 45);
}

#[test]
fn failures_are_structured() {
    let too_short = GenerationConfig::new(3).min_per_class(1);
    assert!(matches!(generate(&too_short), Err(GenerateError::InvalidConfig(_))));

    let nothing = GenerationConfig::new(10)
        .with_classes(ClassSet::empty())
        .min_per_class(0);
    assert!(matches!(generate(&nothing), Err(GenerateError::InvalidConfig(_))));

    let too_many_specials = GenerationConfig::new(200)
        .with_classes(ClassSet::empty().with(CharClass::Special))
        .min_per_class(28);
    let err = generate(&too_many_specials).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot draw 28 distinct special characters, only 27 exist"
    );
}

#[test]
fn generated_passwords_can_be_rated() {
    let config = GenerationConfig::new(16).min_per_class(2);
    let report = evaluate(&generate(&config).unwrap());
    assert_eq!(report.score, 3);
    assert_eq!(report.label(), Strength::Moderate);
    assert_eq!(report.feedback, vec!["Excellent length", "Excellent character variety"]);
}

#[test]
fn evaluator_reference_cases() {
    let empty = evaluate("");
    assert_eq!(empty.score, 1);
    assert!(empty.feedback.iter().any(|n| n.contains("too short")));
    assert!(empty.feedback.iter().any(|n| n.contains("Add more types")));

    assert_eq!(evaluate("Abc123!@").summary(), "Moderate (3/5)");
    assert_eq!(evaluate("aaaaaaaaaaaa").summary(), "Weak (2/5)");
}
