use log::debug;
use zeroize::Zeroize;

use crate::pass::{self, CharClass, ClassSet, DEFAULT_LENGTH, DEFAULT_MIN_PER_CLASS, output};
use crate::settings::Settings;
use crate::terminal::{clear, print_error, reset_terminal};

use super::{
    enter_prompt, get_editable_input, get_masked_input, get_numeric_input, get_yes_no,
    print_check_header, print_help, print_main_menu, print_options_menu,
};

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 100;
pub const MAX_MIN_EACH: usize = 5;

/// Interactive session. Settings live here for the whole session and are
/// only written to disk on `s` in the options menu.
pub fn gen_main_menu() {
    reset_terminal();
    clear();

    let mut settings = match Settings::load_from_file() {
        Ok(s) => s,
        Err(e) => {
            print_error(&format!("Error loading settings: {}", e));
            Settings::default()
        }
    };
    let mut print_invalid = false;

    loop {
        print_main_menu(&mut print_invalid);

        let input = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => {
                clear();
                continue;
            }
        };

        match input.trim() {
            "" | "1" => {
                clear();
                generate_screen(&settings);
            }
            "2" => {
                clear();
                check_screen();
            }
            "3" => update_options(&mut settings),
            "4" => {
                clear();
                print_help();
            }
            "5" | "q" => {
                clear();
                println!("Thank you for using Password Generator. Goodbye!");
                break;
            }
            _ => {
                clear();
                print_invalid = true;
            }
        }
    }
}

fn generate_screen(settings: &Settings) {
    let config = settings.to_config();
    match pass::generate_batch(&config, settings.number_of_passwords.max(1)) {
        Ok(mut passwords) => {
            output::print_generated(&passwords, &config);
            passwords.iter_mut().for_each(Zeroize::zeroize);
        }
        Err(e) => {
            print_error(&format!("Error: {}", e));
            println!();
        }
    }
}

fn check_screen() {
    print_check_header();
    if let Some(mut password) = get_masked_input("Enter password to check") {
        println!();
        output::print_report(&pass::evaluate(&password));
        password.zeroize();
    } else {
        clear();
    }
}

pub fn update_options(settings: &mut Settings) {
    let mut error_txt = String::new();

    loop {
        print_options_menu(settings, &error_txt);
        error_txt.clear();

        let choice = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => {
                clear();
                break;
            }
        };
        let choice = choice.trim();

        if choice.is_empty() {
            clear();
            generate_screen(settings);
            break;
        }

        let action = match choice.parse::<u32>() {
            Ok(num) => menu_options(num, settings),
            Err(_) => command_options(choice, settings),
        };

        match action {
            Action::Stay(Some(msg)) => error_txt = msg,
            Action::Stay(None) => {}
            Action::Leave => {
                clear();
                break;
            }
        }
    }
}

enum Action {
    /// Redraw the menu, optionally with an error line.
    Stay(Option<String>),
    Leave,
}

fn menu_options(choice: u32, settings: &mut Settings) -> Action {
    let error = match choice {
        1 => get_numeric_input("Enter password length (4-100)", settings.pass_length)
            .and_then(|len| set_length(settings, len).err()),
        2 => {
            if let Some(n) =
                get_numeric_input("Enter number of passwords", settings.number_of_passwords)
            {
                settings.number_of_passwords = n.max(1);
            }
            None
        }
        3..=6 => {
            let class = CharClass::ALL[(choice - 3) as usize];
            get_yes_no(&format!("Include {class} characters?"), settings.uses(class))
                .and_then(|on| set_class(settings, class, on).err())
        }
        7 => get_numeric_input("Minimum of each selected type (0-5)", settings.min_per_class)
            .and_then(|min| set_min_each(settings, min).err()),
        8 => {
            if let Some(command) =
                get_editable_input("Enter flags and values", &settings.cli_command)
            {
                settings.cli_command = command.trim().to_string();
            }
            None
        }
        _ => Some("Invalid input, please enter a valid menu option...".to_string()),
    };
    Action::Stay(error)
}

fn command_options(choice: &str, settings: &mut Settings) -> Action {
    if choice == "help" {
        clear();
        print_help();
        return Action::Leave;
    }

    if !choice.chars().all(|c| matches!(c, 's' | 'e' | 'r' | 'f')) {
        return Action::Stay(Some("Invalid selection".to_string()));
    }

    let mut error = None;
    for ch in choice.chars() {
        match ch {
            's' => {
                if let Err(e) = settings.save_to_file() {
                    error = Some(format!("Error saving settings: {}", e));
                } else {
                    debug!("options saved");
                }
            }
            'r' => *settings = Settings::default(),
            'f' => match Settings::load_from_file() {
                Ok(s) => *settings = s,
                Err(e) => error = Some(format!("Error loading settings: {}", e)),
            },
            _ => {}
        }
    }

    if choice.contains('e') && error.is_none() {
        return Action::Leave;
    }
    Action::Stay(error)
}

/// Lengths outside 4..=100 fall back to the default.
fn set_length(settings: &mut Settings, len: usize) -> Result<(), String> {
    if (MIN_LENGTH..=MAX_LENGTH).contains(&len) {
        settings.pass_length = len;
        Ok(())
    } else {
        settings.pass_length = DEFAULT_LENGTH;
        Err(format!("Invalid length. Using default ({DEFAULT_LENGTH})"))
    }
}

/// Minimums above 5 fall back to the default.
fn set_min_each(settings: &mut Settings, min: usize) -> Result<(), String> {
    if min <= MAX_MIN_EACH {
        settings.min_per_class = min;
        Ok(())
    } else {
        settings.min_per_class = DEFAULT_MIN_PER_CLASS;
        Err(format!("Invalid minimum. Using default ({DEFAULT_MIN_PER_CLASS})"))
    }
}

/// Disabling the last enabled class turns all of them back on.
fn set_class(settings: &mut Settings, class: CharClass, enabled: bool) -> Result<(), String> {
    settings.classes.set(class, enabled);
    if settings.classes.is_empty() {
        settings.classes = ClassSet::all();
        return Err("At least one character type must be selected. Using all types.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_out_of_range_falls_back() {
        let mut settings = Settings::default();
        assert!(set_length(&mut settings, 40).is_ok());
        assert_eq!(settings.pass_length, 40);

        assert!(set_length(&mut settings, 3).is_err());
        assert_eq!(settings.pass_length, 12);

        settings.pass_length = 50;
        assert!(set_length(&mut settings, 101).is_err());
        assert_eq!(settings.pass_length, 12);

        settings.pass_length = 50;
        assert!(set_length(&mut settings, usize::MAX).is_err());
        assert_eq!(settings.pass_length, 12);
    }

    #[test]
    fn min_each_out_of_range_falls_back() {
        let mut settings = Settings::default();
        assert!(set_min_each(&mut settings, 0).is_ok());
        assert_eq!(settings.min_per_class, 0);

        assert!(set_min_each(&mut settings, 6).is_err());
        assert_eq!(settings.min_per_class, 1);
    }

    #[test]
    fn disabling_every_class_enables_all() {
        let mut settings = Settings::default();
        for class in [CharClass::Lowercase, CharClass::Uppercase, CharClass::Digit] {
            assert!(set_class(&mut settings, class, false).is_ok());
        }
        assert_eq!(settings.classes.len(), 1);

        assert!(set_class(&mut settings, CharClass::Special, false).is_err());
        assert_eq!(settings.classes, ClassSet::all());
    }

    #[test]
    fn menu_range_extremes_generate() {
        let mut settings = Settings::default();
        settings.pass_length = MIN_LENGTH;
        settings.min_per_class = 1;
        assert!(settings.to_config().validate().is_ok());

        settings.pass_length = MAX_LENGTH;
        settings.min_per_class = MAX_MIN_EACH;
        assert!(pass::generate(&settings.to_config()).is_ok());
    }

    #[test]
    fn reset_command_restores_defaults() {
        let mut settings = Settings {
            pass_length: 80,
            ..Settings::default()
        };
        assert!(matches!(command_options("r", &mut settings), Action::Stay(None)));
        assert_eq!(settings, Settings::default());
        assert!(matches!(command_options("x", &mut settings), Action::Stay(Some(_))));
        assert!(matches!(command_options("e", &mut settings), Action::Leave));
    }
}
