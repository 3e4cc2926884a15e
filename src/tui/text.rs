use crate::pass::{CharClass, charset};
use crate::settings::Settings;
use crate::terminal::{
    RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top, clear, flush,
    format_number, print_error, print_rule,
};

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to generate)"
}

fn yes_no(b: bool) -> &'static str {
    if b { "Yes" } else { "No" }
}

pub fn print_help() {
    box_top("Passgen");
    box_line_center("Password generator and strength checker");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens a menu to generate");
    box_line("     passwords, check a password's strength, and edit options.");
    box_line("  2) Client: Pass flags directly (e.g., -l 20 -n 5) to generate");
    box_line("     passwords without the menu.");
    box_line("  3) Command: Use -c to save flags as defaults. Future runs of");
    box_line("     `passgen` will use those flags automatically. Clear with");
    box_line("     `passgen -c`.");
    box_line("");
    box_line("USAGE:");
    box_line("  passgen [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password (default: 12)");
    box_opt("  -n, --number <N>", "How many passwords to generate (default: 1)");
    box_opt("  -m, --min-each <N>", "Minimum characters of each enabled type (default: 1)");
    box_opt("      --no-lowercase", "Exclude lowercase letters");
    box_opt("      --no-uppercase", "Exclude uppercase letters");
    box_opt("      --no-digits", "Exclude numbers");
    box_opt("      --no-special", "Exclude special characters");
    box_line("");
    box_line(" Strength:");
    box_opt("  -e, --check [PASSWORD]", "Rate a password. Reads stdin if no value is given.");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Print passwords only (or the bare score with --check)");
    box_line("");
    box_line(" Settings:");
    box_opt("  -c, --command [FLAGS]", "Save flags as defaults. Run alone to clear, `-c get` to show.");
    box_opt("  -d, --default", "Use default settings");
    box_opt("  -s, --saved", "Use saved settings from config file");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passgen                  Interactive or command mode (if set)");
    box_line("  passgen -l 16            One password, 16 characters");
    box_line("  passgen -l 20 -n 3       Three passwords, 20 characters each");
    box_line("  passgen -m 3             At least 3 of each character type");
    box_line("  passgen --no-special     Alphanumeric only");
    box_line("  passgen --check 'hunter2'  Rate an existing password");
    box_line("  passgen -c -l 20         Save -l 20 as default");
    box_line("");
    box_bottom();
    println!();
}

pub fn print_main_menu(print_invalid: &mut bool) {
    box_top("Password Generator");
    box_line("");
    box_line("  1) generate a password");
    box_line("  2) check password strength");
    box_line("  3) options");
    box_line("  4) help");
    box_line("  5) quit");
    box_line("");
    box_bottom();

    if *print_invalid {
        print_error("Invalid choice. Please try again.");
        *print_invalid = false;
    } else {
        println!();
    }
    flush();
}

pub fn print_check_header() {
    box_top("Check Password Strength");
    box_line_center("Esc/CTRL+Q: back | CTRL+U: clear input");
    box_bottom();
    println!();
    flush();
}

pub fn print_options_menu(settings: &Settings, error_txt: &str) {
    clear();
    box_top("Password Options");
    box_line_center("Esc/CTRL+Q: cancel | CTRL+U: clear input");
    box_line("");

    box_line(&format!("{UNDERLINE}General{RESET}:"));
    box_line(&format!("  1) Length: {}", format_number(settings.pass_length)));
    box_line("      - 4 to 100");
    box_line(&format!(
        "  2) Number of passwords: {}",
        format_number(settings.number_of_passwords)
    ));

    box_line("");
    box_line(&format!("{UNDERLINE}Character Types{RESET}:"));
    box_line(&format!("  3) Lowercase letters: {}", yes_no(settings.uses(CharClass::Lowercase))));
    box_line(&format!("  4) Uppercase letters: {}", yes_no(settings.uses(CharClass::Uppercase))));
    box_line(&format!("  5) Numbers: {}", yes_no(settings.uses(CharClass::Digit))));
    box_line(&format!("  6) Special characters: {}", yes_no(settings.uses(CharClass::Special))));
    box_line(&format!("  7) Minimum of each type: {}", settings.min_per_class));
    box_line("      - 0 to 5");
    box_line(&format!(
        "      Charset: {} chars",
        charset::pool_size(settings.classes)
    ));

    box_line("");
    box_line(&format!("{UNDERLINE}Command on start{RESET}:"));
    box_line(&format!("  8) Command to run with 'passgen': {}", settings.cli_command));
    box_line("      - Ex: -l 22 -n 1 (see help)");

    box_line("");
    print_rule();
    box_line("     r) load defaults  |  f) load saved  |  s) save  |  e) exit");
    box_bottom();

    if error_txt.is_empty() {
        println!();
    } else {
        print_error(error_txt);
    }
    flush();
}
