use thiserror::Error;

use super::{CliFlags, CommandMode};

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
}

const FLAGS: &[&str] = &[
    "-h", "--help", "-v", "--version", "-q", "--quiet", "-b", "--board", "-s", "--saved",
    "-d", "--default", "-c", "--command", "-e", "--check", "-l", "--length", "-n", "--number",
    "-m", "--min-each", "--no-lowercase", "--no-uppercase", "--no-digits", "--no-special",
];

fn is_flag(arg: &str) -> bool {
    FLAGS.contains(&arg) || arg.starts_with("--check=")
}

fn number(args: &[String], i: usize) -> Result<usize, ParseError> {
    let flag = &args[i - 1];
    let value = args
        .get(i)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))?;
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.clone()))
}

/// Parse `args` (including the program name at index 0).
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut command = false;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "-d" | "--default" => flags.default = true,
            "--no-lowercase" => flags.no_lowercase = true,
            "--no-uppercase" => flags.no_uppercase = true,
            "--no-digits" => flags.no_digits = true,
            "--no-special" => flags.no_special = true,
            "-c" | "--command" => {
                command = true;
                if args.get(i + 1).is_some_and(|a| a == "get") {
                    i += 1;
                    flags.command = CommandMode::Get;
                }
            }
            "-e" | "--check" => {
                flags.check = true;
                // Value is optional; without one the password is read from stdin.
                // Passwords may start with `-`, so only known flags end it.
                if let Some(next) = args.get(i + 1)
                    && !is_flag(next)
                {
                    i += 1;
                    flags.check_value = Some(next.clone());
                }
            }
            "-l" | "--length" => {
                i += 1;
                flags.length = Some(number(args, i)?);
            }
            "-n" | "--number" => {
                i += 1;
                flags.number = Some(number(args, i)?);
            }
            "-m" | "--min-each" => {
                i += 1;
                flags.min_each = Some(number(args, i)?);
            }
            arg => match arg.strip_prefix("--check=") {
                Some(value) => {
                    flags.check = true;
                    flags.check_value = Some(value.to_string());
                }
                None => return Err(ParseError::UnknownArg(arg.to_string())),
            },
        }
        i += 1;
    }

    if command && flags.command == CommandMode::None {
        flags.command = if flags.has_explicit_args() || flags.quiet {
            CommandMode::Set
        } else {
            CommandMode::Unset
        };
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        std::iter::once("passgen")
            .chain(line.split_whitespace())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_generation_flags() {
        let flags = parse(&args("-l 20 -n 3 -m 2 --no-special --no-digits")).unwrap();
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.number, Some(3));
        assert_eq!(flags.min_each, Some(2));
        assert!(flags.no_special && flags.no_digits);
        assert!(!flags.no_lowercase && !flags.no_uppercase);
        assert!(flags.has_explicit_args());
    }

    #[test]
    fn no_args_means_nothing_explicit() {
        let flags = parse(&args("")).unwrap();
        assert!(!flags.has_explicit_args());
        assert_eq!(flags.command, CommandMode::None);
    }

    #[test]
    fn check_with_and_without_value() {
        let flags = parse(&args("--check Abc123!@")).unwrap();
        assert!(flags.check);
        assert_eq!(flags.check_value.as_deref(), Some("Abc123!@"));

        let flags = parse(&args("-e -q")).unwrap();
        assert!(flags.check && flags.quiet);
        assert_eq!(flags.check_value, None);
    }

    #[test]
    fn check_value_may_start_with_a_dash() {
        let flags = parse(&args("--check -Ab3!xyz9")).unwrap();
        assert_eq!(flags.check_value.as_deref(), Some("-Ab3!xyz9"));

        let flags = parse(&args("--check=-l")).unwrap();
        assert!(flags.check);
        assert_eq!(flags.check_value.as_deref(), Some("-l"));

        let flags = parse(&args("-e -l 5")).unwrap();
        assert_eq!(flags.check_value, None);
        assert_eq!(flags.length, Some(5));
    }

    #[test]
    fn command_modes() {
        assert_eq!(parse(&args("-c")).unwrap().command, CommandMode::Unset);
        assert_eq!(parse(&args("-c get")).unwrap().command, CommandMode::Get);
        assert_eq!(parse(&args("-c -l 20")).unwrap().command, CommandMode::Set);
        assert_eq!(parse(&args("-l 20 -c")).unwrap().command, CommandMode::Set);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            parse(&args("-l twelve")).unwrap_err(),
            ParseError::InvalidNumber("twelve".into())
        );
        assert_eq!(
            parse(&args("--hex")).unwrap_err(),
            ParseError::UnknownArg("--hex".into())
        );
        assert_eq!(
            parse(&args("-n")).unwrap_err(),
            ParseError::MissingValue("-n".into())
        );
    }
}
