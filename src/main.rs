use std::env;

use passgen::settings::Settings;
use passgen::{cli, exits, tui};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    exits::reset_terminal();
    exits::install_handlers();
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 if !Settings::has_saved_command() => tui::run(),
        _ => cli::run(args),
    }
}
