use slog::commands::cli::slog_options;
use slog::commands::log;
use slog::errors::exit_code_of;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let specs = slog_options();
    let parsed = specs.parse(&args);

    let debug = parsed.is_set("debug") || parsed.is_set("verbose");
    if let Err(e) = slog::logging::init(debug) {
        eprintln!("warning: could not set up logging: {e}");
    }

    match log::run(&specs, &parsed, Box::new(std::io::stdout())) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(u8::try_from(exit_code_of(&e)).unwrap_or(1))
        }
    }
}
