//! `nct-import` - parse NCT planning sheets from the command line
//!
//! JSON goes to stdout; logs and diagnostics go to stderr.

mod cli;
mod commands;

use tracing_subscriber::EnvFilter;

fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let matches = cli::build().get_matches();
    init_tracing(matches.get_count("verbose"));

    let stdout = std::io::stdout();
    if let Err(e) = commands::run(&matches, &mut stdout.lock()) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
