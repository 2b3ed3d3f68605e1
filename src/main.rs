use std::env;
use std::process;

use iso3166::cli;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const LOG_VAR: &str = "ISO3166_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() {
    init_tracing();
    let args: Vec<String> = env::args().collect();
    process::exit(cli::run_with_args(&args));
}
