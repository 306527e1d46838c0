//! # Shape Calculator CLI
//!
//! Interactive terminal calculator for the area and perimeter of squares,
//! rectangles, circles and triangles. Choose "0" at the main menu to exit.
//!
//! ## Logging
//!
//! Diagnostics go to stderr and are filtered by the `SHAPE_CALC_LOG`
//! environment variable (e.g. `SHAPE_CALC_LOG=debug`). Default: `warn`.

use std::io;

use tracing_subscriber::EnvFilter;

mod menu;
mod session;

use session::Session;

const LOG_ENV: &str = "SHAPE_CALC_LOG";

fn main() {
    init_logging();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    if let Err(e) = session.run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
