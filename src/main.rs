//! # fxconv Main Entry Point
//!
//! Sets up logging on stderr, then hands the invocation to the controller.

use anyhow::Result;
use fxconv::{config, AppController, CommandLineArgs};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_new(config::get_log_level())
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::rfc_3339())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = CommandLineArgs::parse();
    let code = AppController::new(args)?.run()?;

    std::process::exit(code);
}
