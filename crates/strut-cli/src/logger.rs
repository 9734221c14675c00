//! Logging setup for the Strut CLI.
//!
//! Level selection: `--verbose` wins, then `--quiet`, then `RUST_LOG`, then
//! info for the strut crates.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("strut_config=debug,strut_cli=debug")
    } else if quiet {
        EnvFilter::new("strut_config=error,strut_cli=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("strut_config=info,strut_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // Log to stderr so stdout stays a clean, parseable plan.
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer.with_writer(std::io::stderr))
        .init();
}
