//! Logging setup for the `keycalc` binary
//!
//! `KEYCALC_LOG` wins over `RUST_LOG`, which wins over the `-v`/`-q` flags.
//! Output goes to stderr so `press` and `eval` results stay pipeable.

use std::io::IsTerminal;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Project-specific filter variable
pub const LOG_ENV: &str = "KEYCALC_LOG";

/// Filter directives for the command-line flags; `-v` beats `-q`
#[must_use]
pub const fn flag_directives(verbose: u8, quiet: bool) -> &'static str {
    match (verbose, quiet) {
        (0, true) => "error",
        (0, false) => "warn",
        (1, _) => "warn,keycalc=debug,keycalc_cli=debug",
        _ => "warn,keycalc=trace,keycalc_cli=trace",
    }
}

/// Installs the stderr subscriber. Later calls keep the first one.
pub fn init_subscriber(verbose: u8, quiet: bool) {
    let env = [LOG_ENV, EnvFilter::DEFAULT_ENV].map(|var| std::env::var(var).ok());
    let filter = pick_filter(env, flag_directives(verbose, quiet));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .compact();

    if tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("subscriber already installed");
    }
}

/// First source that parses, else `fallback`
fn pick_filter(sources: impl IntoIterator<Item = Option<String>>, fallback: &str) -> EnvFilter {
    sources
        .into_iter()
        .flatten()
        .find_map(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}
