use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize diagnostics on stderr.
///
/// - Uses `RUST_LOG` for filtering (defaults to "warn" if not set)
/// - Compact, timestamp-free lines so warnings read like CLI output
/// - Never writes to stdout, which carries search results
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .compact()
        .init();
}

pub fn default_color_mode() -> ColorMode {
    if io::stdout().is_terminal() {
        ColorMode::Always
    } else {
        ColorMode::Never
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Always,
    Never,
}
