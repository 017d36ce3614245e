//! Shared pieces of the Parascan binaries

pub mod args;

use std::io::{self, Write};
use tracing_subscriber::{fmt, EnvFilter};

/// Install the stderr log subscriber
///
/// Honors `RUST_LOG`; only warnings and errors are shown otherwise.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Render an error followed by its chain of causes
pub fn format_error(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!(": {}", cause));
        source = cause.source();
    }
    message
}

/// Print `err` to stderr and exit with status 1
pub fn exit_with_error(err: &dyn std::error::Error) -> ! {
    eprintln!("Error: {}", format_error(err));
    std::process::exit(1);
}

/// Write to stdout, exit silently on broken pipe
pub fn writeln_safe(s: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", s) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("Error writing to stdout: {}", e);
        std::process::exit(1);
    }
}
