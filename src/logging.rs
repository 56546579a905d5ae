use anyhow::Result;
use std::io;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// In TUI mode logs go to a file so the alternate screen stays clean; in
/// one-shot CLI mode they go to stderr.
pub fn init(level: &str, to_stderr: bool) -> Result<()> {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    if to_stderr {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(io::stderr))
            .init();
    } else {
        let log_file = std::sync::Arc::new(std::fs::File::create("./shade.log")?);
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(log_file),
            )
            .init();
    }
    info!("logging initialized");
    Ok(())
}
