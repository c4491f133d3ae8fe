use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logs go to stderr since stdout carries MCP
/// traffic and `--json` output. `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
