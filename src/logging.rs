//! Tracing initialization.

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

static INIT: Once = Once::new();

/// Initialize tracing for the server binary. Safe to call multiple times.
///
/// Output goes to stderr at INFO; stdout carries the MCP protocol.
pub fn init() {
    install(Level::INFO, false);
}

/// Initialize tracing for tests: DEBUG level, routed through the test harness
/// so output only shows for failing tests.
pub fn init_for_tests() {
    install(Level::DEBUG, true);
}

fn install(level: Level, test_writer: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env().add_directive(level.into());

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .with_span_events(FmtSpan::NONE)
            .compact();

        let result = if test_writer {
            builder.with_test_writer().try_init()
        } else {
            builder.with_writer(std::io::stderr).try_init()
        };
        if let Err(e) = result {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
