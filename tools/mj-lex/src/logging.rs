use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for the lexer and this tool.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=mj_lexer=debug` or `RUST_LOG=mj_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
