// ABOUTME: Tracing subscriber setup for the plotgrid binary.
// ABOUTME: Logs go to stderr so stdout stays clean for rendered output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Console logging filtered by RUST_LOG, `warn` when unset
/// (e.g. `RUST_LOG=plotgrid_layout=trace` to see every placed cell)
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}
