//! Diagnostic output on stderr
//!
//! `--debug` turns on `debug` level for this crate; otherwise `RUST_LOG` is
//! honored and defaults to `warn`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub fn init(debug: bool) -> anyhow::Result<()> {
    let filter = if debug {
        EnvFilter::new("slog=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()?;
    Ok(())
}
