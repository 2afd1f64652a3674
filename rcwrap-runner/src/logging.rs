//! Process-wide tracing setup.

/// Install the global `fmt` subscriber writing to stderr.
///
/// `RUST_LOG` wins over `default_directive`. Safe to call more than once;
/// later calls are no-ops.
pub fn init_tracing(default_directive: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_tracing("debug");
        init_tracing("warn");
        tracing::debug!("still alive");
    }
}
