//! Log output for chart render passes.
//!
//! The controller logs each redraw at `debug` (range, view, row count and mount
//! widths) and each skipped pass when a mount point is missing. Chart builds,
//! money-format fallbacks and ignored root attributes log at `trace`. Payloads
//! and theme colors that fail to parse log at `warn`. Nothing here runs unless
//! the host asks for it.

/// Default filter when `RUST_LOG` is unset.
#[cfg(feature = "telemetry")]
const DEFAULT_FILTER: &str = "info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// Needs the `telemetry` feature. Returns `false` without the feature, or when
/// a global subscriber is already in place; chart events then go to that one.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
