//! Telemetry helpers for hosts embedding `gviz-script`.
//!
//! Script generation only emits `tracing` events (`debug!` per generated
//! script, `warn!` for skipped table input). Installing a subscriber is left
//! to the host; the helpers here cover notebooks and small tools that have none.

/// Filter used when `RUST_LOG` is unset: warnings from this crate only.
pub const DEFAULT_FILTER: &str = "gviz_script=warn";

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`, or by
/// [`DEFAULT_FILTER`] when the variable is unset.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Like [`init_default_tracing`] with a caller-chosen fallback filter,
/// e.g. `"gviz_script=debug"` to log every generated script.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
