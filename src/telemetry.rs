//! Tracing setup for hosts embedding the ruler.
//!
//! Events emitted under the `time_ruler` target:
//! - `debug`: initialization, explicit setters (reference time, unit size,
//!   highlights) and wheel zoom steps.
//! - `trace`: every pointer event with its gesture and every render pass with
//!   its tick and command counts.
//! - `warn`: a backend rejecting a frame.
//!
//! Hosts with their own subscriber need nothing from this module.

/// Default `tracing` filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "time_ruler=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`]. Only available with the `telemetry` feature.
///
/// Returns `false` without the feature, or when a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
