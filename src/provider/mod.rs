//! This module contains the compile-time selected clock used by [`TraceTimestamp::now`].
//!
//! The default provider no-ops when the crate is built without the `enabled` feature.
//!
//! When `enabled` is on, Unix systems read `CLOCK_MONOTONIC` directly and every other
//! platform measures [`std::time::Instant`] against a process-wide anchor.
//!
//! * A provider must supply a type [`TimestampNowImpl`] that implements [`TimestampNowProvider`].
//!
//! [`TraceTimestamp::now`]: crate::timer::TraceTimestamp::now

use crate::timer::TraceTimestamp;

pub use internal_provider::TimestampNowImpl;

/// A trait implemented by context-specific providers to supply a monotonic nanosecond timestamp.
pub trait TimestampNowProvider {
    /// Returns a monotonic timestamp in nanoseconds.
    fn now() -> TraceTimestamp;
}

#[cfg(not(feature = "enabled"))]
pub mod r#default;
#[cfg(not(feature = "enabled"))]
pub use r#default as internal_provider;

#[cfg(feature = "enabled")]
pub mod portable;
#[cfg(all(feature = "enabled", not(target_family = "unix")))]
pub use portable as internal_provider;

#[cfg(all(feature = "enabled", target_family = "unix"))]
pub mod unix;
#[cfg(all(feature = "enabled", target_family = "unix"))]
pub use unix as internal_provider;
