//! This module contains the clock provider for Unix systems.

use nix::time::ClockId;
use nix::time::clock_gettime;

use crate::provider::TimestampNowProvider;
use crate::provider::portable;
use crate::timer::TraceTimestamp;

/// A monotonic nanosecond timestamp read from `CLOCK_MONOTONIC`.
pub struct TimestampNowImpl;

impl TimestampNowProvider for TimestampNowImpl {
    /// Queries the monotonic clock and converts the result to nanoseconds.
    fn now() -> TraceTimestamp {
        match clock_gettime(ClockId::CLOCK_MONOTONIC) {
            Ok(now) => {
                // Monotonic seconds and nanoseconds are never negative.
                #[allow(clippy::cast_sign_loss)]
                let nanos = now.tv_sec() as u64 * 1_000_000_000 + now.tv_nsec() as u64;
                TraceTimestamp::from_monotonic_nanos(nanos)
            }
            Err(e) => {
                log::warn!("clock_gettime(CLOCK_MONOTONIC) failed: {e}");
                TraceTimestamp::from_monotonic_nanos(portable::nanos_since_anchor())
            }
        }
    }
}
