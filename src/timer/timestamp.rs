//! This module contains the opaque monotonic nanosecond timestamp used by [`ScopedTimer`](crate::timer::ScopedTimer).

use crate::provider::TimestampNowImpl;
use crate::provider::TimestampNowProvider;

/// A monotonic timestamp expressed in nanoseconds.
///
/// This type is intentionally opaque to avoid comparison inconsistencies between builds
/// that have instrumentation enabled or disabled. The only way out is [`as_micros`],
/// which is what a trace event records.
///
/// # Examples
///
/// ```rust
/// # use chrome_trace_scope::timer::TraceTimestamp;
/// let start = TraceTimestamp::now();
/// let micros = start.as_micros();
/// ```
///
/// [`as_micros`]: TraceTimestamp::as_micros
#[derive(Copy, Clone, Debug)]
pub struct TraceTimestamp(u64);

impl TraceTimestamp {
    /// Returns the current monotonic time.
    #[inline]
    #[must_use]
    pub fn now() -> Self {
        <TimestampNowImpl as TimestampNowProvider>::now()
    }

    /// Creates a timestamp from the given nanoseconds of monotonic time.
    pub(crate) const fn from_monotonic_nanos(nanos: u64) -> Self {
        Self(nanos)
    }

    /// Returns this timestamp in whole microseconds, truncating the remainder.
    #[inline]
    #[must_use]
    pub fn as_micros(self) -> i64 {
        i64::try_from(self.0 / 1_000).unwrap_or(i64::MAX)
    }
}
