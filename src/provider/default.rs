//! This module contains the clock used when instrumentation is compiled out.

use crate::provider::TimestampNowProvider;
use crate::timer::TraceTimestamp;

/// A [`TimestampNowProvider`] that always reports zero.
pub struct TimestampNowImpl;

impl TimestampNowProvider for TimestampNowImpl {
    /// Returns a zero timestamp.
    ///
    /// Not `const`, so the signature matches the real providers.
    fn now() -> TraceTimestamp {
        TraceTimestamp::from_monotonic_nanos(0)
    }
}
