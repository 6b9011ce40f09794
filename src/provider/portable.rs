//! This module contains a clock built on [`Instant`] for platforms without a dedicated provider.

use std::sync::LazyLock;
use std::time::Instant;

use crate::provider::TimestampNowProvider;
use crate::timer::TraceTimestamp;

/// The instant all portable timestamps are measured from.
static CLOCK_ANCHOR: LazyLock<Instant> = LazyLock::new(Instant::now);

/// A monotonic nanosecond timestamp relative to the first clock read in this process.
#[cfg_attr(target_family = "unix", allow(dead_code))]
pub struct TimestampNowImpl;

impl TimestampNowProvider for TimestampNowImpl {
    fn now() -> TraceTimestamp {
        TraceTimestamp::from_monotonic_nanos(nanos_since_anchor())
    }
}

/// Returns the nanoseconds elapsed since [`CLOCK_ANCHOR`] was first read.
pub(crate) fn nanos_since_anchor() -> u64 {
    u64::try_from(CLOCK_ANCHOR.elapsed().as_nanos()).unwrap_or(u64::MAX)
}
