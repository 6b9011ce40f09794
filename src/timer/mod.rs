//! This module contains the types for timing scoped regions of code.

mod scoped_timer;
mod timestamp;

pub use scoped_timer::ScopedTimer;
pub use timestamp::TraceTimestamp;
