//! Time scoped regions of code and write them to a Chrome Tracing JSON file.
//!
//! A [`TraceWriter`](writer::TraceWriter) owns one session at a time. Every
//! [`ScopedTimer`](timer::ScopedTimer) created against it submits one "complete"
//! event when it is stopped or dropped. The resulting file can be loaded into
//! `chrome://tracing`, Perfetto, or any other viewer that understands the
//! Trace Event Format.
//!
//! ```rust
//! use chrome_trace_scope::prelude::*;
//! # let dir = tempfile::tempdir().unwrap();
//! # let path = dir.path().join("results.json");
//!
//! let writer = TraceWriter::new();
//! writer.begin_session("startup", &path);
//!
//! {
//!     let _timer = ScopedTimer::new(&writer, "load config");
//!     // ... work ...
//! }
//!
//! writer.end_session();
//! ```
//!
//! Everything is gated behind the `enabled` feature (on by default). Without it
//! the macros expand to nothing, the writer never creates a file, and the clock
//! reads zero.

mod macros;
mod provider;

pub mod error;
pub mod record;
pub mod timer;
pub mod writer;

/// The file a session writes to when no path is given.
pub const DEFAULT_TRACE_PATH: &str = "results.json";

/// Whether instrumentation was compiled in.
pub const ENABLED: bool = cfg!(feature = "enabled");

pub use macros::profile_function::clean_function_name;
#[doc(hidden)]
pub use macros::profile_function::trim_function_path;

/// This module contains everything needed to instrument code within a convenient glob import.
///
/// ```rust
/// use chrome_trace_scope::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::TraceError;
    pub use crate::record::ProfileRecord;
    pub use crate::timer::ScopedTimer;
    pub use crate::timer::TraceTimestamp;
    pub use crate::writer::Session;
    pub use crate::writer::TraceWriter;

    #[doc(inline)]
    pub use crate::end_session;
    #[doc(inline)]
    pub use crate::function_name;
    #[doc(inline)]
    pub use crate::function_path;
    #[doc(inline)]
    pub use crate::profile_function;
    #[doc(inline)]
    pub use crate::profile_function_detailed;
    #[doc(inline)]
    pub use crate::profile_measure;
    #[doc(inline)]
    pub use crate::profile_scope;
    #[doc(inline)]
    pub use crate::start_session;
}
