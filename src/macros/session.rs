//! This module defines [`start_session!`](crate::start_session) and [`end_session!`](crate::end_session).

/// Begins a session on the global [`TraceWriter`](crate::writer::TraceWriter).
///
/// Without a path the session writes to [`DEFAULT_TRACE_PATH`](crate::DEFAULT_TRACE_PATH).
///
/// ```rust
/// # use chrome_trace_scope::prelude::*;
/// # let dir = tempfile::tempdir().unwrap();
/// # let path = dir.path().join("startup.json");
/// start_session!("startup", &path);
/// end_session!();
/// ```
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! start_session {
    ($name:expr $(,)?) => {
        $crate::writer::TraceWriter::global().begin_default_session($name)
    };
    ($name:expr, $path:expr $(,)?) => {
        $crate::writer::TraceWriter::global().begin_session($name, $path)
    };
}

/// Begins a session on the global [`TraceWriter`](crate::writer::TraceWriter).
///
/// Instrumentation is disabled, so this expands to `()`.
#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! start_session {
    ($name:expr $(,)?) => {
        ()
    };
    ($name:expr, $path:expr $(,)?) => {
        ()
    };
}

/// Ends the global [`TraceWriter`](crate::writer::TraceWriter)'s session, finalizing its file.
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! end_session {
    () => {
        $crate::writer::TraceWriter::global().end_session()
    };
}

/// Ends the global [`TraceWriter`](crate::writer::TraceWriter)'s session.
///
/// Instrumentation is disabled, so this expands to `()`.
#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! end_session {
    () => {
        ()
    };
}
