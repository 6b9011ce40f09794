//! This module defines the [`profile_scope!`](crate::profile_scope) macro for scope-based timing.

/// Starts a [`ScopedTimer`](crate::timer::ScopedTimer) that lives until the end of the enclosing block.
///
/// * With only a name, the timer submits to [`TraceWriter::global`](crate::writer::TraceWriter::global).
/// * With a writer and a name, it submits to that writer.
///
/// ```rust
/// # use chrome_trace_scope::prelude::*;
/// # fn step(_: usize) {}
/// fn run(writer: &TraceWriter) {
///     profile_scope!("run");
///
///     for i in 0..3 {
///         profile_scope!(writer, format!("step {i}"));
///         step(i);
///     }
/// }
/// # run(&TraceWriter::new());
/// ```
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! profile_scope {
    ($name:expr $(,)?) => {
        let _profile_scope_timer = $crate::timer::ScopedTimer::global($name);
    };
    ($writer:expr, $name:expr $(,)?) => {
        let _profile_scope_timer = $crate::timer::ScopedTimer::new($writer, $name);
    };
}

/// Starts a scoped timer.
///
/// Instrumentation is disabled, so this expands to nothing.
#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! profile_scope {
    ($name:expr $(,)?) => {};
    ($writer:expr, $name:expr $(,)?) => {};
}
