use std::borrow::Cow;

use crate::record::ProfileRecord;
use crate::timer::TraceTimestamp;
use crate::writer::TraceWriter;

/// A scoped timer that submits one [`ProfileRecord`] when the current scope ends.
///
/// * The record's start time is the moment the timer is created.
/// * The record's end time is the moment the timer is stopped or dropped.
///
/// The record can be submitted before the end of the scope by calling [`stop()`].
///
/// * If [`stop()`] is called explicitly, nothing is submitted again when the timer is dropped.
///
/// # Examples
///
/// ```rust
/// # use chrome_trace_scope::prelude::*;
/// # fn update_physics() {}
/// # fn render_scene() {}
/// # fn update_cache() {}
/// fn render_frame(writer: &TraceWriter) {
///     // Time the entire function.
///     let _timer = ScopedTimer::new(writer, "render frame");
///
///     // Time only the physics and scene portion.
///     let render_segment = ScopedTimer::new(writer, "render scene");
///
///     update_physics();
///     render_scene();
///
///     // Stop here explicitly, instead of at the end of the frame.
///     render_segment.stop();
///
///     let _cache_segment = ScopedTimer::new(writer, "update cache");
///     update_cache();
///
///     // _cache_segment and _timer are submitted when they drop here.
/// }
///
/// render_frame(&TraceWriter::new());
/// ```
///
/// [`stop()`]: ScopedTimer::stop
#[derive(Debug)]
#[must_use = "a timer submits its record when dropped; bind it to a named variable"]
pub struct ScopedTimer<'a> {
    writer: &'a TraceWriter,
    name: Cow<'a, str>,
    /// The timestamp captured when the timer was created.
    start_time: TraceTimestamp,
    stopped: bool,
}

impl<'a> ScopedTimer<'a> {
    /// Starts a timer called `name` that submits to `writer`.
    ///
    /// Accepts [`&str`](str), [`String`], or anything convertible into [`Cow<'a, str>`].
    #[inline]
    pub fn new(writer: &'a TraceWriter, name: impl Into<Cow<'a, str>>) -> Self {
        Self {
            writer,
            name: name.into(),
            start_time: TraceTimestamp::now(),
            stopped: false,
        }
    }

    /// Starts a timer that submits to [`TraceWriter::global`].
    #[inline]
    pub fn global(name: impl Into<Cow<'a, str>>) -> Self {
        Self::new(TraceWriter::global(), name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stops the timer and submits its record immediately, instead of waiting for the end of scope.
    ///
    /// ```rust
    /// # use chrome_trace_scope::prelude::*;
    /// # fn expensive_computation() {}
    /// # fn log_results() {}
    /// fn process_data(writer: &TraceWriter) {
    ///     let timer = ScopedTimer::new(writer, "core computation");
    ///     expensive_computation();
    ///     timer.stop();
    ///
    ///     // Not included in the record, and nothing more is submitted at the end of scope.
    ///     log_results();
    /// }
    /// #
    /// # process_data(&TraceWriter::new());
    /// ```
    #[inline]
    pub fn stop(mut self) {
        self.finish();
    }

    /// Captures the end time and submits the record, at most once.
    fn finish(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;

        let end_time = TraceTimestamp::now();
        let record = ProfileRecord::from_timestamps(&*self.name, self.start_time, end_time);
        self.writer.write_profile(&record);
    }
}

impl Drop for ScopedTimer<'_> {
    /// Submits the record if the timer was not stopped explicitly.
    #[inline]
    fn drop(&mut self) {
        self.finish();
    }
}
