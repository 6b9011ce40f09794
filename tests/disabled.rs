//! This module contains integration tests for builds without the `enabled` feature.

#![cfg(not(feature = "enabled"))]

use chrome_trace_scope::prelude::*;

#[test]
fn macros_compile_to_nothing_and_write_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("disabled.json");

    start_session!("disabled", &path);
    {
        profile_scope!("scope");
        profile_function!();
    }
    let value = profile_measure!({ 40 + 2 }, name: "answer");
    end_session!();

    assert_eq!(value, 42);
    assert!(!chrome_trace_scope::ENABLED);
    assert!(!path.exists());
    assert!(!TraceWriter::global().is_session_open());
}

#[test]
fn direct_use_never_touches_the_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("direct.json");
    let writer = TraceWriter::new();

    writer.begin_session("direct", &path);
    ScopedTimer::new(&writer, "timer").stop();
    writer.end_session();

    assert_eq!(writer.record_count(), 0);
    assert!(!path.exists());
}
