//! One measured region and its Trace Event Format serialization.

use std::borrow::Cow;

use serde_derive::Serialize;

use crate::timer::TraceTimestamp;

/// The category every record is filed under.
pub const CATEGORY: &str = "function";

/// The "complete event" phase: a single event carrying both a timestamp and a duration.
pub const PHASE_COMPLETE: &str = "X";

/// A finished measurement, handed to [`TraceWriter::write_profile`](crate::writer::TraceWriter::write_profile).
///
/// `start` and `end` are microseconds on the monotonic clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord<'a> {
    name: Cow<'a, str>,
    start: i64,
    end: i64,
}

impl<'a> ProfileRecord<'a> {
    pub fn new(name: impl Into<Cow<'a, str>>, start: i64, end: i64) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    /// Creates a record spanning from `start` to `end`, converted to microseconds.
    pub fn from_timestamps(
        name: impl Into<Cow<'a, str>>,
        start: TraceTimestamp,
        end: TraceTimestamp,
    ) -> Self {
        Self::new(name, start.as_micros(), end.as_micros())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    /// `end - start`, in microseconds.
    pub fn duration(&self) -> i64 {
        self.end.saturating_sub(self.start)
    }

    /// Appends this record to `out` as one compact JSON object.
    pub(crate) fn write_json(&self, out: &mut Vec<u8>) -> Result<(), serde_json::Error> {
        let name = sanitize_name(&self.name);
        let event = CompleteEvent {
            cat: CATEGORY,
            dur: self.duration(),
            name: &name,
            ph: PHASE_COMPLETE,
            pid: 0,
            tid: 0,
            ts: self.start,
        };
        serde_json::to_writer(out, &event)
    }
}

/// The on-disk shape of a record. Field order is the key order in the file.
#[derive(Serialize)]
struct CompleteEvent<'a> {
    cat: &'static str,
    dur: i64,
    name: &'a str,
    ph: &'static str,
    pid: u32,
    tid: u32,
    ts: i64,
}

/// Replaces every `"` in `name` with `'`.
///
/// Borrows when there is nothing to replace.
pub fn sanitize_name(name: &str) -> Cow<'_, str> {
    if name.contains('"') {
        Cow::Owned(name.replace('"', "'"))
    } else {
        Cow::Borrowed(name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn to_json(record: &ProfileRecord) -> String {
        let mut out = Vec::new();
        record.write_json(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn serializes_fields_in_order() {
        let record = ProfileRecord::new("foo", 1_000, 11_250);
        assert_eq!(
            to_json(&record),
            r#"{"cat":"function","dur":10250,"name":"foo","ph":"X","pid":0,"tid":0,"ts":1000}"#
        );
    }

    #[test]
    fn double_quotes_become_single_quotes() {
        let record = ProfileRecord::new(r#"say "hi""#, 5, 7);
        assert_eq!(
            to_json(&record),
            r#"{"cat":"function","dur":2,"name":"say 'hi'","ph":"X","pid":0,"tid":0,"ts":5}"#
        );
    }

    #[test]
    fn other_characters_survive_parsing() {
        let name = "a\\b\tc ünïcödé <>&";
        let record = ProfileRecord::new(name, 0, 0);
        let value: serde_json::Value = serde_json::from_str(&to_json(&record)).unwrap();
        assert_eq!(value["name"], name);
    }

    #[test]
    fn sanitize_name_borrows_when_clean() {
        assert!(matches!(sanitize_name("clean"), Cow::Borrowed("clean")));
        assert_eq!(sanitize_name(r#""""#), "''");
    }

    #[test]
    fn duration_is_end_minus_start() {
        assert_eq!(ProfileRecord::new("x", 40, 100).duration(), 60);
        assert_eq!(ProfileRecord::new("x", 100, 100).duration(), 0);
        assert_eq!(ProfileRecord::new("x", 100, 40).duration(), -60);
    }

    #[test]
    fn from_timestamps_converts_to_micros() {
        let record = ProfileRecord::from_timestamps(
            "x",
            TraceTimestamp::from_monotonic_nanos(2_500),
            TraceTimestamp::from_monotonic_nanos(7_999),
        );
        assert_eq!(record.start(), 2);
        assert_eq!(record.end(), 7);
        assert_eq!(record.duration(), 5);
    }
}
