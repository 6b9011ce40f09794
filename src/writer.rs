//! The session manager that owns the trace file and serializes records into it.

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::LazyLock;

use parking_lot::Mutex;

use crate::error::TraceError;
use crate::record::ProfileRecord;
use crate::DEFAULT_TRACE_PATH;
use crate::ENABLED;

/// Written when a session begins. Records follow, separated by commas.
const HEADER: &[u8] = br#"{"otherData": {},"traceEvents":["#;

/// Written when a session ends.
const FOOTER: &[u8] = b"]}";

/// The writer behind [`TraceWriter::global`], created on first use and never dropped.
static GLOBAL_WRITER: LazyLock<TraceWriter> = LazyLock::new(TraceWriter::new);

/// One open-to-close recording interval, corresponding to one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    name: String,
    path: PathBuf,
}

impl Session {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The state that exists only while a session is open.
#[derive(Debug)]
struct OpenSession {
    session: Session,
    stream: BufWriter<File>,
    /// The number of records submitted to this session so far.
    record_count: u64,
}

impl OpenSession {
    /// Writes the footer, flushes, and closes the file.
    fn close(mut self) -> Result<Session, TraceError> {
        let path = &self.session.path;
        self.stream
            .write_all(FOOTER)
            .and_then(|()| self.stream.flush())
            .map_err(|e| TraceError::io(path, e))?;

        log::debug!(
            "Ended trace session {:?} with {} records in {}",
            self.session.name,
            self.record_count,
            path.display()
        );

        Ok(self.session)
    }
}

/// Writes [`ProfileRecord`]s to a Chrome Tracing JSON file, one file per session.
///
/// At most one session is open at a time. All state sits behind a single lock, so a
/// writer can be shared between threads by reference or through an [`Arc`](std::sync::Arc)
/// and records never interleave.
///
/// Every operation has a best-effort form that logs failures and a `try_` form that
/// returns them.
///
/// # Examples
///
/// ```rust
/// # use chrome_trace_scope::prelude::*;
/// # let dir = tempfile::tempdir().unwrap();
/// # let path = dir.path().join("trace.json");
/// let writer = TraceWriter::new();
/// writer.begin_session("example", &path);
/// writer.write_profile(&ProfileRecord::new("load", 100, 250));
/// writer.end_session();
/// ```
#[derive(Debug, Default)]
pub struct TraceWriter {
    state: Mutex<Option<OpenSession>>,
}

impl TraceWriter {
    /// Creates a writer with no session open.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(None),
        }
    }

    /// Returns the process-wide writer used by the macros.
    pub fn global() -> &'static TraceWriter {
        &GLOBAL_WRITER
    }

    /// Begins a session named `name` that writes to `path`, truncating any existing file.
    ///
    /// A session that is still open is ended first. Failures are logged and leave
    /// no session open.
    pub fn begin_session(&self, name: impl Into<String>, path: impl AsRef<Path>) {
        if let Err(e) = self.try_begin_session(name, path) {
            log::warn!("Couldn't begin trace session: {e}");
        }
    }

    /// Begins a session that writes to [`DEFAULT_TRACE_PATH`].
    pub fn begin_default_session(&self, name: impl Into<String>) {
        self.begin_session(name, DEFAULT_TRACE_PATH);
    }

    /// Ends the open session, if any, and finalizes its file.
    pub fn end_session(&self) {
        if let Err(e) = self.try_end_session() {
            log::warn!("Couldn't end trace session cleanly: {e}");
        }
    }

    /// Appends `record` to the open session's file and flushes it.
    ///
    /// Records submitted while no session is open are dropped.
    pub fn write_profile(&self, record: &ProfileRecord) {
        match self.try_write_profile(record) {
            Ok(()) => {}
            Err(TraceError::NoSession) => {
                log::debug!("Dropping record {:?}: no trace session is open", record.name());
            }
            Err(e) => log::warn!("Couldn't write record {:?}: {e}", record.name()),
        }
    }

    /// Begins a session, returning any error from ending the previous session or opening the new file.
    ///
    /// If the previous session fails to close, the new session is still opened.
    pub fn try_begin_session(
        &self,
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<(), TraceError> {
        if !ENABLED {
            return Ok(());
        }

        let path = path.as_ref();
        let mut state = self.state.lock();

        let closed_previous = match state.take() {
            Some(previous) => {
                log::warn!(
                    "Trace session {:?} was still open; ending it before beginning a new one",
                    previous.session.name
                );
                previous.close().map(drop)
            }
            None => Ok(()),
        };

        let file = File::create(path).map_err(|e| TraceError::io(path, e))?;
        let mut stream = BufWriter::new(file);
        stream
            .write_all(HEADER)
            .and_then(|()| stream.flush())
            .map_err(|e| TraceError::io(path, e))?;

        let session = Session {
            name: name.into(),
            path: path.to_owned(),
        };
        log::debug!(
            "Began trace session {:?} in {}",
            session.name,
            session.path.display()
        );

        *state = Some(OpenSession {
            session,
            stream,
            record_count: 0,
        });

        closed_previous
    }

    /// Ends the open session and returns it, or returns `None` if no session was open.
    ///
    /// The session is closed and the record count reset even when writing the footer fails.
    pub fn try_end_session(&self) -> Result<Option<Session>, TraceError> {
        let Some(open) = self.state.lock().take() else {
            log::debug!("No trace session is open; nothing to end");
            return Ok(None);
        };

        open.close().map(Some)
    }

    /// Appends `record` to the open session, returning [`TraceError::NoSession`] if there is none.
    pub fn try_write_profile(&self, record: &ProfileRecord) -> Result<(), TraceError> {
        if !ENABLED {
            return Ok(());
        }

        let mut state = self.state.lock();
        let open = state.as_mut().ok_or(TraceError::NoSession)?;

        let mut buf = Vec::with_capacity(128);
        if open.record_count > 0 {
            buf.push(b',');
        }
        record.write_json(&mut buf)?;
        open.record_count += 1;

        log::trace!(
            "Writing record {} {:?} ({}us)",
            open.record_count,
            record.name(),
            record.duration()
        );

        open.stream
            .write_all(&buf)
            .and_then(|()| open.stream.flush())
            .map_err(|e| TraceError::io(&open.session.path, e))
    }

    pub fn is_session_open(&self) -> bool {
        self.state.lock().is_some()
    }

    /// Returns the open session, if any.
    pub fn session(&self) -> Option<Session> {
        self.state.lock().as_ref().map(|open| open.session.clone())
    }

    pub fn session_name(&self) -> Option<String> {
        self.state.lock().as_ref().map(|open| open.session.name.clone())
    }

    /// The number of records submitted to the open session, or zero if none is open.
    pub fn record_count(&self) -> u64 {
        self.state.lock().as_ref().map_or(0, |open| open.record_count)
    }
}

impl Drop for TraceWriter {
    /// Finalizes a session that was never ended, so the file stays loadable.
    fn drop(&mut self) {
        if let Some(open) = self.state.get_mut().take() {
            if let Err(e) = open.close() {
                log::warn!("Couldn't end trace session while dropping its writer: {e}");
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn writer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TraceWriter>();
    }

    #[test]
    fn new_writer_has_no_session() {
        let writer = TraceWriter::new();
        assert!(!writer.is_session_open());
        assert_eq!(writer.session(), None);
        assert_eq!(writer.session_name(), None);
        assert_eq!(writer.record_count(), 0);
    }

    #[test]
    fn end_without_session_is_a_no_op() {
        let writer = TraceWriter::new();
        assert!(matches!(writer.try_end_session(), Ok(None)));
        writer.end_session();
        assert!(!writer.is_session_open());
    }

    #[test]
    #[cfg(feature = "enabled")]
    fn write_without_session_is_rejected() {
        let writer = TraceWriter::new();
        let record = ProfileRecord::new("orphan", 0, 1);
        assert!(matches!(
            writer.try_write_profile(&record),
            Err(TraceError::NoSession)
        ));
        writer.write_profile(&record);
        assert_eq!(writer.record_count(), 0);
    }

    #[test]
    #[cfg(feature = "enabled")]
    fn session_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lifecycle.json");
        let writer = TraceWriter::new();

        writer.try_begin_session("lifecycle", &path).unwrap();
        assert!(writer.is_session_open());
        assert_eq!(writer.session_name().as_deref(), Some("lifecycle"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            r#"{"otherData": {},"traceEvents":["#
        );

        writer.try_write_profile(&ProfileRecord::new("a", 1, 2)).unwrap();
        writer.try_write_profile(&ProfileRecord::new("b", 3, 5)).unwrap();
        assert_eq!(writer.record_count(), 2);

        let session = writer.try_end_session().unwrap().unwrap();
        assert_eq!(session.name(), "lifecycle");
        assert_eq!(session.path(), path);
        assert_eq!(writer.record_count(), 0);
        assert!(!writer.is_session_open());

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            concat!(
                r#"{"otherData": {},"traceEvents":["#,
                r#"{"cat":"function","dur":1,"name":"a","ph":"X","pid":0,"tid":0,"ts":1},"#,
                r#"{"cat":"function","dur":2,"name":"b","ph":"X","pid":0,"tid":0,"ts":3}"#,
                "]}"
            )
        );
    }

    #[test]
    #[cfg(feature = "enabled")]
    fn unwritable_path_leaves_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("trace.json");
        let writer = TraceWriter::new();

        assert!(matches!(
            writer.try_begin_session("broken", &path),
            Err(TraceError::Io { .. })
        ));
        writer.begin_session("broken", &path);
        assert!(!writer.is_session_open());
        assert!(!path.exists());
    }

    #[test]
    #[cfg(feature = "enabled")]
    fn dropping_the_writer_finalizes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dropped.json");

        {
            let writer = TraceWriter::new();
            writer.begin_session("dropped", &path);
            writer.write_profile(&ProfileRecord::new("only", 10, 20));
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.ends_with("]}"), "Unexpected contents: {contents}");
        serde_json::from_str::<serde_json::Value>(&contents).unwrap();
    }

    #[test]
    #[cfg(not(feature = "enabled"))]
    fn disabled_writer_never_creates_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("disabled.json");
        let writer = TraceWriter::new();

        writer.try_begin_session("disabled", &path).unwrap();
        writer.try_write_profile(&ProfileRecord::new("x", 0, 1)).unwrap();
        writer.end_session();

        assert!(!writer.is_session_open());
        assert!(!path.exists());
    }
}
