use std::path::PathBuf;

use thiserror::Error;

/// Errors from the fallible `try_*` methods of [`TraceWriter`](crate::writer::TraceWriter).
///
/// The best-effort methods log these instead of returning them.
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("I/O error on trace file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No trace session is open")]
    NoSession,

    #[error("Couldn't serialize profile record: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl TraceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TraceError::Io {
            path: path.into(),
            source,
        }
    }
}
