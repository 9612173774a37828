use std::path::PathBuf;

/// Fatal export failures.
///
/// Per-object problems (ineligible objects, unsupported splines, empty
/// material slots) are never errors; they are reported as diagnostics and
/// the affected object is skipped.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("snapshot parse error: {0}")]
    Snapshot(String),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub(crate) fn snapshot(message: impl Into<String>) -> Self {
        ExportError::Snapshot(message.into())
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Write {
            path: path.into(),
            source,
        }
    }
}
