//! Error type shared by every fixasm crate.
//!
//! All errors are fatal for the run; the variants only differ in what they
//! tell the user.

use camino::Utf8PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixError {
    /// Wrong number of positional arguments.
    #[error("usage: fixasm GOROOT/src")]
    Usage,

    /// A visited path is not `<dir>/.../<file>` relative to the root.
    #[error("invalid path {path:?}: expected at least a directory and a file name")]
    InvalidPath { path: String },

    /// The literal search pattern could not be compiled.
    #[error("cannot build pattern {pattern:?}: {message}")]
    Pattern { pattern: String, message: String },

    /// Open, stat, read or write failed.
    #[error("{source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Context added by the walk driver for the file being processed.
    #[error("error processing {path}: {source}")]
    File {
        path: Utf8PathBuf,
        #[source]
        source: Box<FixError>,
    },
}

impl FixError {
    pub fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn in_file(path: impl Into<Utf8PathBuf>, source: FixError) -> Self {
        Self::File {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// The innermost error, skipping `File` context wrappers.
    pub fn root_cause(&self) -> &FixError {
        match self {
            FixError::File { source, .. } => source.root_cause(),
            other => other,
        }
    }

    pub fn is_invalid_path(&self) -> bool {
        matches!(self.root_cause(), FixError::InvalidPath { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self.root_cause(), FixError::Io { .. })
    }

    /// Every failure aborts the run with the same status.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

pub type FixResult<T> = Result<T, FixError>;
