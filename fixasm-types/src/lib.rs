//! Shared types for the fixasm workspace.
//!
//! Everything here is plain data: the glyphs that make up a qualified
//! assembly symbol, the edit mode, and the error type every crate returns.

pub mod error;

use camino::Utf8PathBuf;
use std::fmt;

pub use error::{FixError, FixResult};

/// Joins package path elements inside a symbol (U+2215 DIVISION SLASH).
pub const PACKAGE_SEPARATOR: char = '∕';

/// Separates a package qualifier from the symbol name (U+00B7 MIDDLE DOT).
pub const SYMBOL_MARKER: char = '·';

/// Only files whose name ends with this suffix are processed.
pub const ASM_SUFFIX: &str = ".s";

/// Directories with this name are pruned from the walk, subtree included.
pub const VENDOR_DIR: &str = "vendor";

/// What to do with a file once its package prefix is known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    /// Report matching lines, never touch the file.
    #[default]
    Scan,
    /// Strip every redundant prefix and write the file back.
    Rewrite,
}

impl EditMode {
    /// Map the CLI's `--dry-run` value onto a mode.
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run { Self::Scan } else { Self::Rewrite }
    }

    pub fn is_dry_run(self) -> bool {
        matches!(self, Self::Scan)
    }
}

/// Package identifier derived from a file's directory, e.g. `runtime∕internal∕atomic`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageId(String);

impl PackageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The literal text searched for: identifier followed by the marker.
    pub fn qualified_prefix(&self) -> String {
        let mut s = String::with_capacity(self.0.len() + SYMBOL_MARKER.len_utf8());
        s.push_str(&self.0);
        s.push(SYMBOL_MARKER);
        s
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A line containing a redundant package prefix, reported in scan mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Path relative to the walk root.
    pub path: Utf8PathBuf,
    /// 1-based line number.
    pub line_number: usize,
    /// The line as read, without its terminator.
    pub line: String,
}
