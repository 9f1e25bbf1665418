//! Clap-free settings for a run.

use camino::Utf8PathBuf;
use fixasm_types::EditMode;

/// Everything a run needs. Built by the CLI, or directly by embedders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// Directory to walk, e.g. `$GOROOT/src`.
    pub root: Utf8PathBuf,
    /// Scan (dry run) or rewrite.
    pub mode: EditMode,
}

impl RunSettings {
    pub fn new(root: impl Into<Utf8PathBuf>, mode: EditMode) -> Self {
        Self {
            root: root.into(),
            mode,
        }
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            root: Utf8PathBuf::from("."),
            mode: EditMode::Scan,
        }
    }
}
