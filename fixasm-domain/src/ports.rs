use camino::{Utf8Path, Utf8PathBuf};
use fixasm_types::{ASM_SUFFIX, FixError, FixResult, VENDOR_DIR};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Read-only view of a source tree.
///
/// The driver pulls assembly files one at a time so that a failure stops the
/// walk before any later file is visited.
pub trait TreeView {
    fn root(&self) -> &Utf8Path;

    /// Assembly files under the root, relative to it, in lexical order.
    fn assembly_files(&self) -> Box<dyn Iterator<Item = FixResult<Utf8PathBuf>> + '_>;
}

/// File-system backed `TreeView`.
#[derive(Debug, Clone)]
pub struct FsTreeView {
    root: Utf8PathBuf,
}

impl FsTreeView {
    pub fn new(root: Utf8PathBuf) -> Self {
        Self { root }
    }

    /// Convenience for callers that want the whole list up front.
    pub fn collect_assembly_files(&self) -> FixResult<Vec<Utf8PathBuf>> {
        self.assembly_files().collect()
    }

    fn visit(&self, entry: walkdir::Result<DirEntry>) -> FixResult<Option<Utf8PathBuf>> {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| Utf8PathBuf::from(p.to_string_lossy().into_owned()))
                    .unwrap_or_else(|| self.root.clone());
                return Err(FixError::io(path, e.into()));
            }
        };

        if !entry.file_type().is_file() {
            return Ok(None);
        }
        if !is_assembly_file_name(entry.file_name().as_encoded_bytes()) {
            return Ok(None);
        }

        let rel = entry
            .path()
            .strip_prefix(&self.root)
            .unwrap_or(entry.path())
            .to_path_buf();
        let rel = Utf8PathBuf::from_path_buf(rel).map_err(|p| FixError::InvalidPath {
            path: p.to_string_lossy().into_owned(),
        })?;
        Ok(Some(rel))
    }
}

impl TreeView for FsTreeView {
    fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn assembly_files(&self) -> Box<dyn Iterator<Item = FixResult<Utf8PathBuf>> + '_> {
        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_vendor_dir(e));

        Box::new(walker.filter_map(move |entry| self.visit(entry).transpose()))
    }
}

/// Case-sensitive `.s` suffix check on a raw file name.
pub fn is_assembly_file_name(name: &[u8]) -> bool {
    name.ends_with(ASM_SUFFIX.as_bytes())
}

fn is_vendor_dir(entry: &DirEntry) -> bool {
    // The root itself is never pruned, whatever it is called.
    let skip = entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == VENDOR_DIR;
    if skip {
        debug!("skipping vendor tree {}", entry.path().display());
    }
    skip
}
