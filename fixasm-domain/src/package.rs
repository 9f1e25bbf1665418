use camino::{Utf8Component, Utf8Path};
use fixasm_types::{FixError, FixResult, PACKAGE_SEPARATOR, PackageId};

/// Derive the package identifier for a file from its path relative to the walk root.
///
/// The file name is dropped and the remaining directories are joined with
/// [`PACKAGE_SEPARATOR`], so `runtime/internal/atomic/atomic_amd64.s` yields
/// `runtime∕internal∕atomic`. Paths with fewer than two segments have no
/// package and fail with [`FixError::InvalidPath`].
pub fn derive_package_id(path: &Utf8Path) -> FixResult<PackageId> {
    let invalid = || FixError::InvalidPath {
        path: path.to_string(),
    };

    let mut segments = Vec::new();
    for component in path.components() {
        match component {
            Utf8Component::Normal(s) => segments.push(s),
            Utf8Component::CurDir => {}
            _ => return Err(invalid()),
        }
    }

    if segments.len() < 2 {
        return Err(invalid());
    }
    segments.pop();

    let sep = PACKAGE_SEPARATOR.to_string();
    Ok(PackageId::new(segments.join(sep.as_str())))
}
