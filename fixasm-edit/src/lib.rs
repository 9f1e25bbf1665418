//! Edit engine for fixasm.
//!
//! Responsibilities:
//! - Build the literal `<package>·` search pattern for a file.
//! - Scan a file and report every line that still carries the prefix (dry run).
//! - Rewrite a file in place with the prefix removed, keeping its permissions.

mod pattern;

pub use pattern::MatchPattern;

use camino::{Utf8Path, Utf8PathBuf};
use fixasm_types::{EditMode, Finding, FixError, FixResult, PackageId};
use fs_err as fs;
use std::io::{BufRead, BufReader};
use tracing::{debug, info};

/// What happened to a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Dry run: the lines that would change. The file was not touched.
    Scanned { findings: Vec<Finding> },
    /// Live run: how many prefixes were stripped and whether the file was written.
    Rewritten { replacements: usize, written: bool },
}

/// Process one assembly file according to `mode`.
///
/// `rel` is relative to `root` and is what ends up in findings and errors.
pub fn process_file(
    root: &Utf8Path,
    rel: &Utf8Path,
    package: &PackageId,
    mode: EditMode,
) -> FixResult<FileOutcome> {
    let pattern = MatchPattern::new(package)?;
    match mode {
        EditMode::Scan => {
            let findings = scan_file(root, rel, &pattern)?;
            Ok(FileOutcome::Scanned { findings })
        }
        EditMode::Rewrite => rewrite_file(root, rel, &pattern),
    }
}

/// Report every line of the file containing the pattern. Never writes.
///
/// Lines are split on `\n`; a trailing `\r` is dropped before matching and
/// reporting. Content does not have to be UTF-8.
pub fn scan_file(root: &Utf8Path, rel: &Utf8Path, pattern: &MatchPattern) -> FixResult<Vec<Finding>> {
    let abs = abs_path(root, rel);
    let file = fs::File::open(&abs).map_err(|e| FixError::io(&abs, e))?;
    let reader = BufReader::new(file);

    let mut findings = Vec::new();
    for (idx, line) in reader.split(b'\n').enumerate() {
        let mut line = line.map_err(|e| FixError::io(&abs, e))?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if !pattern.is_match(&line) {
            continue;
        }

        let line = String::from_utf8_lossy(&line).into_owned();
        info!("found redundant package name in line: {}", line);
        findings.push(Finding {
            path: rel.to_path_buf(),
            line_number: idx + 1,
            line,
        });
    }

    Ok(findings)
}

/// Strip every occurrence of the pattern and write the file back in place.
///
/// The original permission bits are restored after the write. A file with no
/// occurrences is left alone so its modification time does not change.
pub fn rewrite_file(root: &Utf8Path, rel: &Utf8Path, pattern: &MatchPattern) -> FixResult<FileOutcome> {
    let abs = abs_path(root, rel);
    let permissions = fs::metadata(&abs)
        .map_err(|e| FixError::io(&abs, e))?
        .permissions();
    let contents = fs::read(&abs).map_err(|e| FixError::io(&abs, e))?;

    let (stripped, replacements) = pattern.strip(&contents);
    if replacements == 0 {
        debug!("no redundant package names in {}", rel);
        return Ok(FileOutcome::Rewritten {
            replacements,
            written: false,
        });
    }

    fs::write(&abs, &stripped).map_err(|e| FixError::io(&abs, e))?;
    fs::set_permissions(&abs, permissions).map_err(|e| FixError::io(&abs, e))?;
    debug!("stripped {} redundant package names from {}", replacements, rel);

    Ok(FileOutcome::Rewritten {
        replacements,
        written: true,
    })
}

fn abs_path(root: &Utf8Path, rel: &Utf8Path) -> Utf8PathBuf {
    if rel.is_absolute() {
        rel.to_path_buf()
    } else {
        root.join(rel)
    }
}
