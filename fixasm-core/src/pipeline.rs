//! The walk driver, extracted from the CLI.
//!
//! Files are processed strictly one after another. The first error stops the
//! walk and is returned with the offending path attached; nothing after it is
//! visited.

use crate::ports::FindingSink;
use crate::settings::RunSettings;
use camino::Utf8Path;
use fixasm_domain::{FsTreeView, TreeView, derive_package_id};
use fixasm_edit::{FileOutcome, process_file};
use fixasm_types::{EditMode, FixError, FixResult};
use tracing::{debug, info};

/// Totals for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_visited: u64,
    /// Files with at least one redundant prefix.
    pub files_matched: u64,
    /// Dry run only.
    pub matching_lines: u64,
    /// Rewrite only.
    pub replacements: u64,
    /// Rewrite only.
    pub files_written: u64,
}

/// Walk `settings.root` on disk.
pub fn run_fs(settings: &RunSettings, sink: &mut dyn FindingSink) -> FixResult<RunSummary> {
    let tree = FsTreeView::new(settings.root.clone());
    run(&tree, settings.mode, sink)
}

/// Process every assembly file `tree` yields.
pub fn run(tree: &dyn TreeView, mode: EditMode, sink: &mut dyn FindingSink) -> FixResult<RunSummary> {
    info!("processing {}...", tree.root());

    let mut summary = RunSummary::default();
    for rel in tree.assembly_files() {
        let rel = rel?;
        info!("assembly file {}", rel);
        summary.files_visited += 1;

        process_one(tree.root(), &rel, mode, sink, &mut summary)
            .map_err(|e| FixError::in_file(&rel, e))?;
    }

    debug!(?summary, "run complete");
    Ok(summary)
}

fn process_one(
    root: &Utf8Path,
    rel: &Utf8Path,
    mode: EditMode,
    sink: &mut dyn FindingSink,
    summary: &mut RunSummary,
) -> FixResult<()> {
    let package = derive_package_id(rel)?;
    info!("package: {}", package);

    match process_file(root, rel, &package, mode)? {
        FileOutcome::Scanned { findings } => {
            if !findings.is_empty() {
                summary.files_matched += 1;
                summary.matching_lines += findings.len() as u64;
            }
            for finding in &findings {
                sink.record(finding);
            }
        }
        FileOutcome::Rewritten {
            replacements,
            written,
        } => {
            if replacements > 0 {
                summary.files_matched += 1;
                summary.replacements += replacements as u64;
            }
            if written {
                summary.files_written += 1;
            }
        }
    }

    Ok(())
}
