//! Embeddable core library for fixasm.
//!
//! Provides a clap-free entry point that walks a tree, derives each assembly
//! file's package prefix and scans or rewrites the file.
//!
//! # Port traits
//!
//! - [`TreeView`] — enumerate assembly files under a root
//! - [`FindingSink`](ports::FindingSink) — receive dry-run findings
//!
//! The [`adapters`] module provides default implementations.
//!
//! # Entry points
//!
//! - [`run`](pipeline::run) — process every file of a `TreeView`
//! - [`run_fs`](pipeline::run_fs) — same, over the filesystem at `settings.root`

pub mod adapters;
pub mod pipeline;
pub mod ports;
pub mod settings;

// Re-export so callers don't need fixasm-domain / fixasm-types directly.
pub use fixasm_domain::{FsTreeView, TreeView};
pub use fixasm_types::{EditMode, Finding, FixError, FixResult, PackageId};
