//! Domain logic: which files to visit and what prefix to strip from them.
//!
//! This crate owns *what* gets edited. Reading and writing file contents is
//! the `fixasm-edit` crate's job.

mod package;
mod ports;

pub use package::derive_package_id;
pub use ports::{FsTreeView, TreeView, is_assembly_file_name};
