//! Tree walking and package derivation against real directories.

use camino::{Utf8Path, Utf8PathBuf};
use fixasm_domain::{FsTreeView, TreeView, derive_package_id};
use fs_err as fs;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tempfile::TempDir;

fn touch(root: &Utf8Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "TEXT ·f(SB),$0\n").unwrap();
}

fn temp_root() -> (TempDir, Utf8PathBuf) {
    let td = TempDir::new().unwrap();
    let root = Utf8PathBuf::from_path_buf(td.path().to_path_buf()).unwrap();
    (td, root)
}

#[test]
fn yields_only_assembly_files_in_lexical_order() {
    let (_td, root) = temp_root();
    touch(&root, "runtime/sys_linux_amd64.s");
    touch(&root, "runtime/asm_amd64.s");
    touch(&root, "runtime/asm.go");
    touch(&root, "runtime/upper.S");
    touch(&root, "crypto/aes/gcm_amd64.s");
    touch(&root, "crypto/aes/notes.txt");

    let files = FsTreeView::new(root).collect_assembly_files().unwrap();
    assert_eq!(
        files,
        vec![
            Utf8PathBuf::from("crypto/aes/gcm_amd64.s"),
            Utf8PathBuf::from("runtime/asm_amd64.s"),
            Utf8PathBuf::from("runtime/sys_linux_amd64.s"),
        ]
    );
}

#[test]
fn vendor_trees_are_pruned_at_any_depth() {
    let (_td, root) = temp_root();
    touch(&root, "vendor/golang.org/x/sys/cpu/cpu_x86.s");
    touch(&root, "cmd/vendor/golang.org/x/sys/unix/asm_linux_amd64.s");
    touch(&root, "cmd/internal/obj/x86/asm.s");

    let files = FsTreeView::new(root).collect_assembly_files().unwrap();
    assert_eq!(files, vec![Utf8PathBuf::from("cmd/internal/obj/x86/asm.s")]);
}

#[test]
fn root_named_vendor_is_still_walked() {
    let (_td, base) = temp_root();
    let root = base.join("vendor");
    touch(&root, "pkg/asm.s");

    let files = FsTreeView::new(root).collect_assembly_files().unwrap();
    assert_eq!(files, vec![Utf8PathBuf::from("pkg/asm.s")]);
}

#[test]
fn file_at_root_is_yielded_and_fails_derivation() {
    let (_td, root) = temp_root();
    touch(&root, "file.s");

    let tree = FsTreeView::new(root);
    let files = tree.collect_assembly_files().unwrap();
    assert_eq!(files, vec![Utf8PathBuf::from("file.s")]);
    assert!(derive_package_id(&files[0]).unwrap_err().is_invalid_path());
}

#[test]
fn missing_root_is_an_io_error() {
    let (_td, base) = temp_root();
    let tree = FsTreeView::new(base.join("does-not-exist"));
    let err = tree.assembly_files().next().unwrap().unwrap_err();
    assert!(err.is_io());
}

fn arb_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-z0-9_.+-]{1,8}")
        .unwrap()
        .prop_filter("not a dot component", |s| s != "." && s != "..")
}

proptest! {
    /// The identifier is the directory segments joined with the division slash.
    #[test]
    fn derive_joins_all_but_last(dirs in prop::collection::vec(arb_segment(), 1..6), file in arb_segment()) {
        let path = format!("{}/{}", dirs.join("/"), file);
        let id = derive_package_id(Utf8Path::new(&path)).unwrap();
        prop_assert_eq!(id.as_str(), dirs.join("∕"));
    }

    /// Derivation is a pure function of the path.
    #[test]
    fn derive_is_deterministic(dirs in prop::collection::vec(arb_segment(), 1..6), file in arb_segment()) {
        let path = Utf8PathBuf::from(format!("{}/{}", dirs.join("/"), file));
        prop_assert_eq!(derive_package_id(&path).unwrap(), derive_package_id(&path).unwrap());
    }

    /// A bare file name has no package.
    #[test]
    fn single_segment_is_invalid(file in arb_segment()) {
        prop_assert!(derive_package_id(Utf8Path::new(&file)).unwrap_err().is_invalid_path());
    }
}
