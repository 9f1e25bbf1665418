//! Run configuration.
//!
//! fixasm reads no config file; everything comes from the command line and
//! is turned into an explicit [`RunSettings`] value here.

use camino::Utf8PathBuf;
use fixasm_core::settings::RunSettings;
use fixasm_core::{EditMode, FixError};
use tracing::debug;

/// Build run settings from the positional roots and the `--dry-run` flag.
///
/// Exactly one root is accepted; anything else is a usage error.
pub fn settings_from_args(roots: &[Utf8PathBuf], dry_run: bool) -> Result<RunSettings, FixError> {
    let [root] = roots else {
        return Err(FixError::Usage);
    };

    let settings = RunSettings::new(root.clone(), EditMode::from_dry_run(dry_run));
    debug!("run settings: {:?}", settings);
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_root_defaults_to_scan() {
        let settings = settings_from_args(&[Utf8PathBuf::from("go/src")], true).unwrap();
        assert_eq!(settings.root, "go/src");
        assert_eq!(settings.mode, EditMode::Scan);
    }

    #[test]
    fn dry_run_false_rewrites() {
        let settings = settings_from_args(&[Utf8PathBuf::from("go/src")], false).unwrap();
        assert_eq!(settings.mode, EditMode::Rewrite);
    }

    #[test]
    fn no_root_is_usage_error() {
        assert!(matches!(settings_from_args(&[], true), Err(FixError::Usage)));
    }

    #[test]
    fn two_roots_is_usage_error() {
        let roots = [Utf8PathBuf::from("a"), Utf8PathBuf::from("b")];
        assert!(matches!(settings_from_args(&roots, true), Err(FixError::Usage)));
    }
}
