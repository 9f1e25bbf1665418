mod config;

use camino::Utf8PathBuf;
use clap::{ArgAction, Parser};
use fixasm_core::FixError;
use fixasm_core::adapters::NoopSink;
use fixasm_core::pipeline::run_fs;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "fixasm",
    version,
    about = "Strip redundant package prefixes from symbol references in assembly files."
)]
struct Cli {
    /// Only report lines that would change. Use `--dry-run=false` to edit files.
    #[arg(
        long,
        action = ArgAction::Set,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    dry_run: bool,

    /// Root of the tree to process.
    #[arg(value_name = "GOROOT/src")]
    roots: Vec<Utf8PathBuf>,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{}", e);
        let code = e
            .downcast_ref::<FixError>()
            .map(FixError::exit_code)
            .unwrap_or(1);
        return ExitCode::from(code);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let settings = config::settings_from_args(&cli.roots, cli.dry_run)?;

    let summary = run_fs(&settings, &mut NoopSink)?;

    if settings.mode.is_dry_run() {
        info!(
            "dry run: {} assembly files, {} lines with redundant package names in {} files",
            summary.files_visited, summary.matching_lines, summary.files_matched
        );
    } else {
        info!(
            "rewrote {} files: {} redundant package names removed from {} assembly files",
            summary.files_written, summary.replacements, summary.files_visited
        );
    }
    Ok(())
}
