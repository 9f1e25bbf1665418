//! Port traits for everything the pipeline hands back to its host.

use fixasm_types::Finding;

/// Receives each line found in dry-run mode, in walk order.
pub trait FindingSink {
    fn record(&mut self, finding: &Finding);
}
