//! Default `FindingSink` implementations.

use crate::ports::FindingSink;
use fixasm_types::Finding;

/// Drops findings. The edit engine already logs each one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl FindingSink for NoopSink {
    fn record(&mut self, _finding: &Finding) {}
}

/// Keeps findings in memory for embedding and testing.
#[derive(Debug, Clone, Default)]
pub struct VecSink {
    pub findings: Vec<Finding>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_inner(self) -> Vec<Finding> {
        self.findings
    }
}

impl FindingSink for VecSink {
    fn record(&mut self, finding: &Finding) {
        self.findings.push(finding.clone());
    }
}
