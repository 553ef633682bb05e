use crate::catalog::ColumnCatalog;
use crate::partition::PartitionKeys;
use crate::query::predicates::PredicateLeaf;
use std::fmt;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, Level};

/// Human-readable summary of one predicate leaf
///
/// Example: `is_equality=true column_index=1 column=year value=2020`
///
/// The column name is `?` when the index does not resolve; describing a
/// leaf never fails. Constants without a canonical literal form are shown
/// with DataFusion's rendering.
pub fn describe(leaf: &PredicateLeaf, catalog: &dyn ColumnCatalog) -> String {
    let column = catalog.name_of(leaf.column_index).unwrap_or("?");
    format!(
        "is_equality={} column_index={} column={} value={}",
        leaf.operator.is_equality(),
        leaf.column_index,
        column,
        leaf.literal().unwrap_or_else(|| leaf.constant.to_string())
    )
}

/// Receiver for pruning decisions
///
/// Injected into the pruner so that evaluation itself stays free of
/// global logging state.
pub trait DiagnosticsSink: Send + Sync + fmt::Debug {
    /// Whether the sink wants events at all; skips formatting when false
    fn enabled(&self) -> bool {
        true
    }

    /// One leaf was evaluated against the partition
    fn leaf_evaluated(&self, description: &str, scan: bool);

    /// Final verdict for a partition
    fn partition_evaluated(&self, keys: &PartitionKeys, scan: bool);
}

/// Forwards decisions to `tracing` at DEBUG level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn enabled(&self) -> bool {
        tracing::enabled!(Level::DEBUG)
    }

    fn leaf_evaluated(&self, description: &str, scan: bool) {
        debug!("{description} scan={scan}");
    }

    fn partition_evaluated(&self, keys: &PartitionKeys, scan: bool) {
        debug!(partition = %keys, scan, "Partition pruning verdict");
    }
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DiagnosticsSink for NoopSink {
    fn enabled(&self) -> bool {
        false
    }

    fn leaf_evaluated(&self, _description: &str, _scan: bool) {}

    fn partition_evaluated(&self, _keys: &PartitionKeys, _scan: bool) {}
}

/// Keeps every event as a line of text
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, line: String) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line);
    }
}

impl DiagnosticsSink for RecordingSink {
    fn leaf_evaluated(&self, description: &str, scan: bool) {
        self.push(format!("{description} scan={scan}"));
    }

    fn partition_evaluated(&self, keys: &PartitionKeys, scan: bool) {
        self.push(format!("partition [{keys}] scan={scan}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ColumnNames;
    use crate::query::predicates::ComparisonOp;

    #[test]
    fn test_describe_equality_leaf() {
        let catalog = ColumnNames::new(["id", "year"]);
        let leaf = PredicateLeaf::equals(1, "2020");
        assert_eq!(
            describe(&leaf, &catalog),
            "is_equality=true column_index=1 column=year value=2020"
        );
    }

    #[test]
    fn test_describe_range_leaf() {
        let catalog = ColumnNames::new(["id", "year"]);
        let leaf = PredicateLeaf::new(0, ComparisonOp::Gt, 10i64);
        assert_eq!(
            describe(&leaf, &catalog),
            "is_equality=false column_index=0 column=id value=10"
        );
    }

    #[test]
    fn test_describe_unknown_column() {
        let catalog = ColumnNames::new(["id"]);
        let leaf = PredicateLeaf::equals(7, "x");
        assert_eq!(
            describe(&leaf, &catalog),
            "is_equality=true column_index=7 column=? value=x"
        );
    }

    #[test]
    fn test_describe_float_leaf() {
        let catalog = ColumnNames::new(["rate"]);
        let leaf = PredicateLeaf::equals(0, 2.5f64);
        assert_eq!(
            describe(&leaf, &catalog),
            "is_equality=true column_index=0 column=rate value=2.5"
        );
    }

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.leaf_evaluated("first", true);
        sink.partition_evaluated(&PartitionKeys::unpartitioned(), false);

        assert_eq!(sink.lines(), vec!["first scan=true", "partition [] scan=false"]);
    }

    #[test]
    fn test_noop_sink_disabled() {
        assert!(!NoopSink.enabled());
    }
}
