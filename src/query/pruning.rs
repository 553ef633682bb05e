use crate::catalog::{CatalogError, ColumnCatalog};
use crate::partition::PartitionKeys;
use crate::query::diagnostics::{describe, DiagnosticsSink, TracingSink};
use crate::query::predicates::{PredicateLeaf, PredicateTree};
use std::sync::Arc;

/// Decides whether a partition has to be scanned
///
/// Only equality leaves on partition columns can prune; everything else
/// is left to the row filter applied during the scan.
///
/// # Example
/// ```text
/// Partition: year=2020/region=US
///
/// year = '2020' AND region = 'EU'     → skip   (region differs)
/// year = '2020' AND region = 'US'     → scan
/// year = '2020' AND device = 'phone'  → scan   (device is not a partition column)
/// year > '2021'                       → scan   (not an equality)
/// ```
#[derive(Debug, Clone)]
pub struct PartitionPruner {
    sink: Arc<dyn DiagnosticsSink>,
}

impl Default for PartitionPruner {
    fn default() -> Self {
        Self::with_sink(Arc::new(TracingSink))
    }
}

impl PartitionPruner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(sink: Arc<dyn DiagnosticsSink>) -> Self {
        Self { sink }
    }

    /// Scan verdict for one partition, reporting each evaluated leaf to the sink
    pub fn should_scan(
        &self,
        keys: &PartitionKeys,
        predicate: Option<&PredicateTree>,
        catalog: &dyn ColumnCatalog,
    ) -> Result<bool, CatalogError> {
        let enabled = self.sink.enabled();
        let scan = scan_verdict(keys, predicate, catalog, |leaf, scan| {
            if enabled {
                self.sink.leaf_evaluated(&describe(leaf, catalog), scan);
            }
        })?;

        if enabled {
            self.sink.partition_evaluated(keys, scan);
        }
        Ok(scan)
    }
}

/// Scan verdict for one partition
///
/// - no predicate: scan
/// - one leaf: that leaf's verdict
/// - AND of leaves: scan only if every leaf says scan; stops at the first
///   leaf that prunes, so later leaves are never resolved
pub fn should_scan(
    keys: &PartitionKeys,
    predicate: Option<&PredicateTree>,
    catalog: &dyn ColumnCatalog,
) -> Result<bool, CatalogError> {
    scan_verdict(keys, predicate, catalog, |_, _| {})
}

/// Verdict of a single leaf against the whole partition key list
///
/// A leaf prunes (returns `false`) only if it is an equality test on a
/// partition column whose value differs from the constant's literal form.
/// Comparison is plain string equality, no type coercion. Constants with no
/// canonical literal form (floats, timestamps) never prune.
pub fn evaluate_leaf(
    keys: &PartitionKeys,
    leaf: &PredicateLeaf,
    catalog: &dyn ColumnCatalog,
) -> Result<bool, CatalogError> {
    let prunes = leaf.operator.is_equality()
        && keys
            .get(catalog.name_of(leaf.column_index)?)
            .zip(leaf.literal())
            .is_some_and(|(key, literal)| key.value != literal);

    Ok(!prunes)
}

fn scan_verdict(
    keys: &PartitionKeys,
    predicate: Option<&PredicateTree>,
    catalog: &dyn ColumnCatalog,
    mut on_leaf: impl FnMut(&PredicateLeaf, bool),
) -> Result<bool, CatalogError> {
    let Some(predicate) = predicate else {
        return Ok(true);
    };

    for leaf in predicate.leaves() {
        let scan = evaluate_leaf(keys, leaf, catalog)?;
        on_leaf(leaf, scan);
        if !scan {
            return Ok(false);
        }
    }
    Ok(true)
}
