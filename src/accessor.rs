use crate::catalog::ColumnCatalog;
use crate::config::DescriptorFormat;
use crate::error::{Error, Result};
use crate::partition::{FragmentUserData, PartitionKeys};
use crate::query::{PartitionPruner, PredicateTree};
use tracing::debug;

/// Format-specific reader that opens a fragment's underlying file
pub trait FragmentReader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Open the fragment; `Ok(false)` means there is nothing to read
    fn open(&mut self, user_data: &FragmentUserData) -> std::result::Result<bool, Self::Error>;
}

/// What the host knows about the fragment being opened
#[derive(Debug, Clone, Copy)]
pub struct ScanRequest<'a> {
    /// Data source path, for logging
    pub path: &'a str,
    pub segment_id: u32,
    /// Pushed-down predicate, if the query had a filter
    pub filter: Option<&'a PredicateTree>,
    pub catalog: &'a dyn ColumnCatalog,
}

/// Accessor for one fragment of a partitioned table
///
/// Flow:
/// ```text
/// new()  → parse user data, decode partition keys (once)
/// open() → PartitionPruner::should_scan ──skip──→ Ok(false)
///                                        └─scan──→ FragmentReader::open
/// ```
#[derive(Debug)]
pub struct PartitionAccessor<R> {
    user_data: FragmentUserData,
    keys: PartitionKeys,
    reader: R,
    pruner: PartitionPruner,
}

impl<R: FragmentReader> PartitionAccessor<R> {
    /// Create an accessor from the fragmenter's user data
    ///
    /// Fails if the user data or its partition descriptor is malformed;
    /// the accessor never guesses partition values.
    pub fn new(user_data: &str, format: &DescriptorFormat, reader: R) -> Result<Self> {
        let user_data = FragmentUserData::parse(user_data, format)?;
        let keys = user_data.partition_keys(format)?;

        Ok(Self {
            user_data,
            keys,
            reader,
            pruner: PartitionPruner::default(),
        })
    }

    /// Replace the pruner, e.g. to route diagnostics to a custom sink
    pub fn with_pruner(mut self, pruner: PartitionPruner) -> Self {
        self.pruner = pruner;
        self
    }

    pub fn partition_keys(&self) -> &PartitionKeys {
        &self.keys
    }

    pub fn user_data(&self) -> &FragmentUserData {
        &self.user_data
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Open the fragment unless its partition cannot match the filter
    ///
    /// Returns `Ok(false)` without touching the reader when the partition
    /// is pruned.
    pub fn open(&mut self, request: &ScanRequest<'_>) -> Result<bool> {
        let scan = self
            .pruner
            .should_scan(&self.keys, request.filter, request.catalog)?;

        debug!(
            segment_id = request.segment_id,
            path = request.path,
            partition = %self.keys,
            scan,
            "Partition filter evaluated"
        );

        if !scan {
            return Ok(false);
        }

        self.reader
            .open(&self.user_data)
            .map_err(|e| Error::Reader(Box::new(e)))
    }
}
