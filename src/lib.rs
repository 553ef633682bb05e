//! Partition pruning for Hive-style partitioned tables
//!
//! A connector scanning `year=2020/region=US/...` style tables receives a
//! predicate pushed down by the query engine. Before opening a partition's
//! file it asks: can any row of this partition match? Only equality
//! predicates on partition columns can answer "no"; everything else is
//! left to the row filter.
//!
//! ```text
//! fragment user data ──► FragmentUserData ──► PartitionKeys (decoded once)
//!                                                   │
//! pushed-down filter ──► PredicateTree ─────────────┤
//!                                                   ▼
//!                         ColumnCatalog ──► PartitionPruner ──► scan / skip
//! ```

pub mod accessor;
pub mod catalog;
pub mod config;
pub mod error;
pub mod partition;
pub mod query;

pub use accessor::{FragmentReader, PartitionAccessor, ScanRequest};
pub use catalog::{CatalogError, ColumnCatalog, ColumnNames};
pub use config::DescriptorFormat;
pub use error::{Error, Result};
pub use partition::{
    decode_partition_keys, DecodeError, FragmentUserData, PartitionKeyValue, PartitionKeys,
};
pub use query::{
    describe, evaluate_leaf, should_scan, ComparisonOp, DiagnosticsSink, NoopSink,
    PartitionPruner, PredicateLeaf, PredicateTree, RecordingSink, TracingSink,
};
