//! Partition pruning over pushed-down predicates
//!
//! - `predicates`: predicate language (leaf / AND of leaves) and the
//!   DataFusion filter adapter
//! - `pruning`: scan/skip verdict for one partition
//! - `diagnostics`: leaf summaries and the injectable sink that receives them

pub mod diagnostics;
pub mod predicates;
pub mod pruning;

pub use diagnostics::{describe, DiagnosticsSink, NoopSink, RecordingSink, TracingSink};
pub use predicates::{ComparisonOp, PredicateLeaf, PredicateTree};
pub use pruning::{evaluate_leaf, should_scan, PartitionPruner};
