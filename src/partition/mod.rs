mod keys;
mod user_data;

pub use keys::{decode_partition_keys, PartitionKeyValue, PartitionKeys};
pub use user_data::FragmentUserData;

/// Errors raised while decoding partition descriptors
///
/// All of these are fatal for the accessor: guessing partition values
/// could silently include or exclude data.
///
/// Beyond a wrong field count, a level with an empty column name and a
/// repeated column name are also rejected. Neither can name a real
/// partition column, and a repeated name would make the single-value
/// equality check ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Partition level {level} has {fields} field(s), expected name, type and value: {raw:?}")]
    MalformedLevel {
        level: usize,
        fields: usize,
        raw: String,
    },

    #[error("Partition level {level} has an empty column name")]
    EmptyName { level: usize },

    #[error("Partition column {0:?} appears more than once")]
    DuplicateKey(String),

    #[error("Fragment user data has {fields} field(s), expected at least {expected}")]
    MalformedUserData { fields: usize, expected: usize },
}
