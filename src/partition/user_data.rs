use super::{decode_partition_keys, DecodeError, PartitionKeys};
use crate::config::DescriptorFormat;

/// Per-fragment metadata handed to the accessor by the fragmenter
///
/// Layout (fields joined by `DescriptorFormat::user_data_delimiter`):
///
/// ```text
/// <input format> !HUDD! <serde> !HUDD! <table properties> !HUDD! <partition descriptor>
/// ```
///
/// Only the partition descriptor matters for pruning; the other fields
/// are passed through to the format reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentUserData {
    pub input_format: String,
    pub serde: String,
    pub properties: String,
    pub partition_descriptor: String,
}

impl FragmentUserData {
    const FIELDS: usize = 4;

    pub fn parse(raw: &str, format: &DescriptorFormat) -> Result<Self, DecodeError> {
        let fields: Vec<&str> = raw.split(format.user_data_delimiter.as_str()).collect();
        if fields.len() < Self::FIELDS {
            return Err(DecodeError::MalformedUserData {
                fields: fields.len(),
                expected: Self::FIELDS,
            });
        }

        Ok(Self {
            input_format: fields[0].to_string(),
            serde: fields[1].to_string(),
            properties: fields[2].to_string(),
            partition_descriptor: fields[3].to_string(),
        })
    }

    /// Decode the partition descriptor carried in the fourth field
    pub fn partition_keys(&self, format: &DescriptorFormat) -> Result<PartitionKeys, DecodeError> {
        decode_partition_keys(&self.partition_descriptor, format)
    }
}
