use super::DecodeError;
use crate::config::DescriptorFormat;
use std::collections::HashSet;
use std::fmt;

/// One partition column of the partition currently being considered
///
/// Example: the directory `year=2020/` of a table partitioned by a
/// string column `year` gives `{ name: "year", declared_type: "string", value: "2020" }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionKeyValue {
    /// Partition column name as declared in table metadata
    pub name: String,

    /// Declared column type (kept for readers, not used for pruning)
    pub declared_type: String,

    /// Literal value encoded in the partition path
    pub value: String,
}

impl PartitionKeyValue {
    pub fn new(
        name: impl Into<String>,
        declared_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for PartitionKeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Ordered, immutable partition key list
///
/// Column names are unique. Order follows the encoded descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionKeys {
    keys: Vec<PartitionKeyValue>,
}

impl PartitionKeys {
    /// Key list of a table without partitioning
    pub fn unpartitioned() -> Self {
        Self::default()
    }

    /// Build a key list, rejecting empty or repeated column names
    pub fn try_new(keys: Vec<PartitionKeyValue>) -> Result<Self, DecodeError> {
        let mut seen = HashSet::with_capacity(keys.len());
        for (level, key) in keys.iter().enumerate() {
            if key.name.is_empty() {
                return Err(DecodeError::EmptyName { level });
            }
            if !seen.insert(key.name.as_str()) {
                return Err(DecodeError::DuplicateKey(key.name.clone()));
            }
        }
        Ok(Self { keys })
    }

    /// Find the key for a partition column
    pub fn get(&self, name: &str) -> Option<&PartitionKeyValue> {
        self.keys.iter().find(|key| key.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PartitionKeyValue> {
        self.keys.iter()
    }

    pub fn as_slice(&self) -> &[PartitionKeyValue] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<'a> IntoIterator for &'a PartitionKeys {
    type Item = &'a PartitionKeyValue;
    type IntoIter = std::slice::Iter<'a, PartitionKeyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl fmt::Display for PartitionKeys {
    /// Renders the partition path, e.g. `year=2020/region=US`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

/// Decode a partition descriptor into its ordered key list
///
/// ```text
/// "!HNPT!"                              → []
/// "year=string=2020,region=string=US"   → [year=2020, region=US]
/// "year=string"                         → MalformedLevel { level: 0, fields: 2 }
/// ```
///
/// Values may be empty (`"year=string="`); names may not.
pub fn decode_partition_keys(
    encoded: &str,
    format: &DescriptorFormat,
) -> Result<PartitionKeys, DecodeError> {
    if encoded == format.no_partitions_sentinel {
        return Ok(PartitionKeys::unpartitioned());
    }

    let keys = encoded
        .split(format.level_delimiter.as_str())
        .enumerate()
        .map(|(level, raw)| {
            let fields: Vec<&str> = raw.split(format.field_delimiter.as_str()).collect();
            match fields.as_slice() {
                [name, declared_type, value] => {
                    Ok(PartitionKeyValue::new(*name, *declared_type, *value))
                }
                _ => Err(DecodeError::MalformedLevel {
                    level,
                    fields: fields.len(),
                    raw: raw.to_string(),
                }),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    PartitionKeys::try_new(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(encoded: &str) -> Result<PartitionKeys, DecodeError> {
        decode_partition_keys(encoded, &DescriptorFormat::default())
    }

    #[test]
    fn test_sentinel_decodes_to_empty() {
        let keys = decode("!HNPT!").unwrap();
        assert!(keys.is_empty());
        assert_eq!(keys, PartitionKeys::unpartitioned());
    }

    #[test]
    fn test_decode_preserves_order() {
        let keys = decode("year=string=2020,region=string=US").unwrap();
        assert_eq!(
            keys.as_slice(),
            &[
                PartitionKeyValue::new("year", "string", "2020"),
                PartitionKeyValue::new("region", "string", "US"),
            ]
        );
        assert_eq!(keys.to_string(), "year=2020/region=US");
    }

    #[test]
    fn test_level_with_two_fields_is_fatal() {
        let err = decode("year=string=2020,region=string").unwrap_err();
        assert_eq!(
            err,
            DecodeError::MalformedLevel {
                level: 1,
                fields: 2,
                raw: "region=string".to_string(),
            }
        );
    }

    #[test]
    fn test_level_with_four_fields_is_fatal() {
        let err = decode("year=string=2020=extra").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedLevel { level: 0, fields: 4, .. }));
    }

    #[test]
    fn test_empty_descriptor_is_fatal() {
        assert!(matches!(
            decode("").unwrap_err(),
            DecodeError::MalformedLevel { fields: 1, .. }
        ));
    }

    #[test]
    fn test_trailing_level_delimiter_is_fatal() {
        assert!(decode("year=string=2020,").is_err());
    }

    #[test]
    fn test_empty_value_is_kept() {
        let keys = decode("year=string=").unwrap();
        assert_eq!(keys.get("year").unwrap().value, "");
    }

    #[test]
    fn test_empty_name_is_fatal() {
        assert_eq!(
            decode("year=string=2020,=int=3").unwrap_err(),
            DecodeError::EmptyName { level: 1 }
        );
    }

    #[test]
    fn test_duplicate_name_is_fatal() {
        assert_eq!(
            decode("year=string=2020,year=string=2021").unwrap_err(),
            DecodeError::DuplicateKey("year".to_string())
        );
    }

    #[test]
    fn test_fragmenter_token_delimiters() {
        let format = DescriptorFormat::fragmenter_tokens();
        let keys = decode_partition_keys(
            "dt!H1PD!string!H1PD!2024-01-01!HPAD!tag!H1PD!string!H1PD!a=b,c",
            &format,
        )
        .unwrap();

        assert_eq!(keys.len(), 2);
        assert_eq!(keys.get("dt").unwrap().value, "2024-01-01");
        assert_eq!(keys.get("tag").unwrap().value, "a=b,c");
    }

    #[test]
    fn test_sentinel_must_match_exactly() {
        assert!(decode(" !HNPT!").is_err());
    }
}
