use serde::{Deserialize, Serialize};

/// Sentinel the fragmenter emits for tables without partition columns
pub const NO_PARTITIONS_SENTINEL: &str = "!HNPT!";

/// Delimiter scheme for partition descriptors and fragment user data
///
/// A partition descriptor is a list of levels, each level a
/// `name<field>type<field>value` triple:
///
/// ```text
/// year=string=2020,region=string=US
/// └──── level ───┘ └─── level ───┘
/// ```
///
/// The descriptor itself travels as the fourth field of the fragment
/// user data, whose fields are joined by `user_data_delimiter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptorFormat {
    /// Separates partition levels
    pub level_delimiter: String,

    /// Separates name, declared type and value within one level
    pub field_delimiter: String,

    /// Whole-descriptor value meaning "table has no partitioning"
    pub no_partitions_sentinel: String,

    /// Separates the fields of the fragment user data envelope
    pub user_data_delimiter: String,
}

impl Default for DescriptorFormat {
    fn default() -> Self {
        Self {
            level_delimiter: ",".to_string(),
            field_delimiter: "=".to_string(),
            no_partitions_sentinel: NO_PARTITIONS_SENTINEL.to_string(),
            user_data_delimiter: "!HUDD!".to_string(),
        }
    }
}

impl DescriptorFormat {
    /// Token delimiters used by the Hive fragmenter
    ///
    /// Unlike the default scheme these never collide with characters
    /// that can appear in partition values (`,` and `=` can).
    pub fn fragmenter_tokens() -> Self {
        Self {
            level_delimiter: "!HPAD!".to_string(),
            field_delimiter: "!H1PD!".to_string(),
            ..Self::default()
        }
    }

    /// Load a format from its JSON representation; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_format_default() {
        let format = DescriptorFormat::default();
        assert_eq!(format.level_delimiter, ",");
        assert_eq!(format.field_delimiter, "=");
        assert_eq!(format.no_partitions_sentinel, NO_PARTITIONS_SENTINEL);
        assert_eq!(format.user_data_delimiter, "!HUDD!");
    }

    #[test]
    fn test_fragmenter_tokens_preset() {
        let format = DescriptorFormat::fragmenter_tokens();
        assert_eq!(format.level_delimiter, "!HPAD!");
        assert_eq!(format.field_delimiter, "!H1PD!");
        assert_eq!(format.no_partitions_sentinel, NO_PARTITIONS_SENTINEL);
    }

    #[test]
    fn test_from_json_partial_override() {
        let format = DescriptorFormat::from_json(r#"{"level_delimiter": "/"}"#).unwrap();
        assert_eq!(format.level_delimiter, "/");
        assert_eq!(format.field_delimiter, "=");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(DescriptorFormat::from_json("not json").is_err());
    }
}
