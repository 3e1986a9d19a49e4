use crate::{MappingResult, TableNaming};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Settings of a [`CrateMappingContext`](crate::CrateMappingContext).
///
/// ```rust
/// use cratedb_mapping::{MappingConfig, TableNaming};
///
/// let config = MappingConfig::from_json(r#"{ "strict": true }"#).unwrap();
/// assert!(config.strict);
/// assert_eq!(config.table_naming, TableNaming::Uppercase);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default)]
#[serde(default)]
pub struct MappingConfig {
    /// when set, lookups of types outside the registered set fail instead of
    /// registering the type on the fly
    pub strict: bool,
    /// convention for types without an explicit table name
    pub table_naming: TableNaming,
}

impl MappingConfig {
    pub fn builder() -> MappingConfigBuilder {
        MappingConfigBuilder::default()
    }

    pub fn from_json(json: &str) -> MappingResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_value(value: serde_json::Value) -> MappingResult<Self> {
        Ok(serde_json::from_value(value)?)
    }
}
