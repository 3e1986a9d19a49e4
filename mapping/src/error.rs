use thiserror::Error;

pub type MappingResult<T> = Result<T, MappingError>;

#[derive(Error, Debug)]
pub enum MappingError {
    #[error("Invalid table name '{table_name}' for {type_name}: {reason}")]
    InvalidTableName {
        type_name: String,
        table_name: String,
        reason: &'static str,
    },

    #[error("Column '{column}' of {type_name} is mapped by more than one property")]
    DuplicateColumn { type_name: String, column: String },

    #[error("{type_name} declares more than one id property: {properties:?}")]
    MultipleIdProperties {
        type_name: String,
        properties: Vec<String>,
    },

    #[error("{type_name} declares more than one version property: {properties:?}")]
    MultipleVersionProperties {
        type_name: String,
        properties: Vec<String>,
    },

    #[error("Version property '{property}' of {type_name} must be an integer, found {found}")]
    InvalidVersionType {
        type_name: String,
        property: String,
        found: String,
    },

    #[error("Map property '{property}' of {type_name} must have string keys, found {found}")]
    UnsupportedMapKey {
        type_name: String,
        property: String,
        found: String,
    },

    #[error("No persistent entity registered for {0}")]
    UnknownEntity(String),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}
