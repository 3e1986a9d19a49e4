use heck::{ShoutySnakeCase, SnakeCase};
use serde::{Deserialize, Serialize};

/// Derives a table name from the simple name of a type.
///
/// Only consulted for types without an explicit `table_name` attribute.
pub trait NamingStrategy: Send + Sync {
    fn table_name(&self, simple_name: &str) -> String;
}

impl<F> NamingStrategy for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn table_name(&self, simple_name: &str) -> String {
        self(simple_name)
    }
}

/// Built-in naming conventions.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableNaming {
    /// `SampleEntity` -> `SAMPLEENTITY`
    #[default]
    Uppercase,
    /// `SampleEntity` -> `sampleentity`
    Lowercase,
    /// `SampleEntity` -> `sample_entity`
    SnakeCase,
    /// `SampleEntity` -> `SAMPLE_ENTITY`
    ScreamingSnakeCase,
    /// `SampleEntity` -> `SampleEntity`
    AsIs,
}

impl NamingStrategy for TableNaming {
    fn table_name(&self, simple_name: &str) -> String {
        match self {
            Self::Uppercase => simple_name.to_uppercase(),
            Self::Lowercase => simple_name.to_lowercase(),
            Self::SnakeCase => simple_name.to_snake_case(),
            Self::ScreamingSnakeCase => simple_name.to_shouty_snake_case(),
            Self::AsIs => simple_name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn built_in_conventions() {
        assert_eq!(TableNaming::Uppercase.table_name("SampleEntity"), "SAMPLEENTITY");
        assert_eq!(TableNaming::Lowercase.table_name("SampleEntity"), "sampleentity");
        assert_eq!(TableNaming::SnakeCase.table_name("SampleEntity"), "sample_entity");
        assert_eq!(
            TableNaming::ScreamingSnakeCase.table_name("SampleEntity"),
            "SAMPLE_ENTITY"
        );
        assert_eq!(TableNaming::AsIs.table_name("SampleEntity"), "SampleEntity");
    }

    #[test]
    fn closures_are_strategies() {
        let prefixed = |name: &str| format!("t_{}", name.to_lowercase());
        assert_eq!(prefixed.table_name("Book"), "t_book");
    }

    #[test]
    fn deserializes_snake_case_names() {
        let naming: TableNaming = serde_json::from_str("\"screaming_snake_case\"").unwrap();
        assert_eq!(naming, TableNaming::ScreamingSnakeCase);
    }
}
