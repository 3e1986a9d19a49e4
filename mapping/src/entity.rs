use crate::{
    CratePersistentProperty, EntityMetadata, EntityType, MappingError, MappingResult,
    NamingStrategy, PropertyCategory, PrimitiveType, TypeInformation, TypeKind,
};
use itertools::Itertools;
use std::fmt;
use tracing::trace;

/// Characters CrateDB rejects in table names, besides whitespace.
const INVALID_TABLE_NAME_CHARS: &[char] = &['.', '\\', '/', '*', '?', '"', '\'', '<', '>', '|', ',', '#'];

/// Mapping of one entity type onto a table.
#[derive(Clone, Debug)]
pub struct CratePersistentEntity {
    entity_type: EntityType,
    simple_name: &'static str,
    table_name: String,
    properties: Vec<CratePersistentProperty>,
}

impl CratePersistentEntity {
    /// Builds and validates the descriptor of `entity_type`.
    pub fn new(entity_type: EntityType, naming: &dyn NamingStrategy) -> MappingResult<Self> {
        let EntityMetadata {
            type_name,
            simple_name,
            table_name,
            properties,
        } = entity_type.metadata();

        let table_name = match table_name {
            Some(explicit) => explicit.to_string(),
            None => naming.table_name(simple_name),
        };
        validate_table_name(type_name, &table_name)?;

        let mut properties = properties
            .into_iter()
            .map(|metadata| CratePersistentProperty::new(type_name, metadata))
            .collect::<Vec<_>>();

        // a field called `id` is the identifier unless another field claims it
        if !properties.iter().any(|p| p.is_id_property()) {
            if let Some(id) = properties.iter_mut().find(|p| p.name() == "id") {
                id.mark_as_id();
            }
        }

        for property in &properties {
            trace!(entity = type_name, property = %property, "classified property");
        }

        let entity = Self {
            entity_type,
            simple_name,
            table_name,
            properties,
        };
        entity.verify()?;

        Ok(entity)
    }

    fn verify(&self) -> MappingResult<()> {
        let type_name = self.type_name();

        if let Some(column) = self
            .properties
            .iter()
            .map(|p| p.field_name())
            .duplicates()
            .next()
        {
            return Err(MappingError::DuplicateColumn {
                type_name: type_name.to_string(),
                column: column.clone(),
            });
        }

        let ids = self
            .properties
            .iter()
            .filter(|p| p.is_id_property())
            .map(|p| p.name().clone())
            .collect_vec();
        if ids.len() > 1 {
            return Err(MappingError::MultipleIdProperties {
                type_name: type_name.to_string(),
                properties: ids,
            });
        }

        let versions = self
            .properties
            .iter()
            .filter(|p| p.is_version_property())
            .collect_vec();
        if versions.len() > 1 {
            return Err(MappingError::MultipleVersionProperties {
                type_name: type_name.to_string(),
                properties: versions.iter().map(|p| p.name().clone()).collect(),
            });
        }
        if let Some(version) = versions.first() {
            if !version.primitive_type().map_or(false, |p| p.is_integral()) {
                return Err(MappingError::InvalidVersionType {
                    type_name: type_name.to_string(),
                    property: version.name().clone(),
                    found: version.raw_type().simple_name(),
                });
            }
        }

        for property in &self.properties {
            if let Some(key) = non_string_map_key(property.raw_type()) {
                return Err(MappingError::UnsupportedMapKey {
                    type_name: type_name.to_string(),
                    property: property.name().clone(),
                    found: key.simple_name(),
                });
            }
        }

        Ok(())
    }

    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    pub fn type_name(&self) -> &'static str {
        self.entity_type.name()
    }

    pub fn simple_name(&self) -> &'static str {
        self.simple_name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// All persisted properties in declaration order.
    pub fn properties(&self) -> &[CratePersistentProperty] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&CratePersistentProperty> {
        self.properties.iter().find(|p| p.name() == name)
    }

    pub fn property_by_field_name(&self, field_name: &str) -> Option<&CratePersistentProperty> {
        self.properties.iter().find(|p| p.field_name() == field_name)
    }

    pub fn id_property(&self) -> Option<&CratePersistentProperty> {
        self.properties.iter().find(|p| p.is_id_property())
    }

    pub fn version_property(&self) -> Option<&CratePersistentProperty> {
        self.properties.iter().find(|p| p.is_version_property())
    }

    pub fn properties_of(&self, category: PropertyCategory) -> Vec<&CratePersistentProperty> {
        self.properties
            .iter()
            .filter(|p| p.category() == category)
            .collect()
    }

    pub fn primitive_properties(&self) -> Vec<&CratePersistentProperty> {
        self.properties_of(PropertyCategory::Primitive)
    }

    pub fn entity_properties(&self) -> Vec<&CratePersistentProperty> {
        self.properties_of(PropertyCategory::Entity)
    }

    pub fn array_properties(&self) -> Vec<&CratePersistentProperty> {
        self.properties_of(PropertyCategory::Array)
    }

    pub fn collection_properties(&self) -> Vec<&CratePersistentProperty> {
        self.properties_of(PropertyCategory::Collection)
    }

    pub fn map_properties(&self) -> Vec<&CratePersistentProperty> {
        self.properties_of(PropertyCategory::Map)
    }

    /// Entity types referenced by properties, directly or through containers.
    pub fn nested_entity_types(&self) -> Vec<EntityType> {
        self.properties
            .iter()
            .flat_map(|p| p.raw_type().nested_entity_types())
            .unique()
            .collect()
    }
}

impl fmt::Display for CratePersistentEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.simple_name, self.table_name)
    }
}

/// First key type of a map, at any nesting depth, that is not a string.
fn non_string_map_key(info: &TypeInformation) -> Option<&TypeInformation> {
    match info.kind() {
        TypeKind::Primitive(_) | TypeKind::Entity(_) => None,
        TypeKind::Array(component) | TypeKind::Collection(component) => {
            non_string_map_key(component)
        }
        TypeKind::Map { key, value } => {
            if key.primitive_type() != Some(PrimitiveType::String) {
                Some(key.as_ref())
            } else {
                non_string_map_key(key).or_else(|| non_string_map_key(value))
            }
        }
    }
}

fn validate_table_name(type_name: &str, table_name: &str) -> MappingResult<()> {
    let reason = if table_name.is_empty() {
        Some("must not be empty")
    } else if table_name.starts_with('_') {
        Some("must not start with an underscore")
    } else if table_name.chars().any(char::is_whitespace) {
        Some("must not contain whitespace")
    } else if table_name.contains(INVALID_TABLE_NAME_CHARS) {
        Some("contains a reserved character")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(MappingError::InvalidTableName {
            type_name: type_name.to_string(),
            table_name: table_name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_name_rules() {
        assert!(validate_table_name("T", "BOOKS").is_ok());
        assert!(validate_table_name("T", "sample_entity").is_ok());

        for invalid in ["", "_hidden", "my table", "doc.books", "a\"b", "x/y"] {
            assert!(
                matches!(
                    validate_table_name("T", invalid),
                    Err(MappingError::InvalidTableName { .. })
                ),
                "{:?} should be rejected",
                invalid
            );
        }
    }
}
