use crate::{PrimitiveType, PropertyMetadata, TypeInformation, TypeKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The category a property is classified into. Every property has exactly one.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyCategory {
    Primitive,
    Entity,
    Array,
    Collection,
    Map,
}

impl PropertyCategory {
    pub const ALL: [PropertyCategory; 5] = [
        Self::Primitive,
        Self::Entity,
        Self::Array,
        Self::Collection,
        Self::Map,
    ];

    pub fn of(kind: &TypeKind) -> Self {
        match kind {
            TypeKind::Primitive(_) => Self::Primitive,
            TypeKind::Entity(_) => Self::Entity,
            TypeKind::Array(_) => Self::Array,
            TypeKind::Collection(_) => Self::Collection,
            TypeKind::Map { .. } => Self::Map,
        }
    }
}

impl fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Primitive => "primitive",
            Self::Entity => "entity",
            Self::Array => "array",
            Self::Collection => "collection",
            Self::Map => "map",
        };
        f.write_str(name)
    }
}

/// One persisted field of an entity together with its classification.
#[derive(Getters, Clone, Debug, PartialEq, Eq)]
pub struct CratePersistentProperty {
    /// field identifier in the struct
    name: String,
    /// column the field is stored in
    field_name: String,
    /// fully qualified name of the owning type
    owner: &'static str,
    /// the declared type of the field
    raw_type: TypeInformation,
    #[getter(skip)]
    id: bool,
    #[getter(skip)]
    version: bool,
}

impl CratePersistentProperty {
    pub(crate) fn new(owner: &'static str, metadata: PropertyMetadata) -> Self {
        Self {
            name: metadata.name.to_string(),
            field_name: metadata.column_name.unwrap_or(metadata.name).to_string(),
            owner,
            raw_type: metadata.type_information,
            id: metadata.id,
            version: metadata.version,
        }
    }

    pub(crate) fn mark_as_id(&mut self) {
        self.id = true;
    }

    /// Component type for arrays and collections, value type for maps and the
    /// declared type otherwise.
    pub fn actual_type(&self) -> &TypeInformation {
        self.raw_type.actual_type()
    }

    pub fn category(&self) -> PropertyCategory {
        PropertyCategory::of(self.raw_type.kind())
    }

    pub fn is_primitive(&self) -> bool {
        self.raw_type.is_primitive()
    }

    pub fn is_entity(&self) -> bool {
        self.raw_type.is_entity()
    }

    pub fn is_array(&self) -> bool {
        self.raw_type.is_array()
    }

    pub fn is_collection_like(&self) -> bool {
        self.raw_type.is_collection_like()
    }

    pub fn is_map(&self) -> bool {
        self.raw_type.is_map()
    }

    pub fn is_nullable(&self) -> bool {
        self.raw_type.is_nullable()
    }

    pub fn is_id_property(&self) -> bool {
        self.id
    }

    pub fn is_version_property(&self) -> bool {
        self.version
    }

    pub fn primitive_type(&self) -> Option<PrimitiveType> {
        self.raw_type.primitive_type()
    }
}

impl fmt::Display for CratePersistentProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.name, self.raw_type, self.category())
    }
}
