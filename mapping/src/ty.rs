use crate::{CrateEntity, EntityType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar column types of the store.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    String,
    Timestamp,
    Ip,
    GeoPoint,
}

impl PrimitiveType {
    /// Name of the column type as written in a CrateDB table definition.
    pub fn column_type(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Timestamp => "timestamp",
            Self::Ip => "ip",
            Self::GeoPoint => "geo_point",
        }
    }

    pub fn is_integral(&self) -> bool {
        matches!(self, Self::Byte | Self::Short | Self::Integer | Self::Long)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_type())
    }
}

/// Shape of a type as seen by the mapping layer.
///
/// `Option<T>` and `Box<T>` never show up here: they take the kind of `T`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeKind {
    Primitive(PrimitiveType),
    Entity(EntityType),
    /// fixed-size arrays and boxed slices
    Array(Box<TypeInformation>),
    /// sequences and sets
    Collection(Box<TypeInformation>),
    Map {
        key: Box<TypeInformation>,
        value: Box<TypeInformation>,
    },
}

/// Statically derived description of a field type.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypeInformation {
    name: &'static str,
    kind: TypeKind,
    nullable: bool,
}

impl TypeInformation {
    pub fn new<T: ?Sized>(kind: TypeKind) -> Self {
        Self {
            name: std::any::type_name::<T>(),
            kind,
            nullable: false,
        }
    }

    pub fn primitive<T: ?Sized>(primitive: PrimitiveType) -> Self {
        Self::new::<T>(TypeKind::Primitive(primitive))
    }

    pub fn entity<T: CrateEntity>() -> Self {
        Self::new::<T>(TypeKind::Entity(EntityType::of::<T>()))
    }

    pub fn array<T: ?Sized>(component: TypeInformation) -> Self {
        Self::new::<T>(TypeKind::Array(Box::new(component)))
    }

    pub fn collection<T: ?Sized>(element: TypeInformation) -> Self {
        Self::new::<T>(TypeKind::Collection(Box::new(element)))
    }

    pub fn map<T: ?Sized>(key: TypeInformation, value: TypeInformation) -> Self {
        Self::new::<T>(TypeKind::Map {
            key: Box::new(key),
            value: Box::new(value),
        })
    }

    /// Marks the type as optional while keeping the name of the declared type.
    pub fn into_nullable<T: ?Sized>(self) -> Self {
        Self {
            name: std::any::type_name::<T>(),
            nullable: true,
            ..self
        }
    }

    /// Fully qualified type name, e.g. `alloc::string::String`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name with module paths stripped, e.g. `Vec<String>`.
    pub fn simple_name(&self) -> String {
        simple_type_name(self.name)
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self.kind, TypeKind::Primitive(_))
    }

    pub fn is_entity(&self) -> bool {
        matches!(self.kind, TypeKind::Entity(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self.kind, TypeKind::Array(_))
    }

    pub fn is_collection_like(&self) -> bool {
        matches!(self.kind, TypeKind::Collection(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self.kind, TypeKind::Map { .. })
    }

    pub fn primitive_type(&self) -> Option<PrimitiveType> {
        match self.kind {
            TypeKind::Primitive(primitive) => Some(primitive),
            _ => None,
        }
    }

    pub fn entity_type(&self) -> Option<EntityType> {
        match self.kind {
            TypeKind::Entity(entity_type) => Some(entity_type),
            _ => None,
        }
    }

    /// Element type of arrays and collections.
    pub fn component_type(&self) -> Option<&TypeInformation> {
        match &self.kind {
            TypeKind::Array(component) | TypeKind::Collection(component) => Some(component.as_ref()),
            _ => None,
        }
    }

    pub fn map_key_type(&self) -> Option<&TypeInformation> {
        match &self.kind {
            TypeKind::Map { key, .. } => Some(key.as_ref()),
            _ => None,
        }
    }

    pub fn map_value_type(&self) -> Option<&TypeInformation> {
        match &self.kind {
            TypeKind::Map { value, .. } => Some(value.as_ref()),
            _ => None,
        }
    }

    /// The type actually stored per element: the component type for arrays and
    /// collections, the value type for maps and the type itself otherwise.
    pub fn actual_type(&self) -> &TypeInformation {
        match &self.kind {
            TypeKind::Array(component) | TypeKind::Collection(component) => component.as_ref(),
            TypeKind::Map { value, .. } => value.as_ref(),
            _ => self,
        }
    }

    /// Entity types reachable from this type, outermost first.
    pub fn nested_entity_types(&self) -> Vec<EntityType> {
        let mut found = Vec::new();
        self.collect_entity_types(&mut found);
        found
    }

    fn collect_entity_types(&self, found: &mut Vec<EntityType>) {
        match &self.kind {
            TypeKind::Primitive(_) => {}
            TypeKind::Entity(entity_type) => found.push(*entity_type),
            TypeKind::Array(component) | TypeKind::Collection(component) => {
                component.collect_entity_types(found)
            }
            TypeKind::Map { key, value } => {
                key.collect_entity_types(found);
                value.collect_entity_types(found);
            }
        }
    }
}

impl fmt::Display for TypeInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.simple_name())
    }
}

/// Types that can appear as a persisted field.
///
/// Implemented for the scalar types, `Option`, `Box`, arrays, the std
/// collections and maps, and for every `#[derive(CrateEntity)]` type.
pub trait PersistentType {
    fn type_information() -> TypeInformation;
}

/// Strips module paths from every path segment of a type name:
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub(crate) fn simple_type_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut segment = String::new();

    for ch in name.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            segment.push(ch);
        } else {
            out.push_str(last_path_segment(&segment));
            segment.clear();
            out.push(ch);
        }
    }
    out.push_str(last_path_segment(&segment));

    out
}

fn last_path_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
