use crate::TypeInformation;
use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Implemented by `#[derive(CrateEntity)]`.
///
/// The metadata is what the derive could learn from the struct definition:
/// field names and types plus the `#[cratedb(...)]` attributes. Table name
/// resolution and validation happen later, in the mapping context.
pub trait CrateEntity: 'static {
    fn entity_metadata() -> EntityMetadata;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityMetadata {
    /// fully qualified type name
    pub type_name: &'static str,
    /// struct identifier as written in the source
    pub simple_name: &'static str,
    /// explicit `#[cratedb(table_name = "...")]`
    pub table_name: Option<&'static str>,
    /// persisted fields in declaration order, transient fields excluded
    pub properties: Vec<PropertyMetadata>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyMetadata {
    /// field identifier
    pub name: &'static str,
    /// explicit `#[cratedb(name = "...")]`
    pub column_name: Option<&'static str>,
    pub type_information: TypeInformation,
    pub id: bool,
    pub version: bool,
}

/// Handle to a type implementing [`CrateEntity`], used where Java code would
/// pass a `Class<?>` around.
#[derive(Clone, Copy)]
pub struct EntityType {
    id: TypeId,
    name: &'static str,
    metadata: fn() -> EntityMetadata,
}

impl EntityType {
    pub fn of<T: CrateEntity>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            metadata: T::entity_metadata,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn simple_name(&self) -> String {
        crate::ty::simple_type_name(self.name)
    }

    pub fn metadata(&self) -> EntityMetadata {
        (self.metadata)()
    }
}

impl PartialEq for EntityType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EntityType {}

impl Hash for EntityType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntityType").field(&self.name).finish()
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
