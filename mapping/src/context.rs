use crate::{
    CrateEntity, CratePersistentEntity, EntityType, MappingConfig, MappingError, MappingResult,
    NamingStrategy,
};
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

/// Registry of persistent entities, keyed by type.
///
/// Seed it with [`set_initial_entity_set`](Self::set_initial_entity_set) and
/// call [`initialize`](Self::initialize); entity types reachable through the
/// properties of a registered entity are registered along with it.
pub struct CrateMappingContext {
    config: MappingConfig,
    naming: Box<dyn NamingStrategy>,
    initial_entity_set: Vec<EntityType>,
    entities: RwLock<HashMap<TypeId, Arc<CratePersistentEntity>>>,
}

impl Default for CrateMappingContext {
    fn default() -> Self {
        Self::with_config(MappingConfig::default())
    }
}

impl CrateMappingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MappingConfig) -> Self {
        Self {
            naming: Box::new(config.table_naming),
            config,
            initial_entity_set: Vec::new(),
            entities: RwLock::new(HashMap::new()),
        }
    }

    /// Replaces the naming convention of the config with a custom one.
    ///
    /// The strategy runs while entities are being built but never under the
    /// registry lock, so it may look things up in this context.
    pub fn with_naming_strategy(mut self, naming: impl NamingStrategy + 'static) -> Self {
        self.naming = Box::new(naming);
        self
    }

    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    pub fn set_initial_entity_set(&mut self, entity_types: impl IntoIterator<Item = EntityType>) {
        self.initial_entity_set = entity_types.into_iter().collect();
    }

    pub fn initial_entity_set(&self) -> &[EntityType] {
        &self.initial_entity_set
    }

    /// Registers every type of the initial entity set. Calling it again only
    /// registers types that were added to the set since.
    pub fn initialize(&self) -> MappingResult<()> {
        for entity_type in &self.initial_entity_set {
            self.add_persistent_entity(*entity_type)?;
        }
        Ok(())
    }

    pub fn persistent_entity<T: CrateEntity>(&self) -> MappingResult<Arc<CratePersistentEntity>> {
        self.persistent_entity_for(EntityType::of::<T>())
    }

    /// Returns the registered entity, registering it first unless the context
    /// is strict.
    pub fn persistent_entity_for(
        &self,
        entity_type: EntityType,
    ) -> MappingResult<Arc<CratePersistentEntity>> {
        if let Some(entity) = self.registered(entity_type) {
            return Ok(entity);
        }

        if self.config.strict {
            warn!(entity = entity_type.name(), "rejecting unregistered entity in strict mode");
            return Err(MappingError::UnknownEntity(entity_type.name().to_string()));
        }

        self.add_persistent_entity(entity_type)
    }

    pub fn has_persistent_entity_for<T: CrateEntity>(&self) -> bool {
        self.registered(EntityType::of::<T>()).is_some()
    }

    /// All registered entities ordered by table name.
    pub fn persistent_entities(&self) -> Vec<Arc<CratePersistentEntity>> {
        let mut entities = self
            .entities
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect::<Vec<_>>();
        entities.sort_by(|a, b| a.table_name().cmp(b.table_name()));
        entities
    }

    pub fn len(&self) -> usize {
        self.entities
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn registered(&self, entity_type: EntityType) -> Option<Arc<CratePersistentEntity>> {
        self.entities
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&entity_type.type_id())
            .cloned()
    }

    /// Builds `entity_type` and every entity reachable from it. Nothing is
    /// registered unless all of them are valid.
    ///
    /// Descriptors are built without holding the registry lock, so a naming
    /// strategy may itself read the context.
    fn add_persistent_entity(
        &self,
        entity_type: EntityType,
    ) -> MappingResult<Arc<CratePersistentEntity>> {
        let mut staged = HashMap::new();
        let mut pending = vec![entity_type];

        while let Some(next) = pending.pop() {
            let id = next.type_id();
            if staged.contains_key(&id) || self.registered(next).is_some() {
                continue;
            }

            let entity = CratePersistentEntity::new(next, self.naming.as_ref())?;
            pending.extend(entity.nested_entity_types());
            staged.insert(id, Arc::new(entity));
        }

        let mut entities = self
            .entities
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        // another thread may have registered some of them in the meantime
        for (id, entity) in staged {
            entities.entry(id).or_insert_with(|| {
                debug!(
                    entity = entity.type_name(),
                    table = entity.table_name(),
                    properties = entity.properties().len(),
                    "registered persistent entity"
                );
                entity
            });
        }

        entities
            .get(&entity_type.type_id())
            .cloned()
            .ok_or_else(|| MappingError::UnknownEntity(entity_type.name().to_string()))
    }
}

impl fmt::Debug for CrateMappingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrateMappingContext")
            .field("config", &self.config)
            .field("initial_entity_set", &self.initial_entity_set)
            .field("entities", &self.len())
            .finish()
    }
}
