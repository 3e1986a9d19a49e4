//! Mapping metadata for persisting plain Rust structs into CrateDB tables.
//!
//! Types opt in with `#[derive(CrateEntity)]`. A [`CrateMappingContext`] turns
//! the generated metadata into [`CratePersistentEntity`] descriptors, resolving
//! the table name of each type and classifying its properties as primitive,
//! entity, array, collection or map.
//!
//! ```rust
//! use cratedb_mapping::{CrateEntity, CrateMappingContext, EntityType};
//!
//! #[derive(CrateEntity)]
//! struct Tweet {
//!     id: String,
//!     text: String,
//!     retweets: Vec<String>,
//! }
//!
//! let mut context = CrateMappingContext::new();
//! context.set_initial_entity_set([EntityType::of::<Tweet>()]);
//! context.initialize().unwrap();
//!
//! let entity = context.persistent_entity::<Tweet>().unwrap();
//! assert_eq!(entity.table_name(), "TWEET");
//! assert_eq!(entity.collection_properties().len(), 1);
//! ```

pub use config::*;
pub use context::*;
pub use entity::*;
pub use error::*;
pub use metadata::*;
pub use naming::*;
pub use property::*;
pub use ty::*;

pub use cratedb_mapping_derive::CrateEntity;

mod r#impl;

mod config;
mod context;
mod entity;
mod error;
mod metadata;
mod naming;
mod property;
#[cfg(test)]
mod test;
mod ty;
