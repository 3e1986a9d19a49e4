#![allow(dead_code)]

use crate as cratedb_mapping;
use crate::*;
use pretty_assertions::assert_eq;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

#[derive(CrateEntity)]
struct Author {
    id: String,
    name: String,
    #[cratedb(version)]
    revision: i64,
}

#[derive(CrateEntity)]
#[cratedb(table_name = "library_books")]
struct LibraryBook {
    #[cratedb(id)]
    isbn: String,
    #[cratedb(name = "book_title")]
    title: String,
    authors: Vec<Author>,
    shelf: Option<Shelf>,
    #[cratedb(transient)]
    cached_rank: u32,
}

#[derive(CrateEntity)]
struct Shelf {
    label: String,
    neighbours: HashMap<String, Box<Shelf>>,
}

#[derive(CrateEntity)]
struct Catalogue {
    entries: BTreeMap<String, LibraryBook>,
    sections: HashSet<String>,
}

fn context_for(entity_type: EntityType) -> CrateMappingContext {
    let mut context = CrateMappingContext::new();
    context.set_initial_entity_set([entity_type]);
    context.initialize().unwrap();
    context
}

#[test]
fn test_derived_metadata() {
    let metadata = LibraryBook::entity_metadata();

    assert_eq!(metadata.simple_name, "LibraryBook");
    assert_eq!(metadata.table_name, Some("library_books"));
    assert_eq!(
        metadata.properties.iter().map(|p| p.name).collect::<Vec<_>>(),
        vec!["isbn", "title", "authors", "shelf"]
    );
    assert_eq!(metadata.properties[1].column_name, Some("book_title"));
    assert!(metadata.properties[0].id);
}

#[test]
fn test_id_by_explicit_attribute_and_by_name() {
    let context = context_for(EntityType::of::<LibraryBook>());

    let book = context.persistent_entity::<LibraryBook>().unwrap();
    assert_eq!(book.id_property().map(|p| p.name().as_str()), Some("isbn"));

    let author = context.persistent_entity::<Author>().unwrap();
    assert_eq!(author.id_property().map(|p| p.name().as_str()), Some("id"));
    assert_eq!(
        author.version_property().map(|p| p.name().as_str()),
        Some("revision")
    );
}

#[test]
fn test_nested_entities_are_registered() {
    let context = context_for(EntityType::of::<Catalogue>());

    assert!(context.has_persistent_entity_for::<Catalogue>());
    assert!(context.has_persistent_entity_for::<LibraryBook>());
    assert!(context.has_persistent_entity_for::<Author>());
    assert!(context.has_persistent_entity_for::<Shelf>());
    assert_eq!(context.len(), 4);

    let tables = context
        .persistent_entities()
        .iter()
        .map(|e| e.table_name().to_string())
        .collect::<Vec<_>>();
    assert_eq!(tables, vec!["AUTHOR", "CATALOGUE", "SHELF", "library_books"]);
}

#[test]
fn test_self_referencing_entity() {
    let context = context_for(EntityType::of::<Shelf>());
    let shelf = context.persistent_entity::<Shelf>().unwrap();

    let neighbours = shelf.property("neighbours").unwrap();
    assert!(neighbours.is_map());
    assert!(neighbours.actual_type().is_entity());
    assert_eq!(context.len(), 1);
}

#[test]
fn test_optional_entity_property() {
    let context = context_for(EntityType::of::<LibraryBook>());
    let book = context.persistent_entity::<LibraryBook>().unwrap();

    let shelf = book.property("shelf").unwrap();
    assert!(shelf.is_entity());
    assert!(shelf.is_nullable());
    assert_eq!(
        shelf.raw_type().entity_type(),
        Some(EntityType::of::<Shelf>())
    );
    assert!(book.property("cached_rank").is_none());
    assert_eq!(
        book.property_by_field_name("book_title").map(|p| p.name().as_str()),
        Some("title")
    );
}

#[test]
fn test_lookups_share_descriptors() {
    let context = context_for(EntityType::of::<Author>());

    let first = context.persistent_entity::<Author>().unwrap();
    let second = context
        .persistent_entity_for(EntityType::of::<Author>())
        .unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    context.initialize().unwrap();
    assert_eq!(context.len(), 1);
}
