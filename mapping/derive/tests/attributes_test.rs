#![allow(dead_code)]

use cratedb_mapping::{CrateEntity, EntityMetadata, PersistentType, PrimitiveType, PropertyMetadata};
use pretty_assertions::assert_eq;
use std::collections::HashMap;

#[derive(CrateEntity)]
#[cratedb(table_name = "tweets")]
struct Tweet {
    #[cratedb(id)]
    tweet_id: String,
    #[cratedb(name = "body")]
    text: String,
    #[cratedb(version)]
    version: i64,
    r#type: String,
    #[cratedb(transient)]
    rendered: Option<String>,
}

#[derive(CrateEntity)]
struct Timeline {
    tweets: Vec<Tweet>,
    pinned: Option<Box<Tweet>>,
    counters: HashMap<String, u64>,
}

fn property<'a>(metadata: &'a EntityMetadata, name: &str) -> &'a PropertyMetadata {
    metadata
        .properties
        .iter()
        .find(|p| p.name == name)
        .unwrap_or_else(|| panic!("missing property {}", name))
}

#[test]
fn test_struct_attributes() {
    let metadata = Tweet::entity_metadata();

    assert_eq!(metadata.simple_name, "Tweet");
    assert_eq!(metadata.table_name, Some("tweets"));
    assert!(metadata.type_name.ends_with("Tweet"));
}

#[test]
fn test_field_attributes() {
    let metadata = Tweet::entity_metadata();

    assert_eq!(
        metadata.properties.iter().map(|p| p.name).collect::<Vec<_>>(),
        vec!["tweet_id", "text", "version", "type"]
    );

    let id = property(&metadata, "tweet_id");
    assert!(id.id);
    assert!(!id.version);

    let text = property(&metadata, "text");
    assert_eq!(text.column_name, Some("body"));
    assert_eq!(text.type_information.primitive_type(), Some(PrimitiveType::String));

    let version = property(&metadata, "version");
    assert!(version.version);
    assert_eq!(version.type_information.primitive_type(), Some(PrimitiveType::Long));

    assert_eq!(property(&metadata, "type").column_name, None);
}

#[test]
fn test_no_table_name_attribute() {
    assert_eq!(Timeline::entity_metadata().table_name, None);
}

#[test]
fn test_entity_fields_reference_their_type() {
    let metadata = Timeline::entity_metadata();

    let tweets = &property(&metadata, "tweets").type_information;
    assert!(tweets.is_collection_like());
    assert!(tweets.actual_type().is_entity());

    let pinned = &property(&metadata, "pinned").type_information;
    assert!(pinned.is_entity());
    assert!(pinned.is_nullable());
    assert_eq!(
        pinned.entity_type().map(|t| t.metadata().simple_name),
        Some("Tweet")
    );

    assert!(property(&metadata, "counters").type_information.is_map());
}

#[test]
fn test_derived_persistent_type() {
    let info = Tweet::type_information();

    assert!(info.is_entity());
    assert_eq!(info.simple_name(), "Tweet");
    assert_eq!(info.nested_entity_types().len(), 1);
}
