#![allow(dead_code)]

use cratedb_mapping::CrateEntity;
use std::collections::{HashMap, HashSet};

/// Entity without a table name attribute
#[derive(CrateEntity, Debug, Clone)]
pub struct SampleEntity {
    pub id: String,
    pub name: String,
    pub count: i32,
}

#[derive(CrateEntity, Debug, Clone, PartialEq, Eq, Hash)]
#[cratedb(table_name = "books")]
pub struct Book {
    #[cratedb(id)]
    pub isbn: String,
    pub title: String,
    pub pages: i32,
}

/// One property of each category, two collections
#[derive(CrateEntity, Debug, Clone)]
pub struct PropertiesContainer {
    pub string: String,
    pub book: Book,
    pub strings: [String; 3],
    pub tags: Vec<String>,
    pub books: HashSet<Book>,
    pub attributes: HashMap<String, String>,
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}
