mod args;
mod entity;
mod prelude;

use crate::entity::implement_for_struct;
use crate::prelude::*;

/// Derives `CrateEntity` and `PersistentType` for a struct with named fields.
///
/// # Struct Attributes
///
/// - `#[cratedb(table_name = "books")]` - Explicit table name. Without it the
///   mapping context derives one from the struct name (upper-cased by default).
///
/// # Field Attributes
///
/// - `#[cratedb(name = "column")]` - Column name (defaults to the field name).
/// - `#[cratedb(id)]` - Marks the identifier. A field called `id` is the
///   identifier when no field carries this attribute.
/// - `#[cratedb(version)]` - Marks the optimistic locking version column.
/// - `#[cratedb(transient)]` - Excludes the field from the mapping.
///
/// Every persisted field type must implement `PersistentType`.
///
/// # Example
///
/// ```rust
/// use cratedb_mapping::{CrateEntity, PersistentType};
///
/// #[derive(CrateEntity)]
/// #[cratedb(table_name = "books")]
/// struct Book {
///     #[cratedb(id)]
///     isbn: String,
///     title: String,
///     #[cratedb(name = "page_count")]
///     pages: i32,
///     #[cratedb(transient)]
///     cached_summary: Option<std::rc::Rc<str>>,
/// }
///
/// let metadata = <Book as cratedb_mapping::CrateEntity>::entity_metadata();
/// assert_eq!(metadata.table_name, Some("books"));
/// assert_eq!(metadata.properties.len(), 3);
/// assert!(Book::type_information().is_entity());
/// ```
///
/// # Errors
///
/// Only structs with named fields can be derived:
///
/// ```compile_fail
/// #[derive(cratedb_mapping::CrateEntity)]
/// enum Status {
///     Active,
///     Retired,
/// }
/// ```
///
/// ```compile_fail
/// #[derive(cratedb_mapping::CrateEntity)]
/// struct Point(f64, f64);
/// ```
///
/// ```compile_fail
/// #[derive(cratedb_mapping::CrateEntity)]
/// struct Marker;
/// ```
///
/// Generic structs are rejected:
///
/// ```compile_fail
/// #[derive(cratedb_mapping::CrateEntity)]
/// struct Wrapper<T> {
///     value: T,
/// }
/// ```
///
/// So are unknown attributes, on the struct or on a field:
///
/// ```compile_fail
/// #[derive(cratedb_mapping::CrateEntity)]
/// #[cratedb(table = "books")]
/// struct Book {
///     title: String,
/// }
/// ```
///
/// ```compile_fail
/// #[derive(cratedb_mapping::CrateEntity)]
/// struct Book {
///     #[cratedb(column = "book_title")]
///     title: String,
/// }
/// ```
///
/// A transient field cannot carry any other attribute:
///
/// ```compile_fail
/// #[derive(cratedb_mapping::CrateEntity)]
/// struct Book {
///     #[cratedb(id, transient)]
///     isbn: String,
/// }
/// ```
///
/// ```compile_fail
/// #[derive(cratedb_mapping::CrateEntity)]
/// struct Book {
///     #[cratedb(version, transient)]
///     revision: i64,
/// }
/// ```
///
/// ```compile_fail
/// #[derive(cratedb_mapping::CrateEntity)]
/// struct Book {
///     #[cratedb(name = "book_title", transient)]
///     title: String,
/// }
/// ```
///
/// The identifier cannot be the version as well:
///
/// ```compile_fail
/// #[derive(cratedb_mapping::CrateEntity)]
/// struct Book {
///     #[cratedb(id, version)]
///     revision: i64,
/// }
/// ```
#[proc_macro_derive(CrateEntity, attributes(cratedb))]
pub fn derive_crate_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match CrateEntityOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(err) => return err.write_errors().into(),
    };

    let expanded = match &input.data {
        Data::Struct(data_struct) => implement_for_struct(data_struct, &opts),
        _ => {
            return syn::Error::new(
                input.ident.span(),
                "CrateEntity derive macro only supports structs",
            )
            .to_compile_error()
            .into();
        }
    };

    match expanded {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into(),
    }
}
