use crate::prelude::*;

/// Generate `CrateEntity` and `PersistentType` implementations for a struct
pub fn implement_for_struct(
    data_struct: &DataStruct,
    opts: &CrateEntityOpts,
) -> darling::Result<proc_macro2::TokenStream> {
    let struct_name = &opts.ident;

    if !opts.generics.params.is_empty() {
        return Err(
            darling::Error::custom("CrateEntity derive macro does not support generic structs")
                .with_span(&opts.generics),
        );
    }

    let fields_named = match &data_struct.fields {
        Fields::Named(fields) => fields,
        _ => {
            return Err(darling::Error::custom(
                "CrateEntity derive macro only supports structs with named fields",
            )
            .with_span(struct_name))
        }
    };

    let simple_name = struct_name.to_string();
    let table_name = match &opts.table_name {
        Some(table_name) => quote! { Some(#table_name) },
        None => quote! { None },
    };
    let properties = process_named_fields(fields_named)?;

    Ok(quote! {
        impl cratedb_mapping::CrateEntity for #struct_name {
            fn entity_metadata() -> cratedb_mapping::EntityMetadata {
                cratedb_mapping::EntityMetadata {
                    type_name: ::std::any::type_name::<Self>(),
                    simple_name: #simple_name,
                    table_name: #table_name,
                    properties: vec![
                        #(#properties),*
                    ],
                }
            }
        }

        impl cratedb_mapping::PersistentType for #struct_name {
            fn type_information() -> cratedb_mapping::TypeInformation {
                cratedb_mapping::TypeInformation::entity::<Self>()
            }
        }
    })
}

/// Process named fields to generate property metadata, skipping transient ones.
///
/// Errors of all fields are collected so they are reported together.
fn process_named_fields(fields_named: &FieldsNamed) -> darling::Result<Vec<proc_macro2::TokenStream>> {
    let mut errors = darling::Error::accumulator();
    let mut properties = Vec::new();

    for field in &fields_named.named {
        let Some(field_opts) = errors.handle(CrateFieldOpts::from_field(field)) else {
            continue;
        };
        if errors.handle(field_opts.validate()).is_none() || field_opts.transient {
            continue;
        }

        let Some(ident) = field_opts.ident.as_ref() else {
            errors.push(darling::Error::custom("expected a named field").with_span(field));
            continue;
        };
        let field_name = ident.to_string();
        let field_name = field_name.trim_start_matches("r#").to_string();
        let field_ty = &field_opts.ty;

        let column_name = match &field_opts.name {
            Some(name) => quote! { Some(#name) },
            None => quote! { None },
        };
        let id = field_opts.id;
        let version = field_opts.version;

        properties.push(quote! {
            cratedb_mapping::PropertyMetadata {
                name: #field_name,
                column_name: #column_name,
                type_information: <#field_ty as cratedb_mapping::PersistentType>::type_information(),
                id: #id,
                version: #version,
            }
        });
    }

    errors.finish_with(properties)
}
