use crate::prelude::*;

/// Container for attributes specified on the struct
#[derive(Debug, FromDeriveInput, Clone)]
#[darling(attributes(cratedb), supports(struct_named))]
pub struct CrateEntityOpts {
    pub(crate) ident: syn::Ident,

    pub(crate) generics: syn::Generics,

    /// Explicit table name, bypassing the naming strategy of the context
    #[darling(default)]
    pub(crate) table_name: Option<String>,
}

/// Container for attributes specified on struct fields
#[derive(Debug, FromField)]
#[darling(attributes(cratedb))]
pub struct CrateFieldOpts {
    pub(crate) ident: Option<syn::Ident>,

    pub(crate) ty: syn::Type,

    /// Column name, defaults to the field name
    #[darling(default)]
    pub(crate) name: Option<String>,

    /// Identifier of the entity
    #[darling(default)]
    pub(crate) id: bool,

    /// Optimistic locking version
    #[darling(default)]
    pub(crate) version: bool,

    /// Not persisted at all
    #[darling(default)]
    pub(crate) transient: bool,
}

impl CrateFieldOpts {
    /// Rejects attribute combinations that cannot be mapped.
    pub fn validate(&self) -> darling::Result<()> {
        let conflicting = if self.transient && self.id {
            Some("id")
        } else if self.transient && self.version {
            Some("version")
        } else if self.transient && self.name.is_some() {
            Some("name")
        } else if self.id && self.version {
            Some("version")
        } else {
            None
        };

        match conflicting {
            Some(attr) => Err(darling::Error::custom(format!(
                "`{}` cannot be combined with `{}` on the same field",
                attr,
                if self.transient { "transient" } else { "id" }
            ))
            .with_span(&self.ty)),
            None => Ok(()),
        }
    }
}
