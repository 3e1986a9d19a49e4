pub use darling::FromDeriveInput;
pub use darling::FromField;
pub use proc_macro::TokenStream;
pub use quote::quote;
pub use syn::{parse_macro_input, Data, DataStruct, DeriveInput, Fields, FieldsNamed};

pub use crate::args::*;
