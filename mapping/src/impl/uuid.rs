use crate::{PersistentType, PrimitiveType, TypeInformation};
use uuid::Uuid;

// stored in its hyphenated string form
impl PersistentType for Uuid {
    fn type_information() -> TypeInformation {
        TypeInformation::primitive::<Self>(PrimitiveType::String)
    }
}
