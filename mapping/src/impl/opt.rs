use crate::{PersistentType, TypeInformation};

impl<T: PersistentType> PersistentType for Option<T> {
    fn type_information() -> TypeInformation {
        T::type_information().into_nullable::<Self>()
    }
}
