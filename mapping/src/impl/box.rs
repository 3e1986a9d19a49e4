use crate::{PersistentType, TypeInformation};

impl<T: PersistentType> PersistentType for Box<T> {
    fn type_information() -> TypeInformation {
        T::type_information()
    }
}

impl<T: PersistentType> PersistentType for Box<[T]> {
    fn type_information() -> TypeInformation {
        TypeInformation::array::<Self>(T::type_information())
    }
}
