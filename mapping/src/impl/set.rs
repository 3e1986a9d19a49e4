use crate::{PersistentType, TypeInformation};
use std::collections::{BTreeSet, HashSet};

impl<T: PersistentType, S> PersistentType for HashSet<T, S> {
    fn type_information() -> TypeInformation {
        TypeInformation::collection::<Self>(T::type_information())
    }
}

impl<T: PersistentType> PersistentType for BTreeSet<T> {
    fn type_information() -> TypeInformation {
        TypeInformation::collection::<Self>(T::type_information())
    }
}
