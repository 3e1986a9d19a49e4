use crate::{PersistentType, TypeInformation};
use std::collections::{BTreeMap, HashMap};

impl<K: PersistentType, V: PersistentType, S> PersistentType for HashMap<K, V, S> {
    fn type_information() -> TypeInformation {
        TypeInformation::map::<Self>(K::type_information(), V::type_information())
    }
}

impl<K: PersistentType, V: PersistentType> PersistentType for BTreeMap<K, V> {
    fn type_information() -> TypeInformation {
        TypeInformation::map::<Self>(K::type_information(), V::type_information())
    }
}
