use crate::{PersistentType, TypeInformation};

impl<T: PersistentType, const N: usize> PersistentType for [T; N] {
    fn type_information() -> TypeInformation {
        TypeInformation::array::<Self>(T::type_information())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrays_are_not_collections() {
        let info = <[String; 4]>::type_information();
        assert!(info.is_array());
        assert!(!info.is_collection_like());
        assert_eq!(info.simple_name(), "[String; 4]");

        let boxed = <Box<[f64]>>::type_information();
        assert!(boxed.is_array());
        assert!(boxed.actual_type().is_primitive());
    }
}
