mod array;
mod r#box;
mod datetime;
mod map;
mod net;
mod opt;
mod primitive;
mod set;
mod uuid;
mod vec;

/// Implements [`PersistentType`](crate::PersistentType) for single-parameter
/// containers that classify as the given kind.
macro_rules! impl_container_persistent_type {
    ($kind:ident => [ $($container:ident),* ]) => {
        $(
            impl<T: crate::PersistentType> crate::PersistentType for $container<T> {
                fn type_information() -> crate::TypeInformation {
                    crate::TypeInformation::$kind::<Self>(T::type_information())
                }
            }
        )*
    };
}

pub(crate) use impl_container_persistent_type;
