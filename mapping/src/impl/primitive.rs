use crate::{PersistentType, PrimitiveType, TypeInformation};

macro_rules! persistent_primitive {
    ($typ:ty: $primitive:ident) => {
        impl PersistentType for $typ {
            fn type_information() -> TypeInformation {
                TypeInformation::primitive::<$typ>(PrimitiveType::$primitive)
            }
        }
    };

    ({$($typ:ty: $primitive:ident),* $(,)?}) => {
        $(
            persistent_primitive!($typ: $primitive);
        )*
    };
}

// unsigned types widen to the next signed column type
persistent_primitive!({
    bool: Boolean,
    i8: Byte,
    i16: Short,
    i32: Integer,
    i64: Long,
    isize: Long,
    u8: Short,
    u16: Integer,
    u32: Long,
    u64: Long,
    usize: Long,
    f32: Float,
    f64: Double,
    char: String,
    String: String,
    &'static str: String,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_widening() {
        assert_eq!(u8::type_information().primitive_type(), Some(PrimitiveType::Short));
        assert_eq!(u32::type_information().primitive_type(), Some(PrimitiveType::Long));
        assert_eq!(i32::type_information().primitive_type(), Some(PrimitiveType::Integer));
    }

    #[test]
    fn strings_are_primitive() {
        let info = String::type_information();
        assert!(info.is_primitive());
        assert_eq!(info.name(), std::any::type_name::<String>());
        assert!(<&'static str>::type_information().is_primitive());
        assert_eq!(char::type_information().primitive_type(), Some(PrimitiveType::String));
    }
}
