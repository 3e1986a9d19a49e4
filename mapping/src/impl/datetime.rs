use crate::{PersistentType, PrimitiveType, TypeInformation};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

impl<Tz: TimeZone> PersistentType for DateTime<Tz> {
    fn type_information() -> TypeInformation {
        TypeInformation::primitive::<Self>(PrimitiveType::Timestamp)
    }
}

impl PersistentType for NaiveDateTime {
    fn type_information() -> TypeInformation {
        TypeInformation::primitive::<Self>(PrimitiveType::Timestamp)
    }
}

impl PersistentType for NaiveDate {
    fn type_information() -> TypeInformation {
        TypeInformation::primitive::<Self>(PrimitiveType::Timestamp)
    }
}
