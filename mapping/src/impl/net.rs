use crate::{PersistentType, PrimitiveType, TypeInformation};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

macro_rules! persistent_ip {
    ($($typ:ty),*) => {
        $(
            impl PersistentType for $typ {
                fn type_information() -> TypeInformation {
                    TypeInformation::primitive::<Self>(PrimitiveType::Ip)
                }
            }
        )*
    };
}

persistent_ip!(IpAddr, Ipv4Addr, Ipv6Addr);
