use super::impl_container_persistent_type;
use std::collections::{LinkedList, VecDeque};

impl_container_persistent_type!(collection => [Vec, VecDeque, LinkedList]);
