//! Careers - monster and class stat templates and their resolution

pub mod class;
pub mod monster;
pub mod resolver;
pub mod template;

pub use class::ClassCareer;
pub use monster::MonsterCareer;
pub use resolver::{resolve, ResolvedCareer};
pub use template::{Attribute, Attributes, CareerTemplate};
