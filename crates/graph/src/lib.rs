pub mod person;
pub mod store;

pub use person::Person;
pub use store::{GraphStats, SocialGraph};
