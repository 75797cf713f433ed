pub mod config;
pub mod error;
pub mod event;
pub mod params;

pub use config::Config;
pub use error::*;
pub use event::*;
pub use params::*;
