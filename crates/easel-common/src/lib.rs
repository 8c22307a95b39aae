pub mod errors;
pub mod types;

pub use errors::{ConfigError, EaselError};
pub use types::Color;
