//! Error handling for public-key parsing

mod types;
pub mod validate;

pub use types::{Coordinate, Error, Result};
