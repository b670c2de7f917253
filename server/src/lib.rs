//! HTTP boundary around a single cached character.

pub mod config;
pub mod error;
pub mod routes;
pub mod slot;

pub use config::{Arguments, Configuration};
pub use error::ApiError;
pub use routes::router;
pub use slot::{CharacterSlot, DefinitionSource};
