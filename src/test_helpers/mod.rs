//! Test support: in-memory backends implementing the repository and media
//! store traits, with failure injection for the partial-failure paths.

pub mod memory;

pub use memory::{InMemoryContentRepository, InMemoryMediaStore};
