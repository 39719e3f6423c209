//! File registry crate: display name → file reference mapping and its persistence.
//!
//! ## Modules
//!
//! - [`error`] – Registry error types
//! - [`store`] – RegistryStore trait, JsonFileStore, InMemoryStore
//! - [`registry`] – FileRegistry (in-memory map, saves after every mutation)
//! - [`naming`] – Stem extraction and generated media names

mod error;
mod naming;
mod registry;
mod store;

#[cfg(test)]
mod registry_test;

pub use error::RegistryError;
pub use naming::{file_stem, generated_name, MediaKind};
pub use registry::FileRegistry;
pub use store::{FileMap, InMemoryStore, JsonFileStore, RegistryStore};
