//! Registry of known ERDDAP servers.
//!
//! A fixed list of public servers is merged with entries the user adds,
//! which live in a [`ServerRepository`] (by default a JSON file in the home
//! directory). Custom entries win over defaults with the same name.

pub mod entry;
pub mod error;
pub mod registry;
pub mod repository;

pub use entry::{default_servers, ServerEntry, DEFAULT_SERVERS};
pub use error::{RegistryError, RegistryResult};
pub use registry::ServerRegistry;
pub use repository::{InMemoryRepository, JsonFileRepository, ServerRepository, SERVERS_FILE_NAME};
