//! Storage for the user's custom server entries.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::entry::ServerEntry;
use crate::error::{RegistryError, RegistryResult};

/// File name of the custom server list, relative to the home directory.
pub const SERVERS_FILE_NAME: &str = ".erddap_cli_servers.json";

/// Where custom server entries are kept.
///
/// `load` never fails: an absent or unreadable store is an empty list.
pub trait ServerRepository {
    fn load(&self) -> Vec<ServerEntry>;

    fn save(&mut self, servers: &[ServerEntry]) -> RegistryResult<()>;
}

/// Custom servers stored as a pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Repository at `~/.erddap_cli_servers.json`.
    pub fn at_default_location() -> RegistryResult<Self> {
        Self::default_path().map(Self::new)
    }

    pub fn default_path() -> RegistryResult<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(SERVERS_FILE_NAME))
            .ok_or(RegistryError::NoHomeDirectory)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> RegistryResult<Vec<ServerEntry>> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl ServerRepository for JsonFileRepository {
    fn load(&self) -> Vec<ServerEntry> {
        match self.read() {
            Ok(servers) => {
                debug!(path = %self.path.display(), count = servers.len(), "Loaded custom servers");
                servers
            }
            Err(RegistryError::Io(e)) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable servers file");
                Vec::new()
            }
        }
    }

    fn save(&mut self, servers: &[ServerEntry]) -> RegistryResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(servers)?;
        fs::write(&self.path, contents)?;

        debug!(path = %self.path.display(), count = servers.len(), "Saved custom servers");
        Ok(())
    }
}

/// Custom servers held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    servers: Vec<ServerEntry>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_servers(servers: Vec<ServerEntry>) -> Self {
        Self { servers }
    }
}

impl ServerRepository for InMemoryRepository {
    fn load(&self) -> Vec<ServerEntry> {
        self.servers.clone()
    }

    fn save(&mut self, servers: &[ServerEntry]) -> RegistryResult<()> {
        self.servers = servers.to_vec();
        Ok(())
    }
}
