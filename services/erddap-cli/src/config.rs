//! Runtime configuration assembled from command-line flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use server_registry::{JsonFileRepository, ServerRegistry};
use tracing::debug;

/// Timeout for each server status probe.
pub const STATUS_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Timeout for metadata, search and data requests.
    pub request_timeout: Duration,
    pub status_timeout: Duration,
    /// Custom server list location; the home directory file when unset.
    pub servers_file: Option<PathBuf>,
}

impl CliConfig {
    pub fn new(timeout_secs: u64, servers_file: Option<PathBuf>) -> Self {
        Self {
            request_timeout: Duration::from_secs(timeout_secs),
            status_timeout: STATUS_PROBE_TIMEOUT,
            servers_file,
        }
    }

    /// Open the server registry at the configured location.
    pub fn registry(&self) -> Result<ServerRegistry<JsonFileRepository>> {
        let repository = match &self.servers_file {
            Some(path) => JsonFileRepository::new(path),
            None => JsonFileRepository::at_default_location()
                .context("Failed to locate the custom servers file")?,
        };
        debug!(path = %repository.path().display(), "Using servers file");
        Ok(ServerRegistry::new(repository))
    }
}

/// Resolve a `--server` argument: a known server name maps to its URL,
/// anything else is taken as a URL.
pub fn resolve_server(config: &CliConfig, server: &str) -> Result<String> {
    let server = server.trim();
    if server.contains("://") {
        return Ok(server.to_string());
    }

    let registry = config.registry()?;
    Ok(registry
        .find(server)
        .map(|entry| entry.base_url().to_string())
        .unwrap_or_else(|| server.to_string()))
}
