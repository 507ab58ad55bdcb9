//! `servers`: list, add, remove and probe known servers.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use erddap_protocol::{capabilities_url, version_url};
use server_registry::{ServerRegistry, ServerRepository};
use tracing::debug;

use crate::client::ErddapClient;

pub fn list<R: ServerRepository>(registry: &ServerRegistry<R>, out: &mut impl Write) -> Result<()> {
    writeln!(out, "\nKnown ERDDAP Servers:\n")?;
    for server in registry.list_known() {
        writeln!(out, "- {}: {}", server.name, server.url)?;
    }
    Ok(())
}

pub fn add<R: ServerRepository>(
    registry: &mut ServerRegistry<R>,
    out: &mut impl Write,
    name: &str,
    url: &str,
) -> Result<()> {
    registry.add_or_update(name, url)?;
    writeln!(out, "Added/updated server: {} -> {}", name, url)?;
    Ok(())
}

pub fn remove<R: ServerRepository>(
    registry: &mut ServerRegistry<R>,
    out: &mut impl Write,
    name: &str,
) -> Result<()> {
    if registry.remove(name)? {
        writeln!(out, "Removed server: {}", name)?;
    } else {
        writeln!(out, "No custom server named: {}", name)?;
    }
    Ok(())
}

/// Probe the version endpoint and dataset listing of every known server.
pub async fn status<R: ServerRepository>(
    registry: &ServerRegistry<R>,
    client: &ErddapClient,
    out: &mut impl Write,
    timeout: Duration,
) -> Result<()> {
    writeln!(out, "\nERDDAP Server Status:\n")?;
    for server in registry.list_known() {
        let version = match client.probe(&version_url(&server.url), timeout).await {
            Ok((status, body)) if status.is_success() => body.trim().to_string(),
            Ok((status, _)) => format!("HTTP {}", status.as_u16()),
            Err(e) => format!("Error: {:#}", e),
        };
        let capabilities = match client.probe(&capabilities_url(&server.url), timeout).await {
            Ok((status, _)) if status.is_success() => "OK".to_string(),
            Ok((status, _)) => format!("HTTP {}", status.as_u16()),
            Err(e) => format!("Error: {:#}", e),
        };

        debug!(name = %server.name, version = %version, capabilities = %capabilities, "Probed server");
        writeln!(
            out,
            "- {}: {}\n    Version: {}\n    Capabilities: {}\n",
            server.name, server.url, version, capabilities
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use server_registry::{InMemoryRepository, DEFAULT_SERVERS};

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_shows_defaults() {
        let registry = ServerRegistry::new(InMemoryRepository::new());
        let text = output(|out| list(&registry, out));

        assert!(text.contains("- NOAA CoastWatch: https://coastwatch.pfeg.noaa.gov/erddap\n"));
        assert_eq!(text.matches("\n- ").count(), DEFAULT_SERVERS.len());
    }

    #[test]
    fn test_add_then_remove() {
        let mut registry = ServerRegistry::new(InMemoryRepository::new());

        let added = output(|out| add(&mut registry, out, "lab", "http://lab/erddap"));
        assert_eq!(added, "Added/updated server: lab -> http://lab/erddap\n");
        assert!(output(|out| list(&registry, out)).contains("\n- lab: http://lab/erddap\n"));

        let removed = output(|out| remove(&mut registry, out, "lab"));
        assert_eq!(removed, "Removed server: lab\n");

        let missing = output(|out| remove(&mut registry, out, "lab"));
        assert_eq!(missing, "No custom server named: lab\n");
    }
}
