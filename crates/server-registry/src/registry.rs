//! Merged view of default and custom servers.

use tracing::info;

use crate::entry::{default_servers, ServerEntry};
use crate::error::RegistryResult;
use crate::repository::ServerRepository;

/// Known servers backed by a repository of custom entries.
#[derive(Debug, Clone)]
pub struct ServerRegistry<R> {
    repository: R,
}

impl<R: ServerRepository> ServerRegistry<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Entries added by the user, in insertion order.
    pub fn custom(&self) -> Vec<ServerEntry> {
        self.repository.load()
    }

    /// Custom entries first, then the defaults whose names they don't shadow.
    pub fn list_known(&self) -> Vec<ServerEntry> {
        let mut known = self.repository.load();
        let defaults: Vec<ServerEntry> = default_servers()
            .into_iter()
            .filter(|d| !known.iter().any(|c| c.name == d.name))
            .collect();
        known.extend(defaults);
        known
    }

    /// Look up a known server by name.
    pub fn find(&self, name: &str) -> Option<ServerEntry> {
        self.list_known().into_iter().find(|s| s.name == name)
    }

    /// Replace the URL of the custom entry named `name`, or append a new one.
    pub fn add_or_update(&mut self, name: &str, url: &str) -> RegistryResult<()> {
        let mut servers = self.repository.load();

        match servers.iter_mut().find(|s| s.name == name) {
            Some(existing) => existing.url = url.to_string(),
            None => servers.push(ServerEntry::new(name, url)),
        }

        self.repository.save(&servers)?;
        info!(name = %name, url = %url, "Saved custom server");
        Ok(())
    }

    /// Drop every custom entry named `name`. Returns whether any was removed.
    ///
    /// Built-in defaults cannot be removed.
    pub fn remove(&mut self, name: &str) -> RegistryResult<bool> {
        let mut servers = self.repository.load();
        let before = servers.len();
        servers.retain(|s| s.name != name);

        let removed = servers.len() != before;
        self.repository.save(&servers)?;
        info!(name = %name, removed, "Removed custom server");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::DEFAULT_SERVERS;
    use crate::repository::InMemoryRepository;

    fn registry() -> ServerRegistry<InMemoryRepository> {
        ServerRegistry::new(InMemoryRepository::new())
    }

    #[test]
    fn test_list_known_defaults_only() {
        let known = registry().list_known();
        assert_eq!(known.len(), DEFAULT_SERVERS.len());
    }

    #[test]
    fn test_custom_shadows_default() {
        let mut reg = registry();
        reg.add_or_update("NOAA NCEI", "http://mirror/erddap").unwrap();
        reg.add_or_update("local", "http://localhost/erddap").unwrap();

        let known = reg.list_known();
        assert_eq!(known.len(), DEFAULT_SERVERS.len() + 1);
        assert_eq!(known[0], ServerEntry::new("NOAA NCEI", "http://mirror/erddap"));
        assert_eq!(known[1].name, "local");
        assert_eq!(known.iter().filter(|s| s.name == "NOAA NCEI").count(), 1);
    }

    #[test]
    fn test_add_updates_in_place() {
        let mut reg = registry();
        reg.add_or_update("a", "http://a1").unwrap();
        reg.add_or_update("b", "http://b").unwrap();
        reg.add_or_update("a", "http://a2").unwrap();

        let custom = reg.custom();
        assert_eq!(
            custom,
            vec![ServerEntry::new("a", "http://a2"), ServerEntry::new("b", "http://b")]
        );
    }

    #[test]
    fn test_remove_reports_outcome() {
        let mut reg = registry();
        reg.add_or_update("a", "http://a").unwrap();

        assert!(reg.remove("a").unwrap());
        assert!(!reg.remove("a").unwrap());
        assert!(!reg.remove("NOAA GOES").unwrap());
        assert!(reg.find("NOAA GOES").is_some());
    }

    #[test]
    fn test_seeded_repository_persists_changes() {
        let seeded = InMemoryRepository::with_servers(vec![
            ServerEntry::new("lab", "http://lab/erddap"),
            ServerEntry::new("field", "http://field/erddap"),
        ]);
        let mut reg = ServerRegistry::new(seeded);

        let known = reg.list_known();
        assert_eq!(known.len(), DEFAULT_SERVERS.len() + 2);
        assert_eq!(known[0].name, "lab");
        assert_eq!(known[1].name, "field");

        reg.add_or_update("lab", "http://lab2/erddap").unwrap();
        assert!(reg.remove("field").unwrap());

        assert_eq!(
            reg.repository().load(),
            vec![ServerEntry::new("lab", "http://lab2/erddap")]
        );
    }
}
