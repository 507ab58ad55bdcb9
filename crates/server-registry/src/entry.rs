//! Server entries and the built-in server list.

use serde::{Deserialize, Serialize};

/// A named ERDDAP server base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerEntry {
    pub name: String,
    pub url: String,
}

impl ServerEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Base URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.url.trim().trim_end_matches('/')
    }
}

/// Public servers known out of the box, as `(name, url)`.
pub const DEFAULT_SERVERS: [(&str, &str); 10] = [
    ("NOAA CoastWatch", "https://coastwatch.pfeg.noaa.gov/erddap"),
    ("IOOS Glider DAC", "https://data.ioos.us/gliders/erddap"),
    ("NOAA NCEI", "https://www.ncei.noaa.gov/erddap"),
    ("NOAA PMEL", "https://ferret.pmel.noaa.gov/pmel/erddap"),
    ("NOAA SWFSC", "https://oceanview.pfeg.noaa.gov/erddap"),
    ("NOAA GOES", "https://coastwatch.noaa.gov/erddap"),
    ("PacIOOS", "https://oos.soest.hawaii.edu/erddap"),
    ("CeNCOOS", "https://erddap.cencoos.org/erddap"),
    ("SECOORA", "https://erddap.secoora.org/erddap"),
    ("NERACOOS", "https://www.neracoos.org/erddap"),
];

/// [`DEFAULT_SERVERS`] as entries.
pub fn default_servers() -> Vec<ServerEntry> {
    DEFAULT_SERVERS
        .iter()
        .map(|(name, url)| ServerEntry::new(*name, *url))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_servers_unique_names() {
        let servers = default_servers();
        let mut names: Vec<&str> = servers.iter().map(|s| s.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), servers.len());
        assert_eq!(servers[0].name, "NOAA CoastWatch");
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let entry = ServerEntry::new("local", " http://localhost:8080/erddap/ ");
        assert_eq!(entry.base_url(), "http://localhost:8080/erddap");
    }

    #[test]
    fn test_entry_json_shape() {
        let json = serde_json::to_string(&ServerEntry::new("a", "http://a")).unwrap();
        assert_eq!(json, r#"{"name":"a","url":"http://a"}"#);
    }
}
