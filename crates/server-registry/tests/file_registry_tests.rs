//! Registry behaviour over the JSON file repository.

use std::fs;

use server_registry::{JsonFileRepository, ServerEntry, ServerRegistry, DEFAULT_SERVERS};
use tempfile::TempDir;

#[test]
fn test_entries_persist_across_registries() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("servers.json");

    let mut reg = ServerRegistry::new(JsonFileRepository::new(&path));
    reg.add_or_update("local", "http://localhost:8080/erddap").unwrap();

    let reopened = ServerRegistry::new(JsonFileRepository::new(&path));
    assert_eq!(
        reopened.custom(),
        vec![ServerEntry::new("local", "http://localhost:8080/erddap")]
    );
    assert_eq!(reopened.list_known().len(), DEFAULT_SERVERS.len() + 1);
}

#[test]
fn test_reads_file_written_by_hand() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("servers.json");
    fs::write(
        &path,
        r#"[
  {"name": "PacIOOS", "url": "https://pacioos.example/erddap"},
  {"name": "lab", "url": "http://lab/erddap"}
]"#,
    )
    .unwrap();

    let reg = ServerRegistry::new(JsonFileRepository::new(&path));
    let known = reg.list_known();

    assert_eq!(known[0].url, "https://pacioos.example/erddap");
    assert_eq!(known[1].name, "lab");
    assert_eq!(known.len(), DEFAULT_SERVERS.len() + 1);
}

#[test]
fn test_corrupt_file_recovered_on_add() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("servers.json");
    fs::write(&path, "not json at all").unwrap();

    let mut reg = ServerRegistry::new(JsonFileRepository::new(&path));
    assert_eq!(reg.list_known().len(), DEFAULT_SERVERS.len());

    reg.add_or_update("lab", "http://lab/erddap").unwrap();
    let raw = fs::read_to_string(&path).unwrap();
    let parsed: Vec<ServerEntry> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, vec![ServerEntry::new("lab", "http://lab/erddap")]);
}
