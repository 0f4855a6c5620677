//! JSON file-backed record store
//!
//! One document per file, always written as a complete snapshot. Saves go to
//! a temporary sibling first and are renamed into place; the previous file is
//! kept as `<file>.bak`. A file that fails to parse is moved to
//! `<file>.corrupt` and the store falls back to the snapshot, then to the
//! empty skeleton.

use crate::domain::Document;
use crate::error::{Result, StorekeepError};
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// How a document came to be in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Parsed from the backing file
    Loaded,
    /// No backing file, or an empty one
    Fresh,
    /// Backing file was corrupted; the `.bak` snapshot was used instead
    Recovered { quarantined: PathBuf },
    /// Backing file was corrupted or unreadable and no usable snapshot existed
    Reset { quarantined: Option<PathBuf> },
}

#[derive(Debug)]
pub struct Loaded<D> {
    pub document: D,
    pub status: LoadStatus,
}

enum ReadFailure {
    Corrupt(serde_json::Error),
    Unreadable(std::io::Error),
}

/// Serialize a document the way it is stored on disk: 4-space indented JSON.
pub fn to_pretty_json<T: Serialize>(document: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;
    String::from_utf8(buf)
        .map_err(|e| StorekeepError::Config(format!("Serialized document is not UTF-8: {}", e)))
}

#[derive(Debug, Clone)]
pub struct RecordStore<D> {
    path: PathBuf,
    _document: PhantomData<fn() -> D>,
}

impl<D: Document> RecordStore<D> {
    pub fn new(path: PathBuf) -> Self {
        RecordStore {
            path,
            _document: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last known-good snapshot, refreshed on every save
    pub fn backup_path(&self) -> PathBuf {
        sibling_with_suffix(&self.path, "bak")
    }

    /// Where a corrupted file is moved before falling back
    pub fn quarantine_path(&self) -> PathBuf {
        sibling_with_suffix(&self.path, "corrupt")
    }

    /// Load the document. Never fails: problems are logged and the store
    /// falls back to the snapshot or the skeleton.
    pub fn load(&self) -> Loaded<D> {
        match read_document::<D>(&self.path) {
            Ok(Some(document)) => {
                tracing::debug!(path = %self.path.display(), document = D::NAME, "Loaded document");
                Loaded {
                    document,
                    status: LoadStatus::Loaded,
                }
            }
            Ok(None) => {
                tracing::debug!(path = %self.path.display(), document = D::NAME, "Starting from empty document");
                Loaded {
                    document: D::default(),
                    status: LoadStatus::Fresh,
                }
            }
            Err(ReadFailure::Unreadable(e)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Could not read {}; starting with empty data",
                    self.path.display()
                );
                Loaded {
                    document: D::default(),
                    status: LoadStatus::Reset { quarantined: None },
                }
            }
            Err(ReadFailure::Corrupt(e)) => self.recover(e),
        }
    }

    fn recover(&self, error: serde_json::Error) -> Loaded<D> {
        let quarantine = self.quarantine_path();
        let quarantined = match fs::rename(&self.path, &quarantine) {
            Ok(()) => Some(quarantine),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Could not move corrupted file aside");
                None
            }
        };

        tracing::warn!(
            path = %self.path.display(),
            error = %error,
            "{} is corrupted and will not be used",
            self.path.display()
        );

        // The snapshot is only safe to use once the corrupt file is out of the way;
        // otherwise the next save would copy it over the snapshot.
        let backup = self.backup_path();
        if let (Ok(Some(document)), Some(quarantined)) =
            (read_document::<D>(&backup), quarantined.clone())
        {
            tracing::warn!(backup = %backup.display(), "Recovered {} data from last snapshot", D::NAME);
            // Put the snapshot back in place so later runs load it too.
            if let Err(e) = self.save(&document) {
                tracing::warn!(path = %self.path.display(), error = %e, "Could not restore snapshot");
            }
            return Loaded {
                document,
                status: LoadStatus::Recovered { quarantined },
            };
        }

        tracing::warn!("Initializing new {} data", D::NAME);
        Loaded {
            document: D::default(),
            status: LoadStatus::Reset { quarantined },
        }
    }

    /// Replace the backing file with a full snapshot of `document`.
    ///
    /// Any storage failure is returned as `StorekeepError::Save`.
    pub fn save(&self, document: &D) -> Result<()> {
        let contents = to_pretty_json(document)?;
        let save_err = |source: std::io::Error| StorekeepError::Save {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(save_err)?;
            }
        }

        let tmp_path = sibling_with_suffix(
            &self.path,
            &format!("storekeep-tmp-{}", std::process::id()),
        );
        if let Err(e) = write_synced(&tmp_path, contents.as_bytes()) {
            let _ = fs::remove_file(&tmp_path);
            return Err(save_err(e));
        }

        if self.path.is_file() {
            if let Err(e) = fs::copy(&self.path, self.backup_path()) {
                tracing::warn!(path = %self.path.display(), error = %e, "Could not refresh snapshot");
            }
        }

        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(save_err(e));
        }

        tracing::debug!(path = %self.path.display(), document = D::NAME, bytes = contents.len(), "Saved document");
        Ok(())
    }
}

fn read_document<D: Document>(path: &Path) -> std::result::Result<Option<D>, ReadFailure> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
            return Err(ReadFailure::Corrupt(serde_json::Error::io(e)))
        }
        Err(e) => return Err(ReadFailure::Unreadable(e)),
    };

    if contents.trim().is_empty() {
        return Ok(None);
    }

    let mut document: D = serde_json::from_str(&contents).map_err(ReadFailure::Corrupt)?;
    document.reconcile_counters();
    Ok(Some(document))
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("data.json");
    path.with_file_name(format!("{}.{}", name, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FinanceDocument, InventoryDocument, TransactionKind};
    use tempfile::TempDir;

    const NOW: &str = "2025-01-17 10:00:00";

    fn inventory_store(temp: &TempDir) -> RecordStore<InventoryDocument> {
        RecordStore::new(temp.path().join("inventory_data.json"))
    }

    #[test]
    fn test_missing_file_loads_skeleton() {
        let temp = TempDir::new().unwrap();
        let loaded = inventory_store(&temp).load();

        assert_eq!(loaded.status, LoadStatus::Fresh);
        assert_eq!(loaded.document, InventoryDocument::default());
    }

    #[test]
    fn test_empty_file_loads_skeleton() {
        let temp = TempDir::new().unwrap();
        let store = inventory_store(&temp);
        fs::write(store.path(), "  \n").unwrap();

        let loaded = store.load();
        assert_eq!(loaded.status, LoadStatus::Fresh);
        assert_eq!(loaded.document, InventoryDocument::default());
    }

    #[test]
    fn test_invalid_json_loads_skeleton_and_keeps_corrupt_copy() {
        let temp = TempDir::new().unwrap();
        let store = inventory_store(&temp);
        fs::write(store.path(), "{ this is not json").unwrap();

        let loaded = store.load();

        assert_eq!(loaded.document, InventoryDocument::default());
        assert_eq!(
            loaded.status,
            LoadStatus::Reset {
                quarantined: Some(store.quarantine_path())
            }
        );
        assert!(!store.path().exists());
        assert_eq!(
            fs::read_to_string(store.quarantine_path()).unwrap(),
            "{ this is not json"
        );
    }

    #[test]
    fn test_corrupt_file_recovers_from_snapshot() {
        let temp = TempDir::new().unwrap();
        let store = inventory_store(&temp);

        let mut doc = InventoryDocument::default();
        doc.add_product("Widget", 10.0, 5).unwrap();
        store.save(&doc).unwrap();
        doc.purchase(1001, 1, NOW.to_string()).unwrap();
        store.save(&doc).unwrap();

        // Simulate a torn write of the primary file.
        fs::write(store.path(), "{\"products\": [").unwrap();

        let loaded = store.load();
        assert!(matches!(loaded.status, LoadStatus::Recovered { .. }));
        assert_eq!(loaded.document.products.len(), 1);
        assert_eq!(loaded.document.products.find_by_id(1001).unwrap().quantity, 5);

        let reloaded = store.load();
        assert_eq!(reloaded.status, LoadStatus::Loaded);
        assert_eq!(reloaded.document, loaded.document);
        assert_eq!(reloaded.document.next_product_id.peek(), 1002);
    }

    #[test]
    fn test_save_writes_four_space_indent() {
        let temp = TempDir::new().unwrap();
        let store = inventory_store(&temp);

        store.save(&InventoryDocument::default()).unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert!(contents.starts_with("{\n    \"products\": [],\n    \"total_earnings\": 0.0,"));
        assert!(contents.contains("\n    \"next_product_id\": 1001,"));
    }

    #[test]
    fn test_save_load_round_trip_is_byte_identical() {
        let temp = TempDir::new().unwrap();
        let store = RecordStore::<FinanceDocument>::new(temp.path().join("finance_data.json"));

        let mut doc = FinanceDocument::default();
        doc.add_transaction(TransactionKind::Income, 1234.56, "Salary", NOW.to_string())
            .unwrap();
        doc.add_transaction(TransactionKind::Expense, 0.1, "Gum", NOW.to_string())
            .unwrap();
        store.save(&doc).unwrap();

        store.save(&store.load().document).unwrap();
        let first = fs::read(store.path()).unwrap();
        store.save(&store.load().document).unwrap();
        let second = fs::read(store.path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_save_keeps_previous_snapshot() {
        let temp = TempDir::new().unwrap();
        let store = inventory_store(&temp);

        let mut doc = InventoryDocument::default();
        store.save(&doc).unwrap();
        assert!(!store.backup_path().exists());

        let before = fs::read_to_string(store.path()).unwrap();
        doc.add_product("Widget", 10.0, 5).unwrap();
        store.save(&doc).unwrap();

        assert_eq!(fs::read_to_string(store.backup_path()).unwrap(), before);
    }

    #[test]
    fn test_save_failure_is_reported() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();
        let store = RecordStore::<InventoryDocument>::new(blocker.join("inventory_data.json"));

        let err = store.save(&InventoryDocument::default()).unwrap_err();
        assert!(matches!(err, StorekeepError::Save { .. }));
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let store = inventory_store(&temp);
        store.save(&InventoryDocument::default()).unwrap();
        store.save(&InventoryDocument::default()).unwrap();

        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        assert!(names.iter().all(|n| !n.contains("storekeep-tmp")));
    }

    #[test]
    fn test_load_reconciles_counters() {
        let temp = TempDir::new().unwrap();
        let store = inventory_store(&temp);
        fs::write(
            store.path(),
            r#"{"products": [{"id": 1010, "name": "Lamp", "price": 5.0, "quantity": 1}],
                "total_earnings": 0.0, "next_product_id": 1001}"#,
        )
        .unwrap();

        let loaded = store.load();
        assert_eq!(loaded.status, LoadStatus::Loaded);
        assert_eq!(loaded.document.next_product_id.peek(), 1011);
    }
}
