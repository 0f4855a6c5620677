//! Initialize workspace use case

use crate::domain::{AtmDocument, Document, FinanceDocument, HospitalDocument};
use crate::domain::{InventoryDocument, LibraryDocument};
use crate::error::{Result, StorekeepError};
use crate::infrastructure::{Config, FileSystemRepository, WorkspaceRepository};
use std::fs;
use std::path::Path;

/// Initialize a new workspace at the specified path.
///
/// Data files that already exist are left untouched. Missing ones are
/// written with starter records unless `empty` is set.
pub fn init(path: &Path, empty: bool) -> Result<()> {
    let repo = FileSystemRepository::new(path.to_path_buf());
    if repo.is_initialized() {
        return Err(StorekeepError::Config(format!(
            "Directory already initialized: {}",
            path.display()
        )));
    }

    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    repo.initialize()?;

    let config = Config::new();
    repo.save_config(&config)?;

    let files = &config.files;
    if empty {
        write_if_missing(&repo, &files.hospital, HospitalDocument::default())?;
        write_if_missing(&repo, &files.inventory, InventoryDocument::default())?;
        write_if_missing(&repo, &files.atm, AtmDocument::default())?;
        write_if_missing(&repo, &files.library, LibraryDocument::default())?;
    } else {
        write_if_missing(&repo, &files.hospital, HospitalDocument::seeded()?)?;
        write_if_missing(&repo, &files.inventory, InventoryDocument::seeded()?)?;
        write_if_missing(&repo, &files.atm, AtmDocument::seeded()?)?;
        write_if_missing(&repo, &files.library, LibraryDocument::seeded()?)?;
    }
    write_if_missing(&repo, &files.finance, FinanceDocument::default())?;

    println!("Initialized storekeep workspace at {}", path.display());
    if !empty {
        println!("Seeded starter data (use --empty to skip)");
    }

    Ok(())
}

fn write_if_missing<D: Document>(repo: &FileSystemRepository, file: &str, document: D) -> Result<()> {
    let store = repo.store::<D>(file);
    if store.path().exists() {
        tracing::info!(path = %store.path().display(), "Keeping existing {} data", D::NAME);
        return Ok(());
    }
    store.save(&document)
}
