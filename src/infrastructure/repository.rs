//! File system repository

use crate::domain::Document;
use crate::error::{Result, StorekeepError};
use crate::infrastructure::config::WORKSPACE_DIR;
use crate::infrastructure::store::RecordStore;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the workspace root explicitly
pub const ROOT_ENV: &str = "STOREKEEP_ROOT";

/// Abstract repository for workspace operations
pub trait WorkspaceRepository {
    /// Load configuration from .storekeep/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .storekeep/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .storekeep directory exists
    fn is_initialized(&self) -> bool;

    /// Create .storekeep directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of WorkspaceRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover workspace root by walking up from current directory
    /// First checks STOREKEEP_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_workspace_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(StorekeepError::Config(format!(
                    "STOREKEEP_ROOT is set to '{}' but no .storekeep directory found. \
                    Run 'storekeep init' in that directory or unset STOREKEEP_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_workspace_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(StorekeepError::NotStorekeepDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_workspace_dir(path: &Path) -> bool {
        path.join(WORKSPACE_DIR).is_dir()
    }

    /// Record store for a data file named relative to the root
    pub fn store<D: Document>(&self, file: &str) -> RecordStore<D> {
        RecordStore::new(self.root.join(file))
    }
}

impl WorkspaceRepository for FileSystemRepository {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_workspace_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let workspace_dir = self.root.join(WORKSPACE_DIR);

        if workspace_dir.exists() {
            return Err(StorekeepError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&workspace_dir)?;
        Ok(())
    }
}
