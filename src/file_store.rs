///! File-backed persistence for asset stores
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::datatypes::{Asset, DataError};
use crate::store::AssetStore;

/// Handle on the working directory. Every persisted file is a complete
/// JSON snapshot of one store; files are read and written whole.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates the working directory if it does not exist yet. This is
    /// the only fallible step of program startup.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Result<FileStore, DataError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(FileStore { dir })
    }

    pub fn default_path(&self) -> PathBuf {
        self.dir.join("assets.json")
    }

    /// Path for an operator-supplied base name, `.json` appended.
    pub fn path_for(&self, base: &str) -> PathBuf {
        self.dir.join(format!("{}.json", base.trim()))
    }

    /// Path of a filename as returned by [`FileStore::list_json_files`].
    pub fn path_of(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Sorted `.json` filenames in the working directory, stable across
    /// calls within a session.
    pub fn list_json_files(&self) -> Result<Vec<String>, DataError> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            let is_json = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case("json"))
                .unwrap_or(false);
            if is_json && path.is_file() {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    files.push(name.to_string());
                }
            }
        }
        files.sort();
        Ok(files)
    }

    /// Load a store snapshot. A missing file is an empty store, not an
    /// error; a present but unreadable or malformed file is an error the
    /// caller reports before degrading to an empty store. The article
    /// number counter is rebuilt from the loaded records.
    pub fn load(&self, path: &Path) -> Result<AssetStore, DataError> {
        if !path.exists() {
            debug!("no file at {}, starting with an empty store", path.display());
            return Ok(AssetStore::new());
        }
        let content = fs::read_to_string(path)?;
        let assets: Vec<Asset> = serde_json::from_str(&content)?;
        debug!("loaded {} assets from {}", assets.len(), path.display());
        Ok(AssetStore::from_assets(assets))
    }

    /// Write the store as indented JSON, overwriting any previous content.
    pub fn save(&self, path: &Path, store: &AssetStore) -> Result<(), DataError> {
        let content = serde_json::to_string_pretty(store.assets())?;
        fs::write(path, content)?;
        debug!("saved {} assets to {}", store.count(), path.display());
        Ok(())
    }
}
