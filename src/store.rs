//! preference persistence stuff
use {
    color_eyre::{Section, eyre::OptionExt},
    hashbrown::HashMap,
    std::path::{Path, PathBuf},
    tracing::warn,
};

/// the persisted key holding a predefined theme id
pub const KEY_THEME: &str = "theme";

/// the persisted key holding a serialized custom color set
pub const KEY_CUSTOM_THEME: &str = "customTheme";

/// durable key/value persistence for theme preferences
///
/// the resolver only ever touches [`KEY_THEME`] and [`KEY_CUSTOM_THEME`];
/// implementations must not fail the calling operation, a write that cannot
/// be made durable is dropped and in-memory state stays authoritative
pub trait PreferenceStore {
    /// get the value stored under a key
    fn get(&self, key: &str) -> Option<String>;
    /// store a value under a key, overwriting any previous value
    fn set(&mut self, key: &str, value: &str);
    /// remove a key and its value
    fn remove(&mut self, key: &str);
}

/// an in-memory preference store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// the stored entries
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// make a new empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// a preference store persisted as a TOML table on disk
///
/// every `set`/`remove` writes the whole table back through immediately
#[derive(Debug)]
pub struct FileStore {
    /// where the table lives on disk
    path: PathBuf,
    /// the in-memory view of the table
    entries: HashMap<String, String>,
}

impl FileStore {
    /// open the store at the default per-user location
    pub fn open() -> color_eyre::Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_eyre("Unable to determine system config directory")
            .suggestion("Ensure XDG_CONFIG_HOME or HOME environment variables are set")
            .suggestion("On Windows, APPDATA should be set")?;

        Ok(Self::open_at(config_dir.join("themeshift.toml")))
    }

    /// open the store at an explicit path
    ///
    /// an unreadable or corrupt file degrades to an empty table
    pub fn open_at(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = Self::read_entries(&path);

        Self { path, entries }
    }

    /// the path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// read the table from disk, degrading to empty on any failure
    fn read_entries(path: &Path) -> HashMap<String, String> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read preference file");
                return HashMap::new();
            }
        };

        match toml::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "preference file is corrupt, starting empty");
                HashMap::new()
            }
        }
    }

    /// write the whole table back to disk, dropping the write on failure
    fn write_through(&self) {
        let raw = match toml::to_string_pretty(&self.entries) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "failed to serialize preference table");
                return;
            }
        };

        if let Some(parent) = self.path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(path = %parent.display(), error = %e, "failed to create preference directory");
            return;
        }

        if let Err(e) = std::fs::write(&self.path, raw) {
            warn!(path = %self.path.display(), error = %e, "failed to write preference file");
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.write_through();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.write_through();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(KEY_THEME), None);

        store.set(KEY_THEME, "dark-mode");
        assert_eq!(store.get(KEY_THEME), Some("dark-mode".to_owned()));

        store.remove(KEY_THEME);
        assert_eq!(store.get(KEY_THEME), None);
    }

    #[test]
    fn test_file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");

        {
            let mut store = FileStore::open_at(&path);
            store.set(KEY_THEME, "accent-green");
            store.set(KEY_CUSTOM_THEME, "{}");
            store.remove(KEY_CUSTOM_THEME);
        }

        let store = FileStore::open_at(&path);
        assert_eq!(store.get(KEY_THEME), Some("accent-green".to_owned()));
        assert_eq!(store.get(KEY_CUSTOM_THEME), None);
    }

    #[test]
    fn test_file_store_degrades_on_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        std::fs::write(&path, "this is [not valid toml").unwrap();

        let store = FileStore::open_at(&path);
        assert_eq!(store.get(KEY_THEME), None);
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("prefs.toml");

        let mut store = FileStore::open_at(&path);
        store.set(KEY_THEME, "dark-mode");

        assert!(path.exists());
    }
}
