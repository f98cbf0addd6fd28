//! Storage for installed primitive files
//!
//! [`PrimitiveStore`] is the installation directory as seen by the installer and the
//! registry. [`DirStore`] is the real directory; [`MemoryStore`] keeps files in memory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::discovery::{is_primitive_file_name, list_primitive_files};
use crate::error::{Result, file_read_failed, file_write_failed, io_error};
use crate::hash::{hash_bytes, hash_file};

/// A flat collection of primitive files addressed by file name
pub trait PrimitiveStore {
    /// Human-readable location, used in messages and error origins
    fn location(&self) -> String;

    /// Names of the stored primitive files, sorted
    fn file_names(&self) -> Result<Vec<String>>;

    fn read(&self, file_name: &str) -> Result<String>;

    /// Create or overwrite a file
    fn write(&mut self, file_name: &str, contents: &str) -> Result<()>;

    fn remove(&mut self, file_name: &str) -> Result<()>;

    /// Content hash of a stored file, `None` if it does not exist
    fn content_hash(&self, file_name: &str) -> Result<Option<String>> {
        if self.file_names()?.iter().any(|name| name == file_name) {
            Ok(Some(hash_bytes(self.read(file_name)?.as_bytes())))
        } else {
            Ok(None)
        }
    }
}

fn check_file_name(file_name: &str) -> Result<()> {
    if file_name.contains(['/', '\\']) || !is_primitive_file_name(file_name) {
        return Err(io_error(format!("'{file_name}' is not a primitive file name")));
    }
    Ok(())
}

/// Installation directory on disk
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Open `root`, creating it if it does not exist
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|e| file_write_failed(&root, &e))?;
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    fn file_path(&self, file_name: &str) -> Result<PathBuf> {
        check_file_name(file_name)?;
        Ok(self.root.join(file_name))
    }
}

impl PrimitiveStore for DirStore {
    fn location(&self) -> String {
        self.root.display().to_string()
    }

    fn file_names(&self) -> Result<Vec<String>> {
        Ok(list_primitive_files(&self.root)?
            .iter()
            .filter_map(|path| path.file_name().and_then(|n| n.to_str()))
            .map(String::from)
            .collect())
    }

    fn read(&self, file_name: &str) -> Result<String> {
        let path = self.file_path(file_name)?;
        std::fs::read_to_string(&path).map_err(|e| file_read_failed(&path, &e))
    }

    fn write(&mut self, file_name: &str, contents: &str) -> Result<()> {
        let path = self.file_path(file_name)?;
        std::fs::write(&path, contents).map_err(|e| file_write_failed(&path, &e))
    }

    fn remove(&mut self, file_name: &str) -> Result<()> {
        let path = self.file_path(file_name)?;
        std::fs::remove_file(&path).map_err(|e| file_write_failed(&path, &e))
    }

    fn content_hash(&self, file_name: &str) -> Result<Option<String>> {
        let path = self.file_path(file_name)?;
        if path.is_file() {
            hash_file(&path).map(Some)
        } else {
            Ok(None)
        }
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl PrimitiveStore for MemoryStore {
    fn location(&self) -> String {
        "<memory>".to_string()
    }

    fn file_names(&self) -> Result<Vec<String>> {
        Ok(self.files.keys().cloned().collect())
    }

    fn read(&self, file_name: &str) -> Result<String> {
        self.files
            .get(file_name)
            .cloned()
            .ok_or_else(|| io_error(format!("{file_name} not found in memory store")))
    }

    fn write(&mut self, file_name: &str, contents: &str) -> Result<()> {
        check_file_name(file_name)?;
        self.files.insert(file_name.to_string(), contents.to_string());
        Ok(())
    }

    fn remove(&mut self, file_name: &str) -> Result<()> {
        self.files
            .remove(file_name)
            .map(|_| ())
            .ok_or_else(|| io_error(format!("{file_name} not found in memory store")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{CUSTOM_MAX, CUSTOM_MEAN, create_temp_dir, write_file};

    #[test]
    fn test_dir_store_open_creates_directory() {
        let temp = create_temp_dir();
        let root = temp.path().join("a/b/primitives");
        let store = DirStore::open(&root).unwrap();
        assert!(root.is_dir());
        assert_eq!(store.path(), root);

        // idempotent
        DirStore::open(&root).unwrap();
    }

    #[test]
    fn test_dir_store_write_read_remove() {
        let temp = create_temp_dir();
        let mut store = DirStore::open(temp.path()).unwrap();

        store.write("custom_max.yaml", CUSTOM_MAX).unwrap();
        assert_eq!(store.file_names().unwrap(), ["custom_max.yaml"]);
        assert_eq!(store.read("custom_max.yaml").unwrap(), CUSTOM_MAX);

        store.remove("custom_max.yaml").unwrap();
        assert!(store.file_names().unwrap().is_empty());
        assert!(store.remove("custom_max.yaml").is_err());
    }

    #[test]
    fn test_dir_store_ignores_non_primitive_files() {
        let temp = create_temp_dir();
        write_file(&temp.path().join("notes.txt"), "hello");
        write_file(&temp.path().join("custom_mean.yaml"), CUSTOM_MEAN);

        let store = DirStore::open(temp.path()).unwrap();
        assert_eq!(store.file_names().unwrap(), ["custom_mean.yaml"]);
    }

    #[test]
    fn test_dir_store_rejects_bad_file_names() {
        let temp = create_temp_dir();
        let mut store = DirStore::open(temp.path()).unwrap();
        assert!(store.write("../escape.yaml", CUSTOM_MAX).is_err());
        assert!(store.write("custom_max.txt", CUSTOM_MAX).is_err());
        assert!(!temp.path().join("custom_max.txt").exists());
    }

    #[test]
    fn test_content_hash_matches_between_stores() {
        let temp = create_temp_dir();
        let mut disk = DirStore::open(temp.path()).unwrap();
        let mut memory = MemoryStore::new();

        assert_eq!(disk.content_hash("custom_max.yaml").unwrap(), None);
        assert_eq!(memory.content_hash("custom_max.yaml").unwrap(), None);

        disk.write("custom_max.yaml", CUSTOM_MAX).unwrap();
        memory.write("custom_max.yaml", CUSTOM_MAX).unwrap();

        let expected = Some(hash_bytes(CUSTOM_MAX.as_bytes()));
        assert_eq!(disk.content_hash("custom_max.yaml").unwrap(), expected);
        assert_eq!(memory.content_hash("custom_max.yaml").unwrap(), expected);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());

        store.write("custom_mean.yaml", CUSTOM_MEAN).unwrap();
        store.write("custom_max.yaml", CUSTOM_MAX).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(
            store.file_names().unwrap(),
            ["custom_max.yaml", "custom_mean.yaml"]
        );

        store.write("custom_max.yaml", CUSTOM_MEAN).unwrap();
        assert_eq!(store.read("custom_max.yaml").unwrap(), CUSTOM_MEAN);

        store.remove("custom_max.yaml").unwrap();
        assert!(store.read("custom_max.yaml").is_err());
    }
}
