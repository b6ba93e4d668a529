//! One JSON document on disk.

use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

/// A JSON file holding one value of type `T`.
#[derive(Debug, Clone)]
pub struct JsonFile<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> JsonFile<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the value. A missing or blank file reads as None; malformed
    /// JSON is an error.
    pub fn load(&self) -> Result<Option<T>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if text.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| Error::Store(format!("{}: {}", self.path.display(), e)))
    }

    /// Write the value, replacing the file atomically.
    pub fn save(&self, value: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(value)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("wrote {}", self.path.display());
        Ok(())
    }

    /// Delete the file. Returns false when it did not exist.
    pub fn remove(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_none() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file: JsonFile<Vec<String>> = JsonFile::new(tmp.path().join("none.json"));
        assert_eq!(file.load().unwrap(), None);
        assert!(!file.remove().unwrap());
    }

    #[test]
    fn test_save_creates_parent() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file = JsonFile::new(tmp.path().join("nested").join("list.json"));
        file.save(&vec!["John 3:16".to_string()]).unwrap();
        assert_eq!(file.load().unwrap(), Some(vec!["John 3:16".to_string()]));
        assert!(!tmp.path().join("nested").join("list.json.tmp").exists());
    }

    #[test]
    fn test_malformed_is_store_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        let file: JsonFile<Vec<String>> = JsonFile::new(path);
        assert!(matches!(file.load(), Err(Error::Store(_))));
    }
}
