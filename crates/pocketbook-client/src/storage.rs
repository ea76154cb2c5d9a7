//! Key/value storage in the shape of browser local storage.
//!
//! Every key holds a single string value that is always rewritten whole.
//! [`FileStorage`] keeps one file per key inside the tracker home and
//! [`MemoryStorage`] keeps values in process.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::state::ensure_tracker_directory;
use crate::{ClientError, ClientResult};

pub const TRANSACTIONS_KEY: &str = "expense-tracker-transactions";
pub const THEME_KEY: &str = "theme";

/// Per-value size limit, matching what browsers allow a single origin.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

pub trait Storage {
    fn get_item(&self, key: &str) -> ClientResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> ClientResult<()>;
    fn remove_item(&self, key: &str) -> ClientResult<()>;
}

#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
    quota_bytes: usize,
}

impl FileStorage {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            quota_bytes: DEFAULT_QUOTA_BYTES,
        }
    }

    pub fn with_quota(mut self, quota_bytes: usize) -> Self {
        self.quota_bytes = quota_bytes;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn item_path(&self, key: &str) -> ClientResult<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(key))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> ClientResult<Option<String>> {
        let path = self.item_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => {
                tracing::debug!("read {} bytes from {}", value.len(), path.display());
                Ok(Some(value))
            }
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(ClientError::storage_read_failed(key, &error.to_string())),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> ClientResult<()> {
        let path = self.item_path(key)?;
        check_quota(key, value, self.quota_bytes)?;
        ensure_tracker_directory(&self.root)
            .map_err(|error| ClientError::storage_write_failed(key, &error.message))?;

        let staging = self.root.join(format!(".{key}.tmp"));
        fs::write(&staging, value)
            .map_err(|error| ClientError::storage_write_failed(key, &error.to_string()))?;
        if let Err(error) = fs::rename(&staging, &path) {
            let _ = fs::remove_file(&staging);
            return Err(ClientError::storage_write_failed(key, &error.to_string()));
        }

        tracing::debug!("wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> ClientResult<()> {
        let path = self.item_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(ClientError::storage_write_failed(key, &error.to_string())),
        }
    }
}

#[derive(Debug)]
pub struct MemoryStorage {
    items: RefCell<BTreeMap<String, String>>,
    quota_bytes: usize,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            items: RefCell::new(BTreeMap::new()),
            quota_bytes: DEFAULT_QUOTA_BYTES,
        }
    }

    pub fn with_quota(mut self, quota_bytes: usize) -> Self {
        self.quota_bytes = quota_bytes;
        self
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> ClientResult<Option<String>> {
        validate_key(key)?;
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> ClientResult<()> {
        validate_key(key)?;
        check_quota(key, value, self.quota_bytes)?;
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> ClientResult<()> {
        validate_key(key)?;
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

fn validate_key(key: &str) -> ClientResult<()> {
    let valid = !key.is_empty()
        && key
            .bytes()
            .all(|byte| byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_');
    if valid {
        Ok(())
    } else {
        Err(ClientError::storage_invalid_key(key))
    }
}

fn check_quota(key: &str, value: &str, quota_bytes: usize) -> ClientResult<()> {
    if value.len() > quota_bytes {
        return Err(ClientError::storage_quota_exceeded(
            key,
            value.len(),
            quota_bytes,
        ));
    }
    Ok(())
}
